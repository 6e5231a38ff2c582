// src/lib.rs
//! # Thin Growable Array Storage
//!
//! A generic, contiguously-stored, growable array whose element lifecycle is
//! governed by explicit ownership rules: every element type can be moved in
//! and drained out, and duplication-flavoured operations unlock when the
//! element type can produce independent copies.
//!
//! Features:
//! - Single header+payload heap allocation (count and capacity stored inline
//!   ahead of the elements), with exact alignment arithmetic
//! - Shared zero-capacity sentinel: empty arrays never allocate
//! - Amortized-doubling growth with ownership-correct relocation
//! - Draining iteration that consumes the array and cannot leak, plus
//!   duplicating iteration that leaves the source reusable
//! - Capability-gated conformances: equality, hashing, duplication, indexed
//!   access, and secure element wiping via the `zeroize` crate
//! - Fail-fast error model: out-of-range access panics, allocation failure
//!   aborts; "nothing there" is an `Option`, never an error
//!
//! # Examples
//!
//! ```
//! use thinbuf::Array;
//!
//! let mut values = Array::new();
//! values.push(1);
//! values.push(2);
//! values.push(3);
//!
//! assert_eq!(values.pop(), Some(3));
//! assert_eq!(values.as_slice(), &[1, 2]);
//!
//! let twin = values.clone();
//! let drained: Vec<i32> = values.into_iter().collect();
//! assert_eq!(drained, [1, 2]);
//! assert_eq!(twin.as_slice(), &[1, 2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod iter;
mod raw;

// Re-export main types
pub use array::Array;
pub use iter::{Duplicates, IntoIter};

/// Commonly used imports.
pub mod prelude {
    pub use crate::array::Array;
    pub use crate::iter::{Duplicates, IntoIter};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_array() {
        let mut values = Array::new();
        values.push(42);
        values.push(7);

        assert_eq!(values.len(), 2);
        assert_eq!(values[0], 42);
        assert_eq!(values.pop(), Some(7));
        assert_eq!(values.pop(), Some(42));
        assert_eq!(values.pop(), None);
    }

    #[test]
    fn test_drain_and_duplicate_strategies() {
        let values = Array::from([1, 2, 3]);

        let copied: Vec<i32> = values.duplicates().collect();
        assert_eq!(copied, [1, 2, 3]);
        assert_eq!(values.len(), 3);

        let drained: Vec<i32> = values.into_iter().collect();
        assert_eq!(drained, [1, 2, 3]);
    }

    #[test]
    fn test_scenario_push_pop_compare() {
        let mut values = Array::new();
        values.push(1);
        values.push(2);
        values.push(3);
        assert_eq!(values.len(), 3);

        assert_eq!(values.pop(), Some(3));
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], 1);
        assert_eq!(values[1], 2);

        assert_eq!(values, Array::from([1, 2]));
    }

    #[test]
    fn test_empty_arrays_share_storage_for_free() {
        let a: Array<String> = Array::new();
        let b: Array<String> = Array::with_capacity(0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 0);
        assert_eq!(a, b);
    }
}
