// src/raw/mod.rs
//! Raw storage: one allocation holding a header and the element payload.
//!
//! Everything unsafe about memory layout lives behind [`RawBuf`]'s narrow
//! interface; the rest of the crate only ever sees header reads, raw slot
//! pointers, and allocate/deallocate.

mod buffer;

pub(crate) use self::buffer::RawBuf;
