// demos/ownership_transfer.rs
//! Ownership transfer example: draining vs duplicating iteration

use thinbuf::prelude::*;

/// A move-only payload: no Clone, so the only way out of the array is a
/// draining iterator or a destructive take.
struct Job {
    id: u32,
    payload: Vec<u8>,
}

fn main() {
    println!("=== Draining (move-only elements) ===\n");

    let mut queue = Array::new();
    for id in 0..4 {
        queue.push(Job {
            id,
            payload: vec![0u8; 64],
        });
    }
    println!("queued {} jobs", queue.len());

    // into_iter() takes ownership of the queue's storage; the compiler
    // rejects any later use of `queue`.
    for job in queue {
        println!("processing job {} ({} bytes)", job.id, job.payload.len());
    }

    println!("\n=== Partial drains never leak ===\n");

    let mut queue = Array::new();
    for id in 0..4 {
        queue.push(Job {
            id,
            payload: vec![0u8; 64],
        });
    }

    let mut iter = queue.into_iter().peekable();
    if let Some(next) = iter.peek() {
        println!("peeked at job {} without consuming it", next.id);
    }
    let first = iter.next().unwrap();
    println!("took job {}; dropping the iterator releases the rest", first.id);
    drop(iter);

    println!("\n=== Destructive take ===\n");

    let mut batch = Array::new();
    for id in 0..3 {
        batch.push(Job {
            id,
            payload: vec![id as u8; 8],
        });
    }
    // Salvage exactly one element; the other two are destroyed with the
    // container.
    let survivor = batch.into_element(1);
    println!("salvaged job {} from the batch", survivor.id);

    println!("\n=== Duplicating (cloneable elements) ===\n");

    let samples = Array::from([1.5f64, 2.5, 3.5]);
    let sum: f64 = samples.duplicates().sum();
    println!("duplicated and summed: {sum}");
    println!("source still alive with {} samples", samples.len());
}
