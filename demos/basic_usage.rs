// demos/basic_usage.rs
//! Basic usage example of the array container

use thinbuf::prelude::*;

fn main() {
    println!("=== Basic Array Usage ===\n");

    // 1. Empty arrays are free: no allocation until the first push.
    let mut values = Array::new();
    println!("fresh array: len={} capacity={}", values.len(), values.capacity());

    values.push(10);
    values.push(20);
    values.push(30);
    println!("after 3 pushes: len={} capacity={}", values.len(), values.capacity());

    println!("values[0] = {}", values[0]);
    println!("pop() -> {:?}", values.pop());
    println!("after pop: len={}", values.len());

    println!("\n=== Reserving Ahead ===\n");

    // 2. Reserve once, then pushes stay in place.
    let mut measurements: Array<f64> = Array::new();
    measurements.reserve(1000);
    println!("reserved: capacity={}", measurements.capacity());

    for i in 0..1000 {
        measurements.push(f64::from(i) * 0.5);
    }
    println!("filled: len={} capacity={}", measurements.len(), measurements.capacity());

    println!("\n=== Duplication-Gated Operations ===\n");

    // 3. Cloneable elements unlock non-consuming appends and duplicating
    //    iteration.
    let motto = String::from("reuse me");
    let mut phrases = Array::new();
    phrases.push_clone(&motto);
    phrases.push_clone(&motto);
    println!("pushed two duplicates of {motto:?}; source still ours");

    let copies: Vec<String> = phrases.duplicates().collect();
    println!("duplicated out {} copies, source len still {}", copies.len(), phrases.len());

    let twin = phrases.clone();
    println!("whole-array clone: twin == phrases? {}", twin == phrases);

    println!("\n=== In-Place Construction ===\n");

    // 4. push_with builds the element straight into its slot.
    let mut reports = Array::new();
    reports.push_with(|| format!("report #{:04}", 1));
    reports.push_with(|| format!("report #{:04}", 2));
    println!("built in place: {:?}", reports.as_slice());
}
