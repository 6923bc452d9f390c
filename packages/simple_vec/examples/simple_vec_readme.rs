//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how `SimpleVec` grows and how items are inserted and removed by position.

use simple_vec::{SimpleVec, simple_vec};

fn main() {
    println!("=== Simple Vec README Example ===");

    let mut names: SimpleVec<String> = simple_vec!["Alice".to_string(), "Charlie".to_string()];

    // Inserting by position shifts the following items to the right.
    let bob_index = names.insert(1, "Bob".to_string());
    println!("Inserted {} at index {bob_index}", names[bob_index]);

    // The insertion into a full container grew it to 2 * len + 1 slots, so this fits.
    names.push_back("Dave".to_string());
    println!("Length {}, capacity {}", names.len(), names.capacity());

    // Bounds-checked access reports an error instead of panicking.
    match names.at(10) {
        Ok(name) => println!("Found {name}"),
        Err(error) => println!("Lookup failed: {error}"),
    }

    // Erasing returns the index of the item that followed the erased one.
    let next_index = names.erase(0);
    println!("After erasing, index {next_index} holds {}", names[next_index]);

    for name in &names {
        println!("Name: {name}");
    }

    println!("README example completed successfully!");
}
