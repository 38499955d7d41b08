//! Custom resolution-policy demo for value-coordinator.
//!
//! The default policy lets the last appended active provider win. A custom
//! policy injected at construction can fold over *all* active contributions
//! instead.
//!
//! Run with: `cargo run --example combine_policies`

use value_coordinator::{ValueCoordinator, ValueProvider};

fn main() {
    println!("=== value-coordinator: Combine Policies ===\n");

    // -------------------------------------------------------------------------
    // 1. Concatenating breadcrumbs
    // -------------------------------------------------------------------------
    println!("1. Concatenating policy...");

    let breadcrumbs = ValueCoordinator::with_policy("home".to_string(), |root, active| {
        active
            .iter()
            .fold(root.clone(), |path, segment| path + " > " + segment)
    });

    let settings = ValueProvider::new("settings".to_string());
    let network = ValueProvider::new("network".to_string());
    settings.attach_to(&breadcrumbs);
    network.attach_to(&breadcrumbs);

    println!("   resolved: {}", breadcrumbs.value());

    network.detach();
    println!("   after detach: {}", breadcrumbs.value());

    // -------------------------------------------------------------------------
    // 2. Maximum wins
    // -------------------------------------------------------------------------
    println!("\n2. Maximizing policy...");

    let volume = ValueCoordinator::with_policy(5i32, |root, active| {
        active.iter().fold(*root, |max, level| max.max(*level))
    });

    let quiet = ValueProvider::new(1i32);
    let loud = ValueProvider::new(10i32);
    quiet.attach_to(&volume);
    loud.attach_to(&volume);

    println!("   resolved: {}", volume.value());

    loud.detach();
    println!("   after detach: {}", volume.value());
}
