//! Basic usage demo for value-coordinator.
//!
//! Demonstrates:
//! - A parent-owned property with a fallback (root) value
//! - Children temporarily taking authority via attached providers
//! - Live propagation through the update callback
//! - Automatic restoration when a scoped provider goes away
//!
//! Run with: `cargo run --example delegated_title`

use value_coordinator::{ScopedProvider, ValueCoordinator, ValueProvider};

fn main() {
    println!("=== value-coordinator: Delegated Title ===\n");

    // -------------------------------------------------------------------------
    // 1. The parent owns the window title
    // -------------------------------------------------------------------------
    println!("1. Creating the coordinator...");

    let title = ValueCoordinator::with_on_update("Inbox".to_string(), |value: &String| {
        println!("   [observer] title is now: {value}");
    });

    // -------------------------------------------------------------------------
    // 2. A child screen takes over
    // -------------------------------------------------------------------------
    println!("\n2. Child screen attaches a provider...");

    let compose = ValueProvider::new("Compose".to_string());
    compose.attach_to(&title);

    println!("   resolved: {}", title.value());

    // -------------------------------------------------------------------------
    // 3. The child updates its contribution
    // -------------------------------------------------------------------------
    println!("\n3. Child renames itself...");

    compose.set_value("Compose (draft saved)".to_string());

    // -------------------------------------------------------------------------
    // 4. A modal on top, scoped
    // -------------------------------------------------------------------------
    println!("\n4. A scoped modal takes over, then ends...");

    {
        let modal = ScopedProvider::new(ValueProvider::new("Discard draft?".to_string()));
        modal.provider().attach_to(&title);
        println!("   resolved: {}", title.value());
    }
    println!("   modal scope ended, resolved: {}", title.value());

    // -------------------------------------------------------------------------
    // 5. Root writes are deferred while delegated
    // -------------------------------------------------------------------------
    println!("\n5. Parent renames the inbox while delegated...");

    title.set_value("Inbox (3 unread)".to_string());
    println!("   resolved (still the child's): {}", title.value());

    compose.detach();
    println!("   child detached, resolved: {}", title.value());
}
