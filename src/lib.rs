//! # Value Coordinator
//!
//! Thread-safe coordination of one logical property between several
//! independent providers. A parent owns the property's fallback (root)
//! value; children attach providers to temporarily take authority over it,
//! and authority falls back to the previous contributor (or the root)
//! when a provider detaches.
//!
//! ## Quick Start
//!
//! ```rust
//! use value_coordinator::{ValueCoordinator, ValueProvider};
//!
//! let title = ValueCoordinator::new("Inbox".to_string());
//! assert_eq!(title.value(), "Inbox");
//!
//! // A child takes over the property…
//! let child = ValueProvider::new("Compose".to_string());
//! child.attach_to(&title);
//! assert_eq!(title.value(), "Compose");
//!
//! // …and the parent's value is restored when it lets go.
//! child.detach();
//! assert_eq!(title.value(), "Inbox");
//! ```
//!
//! ## Features
//!
//! - **Deterministic arbitration**: the most recently appended active
//!   provider wins; a pluggable policy can fold over all contributions
//!   instead
//! - **Live propagation**: an observer callback fires with the resolved
//!   value after every honored change, always outside the internal lock
//! - **Scoped restoration**: [`ScopedProvider`] detaches its provider at
//!   end of scope, deterministically
//! - **Thread-safe**: coordinators and providers are cheap clonable handles
//!   usable from multiple threads
//!
//! ## Main Types
//!
//! - [`ValueCoordinator`] - owner of the resolved value and the provider
//!   registry
//! - [`ValueProvider`] - a single contributor of a candidate value
//! - [`ScopedProvider`] - detaches its provider on drop
//! - [`Coordinated`] / [`Providing`] - field-like convenience bindings
//!   composed on top of the core

mod bind;
mod coordinator;
mod policy;
mod provider;
mod rejection;
mod scoped;

// Re-export the main public API
pub use bind::{Coordinated, Providing};
pub use coordinator::{UpdateCallback, ValueCoordinator};
pub use policy::{last_active_wins, ResolvePolicy};
pub use provider::ValueProvider;
pub use rejection::UpdateRejection;
pub use scoped::ScopedProvider;
