//! Convenience bindings composed from the core types.
//!
//! These helpers live outside the coordination engine: they add no new
//! semantics, only plain get/set access plus a secondary accessor used for
//! wiring. [`Coordinated`] wraps a coordinator so a delegated property reads
//! like an ordinary field; [`Providing`] bundles a provider with its scoped
//! holder so a contributor detaches automatically when the binding is
//! dropped.

use crate::coordinator::ValueCoordinator;
use crate::provider::ValueProvider;
use crate::scoped::ScopedProvider;

/// A coordinator exposed as a plain readable/writable field.
///
/// Reads return the resolved value; writes assign the root value. The
/// underlying coordinator is reachable via [`coordinator`](Self::coordinator)
/// for attaching providers or observers.
///
/// # Examples
///
/// ```rust
/// use value_coordinator::{Coordinated, Providing};
///
/// let title = Coordinated::new("Home".to_string());
/// assert_eq!(title.get(), "Home");
///
/// let editing = Providing::new("Editing…".to_string());
/// editing.attach_to(title.coordinator());
/// assert_eq!(title.get(), "Editing…");
///
/// drop(editing);
/// assert_eq!(title.get(), "Home");
/// ```
pub struct Coordinated<T: Clone + Send + 'static> {
    coordinator: ValueCoordinator<T>,
}

impl<T: Clone + Send + 'static> Coordinated<T> {
    pub fn new(root: T) -> Self {
        Self::from_coordinator(ValueCoordinator::new(root))
    }

    pub fn with_on_update(root: T, callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self::from_coordinator(ValueCoordinator::with_on_update(root, callback))
    }

    /// Wraps an existing coordinator, e.g. one built with a custom policy.
    pub fn from_coordinator(coordinator: ValueCoordinator<T>) -> Self {
        Self { coordinator }
    }

    /// The resolved value.
    pub fn get(&self) -> T {
        self.coordinator.value()
    }

    /// Assigns the root value (visible once no provider is active).
    pub fn set(&self, value: T) {
        self.coordinator.set_value(value);
    }

    /// The underlying coordinator, for wiring providers and observers.
    pub fn coordinator(&self) -> &ValueCoordinator<T> {
        &self.coordinator
    }
}

/// A provider bundled with its scoped holder.
///
/// Dropping the binding detaches the provider, restoring whatever authority
/// preceded it. Activation through [`set_active`](Self::set_active) performs
/// both halves of the toggle-and-notify contract: it flips the flag and
/// issues the update request that a bare [`ValueProvider::set_active`]
/// deliberately omits.
pub struct Providing<T: Clone + Send + 'static> {
    scoped: ScopedProvider<T>,
}

impl<T: Clone + Send + 'static> Providing<T> {
    pub fn new(value: T) -> Self {
        Self::with_active(value, true)
    }

    pub fn with_active(value: T, is_active: bool) -> Self {
        Self {
            scoped: ScopedProvider::new(ValueProvider::with_active(value, is_active)),
        }
    }

    /// The provided value.
    pub fn get(&self) -> T {
        self.scoped.provider().value()
    }

    /// Stores a new candidate value (auto-notifies while attached+active).
    pub fn set(&self, value: T) {
        self.scoped.provider().set_value(value);
    }

    pub fn is_active(&self) -> bool {
        self.scoped.provider().is_active()
    }

    /// Flips the active flag and requests an update.
    pub fn set_active(&self, is_active: bool) {
        self.scoped.provider().set_active(is_active);
        self.scoped.provider().request_update();
    }

    pub fn attach_to(&self, coordinator: &ValueCoordinator<T>) {
        self.scoped.provider().attach_to(coordinator);
    }

    pub fn detach(&self) {
        self.scoped.provider().detach();
    }

    /// The underlying provider, for wiring.
    pub fn provider(&self) -> &ValueProvider<T> {
        self.scoped.provider()
    }
}
