//! Value providers: independent contributors of candidate values.
//!
//! A provider holds one candidate value and an active flag. It is created
//! standalone and joins a coordinator's registry via [`ValueProvider::attach_to`].
//! While attached and active, writing its value routes through the
//! coordinator's update arbitration; the coordinator decides whether the
//! provider currently has authority to push a notification.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::coordinator::{CoordinatorShared, ValueCoordinator};

/// State shared between all handles of one provider.
///
/// The registry of a coordinator holds strong references to this state; the
/// back-link to the coordinator is weak, so neither side forces the other's
/// lifetime and a provider may outlive the coordinator it once pointed to.
pub(crate) struct ProviderShared<T> {
    value: Mutex<T>,
    is_active: AtomicBool,
    coordinator: Mutex<Weak<CoordinatorShared<T>>>,
}

impl<T: Clone + Send + 'static> ProviderShared<T> {
    pub(crate) fn value_snapshot(&self) -> T {
        self.value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub(crate) fn is_active(&self) -> bool {
        self.is_active.load(Ordering::SeqCst)
    }

    /// Records the back-link to `coordinator`.
    ///
    /// # Panics
    ///
    /// Panics if the provider is already attached to a live coordinator.
    /// Attaching twice is a programmer error that would corrupt the link;
    /// it must stop execution rather than proceed (the membership and
    /// update-arbitration diagnostics, by contrast, are non-fatal).
    pub(crate) fn bind_to(&self, coordinator: &Arc<CoordinatorShared<T>>) {
        let mut link = self
            .coordinator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assert!(
            link.upgrade().is_none(),
            "provider is already attached to a coordinator"
        );
        *link = Arc::downgrade(coordinator);
    }

    /// Clears the back-link, but only if it still points at `coordinator`.
    pub(crate) fn unbind_from(&self, coordinator: &Arc<CoordinatorShared<T>>) {
        let mut link = self
            .coordinator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let points_here = link
            .upgrade()
            .is_some_and(|linked| Arc::ptr_eq(&linked, coordinator));
        if points_here {
            *link = Weak::new();
        }
    }

    fn linked_coordinator(&self) -> Option<Arc<CoordinatorShared<T>>> {
        self.coordinator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .upgrade()
    }
}

/// A single contributor of a candidate value.
///
/// `ValueProvider` is a cheap clonable handle; clones refer to the same
/// underlying provider. Field accesses are individually synchronized, but a
/// read-modify sequence on one provider from multiple threads still needs
/// external ordering. Distinct providers on the same coordinator may be
/// driven from different threads freely.
///
/// # Examples
///
/// ```rust
/// use value_coordinator::{ValueCoordinator, ValueProvider};
///
/// let coordinator = ValueCoordinator::new(0u32);
/// let provider = ValueProvider::new(1u32);
///
/// provider.attach_to(&coordinator);
/// assert_eq!(coordinator.value(), 1);
///
/// provider.set_value(2);
/// assert_eq!(coordinator.value(), 2);
///
/// provider.detach();
/// assert_eq!(coordinator.value(), 0);
/// ```
pub struct ValueProvider<T> {
    shared: Arc<ProviderShared<T>>,
}

impl<T> Clone for ValueProvider<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + 'static> ValueProvider<T> {
    /// Creates a standalone, active provider.
    pub fn new(value: T) -> Self {
        Self::with_active(value, true)
    }

    /// Creates a standalone provider with an explicit active flag.
    ///
    /// Inactive providers sit in the registry without participating in
    /// value resolution until activated.
    pub fn with_active(value: T, is_active: bool) -> Self {
        Self {
            shared: Arc::new(ProviderShared {
                value: Mutex::new(value),
                is_active: AtomicBool::new(is_active),
                coordinator: Mutex::new(Weak::new()),
            }),
        }
    }

    /// Returns the provided (candidate) value.
    pub fn value(&self) -> T {
        self.shared.value_snapshot()
    }

    /// Stores a new candidate value.
    ///
    /// If the provider is attached and active, the write is followed by an
    /// update request to the coordinator; whether observers are notified is
    /// then decided by the arbitration rule (only the topmost active
    /// provider may push). Inactive or detached providers store silently.
    pub fn set_value(&self, value: T) {
        {
            let mut guard = self
                .shared
                .value
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = value;
        }

        if self.is_active() {
            if let Some(coordinator) = self.coordinator() {
                coordinator.update(self);
            }
        }
    }

    /// Whether this provider participates in value resolution.
    pub fn is_active(&self) -> bool {
        self.shared.is_active()
    }

    /// Flips the active flag.
    ///
    /// Toggling alone never notifies the coordinator; follow with
    /// [`request_update`](Self::request_update) when propagation is wanted.
    /// Value writes auto-notify, flag writes do not; the asymmetry is
    /// intentional.
    pub fn set_active(&self, is_active: bool) {
        self.shared.is_active.store(is_active, Ordering::SeqCst);
    }

    /// Appends this provider to `coordinator`'s registry.
    ///
    /// # Panics
    ///
    /// Panics if the provider is already attached to a coordinator.
    pub fn attach_to(&self, coordinator: &ValueCoordinator<T>) {
        coordinator.append(self);
    }

    /// Removes this provider from its coordinator, if any.
    ///
    /// No-op when already detached. Removal is by identity and works from
    /// any registry position, not only the tail.
    pub fn detach(&self) {
        if let Some(coordinator) = self.coordinator() {
            coordinator.remove(self);
        }
    }

    /// Asks the coordinator to re-resolve and notify observers.
    ///
    /// Skipped (with a debug note) when the provider is inactive or not
    /// attached to a live coordinator. An attached, active provider
    /// delegates to the coordinator, which still applies the topmost-active
    /// arbitration rule.
    pub fn request_update(&self) {
        if !self.is_active() {
            log::debug!("update request skipped: provider is inactive");
            return;
        }
        match self.coordinator() {
            Some(coordinator) => coordinator.update(self),
            None => log::debug!("update request skipped: provider is not attached"),
        }
    }

    /// Whether this provider is currently attached to a live coordinator.
    pub fn is_attached(&self) -> bool {
        self.shared.linked_coordinator().is_some()
    }

    fn coordinator(&self) -> Option<ValueCoordinator<T>> {
        self.shared
            .linked_coordinator()
            .map(ValueCoordinator::from_shared)
    }

    pub(crate) fn shared(&self) -> &Arc<ProviderShared<T>> {
        &self.shared
    }
}
