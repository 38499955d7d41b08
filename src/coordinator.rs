//! The coordination engine: ordered provider registry, value resolution and
//! update propagation.
//!
//! A coordinator owns a root (fallback) value and an ordered registry of
//! providers. The resolved value is derived from the root plus the currently
//! active providers by the injected [`ResolvePolicy`]; the default policy is
//! "last appended active provider wins". Every mutation that can change the
//! resolved value re-resolves under the coordinator's lock and notifies the
//! observer callback after the lock has been released, so callbacks may call
//! back into the coordinator without self-deadlock.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::policy::{last_active_wins, ResolvePolicy};
use crate::provider::{ProviderShared, ValueProvider};
use crate::rejection::UpdateRejection;

/// Observer callback invoked with the resolved value after each honored
/// update. Must be thread-safe because the coordinator itself is shared.
pub type UpdateCallback<T> = dyn Fn(&T) + Send + Sync + 'static;

/// Registry and root value, guarded together by one mutex.
struct CoordinatorState<T> {
    root: T,
    providers: Vec<Arc<ProviderShared<T>>>,
}

impl<T: Clone + Send + 'static> CoordinatorState<T> {
    fn active_values(&self) -> Vec<T> {
        self.providers
            .iter()
            .filter(|provider| provider.is_active())
            .map(|provider| provider.value_snapshot())
            .collect()
    }

    fn has_active_provider(&self) -> bool {
        self.providers.iter().any(|provider| provider.is_active())
    }

    fn position_of(&self, provider: &Arc<ProviderShared<T>>) -> Option<usize> {
        self.providers
            .iter()
            .position(|member| Arc::ptr_eq(member, provider))
    }

    /// Decides whether an update request from `provider` carries authority.
    fn arbitrate(&self, provider: &Arc<ProviderShared<T>>) -> Result<(), UpdateRejection> {
        let index = self
            .position_of(provider)
            .ok_or(UpdateRejection::NotAMember)?;
        let topmost_active = self
            .providers
            .iter()
            .rposition(|member| member.is_active())
            .ok_or(UpdateRejection::NoActiveProvider)?;
        if index != topmost_active {
            return Err(UpdateRejection::NotTopmost);
        }
        Ok(())
    }
}

pub(crate) struct CoordinatorShared<T> {
    state: Mutex<CoordinatorState<T>>,
    on_update: Mutex<Option<Arc<UpdateCallback<T>>>>,
    policy: Box<ResolvePolicy<T>>,
}

/// Owner of the authoritative resolved value for one logical property.
///
/// `ValueCoordinator` is a cheap clonable handle; clones share the same root
/// value, registry and callback. All operations are synchronous and safe to
/// call from multiple threads.
///
/// # Examples
///
/// ```rust
/// use value_coordinator::{ValueCoordinator, ValueProvider};
///
/// let coordinator = ValueCoordinator::new("fallback".to_string());
/// assert_eq!(coordinator.value(), "fallback");
///
/// let provider = ValueProvider::new("delegated".to_string());
/// provider.attach_to(&coordinator);
/// assert_eq!(coordinator.value(), "delegated");
///
/// provider.detach();
/// assert_eq!(coordinator.value(), "fallback");
/// ```
pub struct ValueCoordinator<T> {
    shared: Arc<CoordinatorShared<T>>,
}

impl<T> Clone for ValueCoordinator<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + 'static> ValueCoordinator<T> {
    /// Creates a coordinator with the default "last active wins" policy and
    /// no observer callback.
    pub fn new(root: T) -> Self {
        Self::with_policy(root, last_active_wins)
    }

    /// Creates a coordinator and registers an observer callback, firing it
    /// once immediately with the resolved value (the root, at this point).
    pub fn with_on_update(root: T, callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        let coordinator = Self::new(root);
        coordinator.set_on_update(callback);
        coordinator
    }

    /// Creates a coordinator with a custom resolution policy.
    ///
    /// The policy receives the root value and the values of all active
    /// providers in append order, and returns the resolved value. It must
    /// not call back into the coordinator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_coordinator::{ValueCoordinator, ValueProvider};
    ///
    /// // Concatenate every active contribution onto the root.
    /// let merging = ValueCoordinator::with_policy("a".to_string(), |root, active| {
    ///     active.iter().fold(root.clone(), |merged, value| merged + value)
    /// });
    ///
    /// let provider = ValueProvider::new("b".to_string());
    /// provider.attach_to(&merging);
    /// assert_eq!(merging.value(), "ab");
    /// ```
    pub fn with_policy(root: T, policy: impl Fn(&T, &[T]) -> T + Send + Sync + 'static) -> Self {
        Self {
            shared: Arc::new(CoordinatorShared {
                state: Mutex::new(CoordinatorState {
                    root,
                    providers: Vec::new(),
                }),
                on_update: Mutex::new(None),
                policy: Box::new(policy),
            }),
        }
    }

    /// Returns the resolved value: the policy applied to the root and the
    /// ordered active provider values.
    pub fn value(&self) -> T {
        let state = self.lock_state();
        self.resolve(&state)
    }

    /// Assigns the root (fallback) value.
    ///
    /// When no provider is active the resolved value changes right away and
    /// the callback fires once; otherwise the write is stored silently and
    /// becomes visible when the active providers detach or deactivate.
    pub fn set_value(&self, value: T) {
        let resolved = {
            let mut state = self.lock_state();
            state.root = value;
            if state.has_active_provider() {
                None
            } else {
                Some(self.resolve(&state))
            }
        };
        if let Some(resolved) = resolved {
            self.notify(&resolved);
        }
    }

    /// Returns the root (fallback) value.
    pub fn root_value(&self) -> T {
        self.lock_state().root.clone()
    }

    /// Appends `provider` to the tail of the registry.
    ///
    /// Fires the callback iff the provider is active (the resolved value may
    /// have changed). Equivalent to [`ValueProvider::attach_to`].
    ///
    /// # Panics
    ///
    /// Panics if the provider is already attached to a coordinator,
    /// including this one; duplicate identities are disallowed.
    pub fn append(&self, provider: &ValueProvider<T>) {
        provider.shared().bind_to(&self.shared);
        let resolved = {
            let mut state = self.lock_state();
            state.providers.push(Arc::clone(provider.shared()));
            provider.is_active().then(|| self.resolve(&state))
        };
        if let Some(resolved) = resolved {
            self.notify(&resolved);
        }
    }

    /// Removes `provider` from the registry, wherever it sits.
    ///
    /// Removing a provider that is not a member is a reported no-op: an
    /// error-level diagnostic is logged and state is left untouched. Fires
    /// the callback iff the removed provider was active.
    pub fn remove(&self, provider: &ValueProvider<T>) {
        let resolved = {
            let mut state = self.lock_state();
            let Some(index) = state.position_of(provider.shared()) else {
                log::error!("removing a provider that does not belong to this coordinator");
                return;
            };
            state.providers.remove(index);
            provider.is_active().then(|| self.resolve(&state))
        };
        provider.shared().unbind_from(&self.shared);
        if let Some(resolved) = resolved {
            self.notify(&resolved);
        }
    }

    /// Handles an update request from `provider`.
    ///
    /// The request is honored only when the requester is a registry member
    /// and the topmost active provider. A request from a non-member is a
    /// programmer error and logged at error level; a request while no
    /// provider is active, or from a superseded (non-topmost) provider, is
    /// the normal outcome of the arbitration rule and skipped silently.
    pub fn update(&self, requested_by: &ValueProvider<T>) {
        let resolved = {
            let state = self.lock_state();
            match state.arbitrate(requested_by.shared()) {
                Ok(()) => Some(self.resolve(&state)),
                Err(UpdateRejection::NotAMember) => {
                    log::error!(
                        "update requested by a provider that does not belong to this coordinator"
                    );
                    None
                }
                Err(rejection) => {
                    log::debug!("update request skipped: {rejection}");
                    None
                }
            }
        };
        if let Some(resolved) = resolved {
            self.notify(&resolved);
        }
    }

    /// Replaces the observer callback and immediately invokes it once with
    /// the current resolved value, so a late-attached observer sees current
    /// state without a manual read.
    pub fn set_on_update(&self, callback: impl Fn(&T) + Send + Sync + 'static) {
        {
            let mut guard = self
                .shared
                .on_update
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = Some(Arc::new(callback));
        }
        let resolved = {
            let state = self.lock_state();
            self.resolve(&state)
        };
        self.notify(&resolved);
    }

    /// Removes the observer callback. No notification fires.
    pub fn clear_on_update(&self) {
        let mut guard = self
            .shared
            .on_update
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }

    /// Number of attached providers, active or not.
    pub fn provider_count(&self) -> usize {
        self.lock_state().providers.len()
    }

    pub(crate) fn from_shared(shared: Arc<CoordinatorShared<T>>) -> Self {
        Self { shared }
    }

    fn lock_state(&self) -> MutexGuard<'_, CoordinatorState<T>> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn resolve(&self, state: &CoordinatorState<T>) -> T {
        let active = state.active_values();
        (self.shared.policy)(&state.root, active.as_slice())
    }

    /// Invokes the callback, if any. Callers must have released the state
    /// lock; the callback lock is held only long enough to clone the
    /// handle, so the callback may replace itself.
    fn notify(&self, resolved: &T) {
        let callback = self
            .shared
            .on_update
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(resolved);
        }
    }
}
