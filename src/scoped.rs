//! Scope-bound provider ownership.

use crate::provider::ValueProvider;

/// Holder that detaches its provider when dropped.
///
/// Owning the provider through a `ScopedProvider` ties its registry
/// membership to a deterministic end-of-scope event, which is what gives
/// typical usage its stack-like feel even though removal itself is
/// identity-based.
///
/// # Examples
///
/// ```rust
/// use value_coordinator::{ScopedProvider, ValueCoordinator, ValueProvider};
///
/// let coordinator = ValueCoordinator::new("parent".to_string());
/// {
///     let scoped = ScopedProvider::new(ValueProvider::new("child".to_string()));
///     scoped.provider().attach_to(&coordinator);
///     assert_eq!(coordinator.value(), "child");
/// }
/// // Scope ended, authority restored.
/// assert_eq!(coordinator.value(), "parent");
/// ```
pub struct ScopedProvider<T: Clone + Send + 'static> {
    provider: ValueProvider<T>,
}

impl<T: Clone + Send + 'static> ScopedProvider<T> {
    /// Takes ownership of a provider handle.
    pub fn new(provider: ValueProvider<T>) -> Self {
        Self { provider }
    }

    /// The held provider.
    pub fn provider(&self) -> &ValueProvider<T> {
        &self.provider
    }
}

impl<T: Clone + Send + 'static> Drop for ScopedProvider<T> {
    fn drop(&mut self) {
        // No-op when already detached.
        self.provider.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueCoordinator;

    #[test]
    fn test_drop_detaches_provider() {
        let coordinator = ValueCoordinator::new(0i32);
        {
            let scoped = ScopedProvider::new(ValueProvider::new(1i32));
            scoped.provider().attach_to(&coordinator);
            assert_eq!(coordinator.value(), 1);
            assert_eq!(coordinator.provider_count(), 1);
        }
        assert_eq!(coordinator.value(), 0);
        assert_eq!(coordinator.provider_count(), 0);
    }

    #[test]
    fn test_drop_after_manual_detach_is_noop() {
        let coordinator = ValueCoordinator::new(0i32);
        let scoped = ScopedProvider::new(ValueProvider::new(1i32));
        scoped.provider().attach_to(&coordinator);
        scoped.provider().detach();
        drop(scoped);
        assert_eq!(coordinator.provider_count(), 0);
    }

    #[test]
    fn test_drop_of_never_attached_provider_is_noop() {
        let scoped = ScopedProvider::new(ValueProvider::new(1i32));
        drop(scoped);
    }

    #[test]
    fn test_outer_provider_handle_survives_scope_end() {
        let coordinator = ValueCoordinator::new(0i32);
        let provider = ValueProvider::new(1i32);
        {
            let scoped = ScopedProvider::new(provider.clone());
            scoped.provider().attach_to(&coordinator);
        }
        // The holder detached the shared provider; this handle still works.
        assert!(!provider.is_attached());
        assert_eq!(provider.value(), 1);
    }
}
