//! Value-resolution policies.
//!
//! A coordinator resolves its current value by combining its root (fallback)
//! value with the values of the currently active providers, in registry
//! order. The combine function is injected at construction time; the default
//! is [`last_active_wins`].

/// Combine function deciding the resolved value of a coordinator.
///
/// Receives the root value and the values of all currently active providers
/// in registry (append) order. Must be pure with respect to the coordinator:
/// it runs inside the coordinator's critical section and must not call back
/// into the coordinator or its providers.
pub type ResolvePolicy<T> = dyn Fn(&T, &[T]) -> T + Send + Sync + 'static;

/// Default resolution policy: the most recently appended active provider
/// wins; the root value is used when no provider is active.
///
/// # Examples
///
/// ```rust
/// use value_coordinator::last_active_wins;
///
/// let root = "fallback".to_string();
/// assert_eq!(last_active_wins(&root, &[]), "fallback");
///
/// let active = vec!["older".to_string(), "newer".to_string()];
/// assert_eq!(last_active_wins(&root, &active), "newer");
/// ```
pub fn last_active_wins<T: Clone>(root: &T, active: &[T]) -> T {
    active.last().cloned().unwrap_or_else(|| root.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_active_list_falls_back_to_root() {
        assert_eq!(last_active_wins(&7i32, &[]), 7);
    }

    #[test]
    fn test_last_active_value_wins() {
        assert_eq!(last_active_wins(&0i32, &[1, 2, 3]), 3);
    }

    #[test]
    fn test_single_active_value() {
        let root = "root".to_string();
        let active = vec!["only".to_string()];
        assert_eq!(last_active_wins(&root, &active), "only");
    }

    #[test]
    fn test_usable_as_boxed_policy() {
        let policy: Box<ResolvePolicy<i32>> = Box::new(last_active_wins);
        assert_eq!(policy(&5, &[8, 9]), 9);
    }
}
