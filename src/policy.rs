/// An authorization predicate consulted by [`AccessGate`].
///
/// Any zero-argument `Fn() -> bool` closure is a policy, so a real check can
/// be injected without touching the gate.
///
/// # Examples
///
/// ```
/// use page_decor::{AccessPolicy, AllowAll};
///
/// assert!(AllowAll.check_access());
///
/// let maintenance_mode = true;
/// let policy = move || !maintenance_mode;
/// assert!(!policy.check_access());
/// ```
///
/// [`AccessGate`]: crate::AccessGate
pub trait AccessPolicy {
    /// Returns `true` if the page may be shown.
    fn check_access(&self) -> bool;
}

/// Policy that always grants access.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AllowAll;

/// Policy that always denies access.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DenyAll;

impl AccessPolicy for AllowAll {
    fn check_access(&self) -> bool {
        true
    }
}

impl AccessPolicy for DenyAll {
    fn check_access(&self) -> bool {
        false
    }
}

impl<F> AccessPolicy for F
where
    F: Fn() -> bool,
{
    fn check_access(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn unit_policies() {
        assert!(AllowAll.check_access());
        assert!(!DenyAll.check_access());
    }

    #[test]
    fn closure_is_consulted_on_every_check() {
        let calls = Cell::new(0);
        let policy = || {
            calls.set(calls.get() + 1);
            calls.get() % 2 == 1
        };

        assert!(policy.check_access());
        assert!(!policy.check_access());
        assert_eq!(calls.get(), 2);
    }
}
