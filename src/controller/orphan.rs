//! Which packs the pack list shows.
//!
//! Without a parent pallet the list shows orphan packs. With a parent, the
//! operator can still force orphan mode with a toggle.

use crate::api::PackScope;
use crate::types::RecordId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackScopePolicy {
    parent: Option<RecordId>,
    orphans_forced: bool,
}

impl PackScopePolicy {
    pub fn parent(&self) -> Option<RecordId> {
        self.parent
    }

    /// Effective scope of the pack list
    pub fn scope(&self) -> PackScope {
        match self.parent {
            Some(id) if !self.orphans_forced => PackScope::Pallet(id),
            _ => PackScope::Orphans,
        }
    }

    /// Whether the list is currently in orphan mode, forced or not
    pub fn orphan_mode(&self) -> bool {
        self.scope().is_orphans()
    }

    /// Whether the toggle is on
    pub fn orphans_forced(&self) -> bool {
        self.orphans_forced
    }

    /// Change the parent pallet. Returns whether the effective scope changed.
    pub fn set_parent(&mut self, parent: Option<RecordId>) -> bool {
        let before = self.scope();
        self.parent = parent;
        self.scope() != before
    }

    /// Turn the orphan toggle on or off. Returns whether the effective scope changed.
    ///
    /// Turning it off with no parent is refused: there is nothing else to show.
    pub fn set_orphans_forced(&mut self, forced: bool) -> bool {
        if !forced && self.parent.is_none() {
            return false;
        }
        let before = self.scope();
        self.orphans_forced = forced;
        self.scope() != before
    }

    pub fn toggle(&mut self) -> bool {
        self.set_orphans_forced(!self.orphan_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_parent_uses_orphans() {
        let policy = PackScopePolicy::default();
        assert_eq!(policy.scope(), PackScope::Orphans);
        assert!(policy.orphan_mode());
    }

    #[test]
    fn test_parent_without_toggle_uses_nested() {
        let mut policy = PackScopePolicy::default();
        assert!(policy.set_parent(Some(8)));
        assert_eq!(policy.scope(), PackScope::Pallet(8));
    }

    #[test]
    fn test_parent_with_toggle_uses_orphans() {
        let mut policy = PackScopePolicy::default();
        policy.set_parent(Some(8));
        assert!(policy.set_orphans_forced(true));
        assert_eq!(policy.scope(), PackScope::Orphans);
    }

    #[test]
    fn test_clearing_toggle_without_parent_is_refused() {
        let mut policy = PackScopePolicy::default();
        assert!(!policy.set_orphans_forced(false));
        assert!(!policy.toggle());
        assert_eq!(policy.scope(), PackScope::Orphans);
    }

    #[test]
    fn test_parent_change_under_forced_orphans_keeps_scope() {
        let mut policy = PackScopePolicy::default();
        policy.set_parent(Some(1));
        policy.set_orphans_forced(true);
        assert!(!policy.set_parent(Some(2)));
        assert!(policy.set_orphans_forced(false));
        assert_eq!(policy.scope(), PackScope::Pallet(2));
    }

    #[test]
    fn test_toggle_round_trip_with_parent() {
        let mut policy = PackScopePolicy::default();
        policy.set_parent(Some(3));
        assert!(policy.toggle());
        assert!(policy.orphan_mode());
        assert!(policy.toggle());
        assert_eq!(policy.scope(), PackScope::Pallet(3));
    }
}
