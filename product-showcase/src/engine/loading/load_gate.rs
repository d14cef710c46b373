use bevy::prelude::*;
use std::collections::BTreeSet;

/// Result of settling one catalog entry against the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStatus {
    /// Other entries are still loading.
    Pending,
    /// This settle emptied the pending set. Reported exactly once.
    Complete,
    /// The gate already completed earlier.
    AlreadyComplete,
}

/// Fan-in over every catalog load. Each entry settles once, whether it
/// loaded or failed, and the gate completes when nothing is pending.
///
/// A gate created for zero entries never completes.
#[derive(Resource, Debug, Default)]
pub struct LoadGate {
    pending: BTreeSet<usize>,
    expected: usize,
    complete: bool,
}

impl LoadGate {
    pub fn new(expected: usize) -> Self {
        Self {
            pending: (0..expected).collect(),
            expected,
            complete: false,
        }
    }

    /// Mark catalog entry `index` as settled. Unknown and repeated indices
    /// leave the gate unchanged.
    pub fn settle(&mut self, index: usize) -> JoinStatus {
        if self.complete {
            return JoinStatus::AlreadyComplete;
        }
        if !self.pending.remove(&index) {
            return JoinStatus::Pending;
        }
        if self.pending.is_empty() {
            self.complete = true;
            JoinStatus::Complete
        } else {
            JoinStatus::Pending
        }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_once_after_every_entry_settles() {
        let mut gate = LoadGate::new(3);

        assert_eq!(gate.settle(2), JoinStatus::Pending);
        assert_eq!(gate.settle(0), JoinStatus::Pending);
        assert_eq!(gate.remaining(), 1);
        assert_eq!(gate.settle(1), JoinStatus::Complete);
        assert!(gate.is_complete());
        assert_eq!(gate.settle(1), JoinStatus::AlreadyComplete);
    }

    #[test]
    fn repeated_and_unknown_settles_do_not_advance() {
        let mut gate = LoadGate::new(2);

        assert_eq!(gate.settle(0), JoinStatus::Pending);
        assert_eq!(gate.settle(0), JoinStatus::Pending);
        assert_eq!(gate.settle(7), JoinStatus::Pending);
        assert_eq!(gate.remaining(), 1);
        assert_eq!(gate.settle(1), JoinStatus::Complete);
    }

    #[test]
    fn empty_gate_never_completes() {
        let mut gate = LoadGate::new(0);

        assert_eq!(gate.settle(0), JoinStatus::Pending);
        assert!(!gate.is_complete());
    }
}
