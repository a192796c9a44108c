//! Bounded linear snapshot history.
//!
//! [`SnapshotHistory`] keeps owned copies of a state value and a cursor
//! pointing at the snapshot that matches the live state.
//!
//! ```text
//! push(s3)           [s0, s1, s2, s3]   cursor 3
//! undo() x2          [s0, s1, s2, s3]   cursor 1   (returns s2, then s1)
//! push(s4)           [s0, s1, s4]       cursor 2   (redo branch dropped)
//! ```
//!
//! # Invariants
//!
//! 1. The history is never empty and `current_index < len`.
//! 2. `len <= limit` after every push; the oldest snapshot is evicted first
//!    and the cursor keeps pointing at the same logical snapshot.
//! 3. Snapshots are stored and handed out as clones, never aliases.

use std::collections::VecDeque;

/// Linear undo/redo history over cloned snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotHistory<T> {
    snapshots: VecDeque<T>,
    current: usize,
    limit: usize,
}

impl<T: Clone> SnapshotHistory<T> {
    /// Start a history whose first snapshot is `initial`.
    ///
    /// A limit of 0 is treated as 1.
    pub fn new(initial: T, limit: usize) -> Self {
        Self {
            snapshots: VecDeque::from([initial]),
            current: 0,
            limit: limit.max(1),
        }
    }

    /// Record a new snapshot after the cursor.
    ///
    /// Snapshots after the cursor (the redo branch) are discarded first.
    pub fn push(&mut self, snapshot: T) {
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push_back(snapshot);
        self.current = self.snapshots.len() - 1;

        while self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
            self.current -= 1;
        }
    }

    /// Step back, returning a copy of the snapshot to restore.
    pub fn undo(&mut self) -> Option<T> {
        if !self.can_undo() {
            return None;
        }
        self.current -= 1;
        Some(self.snapshots[self.current].clone())
    }

    /// Step forward, returning a copy of the snapshot to restore.
    pub fn redo(&mut self) -> Option<T> {
        if !self.can_redo() {
            return None;
        }
        self.current += 1;
        Some(self.snapshots[self.current].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.snapshots.len()
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &T {
        &self.snapshots[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop everything and start again from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.snapshots.clear();
        self.snapshots.push_back(initial);
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_snapshot() {
        let history = SnapshotHistory::new(0, 10);
        assert_eq!(history.len(), 1);
        assert_eq!(*history.current(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_and_redo_walk_the_cursor() {
        let mut history = SnapshotHistory::new(0, 10);
        history.push(1);
        history.push(2);

        assert_eq!(history.undo(), Some(1));
        assert_eq!(history.undo(), Some(0));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(1));
        assert_eq!(history.redo(), Some(2));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn push_after_undo_drops_redo_branch() {
        let mut history = SnapshotHistory::new(0, 10);
        history.push(1);
        history.push(2);
        history.undo();
        history.undo();
        history.push(9);

        assert_eq!(history.len(), 2);
        assert_eq!(*history.current(), 9);
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some(0));
    }

    #[test]
    fn limit_evicts_oldest_and_keeps_cursor_on_tail() {
        let mut history = SnapshotHistory::new(0, 3);
        for n in 1..=5 {
            history.push(n);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(*history.current(), 5);
        assert_eq!(history.undo(), Some(4));
        assert_eq!(history.undo(), Some(3));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn zero_limit_keeps_one_snapshot() {
        let mut history = SnapshotHistory::new("a", 0);
        history.push("b");
        assert_eq!(history.limit(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(*history.current(), "b");
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let mut live = vec![1];
        let mut history = SnapshotHistory::new(live.clone(), 10);
        live.push(2);
        history.push(live.clone());
        live.push(3);

        let mut restored = history.undo().unwrap();
        restored.push(100);

        assert_eq!(history.redo(), Some(vec![1, 2]));
        assert_eq!(live, vec![1, 2, 3]);
    }

    #[test]
    fn reset_returns_to_single_snapshot() {
        let mut history = SnapshotHistory::new(0, 5);
        history.push(1);
        history.reset(7);
        assert_eq!(history.len(), 1);
        assert_eq!(*history.current(), 7);
        assert!(!history.is_empty());
    }
}
