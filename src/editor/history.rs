use std::collections::VecDeque;

use super::{CursorPosition, TextBuffer};

/// Smallest capacity that still leaves one undo step.
const MIN_LIMIT: usize = 2;

/// A buffer together with the cursor that was clamped against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub buffer: TextBuffer,
    pub cursor: CursorPosition,
}

impl Snapshot {
    pub const fn new(buffer: TextBuffer, cursor: CursorPosition) -> Self {
        Self { buffer, cursor }
    }
}

/// Linear undo/redo log of whole-state snapshots.
///
/// `current` points at the entry the next undo returns (`None` before
/// anything was saved). The entry undo consumed stays in place as the
/// source to revert to, so the redo target of the current position sits
/// two slots past it.
///
/// Saving while entries exist past `current` discards them; there is
/// no redo tree.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    snapshots: VecDeque<Snapshot>,
    current: Option<usize>,
    limit: Option<usize>,
}

impl EditHistory {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` snapshots, evicting the
    /// oldest first.
    ///
    /// The first undo of a chain stores the live state next to the entry it
    /// returns, so limits below two are raised to two.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(MIN_LIMIT)),
            ..Self::default()
        }
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Record `snapshot`, pruning any redo branch past the current entry.
    ///
    /// With `advance == false` the pointer stays put; the session uses this
    /// once per undo chain to keep the live state as a redo target.
    pub fn save(&mut self, snapshot: Snapshot, advance: bool) {
        let next = self.next_index();
        self.snapshots.truncate(next);
        self.snapshots.push_back(snapshot);
        if advance {
            self.current = Some(next);
        }
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit {
                self.snapshots.pop_front();
                self.current = self.current.and_then(|idx| idx.checked_sub(1));
                tracing::trace!(limit, "history: evicted oldest snapshot");
            }
        }
    }

    pub const fn can_undo(&self) -> bool {
        self.current.is_some()
    }

    /// Step back, returning the snapshot to restore.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let idx = self.current?;
        let snapshot = self.snapshots.get(idx)?.clone();
        self.current = idx.checked_sub(1);
        Some(snapshot)
    }

    pub fn can_redo(&self) -> bool {
        self.snapshots.len() > self.next_index() + 1
    }

    /// Step forward, returning the snapshot to restore.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let next = self.next_index();
        let snapshot = self.snapshots.get(next + 1)?.clone();
        self.current = Some(next);
        Some(snapshot)
    }

    /// Index one past `current`; 0 before anything was saved.
    fn next_index(&self) -> usize {
        self.current.map_or(0, |idx| idx + 1)
    }
}
