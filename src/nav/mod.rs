//! Navigation Sequencer
//!
//! Stepping through a fixed ordered subsequence (a filtered view or the
//! full snapshot) while an overlay viewer is open. The sequencer borrows
//! the sequence and holds no catalog state of its own: if the catalog
//! mutates underneath, the next `locate` simply reports not-found and the
//! overlay is expected to close.

use crate::models::Artifact;

/// Cursor over an ordered artifact subsequence.
pub struct Sequencer<'a> {
    sequence: &'a [Artifact],
    position: Option<usize>,
}

impl<'a> Sequencer<'a> {
    /// Locate `current_id` in the sequence by linear search. A missing id
    /// (e.g. deleted while the overlay was open) yields the not-found
    /// state: both guards false, both steps `None`.
    pub fn locate(sequence: &'a [Artifact], current_id: &str) -> Self {
        let position = sequence.iter().position(|a| a.id == current_id);
        Self { sequence, position }
    }

    /// Index of the current artifact, `None` if not found.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn has_prev(&self) -> bool {
        matches!(self.position, Some(i) if i > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.position, Some(i) if i + 1 < self.sequence.len())
    }

    /// The predecessor, when `has_prev` holds. No clamping: callers check
    /// the guard, and a violation gets `None` rather than a neighbor.
    pub fn prev(&self) -> Option<&'a Artifact> {
        let i = self.position?;
        if i == 0 {
            return None;
        }
        self.sequence.get(i - 1)
    }

    /// The successor, when `has_next` holds.
    pub fn next(&self) -> Option<&'a Artifact> {
        let i = self.position?;
        self.sequence.get(i + 1)
    }
}
