//! The undo log used to resolve back to the last checkpoint.

use std::collections::VecDeque;
use std::fmt;

use cubelet_core::Move;

/// Inverse moves of everything applied since the log was last cleared,
/// newest first.
///
/// Applying the log's moves in order returns the lattice to the
/// arrangement it had at the last clear.
///
/// # Examples
///
/// ```
/// use cubelet_core::{Face, Move};
/// use cubelet_engine::MoveLog;
///
/// let mut log = MoveLog::new();
/// log.record(Move::new(Face::Up, false));
/// log.record(Move::new(Face::Right, true));
/// assert_eq!(log.to_string(), "RU'");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: VecDeque<Move>,
}

impl MoveLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend the inverse of an applied move.
    pub fn record(&mut self, applied: Move) {
        self.entries.push_front(applied.inverse());
    }

    /// The undo moves, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.entries.iter()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded since the last clear.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, making the current arrangement the new checkpoint.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Compact notation, e.g. `"RU'"`.
impl fmt::Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.entries {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
