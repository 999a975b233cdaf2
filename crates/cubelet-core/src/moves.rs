//! Move tokens and move sequences.

use smallvec::SmallVec;
use std::fmt;

use crate::face::Face;

/// The built-in demo scramble, applied at construction when a cube is
/// configured to start scrambled.
pub const DEMO_SCRAMBLE: &str = "F'D'F'L'D'LB'LDF'D'R'DLB'R'DLD'B'U'FU'B";

/// A single quarter turn: a face plus direction.
///
/// # Examples
///
/// ```
/// use cubelet_core::{Face, Move};
///
/// let m = Move::new(Face::Down, true);
/// assert_eq!(m.to_string(), "D'");
/// assert_eq!(m.inverse().to_string(), "D");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// The turning face.
    pub face: Face,
    /// `true` for the inverse (primed) direction.
    pub inverse: bool,
}

impl Move {
    /// Build a move.
    pub fn new(face: Face, inverse: bool) -> Self {
        Self { face, inverse }
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            inverse: !self.inverse,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.inverse {
            f.write_str("'")?;
        }
        Ok(())
    }
}

/// A sequence of moves.
///
/// Uses `SmallVec<[Move; 16]>` so typical button presses and short
/// sequences stay off the heap; longer scripts spill transparently.
pub type Moves = SmallVec<[Move; 16]>;
