//! Error types shared across the Cubelet workspace.

use std::error::Error;
use std::fmt;

use crate::id::{Coord, CubieId};

/// Errors from building a lattice out of an explicit cell assignment, or
/// from checking one that already exists.
///
/// A lattice must be a bijection between the 27 coordinates and the 27
/// cubie ids; anything else is rejected before it can be turned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// The same cubie was placed at two coordinates.
    DuplicateCubie {
        /// The repeated cubie.
        cubie: CubieId,
        /// The first coordinate holding it.
        first: Coord,
        /// The second coordinate holding it.
        second: Coord,
    },
    /// A cell holds an id outside `0..27`.
    UnknownCubie {
        /// The out-of-range id.
        cubie: CubieId,
        /// Where it was found.
        at: Coord,
    },
    /// The position table disagrees with the cell table.
    PositionMismatch {
        /// The cubie whose recorded position is stale.
        cubie: CubieId,
        /// Where the position table says it is.
        recorded: Coord,
        /// Where the cell table actually holds it.
        actual: Coord,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCubie {
                cubie,
                first,
                second,
            } => write!(f, "cubie {cubie} placed at both {first} and {second}"),
            Self::UnknownCubie { cubie, at } => {
                write!(f, "unknown cubie {cubie} at {at}")
            }
            Self::PositionMismatch {
                cubie,
                recorded,
                actual,
            } => write!(f, "cubie {cubie} recorded at {recorded} but found at {actual}"),
        }
    }
}

impl Error for LatticeError {}
