//! Strongly-typed identifiers and the [`Coord`] lattice coordinate.

use std::fmt;

use crate::face::Axis;

/// Number of cells along one lattice edge.
pub const EDGE_LEN: u8 = 3;

/// Total number of cells (and cubies) in the lattice.
pub const CELL_COUNT: usize = 27;

/// Identifies one of the 27 cubies.
///
/// Ids are assigned once at cube construction, in row-major order of the
/// cubie's home coordinate, so `CubieId(n)` starts at `Coord::from_index(n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(pub u8);

impl CubieId {
    /// The home coordinate this cubie occupies in a solved lattice.
    ///
    /// Returns `None` for ids outside `0..27`.
    pub fn home(self) -> Option<Coord> {
        Coord::from_index(self.0 as usize)
    }

    /// Flat index of this id, for table lookups.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for CubieId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// A cell coordinate in the 3x3x3 lattice.
///
/// Each component lies in `0..3`; `0` is the low face along that axis
/// and `2` the high face.
///
/// # Examples
///
/// ```
/// use cubelet_core::{Axis, Coord};
///
/// let c = Coord::new(0, 2, 1).unwrap();
/// assert_eq!(c.get(Axis::Y), 2);
/// assert_eq!(Coord::from_index(c.index()), Some(c));
/// assert!(Coord::new(3, 0, 0).is_none());
/// ```
///
/// Components are private, so every `Coord` in existence is in range:
///
/// ```compile_fail
/// use cubelet_core::Coord;
///
/// let outside = Coord { x: 0, y: 0, z: 5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: u8,
    y: u8,
    z: u8,
}

impl Coord {
    /// The `(0,0,0)` corner.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0, z: 0 };

    /// Build a coordinate, returning `None` if any component is out of range.
    pub fn new(x: u8, y: u8, z: u8) -> Option<Self> {
        if x < EDGE_LEN && y < EDGE_LEN && z < EDGE_LEN {
            Some(Self { x, y, z })
        } else {
            None
        }
    }

    /// Row-major flat index: `x * 9 + y * 3 + z`.
    pub fn index(self) -> usize {
        let n = EDGE_LEN as usize;
        (self.x as usize) * n * n + (self.y as usize) * n + self.z as usize
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let n = EDGE_LEN as usize;
        Some(Self {
            x: (index / (n * n)) as u8,
            y: ((index / n) % n) as u8,
            z: (index % n) as u8,
        })
    }

    /// Component along the X axis.
    pub fn x(self) -> u8 {
        self.x
    }

    /// Component along the Y axis.
    pub fn y(self) -> u8 {
        self.y
    }

    /// Component along the Z axis.
    pub fn z(self) -> u8 {
        self.z
    }

    /// Component along `axis`.
    pub fn get(self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of this coordinate with the component along `axis` replaced.
    ///
    /// Returns `None` if `value` is 3 or more.
    pub fn with(mut self, axis: Axis, value: u8) -> Option<Self> {
        if value >= EDGE_LEN {
            return None;
        }
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        Some(self)
    }

    /// All 27 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).filter_map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}
