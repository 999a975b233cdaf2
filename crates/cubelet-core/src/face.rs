//! The fixed face/turn table.
//!
//! Each [`Face`] names the axis its quarter turn rotates about and the
//! layer (fixed coordinate along that axis) that selects the turning slice.

use std::fmt;

/// A lattice axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis (front/back).
    X,
    /// The Y axis (up/down).
    Y,
    /// The Z axis (right/left).
    Z,
}

impl Axis {
    /// Unit direction vector.
    pub fn unit(self) -> [f32; 3] {
        match self {
            Self::X => [1.0, 0.0, 0.0],
            Self::Y => [0.0, 1.0, 0.0],
            Self::Z => [0.0, 0.0, 1.0],
        }
    }

    /// The two in-slice axes `(row, col)` of a slice normal to `self`.
    ///
    /// Every pair runs against the cyclic order `x -> y -> z`, which makes
    /// one 3x3 permutation turn all six faces the same way about their axis.
    pub fn slice_frame(self) -> (Axis, Axis) {
        match self {
            Self::X => (Self::Z, Self::Y),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::Y, Self::X),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// One of the six outer faces.
///
/// # Examples
///
/// ```
/// use cubelet_core::{Axis, Face};
///
/// assert_eq!(Face::Up.axis(), Axis::Y);
/// assert_eq!(Face::Up.layer(), 2);
/// assert_eq!(Face::from_letter('b'), Some(Face::Back));
/// assert_eq!(Face::from_letter('x'), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// `U`: Y axis, layer 2.
    Up,
    /// `D`: Y axis, layer 0.
    Down,
    /// `R`: Z axis, layer 2.
    Right,
    /// `L`: Z axis, layer 0.
    Left,
    /// `F`: X axis, layer 2.
    Front,
    /// `B`: X axis, layer 0.
    Back,
}

impl Face {
    /// All faces in control-surface order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// Axis the face turns about.
    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Y,
            Self::Right | Self::Left => Axis::Z,
            Self::Front | Self::Back => Axis::X,
        }
    }

    /// Fixed coordinate along [`axis`](Self::axis) selecting the slice.
    pub fn layer(self) -> u8 {
        match self {
            Self::Up | Self::Right | Self::Front => 2,
            Self::Down | Self::Left | Self::Back => 0,
        }
    }

    /// Notation letter (uppercase).
    pub fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Right => 'R',
            Self::Left => 'L',
            Self::Front => 'F',
            Self::Back => 'B',
        }
    }

    /// Parse a notation letter, case-insensitively.
    pub fn from_letter(c: char) -> Option<Face> {
        match c.to_ascii_uppercase() {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'R' => Some(Self::Right),
            'L' => Some(Self::Left),
            'F' => Some(Self::Front),
            'B' => Some(Self::Back),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
