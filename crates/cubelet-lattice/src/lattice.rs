//! The coordinate-to-cubie mapping and face turns.

use std::fmt;

use cubelet_core::{Coord, CubieId, Face, LatticeError, CELL_COUNT, EDGE_LEN};

use crate::slice::FaceSlice;

const N: usize = EDGE_LEN as usize;

/// The 3x3x3 arrangement of cubies.
///
/// Stores both directions of the bijection: `cells[coord.index()]` is the
/// cubie at a coordinate and `positions[id.index()]` is where a cubie
/// sits. Both tables are updated together by every write.
///
/// # Examples
///
/// ```
/// use cubelet_core::{Coord, Face};
/// use cubelet_lattice::Lattice;
///
/// let mut lattice = Lattice::solved();
/// lattice.turn(Face::Up, false);
/// assert!(!lattice.is_solved());
/// lattice.turn(Face::Up, true);
/// assert!(lattice.is_solved());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Lattice {
    cells: [CubieId; CELL_COUNT],
    positions: [Coord; CELL_COUNT],
}

impl Lattice {
    /// Every cubie at its home coordinate.
    pub fn solved() -> Self {
        let mut cells = [CubieId(0); CELL_COUNT];
        let mut positions = [Coord::ORIGIN; CELL_COUNT];
        for coord in Coord::all() {
            let i = coord.index();
            cells[i] = CubieId(i as u8);
            positions[i] = coord;
        }
        Self { cells, positions }
    }

    /// Build a lattice from an explicit assignment, indexed by
    /// [`Coord::index`].
    ///
    /// Rejects ids outside `0..27` and any cubie placed twice. With 27
    /// cells and 27 ids, no duplicates means every cubie is present.
    pub fn from_ids(cells: [CubieId; CELL_COUNT]) -> Result<Self, LatticeError> {
        let mut placed: [Option<Coord>; CELL_COUNT] = [None; CELL_COUNT];
        for (coord, id) in Coord::all().zip(cells.iter().copied()) {
            if id.index() >= CELL_COUNT {
                return Err(LatticeError::UnknownCubie {
                    cubie: id,
                    at: coord,
                });
            }
            if let Some(first) = placed[id.index()] {
                return Err(LatticeError::DuplicateCubie {
                    cubie: id,
                    first,
                    second: coord,
                });
            }
            placed[id.index()] = Some(coord);
        }
        let mut positions = [Coord::ORIGIN; CELL_COUNT];
        for (slot, coord) in positions.iter_mut().zip(placed) {
            // Every slot was filled: 27 distinct in-range ids.
            if let Some(coord) = coord {
                *slot = coord;
            }
        }
        Ok(Self { cells, positions })
    }

    /// Cubie currently at `coord`.
    pub fn cubie_at(&self, coord: Coord) -> CubieId {
        self.cells[coord.index()]
    }

    /// Coordinate currently holding `cubie`.
    ///
    /// Returns `None` for ids outside `0..27`.
    pub fn position_of(&self, cubie: CubieId) -> Option<Coord> {
        self.positions.get(cubie.index()).copied()
    }

    /// Snapshot the nine cubies on `face`.
    pub fn slice(&self, face: Face) -> FaceSlice {
        let mut cells = [[CubieId(0); N]; N];
        for (row, col, coord) in FaceSlice::layout(face) {
            cells[row][col] = self.cubie_at(coord);
        }
        FaceSlice::new(face, cells)
    }

    /// Quarter-turn `face`: snapshot its slice, then write the same nine
    /// cubies back through the fixed rotation permutation.
    ///
    /// Cells off the face are untouched. `turn(f, true)` exactly undoes
    /// `turn(f, false)`, and four forward turns are the identity.
    pub fn turn(&mut self, face: Face, inverse: bool) {
        let rotated = self.slice(face).rotated(inverse);
        for (row, col, coord) in FaceSlice::layout(face) {
            self.place(coord, rotated[row][col]);
        }
    }

    fn place(&mut self, coord: Coord, cubie: CubieId) {
        self.cells[coord.index()] = cubie;
        self.positions[cubie.index()] = coord;
    }

    /// Whether every cubie is at its home coordinate.
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, id)| id.index() == i)
    }

    /// Verify that the two tables describe the same bijection.
    ///
    /// Fails if the cell table is not a permutation of the 27 ids, or if
    /// the position table disagrees with it for any cubie.
    pub fn check_bijection(&self) -> Result<(), LatticeError> {
        let rebuilt = Self::from_ids(self.cells)?;
        let mismatch = rebuilt
            .positions
            .iter()
            .zip(&self.positions)
            .position(|(actual, recorded)| actual != recorded);
        match mismatch {
            None => Ok(()),
            Some(i) => Err(LatticeError::PositionMismatch {
                cubie: CubieId(i as u8),
                recorded: self.positions[i],
                actual: rebuilt.positions[i],
            }),
        }
    }

    /// Iterate `(coord, cubie)` over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CubieId)> + '_ {
        Coord::all().map(move |c| (c, self.cubie_at(c)))
    }

    /// The raw cell table, indexed by [`Coord::index`].
    pub fn cells(&self) -> &[CubieId; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Debug for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("solved", &self.is_solved())
            .field("cells", &self.cells.map(|id| id.0))
            .finish()
    }
}

/// One block per y layer, top layer first; rows are x, columns are z.
impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..EDGE_LEN).rev() {
            writeln!(f, "y={y}")?;
            for x in 0..EDGE_LEN {
                for coord in (0..EDGE_LEN).filter_map(|z| Coord::new(x, y, z)) {
                    write!(f, "{:>3}", self.cubie_at(coord).0)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn at(x: u8, y: u8, z: u8) -> Coord {
        Coord::new(x, y, z).unwrap()
    }

    fn id_of(x: u8, y: u8, z: u8) -> CubieId {
        CubieId(at(x, y, z).index() as u8)
    }

    #[test]
    fn solved_is_identity() {
        let l = Lattice::solved();
        assert!(l.is_solved());
        for (coord, id) in l.iter() {
            assert_eq!(id.home(), Some(coord));
            assert_eq!(l.position_of(id), Some(coord));
        }
    }

    #[test]
    fn up_turn_moves_corner_from_far_side() {
        let mut l = Lattice::solved();
        l.turn(Face::Up, false);
        assert_eq!(l.cubie_at(at(0, 2, 0)), id_of(2, 2, 0));
        assert_eq!(l.cubie_at(at(0, 2, 2)), id_of(0, 2, 0));
        assert_eq!(l.cubie_at(at(2, 2, 2)), id_of(0, 2, 2));
        assert_eq!(l.cubie_at(at(2, 2, 0)), id_of(2, 2, 2));
        // Center of the face stays put.
        assert_eq!(l.cubie_at(at(1, 2, 1)), id_of(1, 2, 1));
        l.turn(Face::Up, true);
        assert!(l.is_solved());
    }

    #[test]
    fn turn_leaves_other_layers_alone() {
        for face in Face::ALL {
            let mut l = Lattice::solved();
            l.turn(face, false);
            for (coord, id) in l.iter() {
                if coord.get(face.axis()) != face.layer() {
                    assert_eq!(id.home(), Some(coord), "face {face} moved {coord}");
                }
            }
        }
    }

    #[test]
    fn every_face_is_compliant() {
        for face in Face::ALL {
            compliance::run_full_compliance(&Lattice::solved(), face);
        }
    }

    #[test]
    fn from_ids_rejects_duplicates() {
        let mut cells = *Lattice::solved().cells();
        cells[5] = CubieId(3);
        let err = Lattice::from_ids(cells).unwrap_err();
        assert_eq!(
            err,
            LatticeError::DuplicateCubie {
                cubie: CubieId(3),
                first: Coord::from_index(3).unwrap(),
                second: Coord::from_index(5).unwrap(),
            }
        );
    }

    #[test]
    fn from_ids_rejects_unknown_ids() {
        let mut cells = *Lattice::solved().cells();
        cells[0] = CubieId(27);
        assert!(matches!(
            Lattice::from_ids(cells),
            Err(LatticeError::UnknownCubie { .. })
        ));
    }

    #[test]
    fn check_bijection_catches_stale_positions() {
        let mut l = Lattice::solved();
        l.turn(Face::Right, false);
        assert_eq!(l.check_bijection(), Ok(()));
        l.positions.swap(4, 22);
        assert_eq!(
            l.check_bijection(),
            Err(LatticeError::PositionMismatch {
                cubie: CubieId(4),
                recorded: l.positions[4],
                actual: l.positions[22],
            })
        );
    }

    #[test]
    fn every_coord_names_a_distinct_cell() {
        let mut l = Lattice::solved();
        l.turn(Face::Front, true);
        let mut seen: Vec<CubieId> = Coord::all().map(|c| l.cubie_at(c)).collect();
        seen.sort_by_key(|id| id.0);
        seen.dedup();
        assert_eq!(seen.len(), CELL_COUNT);
        // Out-of-range components never become a Coord, so they cannot
        // alias an in-range cell.
        assert_eq!(Coord::new(0, 0, 5), None);
        assert_eq!(at(0, 0, 2).with(cubelet_core::Axis::Z, 5), None);
    }

    #[test]
    fn display_prints_three_layers() {
        let text = Lattice::solved().to_string();
        assert_eq!(text.lines().count(), 12);
        assert!(text.starts_with("y=2"));
    }

    fn arb_turn() -> impl Strategy<Value = (Face, bool)> {
        (prop::sample::select(Face::ALL.to_vec()), any::<bool>())
    }

    proptest! {
        #[test]
        fn turns_preserve_bijection(turns in prop::collection::vec(arb_turn(), 0..64)) {
            let mut l = Lattice::solved();
            for (face, inverse) in turns {
                l.turn(face, inverse);
                prop_assert!(l.check_bijection().is_ok());
                compliance::assert_bijection(&l);
            }
        }

        #[test]
        fn reversed_inverse_sequence_restores(turns in prop::collection::vec(arb_turn(), 0..64)) {
            let mut l = Lattice::solved();
            for &(face, inverse) in &turns {
                l.turn(face, inverse);
            }
            for &(face, inverse) in turns.iter().rev() {
                l.turn(face, !inverse);
            }
            prop_assert!(l.is_solved());
        }

        #[test]
        fn compliance_holds_from_any_state(
            turns in prop::collection::vec(arb_turn(), 0..16),
            face in prop::sample::select(Face::ALL.to_vec()),
        ) {
            let mut l = Lattice::solved();
            for (f, inverse) in turns {
                l.turn(f, inverse);
            }
            compliance::run_full_compliance(&l, face);
        }
    }
}
