//! Face slices and the shared quarter-turn permutation.

use cubelet_core::{Coord, CubieId, Face, EDGE_LEN};

/// Side length of a slice, as an index bound.
const N: usize = EDGE_LEN as usize;

/// A 3x3 snapshot of the cubies on one face.
///
/// Cells are addressed in the face's slice frame: `row` runs along the
/// first axis of [`Axis::slice_frame`](cubelet_core::Axis::slice_frame),
/// `col` along the second, and the normal component is fixed at the
/// face's layer. The snapshot is an owned copy, so re-indexing can read
/// old positions while writing new ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceSlice {
    face: Face,
    cells: [[CubieId; N]; N],
}

impl FaceSlice {
    pub(crate) fn new(face: Face, cells: [[CubieId; N]; N]) -> Self {
        Self { face, cells }
    }

    /// Lattice coordinate of slice cell `(row, col)` on `face`.
    ///
    /// Returns `None` if `row` or `col` is 3 or more.
    pub fn coord(face: Face, row: usize, col: usize) -> Option<Coord> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        let (row_axis, col_axis) = face.axis().slice_frame();
        Coord::ORIGIN
            .with(face.axis(), face.layer())?
            .with(row_axis, row)?
            .with(col_axis, col)
    }

    /// `(row, col, coord)` for the nine cells of `face`, row by row.
    pub fn layout(face: Face) -> impl Iterator<Item = (usize, usize, Coord)> {
        (0..N).flat_map(move |row| {
            (0..N).filter_map(move |col| Self::coord(face, row, col).map(|c| (row, col, c)))
        })
    }

    /// The face this slice was taken from.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Cubie at slice cell `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> CubieId {
        self.cells[row][col]
    }

    /// The 3x3 cell grid.
    pub fn cells(&self) -> &[[CubieId; N]; N] {
        &self.cells
    }

    /// Iterate `(coord, cubie)` over all nine cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CubieId)> + '_ {
        Self::layout(self.face).map(move |(row, col, c)| (c, self.cells[row][col]))
    }

    /// The grid after a quarter turn.
    ///
    /// Forward: `new[i][j] = old[2-j][i]`. Inverse: `new[i][j] = old[j][2-i]`.
    /// The two are exact inverses, and the center cell never moves.
    pub fn rotated(&self, inverse: bool) -> [[CubieId; N]; N] {
        let old = &self.cells;
        let mut out = *old;
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = if inverse {
                    old[j][N - 1 - i]
                } else {
                    old[N - 1 - j][i]
                };
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubelet_core::Axis;

    fn numbered(face: Face) -> FaceSlice {
        let mut cells = [[CubieId(0); N]; N];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = CubieId((r * N + c) as u8);
            }
        }
        FaceSlice::new(face, cells)
    }

    #[test]
    fn coords_sit_on_the_face_layer() {
        for face in Face::ALL {
            let mut seen = Vec::new();
            for (_, _, c) in FaceSlice::layout(face) {
                assert_eq!(c.get(face.axis()), face.layer());
                seen.push(c);
            }
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 9, "face {face} must cover nine cells");
        }
    }

    #[test]
    fn frame_follows_axis() {
        // Up: rows along x, cols along z.
        assert_eq!(FaceSlice::coord(Face::Up, 2, 0), Coord::new(2, 2, 0));
        // Right: rows along y, cols along x.
        assert_eq!(FaceSlice::coord(Face::Right, 1, 2), Coord::new(2, 1, 2));
        // Front: rows along z, cols along y.
        assert_eq!(FaceSlice::coord(Face::Front, 0, 2), Coord::new(2, 2, 0));
        assert_eq!(Axis::X.slice_frame(), (Axis::Z, Axis::Y));
    }

    #[test]
    fn out_of_grid_cells_have_no_coord() {
        for face in Face::ALL {
            assert_eq!(FaceSlice::coord(face, 3, 0), None);
            assert_eq!(FaceSlice::coord(face, 0, 5), None);
            assert_eq!(FaceSlice::coord(face, usize::MAX, 1), None);
        }
        assert_eq!(FaceSlice::layout(Face::Left).count(), 9);
    }

    #[test]
    fn forward_rotation_cycles_corners_and_edges() {
        let s = numbered(Face::Up);
        let r = s.rotated(false);
        // 0 1 2      6 3 0
        // 3 4 5  ->  7 4 1
        // 6 7 8      8 5 2
        let expect = [[6, 3, 0], [7, 4, 1], [8, 5, 2]];
        for i in 0..N {
            for j in 0..N {
                assert_eq!(r[i][j], CubieId(expect[i][j]));
            }
        }
    }

    #[test]
    fn inverse_rotation_undoes_forward() {
        let s = numbered(Face::Left);
        for inverse in [false, true] {
            let once = FaceSlice::new(Face::Left, s.rotated(inverse));
            assert_eq!(once.rotated(!inverse), *s.cells());
        }
    }

    #[test]
    fn center_is_fixed() {
        let s = numbered(Face::Back);
        assert_eq!(s.rotated(false)[1][1], CubieId(4));
        assert_eq!(s.rotated(true)[1][1], CubieId(4));
    }
}
