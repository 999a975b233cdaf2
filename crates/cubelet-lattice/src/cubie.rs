//! Cubies and their construction-time sticker colors.

use cubelet_core::{Axis, Color, Coord, CubieId, CELL_COUNT};

/// Gap between neighbouring cubies when laid out at rest.
const GAP: f32 = 0.01;

/// One of the 27 blocks composing the cube.
///
/// A cubie keeps its stickers for life: the six colors are fixed from its
/// home coordinate when it is built. Turns move cubies between lattice
/// cells; they never recolor them.
#[derive(Clone, Debug, PartialEq)]
pub struct Cubie {
    id: CubieId,
    home: Coord,
    stickers: [Color; 6],
}

impl Cubie {
    /// Build the cubie whose home is `home`.
    ///
    /// Sticker order is `[+Z, -Z, +X, -X, +Y, -Y]`. A side gets its face
    /// color only when it lies on the matching outer layer; all other
    /// sides are [`Color::NULL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cubelet_core::{Axis, Color, Coord};
    /// use cubelet_lattice::Cubie;
    ///
    /// let corner = Cubie::new(Coord::new(2, 2, 0).unwrap());
    /// assert_eq!(corner.sticker(Axis::X, true), Color::FRONT);
    /// assert_eq!(corner.sticker(Axis::Y, true), Color::UP);
    /// assert_eq!(corner.sticker(Axis::Z, false), Color::LEFT);
    /// assert_eq!(corner.visible_stickers(), 3);
    /// ```
    pub fn new(home: Coord) -> Self {
        let paint = |on_layer: bool, color: Color| if on_layer { color } else { Color::NULL };
        let stickers = [
            paint(home.z() == 2, Color::RIGHT),
            paint(home.z() == 0, Color::LEFT),
            paint(home.x() == 2, Color::FRONT),
            paint(home.x() == 0, Color::BACK),
            paint(home.y() == 2, Color::UP),
            paint(home.y() == 0, Color::DOWN),
        ];
        Self {
            id: CubieId(home.index() as u8),
            home,
            stickers,
        }
    }

    /// Stable identity handle.
    pub fn id(&self) -> CubieId {
        self.id
    }

    /// Coordinate this cubie occupies in a solved lattice.
    pub fn home(&self) -> Coord {
        self.home
    }

    /// All six sticker colors in `[+Z, -Z, +X, -X, +Y, -Y]` order.
    pub fn stickers(&self) -> &[Color; 6] {
        &self.stickers
    }

    /// Sticker on the positive (`true`) or negative side along `axis`,
    /// in the cubie's own frame.
    pub fn sticker(&self, axis: Axis, positive: bool) -> Color {
        let base = match axis {
            Axis::Z => 0,
            Axis::X => 2,
            Axis::Y => 4,
        };
        self.stickers[if positive { base } else { base + 1 }]
    }

    /// Number of colored (outer) sides: 0 for the core, 1 for centers,
    /// 2 for edges, 3 for corners.
    pub fn visible_stickers(&self) -> usize {
        self.stickers.iter().filter(|c| !c.is_null()).count()
    }

    /// Display name, `"x-y-z"` of the home coordinate.
    pub fn name(&self) -> String {
        format!("{}-{}-{}", self.home.x(), self.home.y(), self.home.z())
    }

    /// Rest position of this cubie's center for a cube centered on `origin`.
    ///
    /// Outer layers are pushed out by a small gap so neighbouring blocks
    /// read as separate pieces.
    pub fn rest_position(&self, origin: [f32; 3]) -> [f32; 3] {
        let place = |o: f32, c: u8| {
            let gap = match c {
                0 => -GAP,
                2 => GAP,
                _ => 0.0,
            };
            o + c as f32 + gap - 1.0
        };
        [
            place(origin[0], self.home.x()),
            place(origin[1], self.home.y()),
            place(origin[2], self.home.z()),
        ]
    }
}

/// Build all 27 cubies, indexed by [`CubieId`].
pub fn build_cubies() -> Vec<Cubie> {
    let cubies: Vec<Cubie> = Coord::all().map(Cubie::new).collect();
    debug_assert_eq!(cubies.len(), CELL_COUNT);
    cubies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_home_index() {
        for (i, cubie) in build_cubies().iter().enumerate() {
            assert_eq!(cubie.id().index(), i);
            assert_eq!(cubie.id().home(), Some(cubie.home()));
        }
    }

    #[test]
    fn sticker_counts_match_piece_kinds() {
        let cubies = build_cubies();
        let count = |n: usize| cubies.iter().filter(|c| c.visible_stickers() == n).count();
        assert_eq!(count(0), 1, "one hidden core");
        assert_eq!(count(1), 6, "six centers");
        assert_eq!(count(2), 12, "twelve edges");
        assert_eq!(count(3), 8, "eight corners");
    }

    #[test]
    fn each_face_color_appears_nine_times() {
        let cubies = build_cubies();
        for color in [
            Color::UP,
            Color::DOWN,
            Color::LEFT,
            Color::RIGHT,
            Color::FRONT,
            Color::BACK,
        ] {
            let n: usize = cubies
                .iter()
                .map(|c| c.stickers().iter().filter(|s| **s == color).count())
                .sum();
            assert_eq!(n, 9, "color {color:?}");
        }
    }

    #[test]
    fn name_and_rest_position() {
        let c = Cubie::new(Coord::new(0, 1, 2).unwrap());
        assert_eq!(c.name(), "0-1-2");
        let p = c.rest_position([10.0, 0.0, 0.0]);
        assert!((p[0] - 8.99).abs() < 1e-5);
        assert!((p[1] - 0.0).abs() < 1e-5);
        assert!((p[2] - 1.01).abs() < 1e-5);
    }
}
