//! Sticker colors baked into cubies at construction.

/// An RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Interior faces, never visible on a whole cube.
    pub const NULL: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Up face (white).
    pub const UP: Color = Color::rgb(0.968, 0.968, 0.968);
    /// Back face (orange).
    pub const BACK: Color = Color::rgb(0.968, 0.333, 0.0);
    /// Front face (red).
    pub const FRONT: Color = Color::rgb(0.694, 0.066, 0.196);
    /// Left face (green).
    pub const LEFT: Color = Color::rgb(0.0, 0.588, 0.275);
    /// Right face (blue).
    pub const RIGHT: Color = Color::rgb(0.0, 0.266, 0.659);
    /// Down face (yellow).
    pub const DOWN: Color = Color::rgb(0.968, 0.87, 0.0);

    /// Whether this is the interior color.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}
