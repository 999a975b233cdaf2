//! The input surface's fixed controls.
//!
//! Each button submits exactly one move token; the resolve key undoes the
//! move log. Front ends read these tables instead of hard-coding labels.

/// The twelve button tokens, in display order.
pub const BUTTON_TOKENS: [&str; 12] = [
    "U", "U'", "R", "R'", "F", "F'", "D", "D'", "L", "L'", "B", "B'",
];

/// Key that triggers a resolve when released.
pub const RESOLVE_KEY: char = 'R';

/// One on-screen control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    /// Move string submitted when pressed.
    pub token: &'static str,
    /// Caption shown on the button.
    pub label: String,
}

/// Caption for a move token, e.g. `"giro U'"`.
pub fn button_label(token: &str) -> String {
    format!("giro {token}")
}

/// All twelve buttons in display order.
pub fn buttons() -> Vec<Button> {
    BUTTON_TOKENS
        .iter()
        .map(|&token| Button {
            token,
            label: button_label(token),
        })
        .collect()
}
