//! Move-notation parsing.
//!
//! Notation is one letter per face (`U D R L F B`, any case), optionally
//! followed by `'` for the inverse direction. Parsing is lenient: any other
//! character is skipped, so move strings may carry spaces, separators, or
//! comments.

use cubelet_core::{Face, Move, Moves};

/// Scan `text` left to right and collect the moves it names.
///
/// A face letter consumes at most one directly following apostrophe. An
/// apostrophe that does not follow a face letter is ignored like any other
/// unrecognized character.
///
/// # Examples
///
/// ```
/// use cubelet_engine::parse_moves;
///
/// let moves = parse_moves("r U' x, f''");
/// let tokens: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
/// assert_eq!(tokens, ["R", "U'", "F'"]);
/// ```
pub fn parse_moves(text: &str) -> Moves {
    let mut moves = Moves::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let Some(face) = Face::from_letter(c) else {
            continue;
        };
        let inverse = chars.next_if_eq(&'\'').is_some();
        moves.push(Move::new(face, inverse));
    }
    moves
}

/// Render moves back to compact notation.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().map(|m| m.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubelet_core::DEMO_SCRAMBLE;
    use proptest::prelude::*;

    fn tokens(text: &str) -> Vec<String> {
        parse_moves(text).iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_moves("").is_empty());
        assert!(parse_moves("  , ; xyz").is_empty());
    }

    #[test]
    fn lowercase_is_accepted() {
        assert_eq!(tokens("udrlfb"), ["U", "D", "R", "L", "F", "B"]);
    }

    #[test]
    fn prime_binds_to_previous_letter_only() {
        assert_eq!(tokens("U'D"), ["U'", "D"]);
        assert_eq!(tokens("'U"), ["U"]);
        assert_eq!(tokens("U''"), ["U'"]);
        assert_eq!(tokens("U 'D"), ["U", "D"]);
    }

    #[test]
    fn separators_and_comments_are_skipped() {
        assert_eq!(tokens("R U R' U' -- two, top?"), ["R", "U", "R'", "U'"]);
    }

    #[test]
    fn demo_scramble_parses_fully() {
        let moves = parse_moves(DEMO_SCRAMBLE);
        assert_eq!(moves.len(), 24);
        assert_eq!(format_moves(&moves), DEMO_SCRAMBLE);
    }

    fn arb_move() -> impl Strategy<Value = Move> {
        (prop::sample::select(Face::ALL.to_vec()), any::<bool>())
            .prop_map(|(face, inverse)| Move::new(face, inverse))
    }

    proptest! {
        #[test]
        fn format_then_parse_is_identity(moves in prop::collection::vec(arb_move(), 0..40)) {
            let text = format_moves(&moves);
            prop_assert_eq!(parse_moves(&text).to_vec(), moves);
        }
    }
}
