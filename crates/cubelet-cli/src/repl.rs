//! Line commands read from stdin.

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    /// `:resolve` or `:r`
    Resolve,
    /// `:log`
    Log,
    /// `:state`
    State,
    /// `:help`
    Help,
    /// `:quit`
    Quit,
    /// Blank line.
    Empty,
    /// Anything else, applied as a move string.
    Moves(&'a str),
}

impl<'a> ReplCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Empty,
            ":resolve" | ":r" => Self::Resolve,
            ":log" => Self::Log,
            ":state" => Self::State,
            ":help" => Self::Help,
            ":quit" => Self::Quit,
            other => Self::Moves(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        assert_eq!(ReplCommand::parse(":r"), ReplCommand::Resolve);
        assert_eq!(ReplCommand::parse("  :resolve\n"), ReplCommand::Resolve);
        assert_eq!(ReplCommand::parse(":log"), ReplCommand::Log);
        assert_eq!(ReplCommand::parse(":state"), ReplCommand::State);
        assert_eq!(ReplCommand::parse(":quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
    }

    #[test]
    fn everything_else_is_moves() {
        assert_eq!(ReplCommand::parse("R U R' U'"), ReplCommand::Moves("R U R' U'"));
        assert_eq!(ReplCommand::parse(":rr"), ReplCommand::Moves(":rr"));
    }
}
