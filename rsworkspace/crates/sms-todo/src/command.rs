//! Text commands carried in the body of an inbound SMS.

/// A parsed inbound message.
///
/// The first space-separated token selects the variant (case-insensitive);
/// everything after it, rejoined with single spaces, is the argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <text>`: append `<text>` verbatim, empty included.
    Add(String),
    /// `list`: arguments are ignored.
    List,
    /// `remove <n> [...]`: only the first token of the argument is read.
    Remove(String),
    /// Anything else. Holds the normalized command token.
    Unknown(String),
}

impl Command {
    /// Splits on single `' '` characters, so runs of spaces produce empty
    /// tokens and survive in the rejoined argument.
    pub fn parse(body: &str) -> Self {
        let (token, argument) = body.split_once(' ').unwrap_or((body, ""));

        match token.to_lowercase().as_str() {
            "add" => Self::Add(argument.to_string()),
            "list" => Self::List,
            "remove" => Self::Remove(argument.to_string()),
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Add(_) => "add",
            Self::List => "list",
            Self::Remove(_) => "remove",
            Self::Unknown(token) => token,
        }
    }
}

/// Reads the 1-based item number from a `remove` argument.
///
/// Only the first whitespace-delimited token counts, so `remove 2 please`
/// and `remove 2\n` both target item 2. Numbers too large for `usize` are
/// treated like any other non-number.
pub fn parse_position(argument: &str) -> Option<usize> {
    argument.split_whitespace().next()?.parse().ok()
}
