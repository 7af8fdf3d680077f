use std::fmt;

pub const GUIDANCE: &str = "Bad message - please start your msg with 'add', 'remove', or 'list'.";
pub const EMPTY_LIST: &str = "Your todo list is empty";
pub const NOTHING_TO_REMOVE: &str = "Your todo list is empty, nothing to remove";
pub const BAD_ITEM_NUMBER: &str =
    "Bad item number - please send 'remove' followed by a number from 'list'.";

/// Outcome of one inbound command. `Display` renders the SMS reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Guidance,
    Added(String),
    Removed { position: usize },
    NothingToRemove,
    BadItemNumber,
    ItemNotFound { position: usize, len: usize },
    Listing(Vec<String>),
    EmptyList,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guidance => f.write_str(GUIDANCE),
            Self::Added(item) => write!(f, "{item} ADDED"),
            Self::Removed { position } => write!(f, "Item {position} REMOVED"),
            Self::NothingToRemove => f.write_str(NOTHING_TO_REMOVE),
            Self::BadItemNumber => f.write_str(BAD_ITEM_NUMBER),
            Self::ItemNotFound { position, len } => {
                let noun = if *len == 1 { "item" } else { "items" };
                write!(
                    f,
                    "Item {position} not found - your todo list has {len} {noun}"
                )
            }
            Self::Listing(items) => {
                for (i, item) in items.iter().enumerate() {
                    writeln!(f, "{}. {item}", i + 1)?;
                }
                Ok(())
            }
            Self::EmptyList => f.write_str(EMPTY_LIST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_appends_suffix() {
        assert_eq!(
            Reply::Added("wash dog".into()).to_string(),
            "wash dog ADDED"
        );
        assert_eq!(Reply::Added(String::new()).to_string(), " ADDED");
    }

    #[test]
    fn removed_echoes_position() {
        assert_eq!(
            Reply::Removed { position: 1 }.to_string(),
            "Item 1 REMOVED"
        );
    }

    #[test]
    fn listing_numbers_every_line() {
        let reply = Reply::Listing(vec!["wash dog".into(), "buy milk".into()]);
        assert_eq!(reply.to_string(), "1. wash dog\n2. buy milk\n");
    }

    #[test]
    fn not_found_pluralizes() {
        assert_eq!(
            Reply::ItemNotFound { position: 4, len: 1 }.to_string(),
            "Item 4 not found - your todo list has 1 item"
        );
        assert_eq!(
            Reply::ItemNotFound { position: 4, len: 3 }.to_string(),
            "Item 4 not found - your todo list has 3 items"
        );
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(Reply::EmptyList.to_string(), "Your todo list is empty");
        assert_eq!(
            Reply::NothingToRemove.to_string(),
            "Your todo list is empty, nothing to remove"
        );
        assert_eq!(Reply::Guidance.to_string(), GUIDANCE);
    }
}
