use tracing::{Span, debug, info, warn};

use crate::command::{Command, parse_position};
use crate::reply::Reply;
use crate::todo::{TodoList, TodoStore};

/// Parses `body`, applies it to the shared list and returns the reply.
///
/// At most one item is added or removed. The store lock is held for the whole
/// command, so the reply always describes the state the command acted on.
pub fn handle(store: &TodoStore, body: &str) -> Reply {
    let command = Command::parse(body);
    Span::current().record("command", command.name());
    debug!(?command, "Parsed SMS command");

    let mut list = store.lock();
    apply(&mut list, command)
}

/// Runs one command against `list`.
pub fn apply(list: &mut TodoList, command: Command) -> Reply {
    match command {
        Command::Unknown(token) => {
            info!(token = %token, "Unrecognized command");
            Reply::Guidance
        }
        Command::Add(item) => {
            list.push(item.clone());
            info!(len = list.len(), "Item added");
            Reply::Added(item)
        }
        Command::Remove(_) if list.is_empty() => Reply::NothingToRemove,
        Command::Remove(argument) => {
            let Some(position) = parse_position(&argument) else {
                warn!(argument = %argument, "Remove argument is not an item number");
                return Reply::BadItemNumber;
            };

            match list.remove(position) {
                Some(_) => {
                    info!(position, len = list.len(), "Item removed");
                    Reply::Removed { position }
                }
                None => {
                    warn!(position, len = list.len(), "Remove position out of range");
                    Reply::ItemNotFound {
                        position,
                        len: list.len(),
                    }
                }
            }
        }
        Command::List if list.is_empty() => Reply::EmptyList,
        Command::List => Reply::Listing(list.items().to_vec()),
    }
}
