//! # sms-todo
//!
//! SMS webhook that keeps one shared, in-memory todo list.
//!
//! ## How it works
//!
//! 1. The messaging gateway sends `POST /sms` with a form-encoded body whose
//!    `Body` field is the text message.
//! 2. The first word picks the command (case-insensitive):
//!    - `add <todo>` appends `<todo>` and replies `<todo> ADDED`
//!    - `list` replies with `1. <todo>` lines, or `Your todo list is empty`
//!    - `remove <n>` deletes item `n` and replies `Item <n> REMOVED`; a number
//!      outside the list gets `Item <n> not found - ...` and anything that is
//!      not a number gets a `Bad item number - ...` hint, both without
//!      touching the list
//!    - anything else gets a short usage hint
//! 3. The reply goes back as TwiML:
//!    `<Response><Message>...</Message></Response>` with `Content-Type: text/xml`.
//!
//! Every sender shares the same list and nothing is persisted; restarting the
//! process empties it.
//!
//! ## Configuration (env vars)
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `PORT` | `1337` | HTTP listening port |
//! | `SMS_WEBHOOK_PATH` | `/sms` | Route for inbound messages |
//! | `RUST_LOG` | `info` | Log filter (tracing-subscriber) |

pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod handler;
pub mod reply;
pub mod server;
pub mod todo;
pub mod twiml;

pub use config::SmsConfig;
pub use error::ServerError;
pub use server::serve;
pub use todo::TodoStore;
