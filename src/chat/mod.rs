//! Interactive chat: the conversation core and the terminal host around it.
//!
//! [`Conversation`] holds the message sequence and drives the completion
//! cycle. [`ChatSession`] is the REPL that owns one conversation and renders it.

/// Slash command parsing and autocomplete.
pub mod command;
mod conversation;
mod message;
mod session;
mod ui;

pub use conversation::{
    Conversation, DEFAULT_SYSTEM_PROMPT, MAX_HISTORY, MIN_HISTORY, SessionState,
};
pub use message::{Message, Role};
pub use session::ChatSession;
