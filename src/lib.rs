//! # gpt-chat - Minimal Terminal Chat
//!
//! `gpt-chat` forwards each message you type to an OpenAI-compatible chat
//! completion endpoint, sending the whole conversation as context, and prints
//! the reply.
//!
//! ## Quick Start
//!
//! ```bash
//! # Use ~/.config/gpt-chat/config.json
//! gpt-chat
//!
//! # Explicit config file and model
//! gpt-chat --config ./config.json --model gpt-4o-mini
//! ```
//!
//! ## Configuration
//!
//! ```json
//! { "OPENAI_API_KEY": "sk-..." }
//! ```

/// Conversation state and the interactive chat session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Client for OpenAI-compatible chat completion endpoints.
pub mod completion;

/// Configuration file loading.
pub mod config;

/// Error taxonomy.
pub mod error;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::ChatError;
