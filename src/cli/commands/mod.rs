//! Command implementations.

/// Chat command handler.
pub mod chat;
