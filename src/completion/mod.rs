//! Client for OpenAI-compatible chat completion endpoints.

mod classify;
mod client;

use std::future::Future;

use crate::chat::Message;
use crate::error::ChatError;

pub use classify::classify_http_error;
pub use client::{CompletionClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// A backend that turns a message sequence into the next assistant reply.
pub trait Completion {
    /// Sends the full `messages` sequence and returns the generated text.
    fn complete(&self, messages: &[Message]) -> impl Future<Output = Result<String, ChatError>>;
}
