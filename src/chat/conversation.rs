//! The conversation held by one chat session.
//!
//! A [`Conversation`] owns the ordered message sequence, submits it to a
//! [`Completion`] backend on every user turn, and keeps the sequence bounded.

use tracing::debug;

use super::message::{Message, Role};
use crate::completion::Completion;
use crate::error::ChatError;

/// Instruction sent as the leading system message of every conversation.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Default bound on the number of retained messages, system message included.
pub const MAX_HISTORY: usize = 10;

/// Smallest bound that still holds the system message and one full exchange.
pub const MIN_HISTORY: usize = 3;

/// Whether a request to the completion backend is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    max_history: usize,
    state: SessionState,
}

impl Conversation {
    /// Creates a conversation primed with the default system message.
    ///
    /// `max_history` is clamped to at least [`MIN_HISTORY`] so the latest
    /// exchange always survives trimming.
    pub fn new(max_history: usize) -> Self {
        Self {
            messages: vec![Message::system(DEFAULT_SYSTEM_PROMPT)],
            max_history: max_history.max(MIN_HISTORY),
            state: SessionState::Idle,
        }
    }

    /// Returns the conversation held in `slot`, creating it on first use.
    ///
    /// Re-entering with an occupied slot leaves the existing conversation untouched.
    pub fn initialize(slot: &mut Option<Self>, max_history: usize) -> &mut Self {
        slot.get_or_insert_with(|| Self::new(max_history))
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages shown to the user (everything after the system message).
    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role() != Role::System)
    }

    pub const fn max_history(&self) -> usize {
        self.max_history
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the trimmed message text, or the validation error for blank input.
    pub fn validate_input(text: &str) -> Result<&str, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            Err(ChatError::ValidationEmptyInput)
        } else {
            Ok(text)
        }
    }

    /// Submits one user turn.
    ///
    /// Blank input is rejected with [`ChatError::ValidationEmptyInput`] before
    /// anything is appended or sent. Otherwise the trimmed text is appended,
    /// the whole sequence is sent to `backend`, and the reply is appended.
    /// On a backend error the user message stays as the last element.
    pub async fn submit_user_message<C>(
        &mut self,
        backend: &C,
        text: &str,
    ) -> Result<&[Message], ChatError>
    where
        C: Completion,
    {
        let text = Self::validate_input(text)?;
        self.messages.push(Message::user(text));

        self.state = SessionState::AwaitingResponse;
        let result = backend.complete(&self.messages).await;
        self.state = SessionState::Idle;

        let reply = result?;
        self.messages.push(Message::assistant(reply));
        self.trim_history();

        Ok(&self.messages)
    }

    /// Drops the oldest conversational messages once the bound is exceeded.
    ///
    /// The leading system message is never dropped. The sequence is cut to
    /// exactly `max_history`, so with an even bound the oldest retained
    /// conversational message is an assistant reply whose question was dropped.
    pub fn trim_history(&mut self) {
        if self.messages.len() <= self.max_history {
            return;
        }

        let excess = self.messages.len() - self.max_history;
        self.messages.drain(1..=excess);
        debug!(
            dropped = excess,
            retained = self.messages.len(),
            "Trimmed conversation history"
        );
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}
