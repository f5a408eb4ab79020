//! Chat conversation types and state
//!
//! Shared between the WASM chat panel and host-side tests:
//! - `Message` / `Role`: one entry in the conversation
//! - `ChatLog`: the panel's append-only message list plus loading flag

use serde::{Deserialize, Serialize};

/// Assistant message the conversation is seeded with
pub const SEED_MESSAGE: &str =
    "Tell me about the hymn \"Adam Te Deum\" by Palestrina. What are its key characteristics?";

/// Fixed reply appended when a chat request fails
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error processing your request.";

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

/// A single conversation entry; identity is positional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
        }
    }
}

/// Chat panel state: an ordered, append-only message list and a loading
/// flag that serializes requests (at most one outstanding at a time).
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<Message>,
    loading: bool,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// New log seeded with the placeholder assistant message.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::ai(SEED_MESSAGE)],
            loading: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a send: appends the user message and sets the loading flag.
    ///
    /// Returns the text to post to the backend, or `None` when nothing
    /// should be sent (blank input, or a request already outstanding).
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if self.loading || input.trim().is_empty() {
            return None;
        }
        let text = input.to_string();
        self.messages.push(Message::user(text.clone()));
        self.loading = true;
        Some(text)
    }

    /// Append the assistant reply and clear the loading flag.
    pub fn push_reply(&mut self, reply: impl Into<String>) {
        self.messages.push(Message::ai(reply));
        self.loading = false;
    }

    /// Append the fixed apology message and clear the loading flag.
    pub fn push_error(&mut self) {
        self.messages.push(Message::ai(APOLOGY_MESSAGE));
        self.loading = false;
    }
}
