#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::SendError;
use crate::util::host;

/// Fixed localized reply shown in place of the assistant's answer whenever a
/// send attempt fails, whatever the cause.
pub const FALLBACK_REPLY: &str =
    "Désolé, je rencontre un problème technique. Veuillez réessayer dans quelques instants.";

/// Backend's `message` length limit. Longer input is clamped before sending
/// so an oversized paste doesn't turn into a guaranteed 400.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single rendered chat message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

/// Conversation state for one widget instance.
///
/// `messages` is append-only: entries are never mutated, removed, or
/// reordered, so the rendered panel always mirrors the sequence exactly.
/// `pending` is true from the moment a send is dispatched until its network
/// call settles, and gates any further send in that window.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

impl ChatState {
    /// Append the configured welcome text as the opening assistant message.
    pub fn welcome(&mut self, text: &str) {
        self.push(Sender::Assistant, text.to_owned());
    }

    /// Start a send: append the user message, raise `pending`, and return the
    /// text to dispatch.
    ///
    /// Returns `None`, with no state change at all, when the trimmed input
    /// is empty or another send is still in flight.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.pending {
            return None;
        }

        let text = if trimmed.chars().count() > MAX_MESSAGE_CHARS {
            trimmed.chars().take(MAX_MESSAGE_CHARS).collect()
        } else {
            trimmed.to_owned()
        };

        self.pending = true;
        self.push(Sender::User, text.clone());
        Some(text)
    }

    /// Settle the in-flight send: clear `pending` and append either the
    /// assistant's reply or the fixed fallback message.
    ///
    /// A settle with no send pending is dropped; this covers a response that
    /// resolves after the widget has been torn down.
    pub fn settle(&mut self, reply: Result<String, SendError>) {
        if !self.pending {
            return;
        }
        self.pending = false;
        match reply {
            Ok(text) => self.push(Sender::Assistant, text),
            Err(_) => self.push(Sender::Assistant, FALLBACK_REPLY.to_owned()),
        }
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(ChatMessage {
            sender,
            text,
            timestamp: host::now_ms(),
        });
    }
}
