//! Conversation messages and their identifiers.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the person using the panel.
    User,
    /// Returned by the responder.
    Bot,
}

/// Message identifier: creation time in Unix milliseconds, made unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i64);

impl MessageId {
    /// Raw identifier value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry in the conversation. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
}

impl Message {
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Hands out strictly increasing [`MessageId`]s.
///
/// Ids follow the wall clock, but two messages created in the same
/// millisecond (or across a backwards clock step) still get distinct,
/// ordered ids.
#[derive(Debug, Default)]
pub struct MessageIdGenerator {
    last: Option<i64>,
}

impl MessageIdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, taken from the current time.
    pub fn next_id(&mut self) -> MessageId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id for a creation time of `now_millis`.
    pub fn next_at(&mut self, now_millis: i64) -> MessageId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        MessageId(id)
    }
}
