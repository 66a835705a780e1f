//! Conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::response::Category;

/// Unique identifier for one message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub uuid::Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the conversation history.
///
/// User messages carry no category. Assistant messages carry the category of
/// the response body they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Message {
    /// A message typed by the user.
    pub fn from_user(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender: Sender::User,
            timestamp,
            category: None,
        }
    }

    /// A reply produced by the assistant.
    pub fn from_assistant(
        text: impl Into<String>,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp,
            category: Some(category),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
