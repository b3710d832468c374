//! Conversation transcript types for the chat assistant surface.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Bot,
}

/// One entry in a chat session's transcript.
///
/// Transcripts are append-only for the lifetime of a session and are not
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
}

impl ConversationMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
        }
    }
}
