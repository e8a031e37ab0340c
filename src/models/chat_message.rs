//! Chat Message Model
//!
//! Transcript entries exchanged with the remote advisor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// One message in the advisor transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Local identifier; remote transcripts may omit it
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub role: ChatRole,

    pub content: String,

    pub timestamp: DateTime<Utc>,

    /// Opaque extra data attached by the advisor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ChatMessage {
    /// Message typed by the user
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            content: content.into(),
            timestamp,
            metadata: None,
        }
    }

    /// Reply from the advisor
    pub fn bot(
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Bot,
            content: content.into(),
            timestamp,
            metadata,
        }
    }
}
