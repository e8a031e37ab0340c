//! Advisor Session
//!
//! Client-side transcript for the advisory chat. User messages are shown
//! optimistically and rolled back if the remote call fails. Overlapping
//! sends are allowed; replies are appended in completion order.

use crate::models::ChatMessage;
use crate::services::advisor_client::AdvisorClient;
use crate::services::time_provider::SharedTimeProvider;
use crate::storage::{KeyValueStore, CHAT_SESSION_KEY};
use chrono::Duration;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub const INIT_FAILED_MESSAGE: &str = "Failed to initialize chat session";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const CLEAR_FAILED_MESSAGE: &str = "Failed to clear chat history";

/// How long a stored session id is kept
const SESSION_ID_RETENTION_DAYS: i64 = 365;

/// Observable chat state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub session_id: Option<String>,
    pub messages: Vec<ChatMessage>,
    /// Banner shown to the user after a failed call
    pub error: Option<String>,
    /// Sends awaiting a reply
    pub in_flight: usize,
}

impl SessionState {
    pub fn is_sending(&self) -> bool {
        self.in_flight > 0
    }
}

/// Chat transcript bound to an advisor client; clones share state
#[derive(Clone)]
pub struct AdvisorSession {
    client: AdvisorClient,
    time_provider: SharedTimeProvider,
    state: Arc<RwLock<SessionState>>,
}

impl AdvisorSession {
    pub fn new(client: AdvisorClient, time_provider: SharedTimeProvider) -> Self {
        Self {
            client,
            time_provider,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Resume the stored session (loading its transcript) or start a new one
    ///
    /// Returns false and sets the error banner if the advisor is unreachable.
    pub async fn initialize<S: KeyValueStore>(&self, storage: &mut S) -> bool {
        let result = match storage.read(CHAT_SESSION_KEY) {
            Some(session_id) => self
                .client
                .fetch_session(&session_id)
                .await
                .map(|messages| (session_id, messages)),
            None => match self.client.create_session().await {
                Ok(session_id) => {
                    let retention = Duration::days(SESSION_ID_RETENTION_DAYS);
                    if let Err(e) = storage.write(CHAT_SESSION_KEY, &session_id, retention) {
                        warn!("Failed to store chat session id: {}", e);
                    }
                    Ok((session_id, Vec::new()))
                }
                Err(e) => Err(e),
            },
        };

        let mut state = self.state.write().await;
        match result {
            Ok((session_id, messages)) => {
                info!("Chat session {} ready with {} messages", session_id, messages.len());
                state.session_id = Some(session_id);
                state.messages = messages;
                state.error = None;
                true
            }
            Err(e) => {
                warn!("Chat session initialization failed: {}", e);
                state.error = Some(INIT_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    /// Send a message; returns true if a reply was appended
    ///
    /// Blank input is ignored.
    pub async fn send(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let user_message = ChatMessage::user(text, self.time_provider.now_utc());
        let optimistic_id = user_message.id;
        let session_id = {
            let mut state = self.state.write().await;
            state.error = None;
            state.in_flight += 1;
            state.messages.push(user_message);
            state.session_id.clone()
        };

        let reply = self.client.send_message(session_id.as_deref(), text).await;

        let mut state = self.state.write().await;
        state.in_flight = state.in_flight.saturating_sub(1);
        match reply {
            Ok(reply) => {
                let bot = ChatMessage::bot(reply.content, self.time_provider.now_utc(), reply.metadata);
                state.messages.push(bot);
                true
            }
            Err(e) => {
                warn!("Chat message failed: {}", e);
                state.messages.retain(|message| message.id != optimistic_id);
                state.error = Some(SEND_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    /// Clear the remote history and the local transcript
    pub async fn clear(&self) -> bool {
        let result = self.client.clear_history().await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                state.messages.clear();
                state.error = None;
                true
            }
            Err(e) => {
                warn!("Clearing chat history failed: {}", e);
                state.error = Some(CLEAR_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.state.read().await.messages.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn dismiss_error(&self) {
        self.state.write().await.error = None;
    }
}
