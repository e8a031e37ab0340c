//! Advisor API Client
//!
//! Thin HTTP client for the remote advisory chat service.

use crate::logging::log_advisor_call;
use crate::models::ChatMessage;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Advisor call errors
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("Advisor request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Advisor responded with status {0}")]
    Status(u16),

    #[error("Invalid advisor URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Reply to a chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionCreated {
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct SessionTranscript {
    #[serde(default)]
    messages: Vec<ChatMessage>,
}

/// Client bound to one advisor base URL
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AdvisorClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AdvisorError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    /// `POST /api/sessions`
    pub async fn create_session(&self) -> Result<String, AdvisorError> {
        let response = self.http.post(self.endpoint("api/sessions")?).send().await;
        let created: SessionCreated = Self::decode("create_session", response).await?;
        Ok(created.session_id)
    }

    /// `GET /api/sessions/{id}`
    pub async fn fetch_session(&self, session_id: &str) -> Result<Vec<ChatMessage>, AdvisorError> {
        let mut url = self.endpoint("api/sessions")?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(session_id);
        let response = self.http.get(url).send().await;
        let transcript: SessionTranscript = Self::decode("fetch_session", response).await?;
        Ok(transcript.messages)
    }

    /// `POST /api/chat`
    pub async fn send_message(
        &self,
        session_id: Option<&str>,
        message: &str,
    ) -> Result<AdvisorReply, AdvisorError> {
        let body = ChatRequest { session_id, message };
        let response = self
            .http
            .post(self.endpoint("api/chat")?)
            .json(&body)
            .send()
            .await;
        Self::decode("send_message", response).await
    }

    /// `POST /api/clear-history`
    pub async fn clear_history(&self) -> Result<(), AdvisorError> {
        let response = self
            .http
            .post(self.endpoint("api/clear-history")?)
            .send()
            .await;
        Self::check("clear_history", response).map(|_| ())
    }

    fn endpoint(&self, path: &str) -> Result<Url, AdvisorError> {
        Ok(self.base_url.join(path)?)
    }

    fn check(
        endpoint: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<reqwest::Response, AdvisorError> {
        let result = match response {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(AdvisorError::Status(response.status().as_u16())),
            Err(e) => Err(AdvisorError::Http(e)),
        };
        if let Err(e) = &result {
            log_advisor_call(endpoint, false, Some(&e.to_string()));
        }
        result
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        endpoint: &str,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, AdvisorError> {
        let response = Self::check(endpoint, response)?;
        match response.json::<T>().await {
            Ok(value) => {
                log_advisor_call(endpoint, true, None);
                Ok(value)
            }
            Err(e) => {
                log_advisor_call(endpoint, false, Some(&e.to_string()));
                Err(AdvisorError::Http(e))
            }
        }
    }
}
