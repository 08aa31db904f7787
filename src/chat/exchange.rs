// ABOUTME: Chat exchange with the remote assistant endpoint — wire types and the HTTP client.
// ABOUTME: One POST per user message carrying the text plus a trailing window of history.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chat::message::{Message, Sender};

/// Number of prior messages sent along as conversational context.
pub const HISTORY_WINDOW: usize = 10;

/// Errors from a single exchange with the assistant endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One prior message as sent in `conversation_history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Message> for HistoryEntry {
    fn from(msg: &Message) -> Self {
        Self {
            sender: msg.sender,
            text: msg.text.clone(),
            timestamp: msg.timestamp,
        }
    }
}

/// Request body for the chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<HistoryEntry>,
}

/// Response body from the chat endpoint. `response` may be missing or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
}

/// Sends a user message to the assistant and returns its reply.
#[async_trait]
pub trait ExchangeClient: Send + Sync {
    /// Send the message with its history window. `Ok(None)` means the server
    /// answered successfully but without a reply.
    async fn send(&self, request: &ChatRequest) -> Result<Option<String>, ExchangeError>;
}

/// `ExchangeClient` that POSTs JSON to a fixed URL.
pub struct HttpExchangeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpExchangeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ExchangeClient for HttpExchangeClient {
    async fn send(&self, request: &ChatRequest) -> Result<Option<String>, ExchangeError> {
        let res = self.http.post(&self.endpoint).json(request).send().await?;

        let status = res.status();
        debug!(%status, endpoint = %self.endpoint, "chat endpoint responded");
        if !status.is_success() {
            return Err(ExchangeError::Status(status));
        }

        let body = res.bytes().await?;
        let parsed: ChatResponse = serde_json::from_slice(&body)?;
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn request_serializes_wire_shape() {
        let request = ChatRequest {
            message: "I need shelter".to_string(),
            conversation_history: vec![HistoryEntry {
                sender: Sender::Assistant,
                text: "Hello!".to_string(),
                timestamp: Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap(),
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "I need shelter",
                "conversation_history": [
                    {"sender": "assistant", "text": "Hello!", "timestamp": "2025-05-01T09:00:00Z"}
                ]
            })
        );
    }

    #[test]
    fn history_entry_drops_id() {
        let msg = Message {
            id: "42".to_string(),
            text: "hi".to_string(),
            sender: Sender::User,
            timestamp: Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(HistoryEntry::from(&msg)).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["text"], "hi");
    }

    #[test]
    fn response_field_is_optional() {
        let full: ChatResponse = serde_json::from_str(r#"{"response":"ok"}"#).unwrap();
        assert_eq!(full.response.as_deref(), Some("ok"));

        let missing: ChatResponse = serde_json::from_str(r#"{"other":1}"#).unwrap();
        assert!(missing.response.is_none());

        let null: ChatResponse = serde_json::from_str(r#"{"response":null}"#).unwrap();
        assert!(null.response.is_none());
    }

    #[test]
    fn status_error_mentions_code() {
        let err = ExchangeError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));
    }
}
