//! Best-effort publisher for submission events.
//!
//! After a submission commits, its event is posted to the configured topic
//! endpoint. Delivery is fire-and-forget: no retry, no backoff, and a failure
//! never affects the client-visible response. Whatever guarantees the
//! downstream pipeline has come from its transport, not from here.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// Payload handed to the downstream pipeline:
/// `{ "url": ..., "user": { "email": ... } }`.
#[derive(Debug, Serialize)]
pub struct SubmissionEvent {
    pub url: String,
    pub user: EventUser,
}

#[derive(Debug, Serialize)]
pub struct EventUser {
    pub email: String,
}

impl SubmissionEvent {
    pub fn new(url: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: EventUser {
                email: email.into(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("topic endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Clone)]
pub struct EventPublisher {
    client: Client,
    topic_url: Option<String>,
}

impl EventPublisher {
    pub fn new(topic_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            topic_url,
        }
    }

    /// Posts the event to the topic endpoint. With no endpoint configured the
    /// event is dropped with a log line, which keeps local development free
    /// of a running pipeline.
    pub async fn publish(&self, event: &SubmissionEvent) -> Result<(), PublishError> {
        let Some(topic_url) = &self.topic_url else {
            tracing::warn!("TOPIC_URL not configured; dropping submission event");
            return Ok(());
        };

        let response = self.client.post(topic_url).json(event).send().await?;
        if !response.status().is_success() {
            return Err(PublishError::Status(response.status()));
        }

        tracing::info!("submission event published");
        Ok(())
    }
}
