//! Broker transport behind the [`EventPublisher`] trait.

use async_trait::async_trait;
use cvforge_core::{AppError, AppResult};

/// Publishes a raw payload on a subject.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> AppResult<()>;
}

/// NATS-backed publisher.
#[derive(Clone)]
pub struct NatsPublisher {
    client: async_nats::Client,
}

impl NatsPublisher {
    /// Connects to the broker at the given URL.
    pub async fn connect(url: &str) -> AppResult<Self> {
        let client = async_nats::connect(url)
            .await
            .map_err(|err| AppError::broker(format!("failed to connect to NATS: {err}")))?;
        tracing::info!(url = %url, "connected to NATS");
        Ok(Self { client })
    }
}

#[async_trait]
impl EventPublisher for NatsPublisher {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> AppResult<()> {
        self.client
            .publish(subject.to_string(), payload.into())
            .await
            .map_err(|err| AppError::broker(format!("publish on '{subject}' failed: {err}")))
    }
}

/// Publisher used when the broker is disabled in configuration.
///
/// Accepts every event and drops it with a debug log.
#[derive(Debug, Clone, Default)]
pub struct NoopPublisher;

#[async_trait]
impl EventPublisher for NoopPublisher {
    async fn publish(&self, subject: &str, _payload: Vec<u8>) -> AppResult<()> {
        tracing::debug!(subject = %subject, "broker disabled, event dropped");
        Ok(())
    }
}
