//! Typed event emission on top of the raw publisher.

use std::sync::Arc;

use cvforge_core::config::BrokerConfig;
use cvforge_core::events::{ResumeCreatedEvent, VerificationCodeEvent};
use cvforge_core::AppResult;
use serde::Serialize;

use crate::publisher::{EventPublisher, NatsPublisher, NoopPublisher};

/// Emits domain events on well-known subjects.
///
/// All emit methods swallow broker failures after logging them; the
/// calling request has already succeeded by the time an event fires.
#[derive(Clone)]
pub struct Notifier {
    publisher: Arc<dyn EventPublisher>,
    subject_prefix: String,
}

impl Notifier {
    /// Builds a notifier from configuration, connecting to NATS when
    /// the broker is enabled and falling back to a no-op otherwise.
    pub async fn from_config(config: &BrokerConfig) -> AppResult<Self> {
        let publisher: Arc<dyn EventPublisher> = if config.enabled {
            Arc::new(NatsPublisher::connect(&config.url).await?)
        } else {
            tracing::info!("event broker disabled");
            Arc::new(NoopPublisher)
        };
        Ok(Self::new(publisher, &config.subject_prefix))
    }

    pub fn new(publisher: Arc<dyn EventPublisher>, subject_prefix: &str) -> Self {
        Self {
            publisher,
            subject_prefix: subject_prefix.to_string(),
        }
    }

    /// Announces a freshly generated resume.
    pub async fn resume_created(&self, event: &ResumeCreatedEvent) {
        self.emit("resume.created", event).await;
    }

    /// Hands a verification code to the notification bot for delivery.
    pub async fn verification_code(&self, event: &VerificationCodeEvent) {
        self.emit("auth.verification", event).await;
    }

    async fn emit<T: Serialize>(&self, topic: &str, event: &T) {
        let subject = format!("{}.{topic}", self.subject_prefix);
        let payload = match serde_json::to_vec(event) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(subject = %subject, error = %err, "failed to serialize event");
                return;
            }
        };
        if let Err(err) = self.publisher.publish(&subject, payload).await {
            tracing::warn!(subject = %subject, error = %err, "failed to publish event");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use cvforge_core::events::VerificationPurpose;
    use uuid::Uuid;

    use super::*;

    #[derive(Default)]
    struct RecordingPublisher {
        sent: Mutex<Vec<(String, Vec<u8>)>>,
    }

    #[async_trait]
    impl EventPublisher for RecordingPublisher {
        async fn publish(&self, subject: &str, payload: Vec<u8>) -> AppResult<()> {
            self.sent.lock().unwrap().push((subject.to_string(), payload));
            Ok(())
        }
    }

    #[derive(Default)]
    struct FailingPublisher;

    #[async_trait]
    impl EventPublisher for FailingPublisher {
        async fn publish(&self, _subject: &str, _payload: Vec<u8>) -> AppResult<()> {
            Err(cvforge_core::AppError::broker("connection reset"))
        }
    }

    #[tokio::test]
    async fn resume_event_goes_to_prefixed_subject() {
        let publisher = Arc::new(RecordingPublisher::default());
        let notifier = Notifier::new(publisher.clone(), "cvforge");

        let event = ResumeCreatedEvent {
            resume_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone_number: "+99890".into(),
            job_title: "Engineer".into(),
            resume_url: "http://localhost:9000/resumes/JaneDoe.pdf".into(),
            links: vec!["https://github.com/jane".into()],
            city: "Tashkent".into(),
            salary: "3000".into(),
            summary: "".into(),
            created_at: Utc::now(),
        };
        notifier.resume_created(&event).await;

        let sent = publisher.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "cvforge.resume.created");
        let value: serde_json::Value = serde_json::from_slice(&sent[0].1).unwrap();
        assert_eq!(value["full_name"], "Jane Doe");
    }

    #[tokio::test]
    async fn publish_failure_does_not_propagate() {
        let notifier = Notifier::new(Arc::new(FailingPublisher), "cvforge");
        let event = VerificationCodeEvent {
            email: "jane@example.com".into(),
            code: "042137".into(),
            purpose: VerificationPurpose::Signup,
            expires_at: Utc::now(),
        };
        // Must not panic or surface the error.
        notifier.verification_code(&event).await;
    }
}
