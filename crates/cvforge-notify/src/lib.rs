//! Event publishing for downstream consumers (the notification bot).
//!
//! Publishing is fire-and-forget: a broker outage is logged and never
//! fails the request that produced the event.

pub mod notifier;
pub mod publisher;

pub use notifier::Notifier;
pub use publisher::{EventPublisher, NatsPublisher, NoopPublisher};
