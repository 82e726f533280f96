//! Notification collaborator port.
//!
//! The service fires a notification after a successful creation and moves on:
//! delivery failures are logged, never propagated.

use std::sync::Mutex;

use userdesk_core::DomainResult;

/// Message templates the service knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTemplate {
    Welcome,
}

impl MessageTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
        }
    }
}

/// Port for the external notification collaborator.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, recipient: &str, template: MessageTemplate) -> DomainResult<()>;
}

/// Notifier that only logs. Stands in for a real delivery channel in dev.
#[derive(Debug, Default)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl Notifier for TracingNotifier {
    async fn send(&self, recipient: &str, template: MessageTemplate) -> DomainResult<()> {
        tracing::info!(recipient, template = template.as_str(), "notification sent");
        Ok(())
    }
}

/// Test notifier that records every send for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, MessageTemplate)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, MessageTemplate)> {
        self.sent.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, recipient: &str, template: MessageTemplate) -> DomainResult<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((recipient.to_string(), template));
        }
        Ok(())
    }
}

/// Test notifier whose sends always fail; creation must still succeed.
#[derive(Debug, Default)]
pub struct FailingNotifier;

#[async_trait::async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _recipient: &str, _template: MessageTemplate) -> DomainResult<()> {
        Err(userdesk_core::DomainError::storage("delivery channel down"))
    }
}
