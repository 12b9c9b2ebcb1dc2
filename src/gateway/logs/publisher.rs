use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes domain events to the tracing subscriber as an audit trail
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        tracing::info!(event_id = %event.event_id, kind = ?event.kind, key = %event.key, "{}", json);
        Ok(())
    }
}
