use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher buffers events in process; clones share the same buffer
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_buffer_events_across_clones() {
        let publisher = MemoryPublisher::new();
        let handle = publisher.clone();
        publisher.publish(&DomainEvent::added("books", "1", &HashMap::new(), &"1").expect("build event"))
            .await.expect("should publish");
        publisher.publish(&DomainEvent::deleted("books", "1", &HashMap::new(), &"1").expect("build event"))
            .await.expect("should publish");
        let kinds: Vec<DomainEventType> = handle.events().await.iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::Added, DomainEventType::Deleted], kinds);
    }
}
