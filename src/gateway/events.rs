use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub(crate) trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
