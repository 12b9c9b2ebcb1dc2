use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;

pub(crate) fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        #[cfg(test)]
        GatewayPublisherVia::Memory => {
            Box::new(crate::gateway::memory::publisher::MemoryPublisher::new())
        }
    }
}
