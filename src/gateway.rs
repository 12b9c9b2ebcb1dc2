use serde::{Deserialize, Serialize};

pub mod events;
pub mod logs;
#[cfg(test)]
pub mod memory;
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum GatewayPublisherVia {
    Logs,
    #[cfg(test)]
    Memory,
}
