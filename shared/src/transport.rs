use thiserror::Error;

use crate::topic::TopicAddr;

/// Errors surfaced by a transport implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The transport can no longer carry messages
    #[error("transport is closed")]
    Closed,

    /// A publish could not be handed to the transport
    #[error("failed to publish on '{topic}'")]
    SendFailed { topic: String },

    /// A subscription could not be registered
    #[error("failed to subscribe to '{topic}'")]
    SubscribeFailed { topic: String },
}

/// Handle onto the external publish/subscribe middleware. The bridge
/// receives an implementation at construction and never manages its
/// lifetime; start/stop of the transport node belongs to the caller.
///
/// Delivery is FIFO per topic from a single publisher. Nothing is assumed
/// about ordering across topics.
pub trait Transport {
    /// Hand one payload to the transport. Fire-and-forget: returns as soon
    /// as the transport has accepted the message, with no delivery wait.
    fn publish(&mut self, topic: &TopicAddr, payload: Vec<u8>) -> Result<(), TransportError>;

    /// Register interest in a topic. Subsequent publishes on it are buffered
    /// until the next `pump`.
    fn subscribe(&mut self, topic: &TopicAddr) -> Result<(), TransportError>;

    /// Dequeue at most the currently-buffered inbound messages, in delivery
    /// order. Never blocks; suspension cadence is the caller's concern.
    fn pump(&mut self) -> Vec<(TopicAddr, Vec<u8>)>;
}
