use log::debug;
use thiserror::Error;

use envlink_shared::{
    despawn_topic, property_topic, spawn_topic, DespawnMessage, ModelError, ObjectModel,
    PropertyValue, Protocol, SpawnMessage, Transport, TransportError, UpdateMessage,
};

/// Errors surfaced synchronously by direct Client calls. Failures on the
/// server's inbound path never propagate back here; the minimal protocol has
/// no back-channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// The mirroring side of the bridge. Presents the same create/get/set
/// surface as a local model; calling code cannot distinguish it from one
/// except for latency and eventual-consistency semantics.
///
/// Every mutation lands in the private mirror first, then is published.
/// Reads come entirely from the mirror and never wait on the network. The
/// mirror is a possibly-stale view of the authoritative environment, never
/// the reverse.
pub struct Client<M: ObjectModel> {
    namespace: String,
    mirror: M,
    transport: Box<dyn Transport>,
}

impl<M: ObjectModel> Client<M> {
    /// The minimal protocol subscribes to nothing on the client, so
    /// construction only records the namespace and takes ownership of the
    /// transport handle.
    pub fn new(protocol: &Protocol, mirror: M, transport: Box<dyn Transport>) -> Self {
        Self {
            namespace: protocol.get_namespace().to_string(),
            mirror,
            transport,
        }
    }

    /// Create the object in the mirror, then announce it on the type's
    /// creation channel. Announcing a label that already exists re-announces
    /// it; the server treats the repeat as a no-op.
    pub fn initialize_object(&mut self, type_tag: &str, label: &str) -> Result<(), ClientError> {
        match self.mirror.create(type_tag, label) {
            Ok(()) => {}
            Err(ModelError::DuplicateLabel { .. }) => {
                debug!("re-announcing existing object '{}'", label);
            }
            Err(error) => return Err(error.into()),
        }
        let topic = spawn_topic(&self.namespace, type_tag);
        self.transport
            .publish(&topic, SpawnMessage::new(label).ser())?;
        Ok(())
    }

    /// Remove the object from the mirror, then announce the removal.
    pub fn destroy_object(&mut self, label: &str) -> Result<(), ClientError> {
        let type_tag = self.mirror.type_of(label)?;
        self.mirror.destroy(label)?;
        let topic = despawn_topic(&self.namespace, &type_tag);
        self.transport
            .publish(&topic, DespawnMessage::new(label).ser())?;
        Ok(())
    }

    /// Store the value in the mirror, then publish it on the property's
    /// channel. The publish is fire-and-forget; there is no acknowledgment.
    pub fn set_property(
        &mut self,
        label: &str,
        property: &str,
        value: PropertyValue,
    ) -> Result<(), ClientError> {
        self.mirror.set_property(label, property, value)?;
        let type_tag = self.mirror.type_of(label)?;
        let topic = property_topic(&self.namespace, &type_tag, property);
        self.transport
            .publish(&topic, UpdateMessage::new(label, value).ser())?;
        Ok(())
    }

    /// Served entirely from the mirror; never blocks on the transport.
    pub fn get_property(&self, label: &str, property: &str) -> Result<PropertyValue, ClientError> {
        Ok(self.mirror.get_property(label, property)?)
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    /// One transport processing step. The client has no inbound
    /// subscriptions in the minimal protocol; this only lets the transport
    /// make progress, mirroring the server's caller-driven cadence.
    pub fn pump(&mut self) {
        let _ = self.transport.pump();
    }
}
