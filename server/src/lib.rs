//! # Envlink Server
//! Owns the authoritative object environment, subscribes once to every
//! command channel the model declares, and applies inbound mutations.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use envlink_shared::{
        despawn_topic, property_topic, spawn_topic, ByteReader, ByteWriter, CodecError,
        DespawnMessage, Environment, ModelError, Object, ObjectKinds, ObjectModel, ObjectSchema,
        PropertyValue, Protocol, Shape, SpawnMessage, TopicAddr, Transport, TransportError,
        UpdateMessage,
    };
}

mod events;
mod server;

pub use events::{Events, ServerEvent};
pub use server::Server;
