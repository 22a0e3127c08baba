//! # Envlink Client
//! Maintains an optimistically-updated local mirror of a remote object
//! environment and forwards local mutations to the authoritative server.

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

mod client;

pub use client::{Client, ClientError};
