//! # Envlink Shared
//! Common functionality shared between envlink-server & envlink-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod codec;
mod messages;
mod model;
mod protocol;
mod topic;
mod transport;

pub use codec::{ByteReader, ByteWriter, CodecError, PropertyValue, Shape};
pub use messages::{DespawnMessage, SpawnMessage, UpdateMessage};
pub use model::{Environment, ModelError, Object, ObjectModel};
pub use protocol::{ObjectKinds, ObjectSchema, Protocol};
pub use topic::{despawn_topic, property_topic, spawn_topic, TopicAddr, DESTROY_SEGMENT};
pub use transport::{Transport, TransportError};
