use std::fmt;

/// Reserved final segment of a type's destruction channel. The protocol
/// registry rejects properties with this name, so the three address families
/// below can never collide.
pub const DESTROY_SEGMENT: &str = "destroy";

/// Hierarchical address of one publish/subscribe channel.
///
/// Addresses are derived from the topic functions in this module and treated
/// as opaque keys everywhere else; transports route by equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicAddr(String);

impl TopicAddr {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Channel on which creation of `type_tag` objects is announced.
pub fn spawn_topic(namespace: &str, type_tag: &str) -> TopicAddr {
    TopicAddr(format!("{}/{}", namespace, type_tag))
}

/// Channel on which destruction of `type_tag` objects is announced.
pub fn despawn_topic(namespace: &str, type_tag: &str) -> TopicAddr {
    TopicAddr(format!("{}/{}/{}", namespace, type_tag, DESTROY_SEGMENT))
}

/// Channel carrying updates for one property of one object type. The object's
/// label travels in the message envelope, not the address.
pub fn property_topic(namespace: &str, type_tag: &str, property: &str) -> TopicAddr {
    TopicAddr(format!("{}/{}/{}", namespace, type_tag, property))
}
