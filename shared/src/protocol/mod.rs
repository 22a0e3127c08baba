mod object_kinds;

pub use object_kinds::{ObjectKinds, ObjectSchema};

use crate::topic::{despawn_topic, property_topic, spawn_topic, TopicAddr};

/// Shared description of everything the bridge addresses: the collection
/// namespace plus the registered object types. Both roles should be
/// constructed from the same Protocol so their channel sets agree.
#[derive(Debug, Clone)]
pub struct Protocol {
    namespace: String,
    kinds: ObjectKinds,
    locked: bool,
}

impl Default for Protocol {
    fn default() -> Self {
        Self {
            namespace: "env".to_string(),
            kinds: ObjectKinds::new(),
            locked: false,
        }
    }
}

impl Protocol {
    pub fn builder() -> Self {
        Self::default()
    }

    pub fn namespace(&mut self, namespace: &str) -> &mut Self {
        self.check_lock();
        if namespace.is_empty() {
            panic!("Protocol namespace must be non-empty!");
        }
        self.namespace = namespace.to_string();
        self
    }

    pub fn add_object(&mut self, type_tag: &str, schema: ObjectSchema) -> &mut Self {
        self.check_lock();
        self.kinds.add_kind(type_tag, schema);
        self
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.locked = true;
    }

    pub fn check_lock(&self) {
        if self.locked {
            panic!("Protocol already locked!");
        }
    }

    pub fn build(&mut self) -> Self {
        let mut protocol = std::mem::take(self);
        protocol.locked = true;
        protocol
    }

    pub fn get_namespace(&self) -> &str {
        &self.namespace
    }

    pub fn kinds(&self) -> &ObjectKinds {
        &self.kinds
    }

    pub fn spawn_topic(&self, type_tag: &str) -> TopicAddr {
        spawn_topic(&self.namespace, type_tag)
    }

    pub fn despawn_topic(&self, type_tag: &str) -> TopicAddr {
        despawn_topic(&self.namespace, type_tag)
    }

    pub fn property_topic(&self, type_tag: &str, property: &str) -> TopicAddr {
        property_topic(&self.namespace, type_tag, property)
    }
}
