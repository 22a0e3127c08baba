use crate::codec::{PropertyValue, Shape};
use crate::topic::DESTROY_SEGMENT;

fn check_segment(name: &str) {
    if name.is_empty() {
        panic!("channel segments must be non-empty!");
    }
    if name.contains('/') {
        panic!("channel segment '{}' must not contain '/'!", name);
    }
}

/// Declared properties of one object type, with the default value each takes
/// at creation time. A property's shape is its default's shape, so the two
/// can never disagree.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    properties: Vec<(String, PropertyValue)>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a property. Schema mistakes are programmer error and panic at
    /// registration; runtime paths never reach a malformed schema.
    pub fn property(mut self, name: &str, default: PropertyValue) -> Self {
        check_segment(name);
        if name == DESTROY_SEGMENT {
            panic!(
                "property name '{}' is reserved for the destruction channel!",
                name
            );
        }
        if self.properties.iter().any(|(existing, _)| existing == name) {
            panic!("property '{}' declared twice!", name);
        }
        self.properties.push((name.to_string(), default));
        self
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|(name, default)| (name.as_str(), default))
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.iter().any(|(name, _)| name == property)
    }

    pub fn shape_of(&self, property: &str) -> Option<Shape> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, default)| default.shape())
    }

    pub fn default_of(&self, property: &str) -> Option<PropertyValue> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, default)| *default)
    }
}

/// Registry of every object type the bridge knows how to address.
#[derive(Debug, Clone, Default)]
pub struct ObjectKinds {
    kinds: Vec<(String, ObjectSchema)>,
}

impl ObjectKinds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_kind(&mut self, type_tag: &str, schema: ObjectSchema) {
        check_segment(type_tag);
        if type_tag == DESTROY_SEGMENT {
            panic!("type tag '{}' is reserved!", type_tag);
        }
        if self.kinds.iter().any(|(tag, _)| tag == type_tag) {
            panic!("object type '{}' registered twice!", type_tag);
        }
        self.kinds.push((type_tag.to_string(), schema));
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = (&str, &ObjectSchema)> {
        self.kinds
            .iter()
            .map(|(tag, schema)| (tag.as_str(), schema))
    }

    pub fn schema(&self, type_tag: &str) -> Option<&ObjectSchema> {
        self.kinds
            .iter()
            .find(|(tag, _)| tag == type_tag)
            .map(|(_, schema)| schema)
    }

    pub fn type_tags(&self) -> Vec<String> {
        self.kinds.iter().map(|(tag, _)| tag.clone()).collect()
    }
}
