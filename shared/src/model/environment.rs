use std::collections::HashMap;

use crate::codec::PropertyValue;
use crate::model::{ModelError, ObjectModel};
use crate::protocol::{ObjectKinds, ObjectSchema, Protocol};

/// One labeled object and its stored property values.
#[derive(Debug, Clone)]
pub struct Object {
    label: String,
    type_tag: String,
    values: HashMap<String, PropertyValue>,
}

impl Object {
    fn with_defaults(label: &str, type_tag: &str, schema: &ObjectSchema) -> Self {
        let values = schema
            .properties()
            .map(|(name, default)| (name.to_string(), *default))
            .collect();
        Self {
            label: label.to_string(),
            type_tag: type_tag.to_string(),
            values,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn value(&self, property: &str) -> Option<PropertyValue> {
        self.values.get(property).copied()
    }
}

/// Mapping from object label to Object, driven by a kind registry. One
/// instance serves as the authoritative model on the server side; a separate
/// instance serves as the client's optimistically-updated mirror. Entries are
/// added by creation and removed only by destruction.
#[derive(Debug, Clone)]
pub struct Environment {
    kinds: ObjectKinds,
    objects: HashMap<String, Object>,
}

impl Environment {
    pub fn new(protocol: &Protocol) -> Self {
        Self {
            kinds: protocol.kinds().clone(),
            objects: HashMap::new(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.objects.contains_key(label)
    }

    pub fn object(&self, label: &str) -> Option<&Object> {
        self.objects.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(|label| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectModel for Environment {
    fn type_tags(&self) -> Vec<String> {
        self.kinds.type_tags()
    }

    fn schema(&self, type_tag: &str) -> Result<&ObjectSchema, ModelError> {
        self.kinds
            .schema(type_tag)
            .ok_or_else(|| ModelError::UnsupportedType {
                type_tag: type_tag.to_string(),
            })
    }

    fn type_of(&self, label: &str) -> Result<String, ModelError> {
        self.objects
            .get(label)
            .map(|object| object.type_tag.clone())
            .ok_or_else(|| ModelError::UnknownObject {
                label: label.to_string(),
            })
    }

    fn create(&mut self, type_tag: &str, label: &str) -> Result<(), ModelError> {
        if self.objects.contains_key(label) {
            return Err(ModelError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        let schema = self.schema(type_tag)?;
        let object = Object::with_defaults(label, type_tag, schema);
        self.objects.insert(label.to_string(), object);
        Ok(())
    }

    fn destroy(&mut self, label: &str) -> Result<(), ModelError> {
        match self.objects.remove(label) {
            Some(_) => Ok(()),
            None => Err(ModelError::UnknownObject {
                label: label.to_string(),
            }),
        }
    }

    fn get_property(&self, label: &str, property: &str) -> Result<PropertyValue, ModelError> {
        let object = self
            .objects
            .get(label)
            .ok_or_else(|| ModelError::UnknownObject {
                label: label.to_string(),
            })?;
        object
            .value(property)
            .ok_or_else(|| ModelError::UnknownProperty {
                type_tag: object.type_tag.clone(),
                property: property.to_string(),
            })
    }

    fn set_property(
        &mut self,
        label: &str,
        property: &str,
        value: PropertyValue,
    ) -> Result<(), ModelError> {
        let object = self
            .objects
            .get_mut(label)
            .ok_or_else(|| ModelError::UnknownObject {
                label: label.to_string(),
            })?;
        match object.values.get_mut(property) {
            Some(current) => {
                if current.shape() != value.shape() {
                    return Err(ModelError::ShapeMismatch {
                        property: property.to_string(),
                        expected: current.shape(),
                        actual: value.shape(),
                    });
                }
                *current = value;
                Ok(())
            }
            None => Err(ModelError::UnknownProperty {
                type_tag: object.type_tag.clone(),
                property: property.to_string(),
            }),
        }
    }
}
