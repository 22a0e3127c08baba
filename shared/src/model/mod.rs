mod environment;
mod error;

pub use environment::{Environment, Object};
pub use error::ModelError;

use crate::codec::PropertyValue;
use crate::protocol::ObjectSchema;

/// Capability set the bridge requires of an object model. The server wraps
/// the authoritative model; the client wraps a private mirror. Anything that
/// exposes labeled, schema-declared properties can sit behind either role.
pub trait ObjectModel {
    /// Every type tag this model can instantiate.
    fn type_tags(&self) -> Vec<String>;

    /// Declared property schema of one type.
    fn schema(&self, type_tag: &str) -> Result<&ObjectSchema, ModelError>;

    /// The type tag of an existing object.
    fn type_of(&self, label: &str) -> Result<String, ModelError>;

    /// Construct an object with the type's default property values and
    /// insert it under `label`.
    fn create(&mut self, type_tag: &str, label: &str) -> Result<(), ModelError>;

    /// Remove the object labeled `label`.
    fn destroy(&mut self, label: &str) -> Result<(), ModelError>;

    fn get_property(&self, label: &str, property: &str) -> Result<PropertyValue, ModelError>;

    /// Replace the stored value in place. The bridge performs no range
    /// validation; bounds are the model's own concern.
    fn set_property(
        &mut self,
        label: &str,
        property: &str,
        value: PropertyValue,
    ) -> Result<(), ModelError>;
}
