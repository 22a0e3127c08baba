use thiserror::Error;

use crate::codec::Shape;

/// Errors that can occur during object-model operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An object with this label already exists in the environment
    #[error("object labeled '{label}' already exists")]
    DuplicateLabel { label: String },

    /// No object with this label exists in the environment
    #[error("no object labeled '{label}'")]
    UnknownObject { label: String },

    /// The object's type does not declare this property
    #[error("type '{type_tag}' does not declare property '{property}'")]
    UnknownProperty {
        type_tag: String,
        property: String,
    },

    /// The type tag is not registered with this model
    #[error("object type '{type_tag}' is not supported by this model")]
    UnsupportedType { type_tag: String },

    /// The supplied value's shape differs from the property's declared shape
    #[error("property '{property}' expects a {expected:?} value, got {actual:?}")]
    ShapeMismatch {
        property: String,
        expected: Shape,
        actual: Shape,
    },
}
