//! Metamodel error model.

use thiserror::Error;

/// Result type used across the metamodel.
pub type MetamodelResult<T> = Result<T, MetamodelError>;

/// Metamodel-level error.
///
/// Keep this focused on deterministic classification/configuration failures.
/// Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetamodelError {
    /// A descriptor or definition failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An explicit id-property override named a property the class does not
    /// declare (or declares as ignored).
    #[error("unknown property `{property}` on {class}")]
    UnknownProperty { class: String, property: String },

    /// A class was declared or inferred as an Entity but has no id property.
    #[error("no id property found on {class}")]
    MissingIdProperty { class: String },

    /// A class was required to be an Entity but resolved to something else.
    #[error("{class} classifies as {actual}, not as an Entity")]
    NotAnEntity { class: String, actual: String },
}

impl MetamodelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_property(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            class: class.into(),
            property: property.into(),
        }
    }

    pub fn missing_id_property(class: impl Into<String>) -> Self {
        Self::MissingIdProperty {
            class: class.into(),
        }
    }

    pub fn not_an_entity(class: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::NotAnEntity {
            class: class.into(),
            actual: actual.into(),
        }
    }
}
