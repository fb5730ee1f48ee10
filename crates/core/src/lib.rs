//! `auditkit-core` — descriptor foundation for the audit metamodel.
//!
//! This crate contains **pure domain** primitives (no classification logic):
//! the class-descriptor data model host applications declare for the classes
//! they want audited, and the error model shared across the metamodel.

pub mod descriptor;
pub mod error;

pub use descriptor::{ClassDescriptor, ClassMarker, ClassRef, PropertyDescriptor, TypeRef};
pub use error::{MetamodelError, MetamodelResult};
