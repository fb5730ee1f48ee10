//! `auditkit-metamodel` — type classification for the audit engine.
//!
//! Host applications describe their classes as descriptors
//! ([`auditkit_core::ClassDescriptor`]); this crate resolves each one into
//! exactly one runtime type variant ([`ObjectType::Value`],
//! [`ObjectType::ValueObject`], [`ObjectType::Entity`] or
//! [`ObjectType::Custom`]), which the comparison engine consults before
//! diffing or persisting an object.
//!
//! Classification happens one of three ways:
//! - explicitly, from a user-supplied [`ClassDefinition`];
//! - by spawning from a previously resolved prototype ([`Prototype::Of`]);
//! - automatically, from the class's own declared markers.

pub mod definition;
pub mod domain_class;
pub mod mapper;
pub mod object_type;
pub mod observer;
pub mod scanner;
pub mod type_factory;

mod integration_tests;

pub use definition::{
    ClassDefinition, ClassifiedDefinition, CustomDefinition, EntityDefinition, ValueDefinition,
    ValueObjectDefinition,
};
pub use domain_class::{
    DomainClass, EntityClass, ManagedClass, Property, ValueClass, ValueObjectClass,
};
pub use mapper::TypeMapper;
pub use object_type::{
    CustomType, EntityType, ObjectType, ObjectTypeKind, SpawnDirect, SpawnManaged, ValueObjectType,
    ValueType,
};
pub use observer::{
    InferenceEvent, InferenceObserver, InferenceSource, RecordingObserver, TracingObserver,
};
pub use scanner::ClassScanner;
pub use type_factory::{Prototype, TypeFactory};
