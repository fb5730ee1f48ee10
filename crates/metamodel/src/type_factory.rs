//! Type factory.
//!
//! Classifies definitions and runtime type references into [`ObjectType`]s,
//! using either an explicit definition, a previously resolved prototype, or
//! the target's own declared markers. Every inference decision is reported
//! through the injected [`InferenceObserver`].

use std::sync::Arc;

use auditkit_core::{ClassRef, MetamodelError, MetamodelResult, TypeRef};

use crate::definition::ClassDefinition;
use crate::domain_class::DomainClass;
use crate::object_type::{
    CustomType, EntityType, ObjectType, ObjectTypeKind, SpawnDirect, SpawnManaged, ValueObjectType,
    ValueType,
};
use crate::observer::{InferenceEvent, InferenceObserver, InferenceSource, TracingObserver};
use crate::scanner::ClassScanner;

/// A previously resolved type to use as a classification template.
///
/// The two cases are mutually exclusive inference paths: with a prototype the
/// classification shape is copied onto the target, without one the target's
/// own markers decide.
#[derive(Debug, Clone)]
pub enum Prototype {
    /// Classify from the target's own declared markers.
    None,
    /// Copy the classification shape of an already-resolved type.
    Of(ObjectType),
}

impl From<ObjectType> for Prototype {
    fn from(object_type: ObjectType) -> Self {
        Self::Of(object_type)
    }
}

/// Classifies runtime type descriptors into exactly one [`ObjectType`]
/// variant.
///
/// Stateless apart from the injected collaborators; safe to share behind an
/// `Arc`.
pub struct TypeFactory {
    scanner: ClassScanner,
    observer: Arc<dyn InferenceObserver>,
}

impl TypeFactory {
    pub fn new(scanner: ClassScanner) -> Self {
        Self::with_observer(scanner, Arc::new(TracingObserver))
    }

    pub fn with_observer(scanner: ClassScanner, observer: Arc<dyn InferenceObserver>) -> Self {
        Self { scanner, observer }
    }

    /// Resolve an explicit definition into its runtime type.
    ///
    /// Custom definitions are an opaque passthrough: the result wraps exactly
    /// the definition's class and the scanner is never consulted.
    pub fn create(&self, definition: &ClassDefinition) -> MetamodelResult<ObjectType> {
        match definition {
            ClassDefinition::Custom(def) => {
                Ok(ObjectType::Custom(CustomType::of(def.class().clone())))
            }
            ClassDefinition::Classified(def) => {
                Ok(from_domain_class(self.scanner.create(def)?))
            }
        }
    }

    /// Force classification as an Entity.
    ///
    /// A class that does not actually classify as an Entity produces an
    /// error, never a wrong-shaped type.
    pub fn create_entity(&self, class: ClassRef) -> MetamodelResult<EntityType> {
        let definition = ClassDefinition::entity(class);
        match self.create(&definition)? {
            ObjectType::Entity(entity) => Ok(entity),
            other => Err(MetamodelError::not_an_entity(
                other.base_class().name(),
                other.kind().to_string(),
            )),
        }
    }

    /// Infer the runtime type of a type reference.
    ///
    /// With a prototype the shape is spawned onto the target's concrete class
    /// and marker inference is never consulted; without one the target's own
    /// markers decide. Exactly one inference event is emitted either way.
    pub fn infer(&self, target: &TypeRef, prototype: Prototype) -> MetamodelResult<ObjectType> {
        match prototype {
            Prototype::Of(proto) => {
                let spawned = self.spawn_from_prototype(target, &proto)?;
                self.notify(&spawned, InferenceSource::Prototype(proto.kind()));
                Ok(spawned)
            }
            Prototype::None => {
                let inferred =
                    from_domain_class(self.scanner.infer_from_markers(target.raw_class())?);
                self.notify(&inferred, InferenceSource::Markers);
                Ok(inferred)
            }
        }
    }

    /// Resolve the type of an identifier property.
    ///
    /// Id-property types are always plain Values regardless of their own
    /// markers; identifier fields never recurse into Entity/ValueObject
    /// classification.
    pub fn infer_id_property_type_as_value(&self, target: &TypeRef) -> ValueType {
        let value = ValueType::of(target.raw_class().clone());
        self.observer.type_inferred(&InferenceEvent::new(
            value.base_class(),
            ObjectTypeKind::Value,
            InferenceSource::IdPropertyPolicy,
        ));
        value
    }

    fn spawn_from_prototype(
        &self,
        target: &TypeRef,
        prototype: &ObjectType,
    ) -> MetamodelResult<ObjectType> {
        let class = target.raw_class();
        match prototype {
            ObjectType::Entity(proto) => Ok(ObjectType::Entity(proto.spawn(class, &self.scanner)?)),
            ObjectType::ValueObject(proto) => {
                Ok(ObjectType::ValueObject(proto.spawn(class, &self.scanner)?))
            }
            ObjectType::Value(proto) => Ok(ObjectType::Value(proto.spawn(class))),
            ObjectType::Custom(proto) => Ok(ObjectType::Custom(proto.spawn(class))),
        }
    }

    fn notify(&self, object_type: &ObjectType, source: InferenceSource) {
        self.observer.type_inferred(&InferenceEvent::new(
            object_type.base_class(),
            object_type.kind(),
            source,
        ));
    }
}

/// Total mapping from resolved domain classes to runtime types.
fn from_domain_class(domain_class: DomainClass) -> ObjectType {
    match domain_class {
        DomainClass::Value(value) => ObjectType::Value(ValueType::new(value)),
        DomainClass::ValueObject(value_object) => {
            ObjectType::ValueObject(ValueObjectType::new(value_object))
        }
        DomainClass::Entity(entity) => ObjectType::Entity(EntityType::new(entity)),
    }
}
