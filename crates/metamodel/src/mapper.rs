//! Memoizing type registry.
//!
//! Wraps a [`TypeFactory`] with a cache so each distinct runtime type is
//! classified at most once per mapper lifetime. Unknown classes are inferred
//! on first use, preferring an already-mapped ancestor as the prototype.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use auditkit_core::{ClassRef, MetamodelError, MetamodelResult, TypeRef};

use crate::definition::ClassDefinition;
use crate::object_type::{EntityType, ObjectType};
use crate::type_factory::{Prototype, TypeFactory};

/// Thread-safe, memoizing view over a [`TypeFactory`].
pub struct TypeMapper {
    factory: TypeFactory,
    mapped: RwLock<HashMap<ClassRef, ObjectType>>,
}

impl TypeMapper {
    pub fn new(factory: TypeFactory) -> Self {
        Self {
            factory,
            mapped: RwLock::new(HashMap::new()),
        }
    }

    pub fn arc(factory: TypeFactory) -> Arc<Self> {
        Arc::new(Self::new(factory))
    }

    /// Explicitly register a definition, classify it, and cache the result.
    ///
    /// Re-registering a class replaces its cached classification.
    pub fn register(&self, definition: &ClassDefinition) -> MetamodelResult<ObjectType> {
        let object_type = self.factory.create(definition)?;

        let mut mapped = self.mapped.write().unwrap();
        if let ObjectType::Entity(entity) = &object_type {
            self.map_id_property_type(&mut mapped, entity);
        }
        mapped.insert(definition.class().clone(), object_type.clone());
        Ok(object_type)
    }

    /// Resolve the runtime type of a type reference, classifying on first
    /// use.
    ///
    /// On a cache miss the descriptor's superclass chain is walked for an
    /// already-mapped prototype; the target spawns from it when one exists,
    /// and is inferred from its own markers otherwise.
    pub fn object_type(&self, target: &TypeRef) -> MetamodelResult<ObjectType> {
        {
            let mapped = self.mapped.read().unwrap();
            if let Some(found) = mapped.get(target.raw_class()) {
                return Ok(found.clone());
            }
        }

        let mut mapped = self.mapped.write().unwrap();
        // Re-check under the write lock so concurrent misses classify once.
        if let Some(found) = mapped.get(target.raw_class()) {
            return Ok(found.clone());
        }

        let prototype = Self::prototype_in(&mapped, target.raw_class());
        let inferred = self.factory.infer(target, prototype)?;
        if let ObjectType::Entity(entity) = &inferred {
            self.map_id_property_type(&mut mapped, entity);
        }
        mapped.insert(target.raw_class().clone(), inferred.clone());
        Ok(inferred)
    }

    /// Entity view of a resolved type.
    pub fn entity_type(&self, target: &TypeRef) -> MetamodelResult<EntityType> {
        match self.object_type(target)? {
            ObjectType::Entity(entity) => Ok(entity),
            other => Err(MetamodelError::not_an_entity(
                other.base_class().name(),
                other.kind().to_string(),
            )),
        }
    }

    pub fn is_mapped(&self, class: &ClassRef) -> bool {
        self.mapped.read().unwrap().contains_key(class)
    }

    /// Id-property types bypass classification entirely; cache them as plain
    /// Values so they are never re-examined as Entities or ValueObjects.
    fn map_id_property_type(
        &self,
        mapped: &mut HashMap<ClassRef, ObjectType>,
        entity: &EntityType,
    ) {
        let id_type = entity.id_property().property_type();
        if !mapped.contains_key(id_type.raw_class()) {
            let value = self.factory.infer_id_property_type_as_value(id_type);
            mapped.insert(id_type.raw_class().clone(), ObjectType::Value(value));
        }
    }

    fn prototype_in(mapped: &HashMap<ClassRef, ObjectType>, class: &ClassRef) -> Prototype {
        let mut current = class.descriptor().superclass_ref().cloned();
        while let Some(ancestor) = current {
            if let Some(found) = mapped.get(&ancestor) {
                return Prototype::Of(found.clone());
            }
            current = ancestor.descriptor().superclass_ref().cloned();
        }
        Prototype::None
    }
}
