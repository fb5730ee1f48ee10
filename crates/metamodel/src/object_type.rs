//! Runtime type wrappers consumed by the comparison engine.
//!
//! [`ObjectType`] is a closed sum over exactly {Value, ValueObject, Entity,
//! Custom}; every resolved type belongs to exactly one variant. Spawning
//! (deriving a new type's classification from a resolved prototype) is split
//! into two capabilities: managed variants re-resolve their structure through
//! the scanner, non-managed variants copy their shape directly.

use core::fmt;

use serde::{Deserialize, Serialize};

use auditkit_core::{ClassRef, MetamodelResult};

use crate::domain_class::{EntityClass, Property, ValueClass, ValueObjectClass};
use crate::scanner::ClassScanner;

/// Discriminant-only mirror of [`ObjectType`], for events and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectTypeKind {
    Value,
    ValueObject,
    Entity,
    Custom,
}

impl fmt::Display for ObjectTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectTypeKind::Value => "Value",
            ObjectTypeKind::ValueObject => "ValueObject",
            ObjectTypeKind::Entity => "Entity",
            ObjectTypeKind::Custom => "Custom",
        };
        f.write_str(name)
    }
}

/// Atomic type compared by equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueType {
    base_class: ClassRef,
}

impl ValueType {
    pub(crate) fn new(value: ValueClass) -> Self {
        Self {
            base_class: value.class().clone(),
        }
    }

    /// Value type of a bare class, bypassing classification.
    pub fn of(base_class: ClassRef) -> Self {
        Self { base_class }
    }

    pub fn base_class(&self) -> &ClassRef {
        &self.base_class
    }
}

/// Opaque type: comparison is delegated to an embedder-supplied comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomType {
    base_class: ClassRef,
}

impl CustomType {
    pub fn of(base_class: ClassRef) -> Self {
        Self { base_class }
    }

    pub fn base_class(&self) -> &ClassRef {
        &self.base_class
    }
}

/// Type with no identity, compared by structural diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueObjectType {
    value_object: ValueObjectClass,
}

impl ValueObjectType {
    pub(crate) fn new(value_object: ValueObjectClass) -> Self {
        Self { value_object }
    }

    pub fn base_class(&self) -> &ClassRef {
        self.value_object.class()
    }

    pub fn properties(&self) -> &[Property] {
        self.value_object.properties()
    }
}

/// Type compared by identity first, then by field diff of the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityType {
    entity: EntityClass,
}

impl EntityType {
    pub(crate) fn new(entity: EntityClass) -> Self {
        Self { entity }
    }

    pub fn base_class(&self) -> &ClassRef {
        self.entity.class()
    }

    pub fn properties(&self) -> &[Property] {
        self.entity.properties()
    }

    pub fn id_property(&self) -> &Property {
        self.entity.id_property()
    }
}

/// Spawn capability of managed types: re-resolve structural metadata for a
/// new concrete class through the scanner.
pub trait SpawnManaged: Sized {
    fn spawn(&self, target: &ClassRef, scanner: &ClassScanner) -> MetamodelResult<Self>;
}

/// Spawn capability of non-managed types: copy the classification onto a new
/// concrete class directly, no scanner involved.
pub trait SpawnDirect: Sized {
    fn spawn(&self, target: &ClassRef) -> Self;
}

impl SpawnManaged for EntityType {
    fn spawn(&self, target: &ClassRef, scanner: &ClassScanner) -> MetamodelResult<Self> {
        Ok(Self {
            entity: scanner.spawn_entity(&self.entity, target)?,
        })
    }
}

impl SpawnManaged for ValueObjectType {
    fn spawn(&self, target: &ClassRef, scanner: &ClassScanner) -> MetamodelResult<Self> {
        Ok(Self {
            value_object: scanner.spawn_value_object(target),
        })
    }
}

impl SpawnDirect for ValueType {
    fn spawn(&self, target: &ClassRef) -> Self {
        Self {
            base_class: target.clone(),
        }
    }
}

impl SpawnDirect for CustomType {
    fn spawn(&self, target: &ClassRef) -> Self {
        Self {
            base_class: target.clone(),
        }
    }
}

/// The resolved runtime type of one class: exactly one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    Value(ValueType),
    ValueObject(ValueObjectType),
    Entity(EntityType),
    Custom(CustomType),
}

impl ObjectType {
    pub fn kind(&self) -> ObjectTypeKind {
        match self {
            ObjectType::Value(_) => ObjectTypeKind::Value,
            ObjectType::ValueObject(_) => ObjectTypeKind::ValueObject,
            ObjectType::Entity(_) => ObjectTypeKind::Entity,
            ObjectType::Custom(_) => ObjectTypeKind::Custom,
        }
    }

    pub fn base_class(&self) -> &ClassRef {
        match self {
            ObjectType::Value(value) => value.base_class(),
            ObjectType::ValueObject(value_object) => value_object.base_class(),
            ObjectType::Entity(entity) => entity.base_class(),
            ObjectType::Custom(custom) => custom.base_class(),
        }
    }

    /// Whether this type carries scanned structure (Entity or ValueObject).
    pub fn is_managed(&self) -> bool {
        matches!(self, ObjectType::Entity(_) | ObjectType::ValueObject(_))
    }
}
