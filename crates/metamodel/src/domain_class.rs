//! Resolved domain classes: the scanner's output.
//!
//! A [`DomainClass`] is the classification of one class, a closed sum over
//! exactly {Value, ValueObject, Entity}. The two managed variants carry the
//! scanned structural shape; a Value is atomic and never decomposed.

use serde::{Deserialize, Serialize};

use auditkit_core::{ClassRef, TypeRef};

/// A scanned, non-ignored property of a managed class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    name: String,
    property_type: TypeRef,
}

impl Property {
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            property_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property_type(&self) -> &TypeRef {
        &self.property_type
    }
}

/// Structural shape shared by the managed classifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedClass {
    class: ClassRef,
    properties: Vec<Property>,
}

impl ManagedClass {
    pub fn new(class: ClassRef, properties: Vec<Property>) -> Self {
        Self { class, properties }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }
}

/// Atomic class compared by equality, never decomposed into fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueClass {
    class: ClassRef,
}

impl ValueClass {
    pub fn new(class: ClassRef) -> Self {
        Self { class }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }
}

/// Class with no identity, compared purely by structural diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueObjectClass {
    managed: ManagedClass,
}

impl ValueObjectClass {
    pub fn new(managed: ManagedClass) -> Self {
        Self { managed }
    }

    pub fn class(&self) -> &ClassRef {
        self.managed.class()
    }

    pub fn properties(&self) -> &[Property] {
        self.managed.properties()
    }

    pub fn managed_class(&self) -> &ManagedClass {
        &self.managed
    }
}

/// Class with an identifier, compared by identity first, then by field diff
/// of the remaining properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityClass {
    managed: ManagedClass,
    id_property: Property,
}

impl EntityClass {
    pub fn new(managed: ManagedClass, id_property: Property) -> Self {
        Self {
            managed,
            id_property,
        }
    }

    pub fn class(&self) -> &ClassRef {
        self.managed.class()
    }

    pub fn properties(&self) -> &[Property] {
        self.managed.properties()
    }

    pub fn managed_class(&self) -> &ManagedClass {
        &self.managed
    }

    pub fn id_property(&self) -> &Property {
        &self.id_property
    }
}

/// The resolved classification of one class: exactly one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainClass {
    Value(ValueClass),
    ValueObject(ValueObjectClass),
    Entity(EntityClass),
}

impl DomainClass {
    pub fn class(&self) -> &ClassRef {
        match self {
            DomainClass::Value(value) => value.class(),
            DomainClass::ValueObject(value_object) => value_object.class(),
            DomainClass::Entity(entity) => entity.class(),
        }
    }
}
