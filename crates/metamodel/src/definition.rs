//! User-supplied class definitions.
//!
//! A definition is an explicit declaration of how a class should be
//! classified, overriding whatever its descriptor's markers say. Definitions
//! are immutable once constructed.

use serde::{Deserialize, Serialize};

use auditkit_core::ClassRef;

/// Definition forcing classification as an Entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDefinition {
    class: ClassRef,
    id_property: Option<String>,
}

impl EntityDefinition {
    pub fn new(class: impl Into<ClassRef>) -> Self {
        Self {
            class: class.into(),
            id_property: None,
        }
    }

    /// Entity definition with an explicit id-property name, overriding the
    /// descriptor's id flags.
    pub fn with_id_property(class: impl Into<ClassRef>, id_property: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            id_property: Some(id_property.into()),
        }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    pub fn id_property(&self) -> Option<&str> {
        self.id_property.as_deref()
    }
}

/// Definition forcing classification as a ValueObject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueObjectDefinition {
    class: ClassRef,
}

impl ValueObjectDefinition {
    pub fn new(class: impl Into<ClassRef>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }
}

/// Definition forcing classification as an atomic Value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDefinition {
    class: ClassRef,
}

impl ValueDefinition {
    pub fn new(class: impl Into<ClassRef>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }
}

/// Definition marking a class as opaque: the metamodel never scans it and the
/// embedder supplies its comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDefinition {
    class: ClassRef,
}

impl CustomDefinition {
    pub fn new(class: impl Into<ClassRef>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &ClassRef {
        &self.class
    }
}

/// Definitions resolved through the scanner into a
/// [`DomainClass`](crate::domain_class::DomainClass).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifiedDefinition {
    Entity(EntityDefinition),
    ValueObject(ValueObjectDefinition),
    Value(ValueDefinition),
}

impl ClassifiedDefinition {
    pub fn class(&self) -> &ClassRef {
        match self {
            ClassifiedDefinition::Entity(def) => def.class(),
            ClassifiedDefinition::ValueObject(def) => def.class(),
            ClassifiedDefinition::Value(def) => def.class(),
        }
    }
}

/// A user-supplied declaration of how a class should be classified.
///
/// Custom definitions bypass classification entirely; everything else is
/// resolved by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassDefinition {
    Classified(ClassifiedDefinition),
    Custom(CustomDefinition),
}

impl ClassDefinition {
    pub fn entity(class: impl Into<ClassRef>) -> Self {
        Self::Classified(ClassifiedDefinition::Entity(EntityDefinition::new(class)))
    }

    pub fn entity_with_id(class: impl Into<ClassRef>, id_property: impl Into<String>) -> Self {
        Self::Classified(ClassifiedDefinition::Entity(
            EntityDefinition::with_id_property(class, id_property),
        ))
    }

    pub fn value_object(class: impl Into<ClassRef>) -> Self {
        Self::Classified(ClassifiedDefinition::ValueObject(ValueObjectDefinition::new(
            class,
        )))
    }

    pub fn value(class: impl Into<ClassRef>) -> Self {
        Self::Classified(ClassifiedDefinition::Value(ValueDefinition::new(class)))
    }

    pub fn custom(class: impl Into<ClassRef>) -> Self {
        Self::Custom(CustomDefinition::new(class))
    }

    pub fn class(&self) -> &ClassRef {
        match self {
            ClassDefinition::Classified(def) => def.class(),
            ClassDefinition::Custom(def) => def.class(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_constructors_produce_matching_cases() {
        let class = ClassRef::named("com.app.Person");

        match ClassDefinition::entity(class.clone()) {
            ClassDefinition::Classified(ClassifiedDefinition::Entity(def)) => {
                assert_eq!(def.class(), &class);
                assert_eq!(def.id_property(), None);
            }
            other => panic!("Expected entity definition, got {other:?}"),
        }

        match ClassDefinition::entity_with_id(class.clone(), "code") {
            ClassDefinition::Classified(ClassifiedDefinition::Entity(def)) => {
                assert_eq!(def.id_property(), Some("code"));
            }
            other => panic!("Expected entity definition, got {other:?}"),
        }

        match ClassDefinition::custom(class.clone()) {
            ClassDefinition::Custom(def) => assert_eq!(def.class(), &class),
            other => panic!("Expected custom definition, got {other:?}"),
        }
    }

    #[test]
    fn definition_exposes_its_class_regardless_of_case() {
        let class = ClassRef::named("com.app.Money");

        for definition in [
            ClassDefinition::entity(class.clone()),
            ClassDefinition::value_object(class.clone()),
            ClassDefinition::value(class.clone()),
            ClassDefinition::custom(class.clone()),
        ] {
            assert_eq!(definition.class(), &class);
        }
    }
}
