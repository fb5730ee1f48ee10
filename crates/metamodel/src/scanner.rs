//! Classification scanner.
//!
//! Resolves class descriptors and explicit definitions into
//! [`DomainClass`] classifications. Stateless: scanning reads descriptor
//! metadata and never mutates it.

use auditkit_core::{ClassMarker, ClassRef, MetamodelError, MetamodelResult};

use crate::definition::ClassifiedDefinition;
use crate::domain_class::{
    DomainClass, EntityClass, ManagedClass, Property, ValueClass, ValueObjectClass,
};

/// Resolves descriptors into [`DomainClass`]es.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassScanner;

impl ClassScanner {
    pub fn new() -> Self {
        Self
    }

    /// Resolve an explicit definition.
    ///
    /// The definition wins over whatever markers the descriptor declares.
    /// Entity definitions resolve their id property: an explicit override
    /// must name a scanned property ([`MetamodelError::UnknownProperty`]
    /// otherwise); without one the first id-flagged property is used
    /// ([`MetamodelError::MissingIdProperty`] if there is none).
    pub fn create(&self, definition: &ClassifiedDefinition) -> MetamodelResult<DomainClass> {
        match definition {
            ClassifiedDefinition::Value(def) => {
                Ok(DomainClass::Value(ValueClass::new(def.class().clone())))
            }
            ClassifiedDefinition::ValueObject(def) => {
                Ok(DomainClass::ValueObject(self.scan_value_object(def.class())))
            }
            ClassifiedDefinition::Entity(def) => Ok(DomainClass::Entity(
                self.scan_entity(def.class(), def.id_property())?,
            )),
        }
    }

    /// Infer a classification from the class's own declared markers.
    ///
    /// Precedence: an explicit `Value` marker wins; an `Entity` marker or any
    /// id-flagged property makes the class an Entity; everything else is a
    /// ValueObject (the default for unmarked structured classes).
    pub fn infer_from_markers(&self, class: &ClassRef) -> MetamodelResult<DomainClass> {
        let descriptor = class.descriptor();

        if descriptor.has_marker(ClassMarker::Value) {
            return Ok(DomainClass::Value(ValueClass::new(class.clone())));
        }
        if descriptor.has_marker(ClassMarker::Entity) {
            return Ok(DomainClass::Entity(self.scan_entity(class, None)?));
        }
        if descriptor.has_marker(ClassMarker::ValueObject) {
            return Ok(DomainClass::ValueObject(self.scan_value_object(class)));
        }

        let has_id_property = descriptor
            .properties()
            .iter()
            .any(|p| p.is_id() && !p.is_ignored());
        if has_id_property {
            return Ok(DomainClass::Entity(self.scan_entity(class, None)?));
        }
        Ok(DomainClass::ValueObject(self.scan_value_object(class)))
    }

    /// Re-derive an entity shape for a new concrete class, preserving the
    /// prototype's id-property choice.
    pub(crate) fn spawn_entity(
        &self,
        prototype: &EntityClass,
        target: &ClassRef,
    ) -> MetamodelResult<EntityClass> {
        self.scan_entity(target, Some(prototype.id_property().name()))
    }

    /// Re-derive a value-object shape for a new concrete class.
    pub(crate) fn spawn_value_object(&self, target: &ClassRef) -> ValueObjectClass {
        self.scan_value_object(target)
    }

    fn scan_properties(&self, class: &ClassRef) -> Vec<Property> {
        class
            .descriptor()
            .properties()
            .iter()
            .filter(|p| !p.is_ignored())
            .map(|p| Property::new(p.name(), p.property_type().clone()))
            .collect()
    }

    fn scan_value_object(&self, class: &ClassRef) -> ValueObjectClass {
        ValueObjectClass::new(ManagedClass::new(class.clone(), self.scan_properties(class)))
    }

    fn scan_entity(
        &self,
        class: &ClassRef,
        id_override: Option<&str>,
    ) -> MetamodelResult<EntityClass> {
        let properties = self.scan_properties(class);

        let id_property = match id_override {
            Some(name) => properties
                .iter()
                .find(|p| p.name() == name)
                .cloned()
                .ok_or_else(|| MetamodelError::unknown_property(class.name(), name))?,
            None => {
                let declared = class
                    .descriptor()
                    .properties()
                    .iter()
                    .find(|p| p.is_id() && !p.is_ignored())
                    .ok_or_else(|| MetamodelError::missing_id_property(class.name()))?;
                Property::new(declared.name(), declared.property_type().clone())
            }
        };

        Ok(EntityClass::new(
            ManagedClass::new(class.clone(), properties),
            id_property,
        ))
    }
}
