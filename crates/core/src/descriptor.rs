//! Runtime class descriptors.
//!
//! Rust has no runtime reflection, so the metadata the metamodel classifies
//! is declared explicitly: a [`ClassDescriptor`] per host-application class,
//! carrying its properties and classification markers. Descriptors are
//! immutable once built and shared through cheap [`ClassRef`] handles.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declared classification intent on a class (the annotation analog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassMarker {
    /// Compared by identity (an id property), then by field diff.
    Entity,
    /// No identity; compared purely by structural diff.
    ValueObject,
    /// Atomic; compared by equality, never decomposed.
    Value,
}

/// A single declared property of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    name: String,
    property_type: TypeRef,
    is_id: bool,
    ignored: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, property_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            is_id: false,
            ignored: false,
        }
    }

    /// Flag this property as the identifier of its class.
    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Exclude this property from structural scanning.
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property_type(&self) -> &TypeRef {
        &self.property_type
    }

    pub fn is_id(&self) -> bool {
        self.is_id
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }
}

/// Runtime metadata for one host-application class.
///
/// The fully-qualified `name` identifies the class; two descriptors with the
/// same name describe the same class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    name: String,
    superclass: Option<ClassRef>,
    markers: Vec<ClassMarker>,
    properties: Vec<PropertyDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            markers: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn marker(mut self, marker: ClassMarker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn superclass(mut self, superclass: impl Into<ClassRef>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Finalize into a shared handle.
    pub fn into_ref(self) -> ClassRef {
        ClassRef::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass_ref(&self) -> Option<&ClassRef> {
        self.superclass.as_ref()
    }

    pub fn markers(&self) -> &[ClassMarker] {
        &self.markers
    }

    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn has_marker(&self, marker: ClassMarker) -> bool {
        self.markers.contains(&marker)
    }
}

/// Shared handle to a [`ClassDescriptor`].
///
/// Equality and hashing are by fully-qualified name: the descriptor behind a
/// handle is the authoritative metadata for the class with that name. A
/// name-only handle (no properties) is a valid way to reference a class from
/// another descriptor, e.g. for self-referencing property types.
#[derive(Debug, Clone)]
pub struct ClassRef(Arc<ClassDescriptor>);

impl ClassRef {
    pub fn new(descriptor: ClassDescriptor) -> Self {
        Self(Arc::new(descriptor))
    }

    /// Name-only handle for referencing a class without (re)declaring it.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(ClassDescriptor::new(name))
    }

    pub fn descriptor(&self) -> &ClassDescriptor {
        &self.0
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}

impl From<ClassDescriptor> for ClassRef {
    fn from(descriptor: ClassDescriptor) -> Self {
        Self::new(descriptor)
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Plain serde has no `Arc` impl without the `rc` feature; delegate to the
// descriptor instead.
impl Serialize for ClassRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClassRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ClassDescriptor::deserialize(deserializer).map(Self::new)
    }
}

/// A possibly-generic reference to a runtime type.
///
/// `Vec<Person>` is the raw class `Vec` applied to the argument `Person`;
/// plain classes have no arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    class: ClassRef,
    arguments: Vec<TypeRef>,
}

impl TypeRef {
    pub fn of(class: impl Into<ClassRef>) -> Self {
        Self {
            class: class.into(),
            arguments: Vec::new(),
        }
    }

    pub fn generic(class: impl Into<ClassRef>, arguments: Vec<TypeRef>) -> Self {
        Self {
            class: class.into(),
            arguments,
        }
    }

    /// The concrete raw class behind this possibly-generic reference.
    pub fn raw_class(&self) -> &ClassRef {
        &self.class
    }

    pub fn arguments(&self) -> &[TypeRef] {
        &self.arguments
    }

    pub fn is_generic(&self) -> bool {
        !self.arguments.is_empty()
    }
}

impl From<ClassRef> for TypeRef {
    fn from(class: ClassRef) -> Self {
        Self::of(class)
    }
}

impl From<ClassDescriptor> for TypeRef {
    fn from(descriptor: ClassDescriptor) -> Self {
        Self::of(ClassRef::new(descriptor))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class.name())?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(argument, f)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_refs_compare_by_name() {
        let full = ClassDescriptor::new("com.app.Person")
            .marker(ClassMarker::Entity)
            .property(PropertyDescriptor::new("id", ClassRef::named("u64")).id())
            .into_ref();
        let hollow = ClassRef::named("com.app.Person");

        assert_eq!(full, hollow);
        assert_ne!(full, ClassRef::named("com.app.Address"));
    }

    #[test]
    fn raw_class_is_extracted_from_generic_reference() {
        let list = TypeRef::generic(
            ClassRef::named("Vec"),
            vec![TypeRef::of(ClassRef::named("com.app.Person"))],
        );

        assert!(list.is_generic());
        assert_eq!(list.raw_class().name(), "Vec");
        assert_eq!(list.arguments().len(), 1);
    }

    #[test]
    fn generic_reference_displays_with_arguments() {
        let map = TypeRef::generic(
            ClassRef::named("HashMap"),
            vec![
                TypeRef::of(ClassRef::named("String")),
                TypeRef::of(ClassRef::named("com.app.Address")),
            ],
        );

        assert_eq!(map.to_string(), "HashMap<String, com.app.Address>");
    }

    #[test]
    fn property_flags_default_to_off() {
        let plain = PropertyDescriptor::new("name", ClassRef::named("String"));
        assert!(!plain.is_id());
        assert!(!plain.is_ignored());

        let id = PropertyDescriptor::new("id", ClassRef::named("u64")).id();
        assert!(id.is_id());

        let ignored = PropertyDescriptor::new("cache", ClassRef::named("String")).ignored();
        assert!(ignored.is_ignored());
    }

    #[test]
    fn descriptor_round_trips_through_serde() {
        let descriptor = ClassDescriptor::new("com.app.Person")
            .marker(ClassMarker::Entity)
            .superclass(ClassRef::named("com.app.AbstractPerson"))
            .property(PropertyDescriptor::new("id", ClassRef::named("u64")).id())
            .property(PropertyDescriptor::new("name", ClassRef::named("String")));

        let json = serde_json::to_string(&descriptor).unwrap();
        let back: ClassDescriptor = serde_json::from_str(&json).unwrap();

        assert_eq!(back, descriptor);
        assert_eq!(back.superclass_ref().unwrap().name(), "com.app.AbstractPerson");
    }
}
