//! Integration tests for the full classification pipeline.
//!
//! Tests: descriptors → definitions/markers → TypeFactory → TypeMapper,
//! with the inference side channel observed end to end.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auditkit_core::{ClassDescriptor, ClassMarker, ClassRef, PropertyDescriptor, TypeRef};

    use crate::definition::ClassDefinition;
    use crate::mapper::TypeMapper;
    use crate::object_type::{ObjectType, ObjectTypeKind};
    use crate::observer::{InferenceSource, RecordingObserver};
    use crate::scanner::ClassScanner;
    use crate::type_factory::TypeFactory;

    fn money_class() -> ClassRef {
        ClassDescriptor::new("com.shop.Money")
            .property(PropertyDescriptor::new("amount", ClassRef::named("i64")))
            .property(PropertyDescriptor::new("currency", ClassRef::named("String")))
            .into_ref()
    }

    fn address_class() -> ClassRef {
        ClassDescriptor::new("com.shop.Address")
            .marker(ClassMarker::ValueObject)
            .property(PropertyDescriptor::new("street", ClassRef::named("String")))
            .property(PropertyDescriptor::new("city", ClassRef::named("String")))
            .into_ref()
    }

    fn customer_class() -> ClassRef {
        ClassDescriptor::new("com.shop.Customer")
            .property(PropertyDescriptor::new("id", ClassRef::named("CustomerId")).id())
            .property(PropertyDescriptor::new("name", ClassRef::named("String")))
            .property(PropertyDescriptor::new("address", TypeRef::of(address_class())))
            .property(PropertyDescriptor::new("session", ClassRef::named("Session")).ignored())
            .into_ref()
    }

    fn vip_customer_class() -> ClassRef {
        ClassDescriptor::new("com.shop.VipCustomer")
            .superclass(customer_class())
            .property(PropertyDescriptor::new("id", ClassRef::named("CustomerId")))
            .property(PropertyDescriptor::new("name", ClassRef::named("String")))
            .property(PropertyDescriptor::new("tier", ClassRef::named("String")))
            .into_ref()
    }

    fn recording_mapper() -> (TypeMapper, Arc<RecordingObserver>) {
        let observer = RecordingObserver::arc();
        let factory = TypeFactory::with_observer(ClassScanner::new(), observer.clone());
        (TypeMapper::new(factory), observer)
    }

    #[test]
    fn a_small_domain_classifies_end_to_end() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let (mapper, observer) = recording_mapper();

        // Explicit registrations: Money is atomic, blobs are opaque.
        let money = mapper
            .register(&ClassDefinition::value(money_class()))
            .unwrap();
        assert_eq!(money.kind(), ObjectTypeKind::Value);

        let blob = mapper
            .register(&ClassDefinition::custom(ClassRef::named("com.shop.Attachment")))
            .unwrap();
        assert_eq!(blob.kind(), ObjectTypeKind::Custom);

        // Everything else resolves on first use.
        let customer = mapper.object_type(&TypeRef::of(customer_class())).unwrap();
        let address = mapper.object_type(&TypeRef::of(address_class())).unwrap();

        match &customer {
            ObjectType::Entity(entity) => {
                assert_eq!(entity.id_property().name(), "id");
                // "session" is ignored; id, name, address remain.
                assert_eq!(entity.properties().len(), 3);
            }
            other => panic!("Expected EntityType for Customer, got {other:?}"),
        }
        assert_eq!(address.kind(), ObjectTypeKind::ValueObject);

        // The subclass spawns from the mapped Customer prototype.
        let vip = mapper.object_type(&TypeRef::of(vip_customer_class())).unwrap();
        match &vip {
            ObjectType::Entity(entity) => {
                assert_eq!(entity.base_class().name(), "com.shop.VipCustomer");
                assert_eq!(entity.id_property().name(), "id");
            }
            other => panic!("Expected EntityType for VipCustomer, got {other:?}"),
        }

        // The Customer id-property type was pinned to Value, so it can never
        // classify as an Entity or ValueObject later.
        let id_type = mapper
            .object_type(&TypeRef::of(ClassRef::named("CustomerId")))
            .unwrap();
        assert_eq!(id_type.kind(), ObjectTypeKind::Value);

        // Explicit registrations never go through inference; everything else
        // logged exactly one decision.
        let sources: Vec<_> = observer.events().iter().map(|e| e.source()).collect();
        assert_eq!(
            sources,
            vec![
                InferenceSource::Markers,
                InferenceSource::IdPropertyPolicy,
                InferenceSource::Markers,
                InferenceSource::Prototype(ObjectTypeKind::Entity),
            ]
        );

        // Repeat lookups are all cache hits: the decision log is unchanged.
        mapper.object_type(&TypeRef::of(customer_class())).unwrap();
        mapper.object_type(&TypeRef::of(vip_customer_class())).unwrap();
        mapper.object_type(&TypeRef::of(address_class())).unwrap();
        assert_eq!(observer.len(), 4);
    }

    #[test]
    fn generic_collection_references_resolve_by_raw_class() {
        let (mapper, _) = recording_mapper();
        mapper
            .register(&ClassDefinition::value(ClassRef::named("Vec")))
            .unwrap();

        let customers = TypeRef::generic(
            ClassRef::named("Vec"),
            vec![TypeRef::of(customer_class())],
        );

        let resolved = mapper.object_type(&customers).unwrap();
        assert_eq!(resolved.kind(), ObjectTypeKind::Value);
        assert_eq!(resolved.base_class().name(), "Vec");
    }
}
