//! End-to-end classification properties over a populated registry.

use dynmap_classify::{
    element_type, instantiate, is_builtin_origin, is_enumerable_origin, is_primitive_like,
    map_shape,
};
use dynmap_meta::{
    COLLECTIONS_NAMESPACE, TemplateId, TemplateInfo, TypeDescriptor, TypeId, TypeRegistry,
};

/// A registry populated the way a host runtime would: a `List<T>` template
/// whose instantiations implement `Enumerable<T>`, a standard map, and a
/// couple of user types.
struct Fixture {
    registry: TypeRegistry,
    list_template: TemplateId,
    list_i32: TypeId,
    list_list_i32: TypeId,
    map_string_i64: TypeId,
    widget: TypeId,
    list_widget: TypeId,
}

impl Fixture {
    fn new() -> Self {
        let registry = TypeRegistry::new();
        let list_template =
            registry.register_template(TemplateInfo::new("List", 1).namespace(COLLECTIONS_NAMESPACE));

        let widget = registry.register(TypeDescriptor::reference("Widget").namespace("acme::ui"));

        let list_i32 = Self::list_of(&registry, list_template, TypeId::I32);
        let list_list_i32 = Self::list_of(&registry, list_template, list_i32);
        let list_widget = Self::list_of(&registry, list_template, widget);

        let map_string_i64 = registry.register(
            TypeDescriptor::reference("Map")
                .namespace(COLLECTIONS_NAMESPACE)
                .generic(TemplateId::MAP, [TypeId::STRING, TypeId::I64]),
        );

        Self {
            registry,
            list_template,
            list_i32,
            list_list_i32,
            map_string_i64,
            widget,
            list_widget,
        }
    }

    fn list_of(registry: &TypeRegistry, list: TemplateId, element: TypeId) -> TypeId {
        let cap = registry.register(
            TypeDescriptor::interface("Enumerable")
                .namespace(COLLECTIONS_NAMESPACE)
                .generic(TemplateId::ENUMERABLE, [element]),
        );
        registry.register(
            TypeDescriptor::reference("List")
                .namespace(COLLECTIONS_NAMESPACE)
                .generic(list, [element])
                .implements(cap),
        )
    }
}

#[test]
fn test_array_element_extraction() {
    let f = Fixture::new();
    let ints = f.registry.array_of(TypeId::I32);
    assert_eq!(element_type(&f.registry, ints), TypeId::I32);

    let widgets = f.registry.array_of(f.widget);
    assert_eq!(element_type(&f.registry, widgets), f.widget);
}

#[test]
fn test_identity_fallback_for_non_containers() {
    let f = Fixture::new();
    assert_eq!(element_type(&f.registry, f.widget), f.widget);
    assert_eq!(element_type(&f.registry, TypeId::BOOL), TypeId::BOOL);
    // The map template is not the enumerable template; no element type.
    assert_eq!(
        element_type(&f.registry, f.map_string_i64),
        f.map_string_i64
    );
}

#[test]
fn test_primitive_likeness_over_nested_containers() {
    let f = Fixture::new();
    assert!(is_primitive_like(&f.registry, f.list_i32));
    assert!(is_primitive_like(&f.registry, f.list_list_i32));
    assert!(!is_primitive_like(&f.registry, f.widget));
    assert!(!is_primitive_like(&f.registry, f.list_widget));
}

#[test]
fn test_map_shape_three_way_contract() {
    let f = Fixture::new();

    let map = map_shape(&f.registry, f.map_string_i64);
    assert!(map.is_map);
    assert_eq!(map.entry_types(), Some((TypeId::STRING, TypeId::I64)));

    // Non-map generic: flag false, key/value still populated positionally.
    let pair_template = f.registry.register_template(TemplateInfo::new("Pair", 2));
    let pair = f.registry.register(
        TypeDescriptor::value("Pair").generic(pair_template, [TypeId::CHAR, TypeId::F32]),
    );
    let shape = map_shape(&f.registry, pair);
    assert!(!shape.is_map);
    assert_eq!(shape.key, Some(TypeId::CHAR));
    assert_eq!(shape.value, Some(TypeId::F32));

    // Non-generic: nothing to extract.
    let shape = map_shape(&f.registry, f.widget);
    assert!(!shape.is_map);
    assert_eq!(shape.key, None);
    assert_eq!(shape.value, None);

    // A List<T> is generic but not a map; its sole argument shows up as
    // both first and last.
    let shape = map_shape(&f.registry, f.list_i32);
    assert!(!shape.is_map);
    assert_eq!(shape.key, Some(TypeId::I32));
    assert_eq!(shape.value, Some(TypeId::I32));
}

#[test]
fn test_origin_predicates() {
    let f = Fixture::new();
    assert!(is_builtin_origin(&f.registry, TypeId::STRING));
    assert!(is_builtin_origin(&f.registry, f.list_i32));
    assert!(is_enumerable_origin(&f.registry, f.list_i32));
    assert!(!is_enumerable_origin(&f.registry, TypeId::STRING));
    assert!(!is_builtin_origin(&f.registry, f.widget));

    let anon = f.registry.register(TypeDescriptor::reference("closure#17"));
    assert!(!is_builtin_origin(&f.registry, anon));
    assert!(!is_enumerable_origin(&f.registry, anon));
}

#[test]
fn test_instantiate_roundtrip_and_failures() {
    let f = Fixture::new();

    #[derive(Default)]
    struct WidgetValue {
        _label: String,
    }

    f.registry.register_default::<WidgetValue>(f.widget);
    let instance = instantiate(&f.registry, f.widget).expect("constructible");
    assert!(instance.downcast::<WidgetValue>().is_ok());

    let iface = f.registry.register(TypeDescriptor::interface("Drawable"));
    assert!(instantiate(&f.registry, iface).is_err());
}

#[test]
fn test_every_classifier_is_idempotent() {
    let f = Fixture::new();
    let subjects = [
        TypeId::I32,
        TypeId::STRING,
        f.list_i32,
        f.list_list_i32,
        f.list_widget,
        f.map_string_i64,
        f.widget,
    ];
    for ty in subjects {
        assert_eq!(
            is_builtin_origin(&f.registry, ty),
            is_builtin_origin(&f.registry, ty)
        );
        assert_eq!(
            is_enumerable_origin(&f.registry, ty),
            is_enumerable_origin(&f.registry, ty)
        );
        assert_eq!(element_type(&f.registry, ty), element_type(&f.registry, ty));
        assert_eq!(
            is_primitive_like(&f.registry, ty),
            is_primitive_like(&f.registry, ty)
        );
        assert_eq!(map_shape(&f.registry, ty), map_shape(&f.registry, ty));
    }
}

#[test]
fn test_classification_sees_later_registrations() {
    // The registry is append-only; classifiers read whatever snapshot the
    // descriptor table holds at call time.
    let f = Fixture::new();
    let late = Fixture::list_of(&f.registry, f.list_template, TypeId::U64);
    assert!(is_primitive_like(&f.registry, late));
    assert_eq!(element_type(&f.registry, late), TypeId::U64);
}
