//! Origin classification by namespace token.
//!
//! These are naming-convention signals: they recognize types the standard
//! library provides, by qualified name prefix, and nothing else. A user
//! type that implements the enumerable capability still classifies `false`
//! here; capability-based detection lives in [`crate::element_type`].

use dynmap_meta::{BUILTIN_NAMESPACE, COLLECTIONS_NAMESPACE, TypeId, TypeMetadata};

use crate::descriptor;

fn namespace_starts_with(db: &dyn TypeMetadata, ty: TypeId, prefix: &str) -> bool {
    match descriptor(db, ty).namespace {
        Some(namespace) => namespace.starts_with(prefix),
        // Anonymous and synthesized types have no namespace; that is a
        // valid `false`, not an error.
        None => false,
    }
}

/// Check if `ty` belongs to the standard/builtin type universe.
pub fn is_builtin_origin(db: &dyn TypeMetadata, ty: TypeId) -> bool {
    namespace_starts_with(db, ty, BUILTIN_NAMESPACE)
}

/// Check if `ty` is a standard-library collection type.
pub fn is_enumerable_origin(db: &dyn TypeMetadata, ty: TypeId) -> bool {
    namespace_starts_with(db, ty, COLLECTIONS_NAMESPACE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynmap_meta::{TypeDescriptor, TypeRegistry};

    #[test]
    fn test_primitives_are_builtin_origin() {
        let registry = TypeRegistry::new();
        assert!(is_builtin_origin(&registry, TypeId::I32));
        assert!(is_builtin_origin(&registry, TypeId::STRING));
        // Builtin, but not from the collections sub-namespace.
        assert!(!is_enumerable_origin(&registry, TypeId::I32));
    }

    #[test]
    fn test_collections_namespace_is_both() {
        let registry = TypeRegistry::new();
        let list = registry
            .register(TypeDescriptor::reference("List").namespace(COLLECTIONS_NAMESPACE));
        assert!(is_builtin_origin(&registry, list));
        assert!(is_enumerable_origin(&registry, list));
    }

    #[test]
    fn test_user_namespace_matches_neither() {
        let registry = TypeRegistry::new();
        let widget = registry.register(TypeDescriptor::reference("Widget").namespace("acme::ui"));
        assert!(!is_builtin_origin(&registry, widget));
        assert!(!is_enumerable_origin(&registry, widget));
    }

    #[test]
    fn test_missing_namespace_is_false_not_an_error() {
        let registry = TypeRegistry::new();
        let anon = registry.register(TypeDescriptor::reference("synthesized"));
        assert!(!is_builtin_origin(&registry, anon));
        assert!(!is_enumerable_origin(&registry, anon));
    }
}
