//! Primitive-likeness classification.
//!
//! "Primitive-like" is the consumer's signal for "treat this value as an
//! atomic, structurally simple leaf" as opposed to "this needs deep
//! structural handling". It covers more than runtime primitives: value
//! aggregates, the string type, and standard containers nested over
//! primitive-like elements all qualify.

use dynmap_meta::limits::MAX_CONTAINER_DEPTH;
use dynmap_meta::{TypeId, TypeMetadata};

use crate::descriptor;
use crate::element::element_type;
use crate::origin::is_enumerable_origin;

/// Check if `ty` is safe to treat as an atomic leaf value.
///
/// True for runtime primitives, value/aggregate kinds, the string type,
/// and recursively for standard-library enumerable types whose element
/// type is itself primitive-like: a `List<List<i32>>` is primitive-like,
/// a `List<Widget>` is not.
///
/// The recursion follows the generic-argument structure of the type graph,
/// which is finite for any well-formed type system; the depth bound only
/// guards against adversarial descriptor graphs, answering `false` past
/// [`MAX_CONTAINER_DEPTH`].
pub fn is_primitive_like(db: &dyn TypeMetadata, ty: TypeId) -> bool {
    is_primitive_like_at(db, ty, 0)
}

fn is_primitive_like_at(db: &dyn TypeMetadata, ty: TypeId, depth: usize) -> bool {
    if depth > MAX_CONTAINER_DEPTH {
        return false;
    }

    let desc = descriptor(db, ty);
    if desc.kind.is_value() || ty == TypeId::STRING {
        return true;
    }

    if is_enumerable_origin(db, ty) {
        let element = element_type(db, ty);
        // Identity fallback means the container exposes no element type;
        // recursing would never terminate.
        if element != ty {
            return is_primitive_like_at(db, element, depth + 1);
        }
    }

    false
}
