//! Structural type classification.
//!
//! A fixed set of stateless queries over runtime type descriptors, answered
//! through the [`TypeMetadata`] capability seam:
//!
//! - Origin: does a type come from the standard/builtin universe, or from
//!   its collections sub-namespace? ([`is_builtin_origin`],
//!   [`is_enumerable_origin`])
//! - Shape: what element type does a container yield ([`element_type`]),
//!   is a type an associative map and of what key/value types
//!   ([`map_shape`])?
//! - Primitive-likeness: is a value of this type safe to treat as an
//!   atomic leaf? ([`is_primitive_like`])
//! - Activation: construct a default instance dynamically
//!   ([`instantiate`]), the only fallible operation.
//!
//! Every query is a pure function of its descriptor argument; nothing is
//! cached across calls, so all of them are reentrant.

mod activate;
mod element;
mod map_shape;
mod origin;
mod primitive;

pub use activate::{InstantiationError, instantiate};
pub use element::element_type;
pub use map_shape::{MapShape, map_shape};
pub use origin::{is_builtin_origin, is_enumerable_origin};
pub use primitive::is_primitive_like;

use dynmap_meta::{TypeDescriptor, TypeId, TypeMetadata};

/// Descriptor snapshot for `ty`, failing fast on an unknown id. An id the
/// provider does not know is a caller bug, never a classification result.
pub(crate) fn descriptor(db: &dyn TypeMetadata, ty: TypeId) -> TypeDescriptor {
    match db.lookup(ty) {
        Some(desc) => desc,
        None => panic!("{ty:?} is not known to the metadata provider"),
    }
}
