//! Associative-map detection with positional key/value extraction.

use dynmap_meta::{TemplateId, TypeId, TypeMetadata};

use crate::descriptor;

/// Result of [`map_shape`].
///
/// `key` and `value` are best-effort positional extractions (first and last
/// generic argument) and are populated whenever the type has generic
/// arguments at all, whether or not it is actually a map. Only `is_map`
/// says the pair is meaningful as key/value types; check it before
/// trusting them, or go through [`entry_types`](Self::entry_types).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MapShape {
    pub is_map: bool,
    pub key: Option<TypeId>,
    pub value: Option<TypeId>,
}

impl MapShape {
    /// Key and value types, gated on the flag.
    pub fn entry_types(&self) -> Option<(TypeId, TypeId)> {
        if self.is_map {
            Some((self.key?, self.value?))
        } else {
            None
        }
    }
}

/// Check if `ty` instantiates the standard associative-map template, and
/// extract whatever first/last generic arguments exist either way.
pub fn map_shape(db: &dyn TypeMetadata, ty: TypeId) -> MapShape {
    match &descriptor(db, ty).generic {
        Some(generic) => MapShape {
            is_map: generic.template == TemplateId::MAP,
            key: generic.args.first().copied(),
            value: generic.args.last().copied(),
        },
        None => MapShape {
            is_map: false,
            key: None,
            value: None,
        },
    }
}
