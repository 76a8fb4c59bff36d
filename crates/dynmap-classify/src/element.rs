//! Element-type extraction for iterated containers.

use dynmap_meta::{TemplateId, TypeId, TypeMetadata};

use crate::descriptor;

/// The type of elements `ty` yields when iterated.
///
/// Precedence:
///
/// 1. Array types return their declared element type (fast path; arrays
///    are common enough that they should not pay for an interface scan).
/// 2. A direct instantiation of the enumerable template returns its sole
///    type argument.
/// 3. Otherwise the declared interfaces are scanned for an enumerable
///    instantiation; the first match in declaration order wins. A type
///    implementing the capability several times with different element
///    types gets no ambiguity resolution beyond that — documented
///    behavior, not a defect.
/// 4. Anything else returns `ty` unchanged.
///
/// Total: the identity fallback means "no element type available", and
/// callers must compare against the input to detect it.
pub fn element_type(db: &dyn TypeMetadata, ty: TypeId) -> TypeId {
    let desc = descriptor(db, ty);

    if let Some(element) = desc.array_element {
        return element;
    }

    if let Some(generic) = &desc.generic
        && generic.template == TemplateId::ENUMERABLE
        && let Some(&element) = generic.args.first()
    {
        return element;
    }

    for interface in &desc.interfaces {
        let iface = descriptor(db, *interface);
        if let Some(generic) = &iface.generic
            && generic.template == TemplateId::ENUMERABLE
            && let Some(&element) = generic.args.first()
        {
            return element;
        }
    }

    ty
}
