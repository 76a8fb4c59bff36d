//! The runtime type descriptor record.
//!
//! A [`TypeDescriptor`] is the immutable bundle of facts a runtime exposes
//! for one concrete or generic type: qualified namespace token, value kind,
//! array-ness, generic instantiation shape, and declared interfaces. It is
//! a snapshot by value; providers hand out clones, never references into
//! shared mutable state.

use smallvec::SmallVec;

use crate::ids::{TemplateId, TypeId};
use crate::well_known::BUILTIN_NAMESPACE;

/// Runtime primitive kinds: boolean, character, and the numeric tower.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

/// Fundamental kind of a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Runtime primitive (numeric/boolean/char).
    Primitive(PrimitiveKind),
    /// Value/aggregate type: copied, not referenced.
    Value,
    /// Reference/pointer-like type.
    Reference,
    /// Interface: a declared capability, never instantiable.
    Interface,
    /// Abstract reference type: instantiable only through subtypes.
    Abstract,
}

impl TypeKind {
    /// Check if this kind is a runtime primitive.
    pub fn is_primitive(self) -> bool {
        matches!(self, TypeKind::Primitive(_))
    }

    /// Check if this kind is a value/aggregate kind. Primitives count:
    /// they are copied by value like any other aggregate.
    pub fn is_value(self) -> bool {
        matches!(self, TypeKind::Primitive(_) | TypeKind::Value)
    }
}

/// A generic instantiation: template identity plus positional type
/// arguments. Most instantiations have one or two arguments, so the
/// argument list is stored inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericInstance {
    pub template: TemplateId,
    pub args: SmallVec<[TypeId; 2]>,
}

impl GenericInstance {
    pub fn new(template: TemplateId, args: impl IntoIterator<Item = TypeId>) -> Self {
        Self {
            template,
            args: args.into_iter().collect(),
        }
    }
}

/// Immutable metadata record for one runtime type.
///
/// Constructed through the shorthand constructors ([`value`](Self::value),
/// [`reference`](Self::reference), ...) plus the builder-style
/// [`namespace`](Self::namespace), [`generic`](Self::generic) and
/// [`implements`](Self::implements) methods, then registered with a
/// [`TypeRegistry`](crate::TypeRegistry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Simple (unqualified) type name.
    pub name: String,
    /// Qualifying namespace/module token. Absent for anonymous or
    /// dynamically synthesized types.
    pub namespace: Option<String>,
    /// Fundamental kind.
    pub kind: TypeKind,
    /// Element type when this descriptor is an array type.
    pub array_element: Option<TypeId>,
    /// Generic instantiation shape, when this type is one.
    pub generic: Option<GenericInstance>,
    /// Declared interfaces, in declaration order.
    pub interfaces: Vec<TypeId>,
}

impl TypeDescriptor {
    fn with_kind(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind,
            array_element: None,
            generic: None,
            interfaces: Vec::new(),
        }
    }

    /// A runtime primitive. Primitives always live in the builtin namespace.
    pub fn primitive(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::with_kind(name, TypeKind::Primitive(kind)).namespace(BUILTIN_NAMESPACE)
    }

    /// A value/aggregate type.
    pub fn value(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Value)
    }

    /// A reference type.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Reference)
    }

    /// An interface (declared capability).
    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Interface)
    }

    /// An abstract reference type.
    pub fn abstract_reference(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Abstract)
    }

    /// An array type over `element`.
    pub fn array(name: impl Into<String>, element: TypeId) -> Self {
        let mut desc = Self::with_kind(name, TypeKind::Reference);
        desc.array_element = Some(element);
        desc
    }

    /// Set the qualifying namespace token.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Mark this descriptor as an instantiation of `template`.
    pub fn generic(mut self, template: TemplateId, args: impl IntoIterator<Item = TypeId>) -> Self {
        self.generic = Some(GenericInstance::new(template, args));
        self
    }

    /// Append a declared interface. Declaration order is preserved and is
    /// observable: capability scans take the first match.
    pub fn implements(mut self, interface: TypeId) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Check if this descriptor is an array type.
    pub fn is_array(&self) -> bool {
        self.array_element.is_some()
    }

    /// Check if this descriptor is a generic instantiation.
    pub fn is_generic(&self) -> bool {
        self.generic.is_some()
    }
}
