//! Id newtypes for registered types and generic templates.
//!
//! Both ids are opaque `u32` handles into a [`TypeMetadata`] provider. The
//! low range of each space is reserved for pre-registered entries so that
//! hosts and classifiers can refer to the primitive universe and the
//! well-known templates by constant, without a lookup.
//!
//! [`TypeMetadata`]: crate::provider::TypeMetadata

/// Opaque handle to a runtime type descriptor.
///
/// Ids below [`TypeId::FIRST_DYNAMIC`] are pre-assigned to the primitive
/// universe and are registered by every [`TypeRegistry`](crate::TypeRegistry)
/// at construction. A synthetic provider that does not use the registry must
/// honor the same assignments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const BOOL: Self = Self(0);
    pub const CHAR: Self = Self(1);
    pub const I8: Self = Self(2);
    pub const I16: Self = Self(3);
    pub const I32: Self = Self(4);
    pub const I64: Self = Self(5);
    pub const U8: Self = Self(6);
    pub const U16: Self = Self(7);
    pub const U32: Self = Self(8);
    pub const U64: Self = Self(9);
    pub const F32: Self = Self(10);
    pub const F64: Self = Self(11);

    /// The standard text-string type. A reference type, but treated as an
    /// atomic leaf by primitive-likeness classification.
    pub const STRING: Self = Self(12);

    /// First id handed out by the dynamic allocator.
    pub const FIRST_DYNAMIC: u32 = 16;

    /// All pre-assigned ids, in id order.
    pub const PRE_REGISTERED: [Self; 13] = [
        Self::BOOL,
        Self::CHAR,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::F32,
        Self::F64,
        Self::STRING,
    ];
}

/// Identity of a generic template (the uninstantiated `Container<_>` shape).
///
/// Two ids are reserved for the runtime's standard templates; everything
/// else is allocated dynamically by the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// The single-parameter enumerable template (`Enumerable<T>`).
    pub const ENUMERABLE: Self = Self(0);

    /// The two-parameter associative-map template (`Map<K, V>`).
    pub const MAP: Self = Self(1);

    /// First id handed out by the dynamic allocator.
    pub const FIRST_DYNAMIC: u32 = 8;
}
