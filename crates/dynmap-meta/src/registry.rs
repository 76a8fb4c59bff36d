//! Concurrent descriptor store.
//!
//! [`TypeRegistry`] is the reference implementation of both capability
//! seams: an append-only table of immutable descriptors plus a table of
//! parameterless constructors. Registration allocates ids from an atomic
//! counter and never blocks readers, so classification may run concurrently
//! with registration from any number of threads.
//!
//! The store is not an interner: registering the same descriptor twice
//! yields two ids. The one exception is [`array_of`](TypeRegistry::array_of),
//! which dedupes per element type so repeated queries for `T[]` agree on an
//! id.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;
use tracing::trace;

use crate::descriptor::{PrimitiveKind, TypeDescriptor, TypeKind};
use crate::ids::{TemplateId, TypeId};
use crate::provider::{ActivationError, Activator, Instance, TypeMetadata};
use crate::well_known::{BUILTIN_NAMESPACE, COLLECTIONS_NAMESPACE};

type Constructor = Arc<dyn Fn() -> Result<Instance, ActivationError> + Send + Sync>;

/// Identity of a generic template: name, namespace token, and arity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateInfo {
    pub name: String,
    pub namespace: Option<String>,
    pub arity: usize,
}

impl TemplateInfo {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            arity,
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Append-only concurrent store of runtime type metadata.
///
/// A fresh registry pre-registers the primitive universe at the constant
/// [`TypeId`] assignments and the two well-known templates
/// ([`TemplateId::ENUMERABLE`], [`TemplateId::MAP`]).
pub struct TypeRegistry {
    types: DashMap<TypeId, TypeDescriptor>,
    templates: DashMap<TemplateId, TemplateInfo>,
    /// Element type -> array type, so `array_of` is stable per element.
    arrays: DashMap<TypeId, TypeId>,
    constructors: DashMap<TypeId, Constructor>,
    next_type: AtomicU32,
    next_template: AtomicU32,
}

impl TypeRegistry {
    pub fn new() -> Self {
        let registry = Self {
            types: DashMap::new(),
            templates: DashMap::new(),
            arrays: DashMap::new(),
            constructors: DashMap::new(),
            next_type: AtomicU32::new(TypeId::FIRST_DYNAMIC),
            next_template: AtomicU32::new(TemplateId::FIRST_DYNAMIC),
        };
        registry.seed_primitives();
        registry.seed_templates();
        registry
    }

    fn seed_primitives(&self) {
        let primitives = [
            (TypeId::BOOL, "bool", PrimitiveKind::Bool),
            (TypeId::CHAR, "char", PrimitiveKind::Char),
            (TypeId::I8, "i8", PrimitiveKind::I8),
            (TypeId::I16, "i16", PrimitiveKind::I16),
            (TypeId::I32, "i32", PrimitiveKind::I32),
            (TypeId::I64, "i64", PrimitiveKind::I64),
            (TypeId::U8, "u8", PrimitiveKind::U8),
            (TypeId::U16, "u16", PrimitiveKind::U16),
            (TypeId::U32, "u32", PrimitiveKind::U32),
            (TypeId::U64, "u64", PrimitiveKind::U64),
            (TypeId::F32, "f32", PrimitiveKind::F32),
            (TypeId::F64, "f64", PrimitiveKind::F64),
        ];
        for (id, name, kind) in primitives {
            self.types.insert(id, TypeDescriptor::primitive(name, kind));
        }
        // The string type is a reference type in the builtin namespace; its
        // special standing in classification hangs off TypeId::STRING, not
        // off its kind.
        self.types.insert(
            TypeId::STRING,
            TypeDescriptor::reference("String").namespace(BUILTIN_NAMESPACE),
        );
    }

    fn seed_templates(&self) {
        self.templates.insert(
            TemplateId::ENUMERABLE,
            TemplateInfo::new("Enumerable", 1).namespace(COLLECTIONS_NAMESPACE),
        );
        self.templates.insert(
            TemplateId::MAP,
            TemplateInfo::new("Map", 2).namespace(COLLECTIONS_NAMESPACE),
        );
    }

    /// Register a type descriptor, allocating a fresh id.
    pub fn register(&self, descriptor: TypeDescriptor) -> TypeId {
        if let Some(generic) = &descriptor.generic
            && let Some(template) = self.templates.get(&generic.template)
        {
            debug_assert_eq!(
                generic.args.len(),
                template.arity,
                "generic argument count of `{}` does not match arity of template `{}`",
                descriptor.name,
                template.name,
            );
        }
        let id = TypeId(self.next_type.fetch_add(1, Ordering::Relaxed));
        trace!(?id, name = %descriptor.name, "registered type descriptor");
        self.types.insert(id, descriptor);
        id
    }

    /// Register a generic template, allocating a fresh id.
    pub fn register_template(&self, info: TemplateInfo) -> TemplateId {
        let id = TemplateId(self.next_template.fetch_add(1, Ordering::Relaxed));
        trace!(?id, name = %info.name, arity = info.arity, "registered template");
        self.templates.insert(id, info);
        id
    }

    /// The array type over `element`, registering it on first use. Stable:
    /// repeated calls with the same element return the same id.
    pub fn array_of(&self, element: TypeId) -> TypeId {
        if let Some(existing) = self.arrays.get(&element) {
            return *existing;
        }
        let elem_desc = self.descriptor(element);
        let mut desc = TypeDescriptor::array(format!("{}[]", elem_desc.name), element);
        desc.namespace = elem_desc.namespace;
        let id = self.register(desc);
        // Two threads may race past the get(); entry() keeps the winner.
        *self.arrays.entry(element).or_insert(id)
    }

    /// Attach a parameterless constructor producing `T::default()`.
    pub fn register_default<T>(&self, ty: TypeId)
    where
        T: Default + Send + 'static,
    {
        self.register_constructor(ty, || Ok(Box::new(T::default()) as Instance));
    }

    /// Attach an arbitrary parameterless construction path. The closure may
    /// fail; its error is reported verbatim as the construction failure.
    pub fn register_constructor<F>(&self, ty: TypeId, constructor: F)
    where
        F: Fn() -> Result<Instance, ActivationError> + Send + Sync + 'static,
    {
        self.constructors.insert(ty, Arc::new(constructor));
    }

    /// Descriptor snapshot for `ty`.
    ///
    /// # Panics
    ///
    /// Panics if `ty` was never registered (contract violation).
    pub fn descriptor(&self, ty: TypeId) -> TypeDescriptor {
        match self.types.get(&ty) {
            Some(desc) => desc.value().clone(),
            None => panic!("{ty:?} is not registered"),
        }
    }

    /// Template identity snapshot for `template`, if registered.
    pub fn template(&self, template: TemplateId) -> Option<TemplateInfo> {
        self.templates.get(&template).map(|info| info.value().clone())
    }

    /// Check whether `ty` is registered.
    pub fn contains(&self, ty: TypeId) -> bool {
        self.types.contains_key(&ty)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMetadata for TypeRegistry {
    fn lookup(&self, ty: TypeId) -> Option<TypeDescriptor> {
        self.types.get(&ty).map(|desc| desc.value().clone())
    }
}

impl Activator for TypeRegistry {
    fn create_instance(&self, ty: TypeId) -> Result<Instance, ActivationError> {
        let desc = self.descriptor(ty);
        match desc.kind {
            TypeKind::Interface => return Err(ActivationError::Interface(desc.name)),
            TypeKind::Abstract => return Err(ActivationError::Abstract(desc.name)),
            TypeKind::Primitive(_) | TypeKind::Value | TypeKind::Reference => {}
        }
        let Some(constructor) = self.constructors.get(&ty).map(|c| Arc::clone(c.value())) else {
            return Err(ActivationError::MissingConstructor(desc.name));
        };
        trace!(?ty, name = %desc.name, "activating instance");
        constructor()
    }
}
