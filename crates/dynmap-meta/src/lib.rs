//! Runtime type metadata model.
//!
//! This crate provides the foundational vocabulary for runtime type
//! classification:
//!
//! - Id newtypes for registered types and generic templates (`TypeId`,
//!   `TemplateId`), with pre-assigned ids for the primitive universe and the
//!   well-known enumerable/map templates
//! - The immutable [`TypeDescriptor`] record a runtime exposes for a type
//! - The injected capability seams ([`TypeMetadata`], [`Activator`]) that
//!   decouple classification logic from any concrete runtime
//! - [`TypeRegistry`], a concurrent descriptor store implementing both seams
//!
//! Descriptors are immutable facts: once registered they are never mutated,
//! so every lookup is a consistent snapshot and all operations are reentrant.

pub mod descriptor;
pub mod ids;
pub mod limits;
pub mod provider;
pub mod registry;
pub mod well_known;

pub use descriptor::{GenericInstance, PrimitiveKind, TypeDescriptor, TypeKind};
pub use ids::{TemplateId, TypeId};
pub use provider::{ActivationError, Activator, Instance, TypeMetadata};
pub use registry::{TemplateInfo, TypeRegistry};
pub use well_known::{BUILTIN_NAMESPACE, COLLECTIONS_NAMESPACE};
