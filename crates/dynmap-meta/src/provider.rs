//! Capability seams between classification logic and a concrete runtime.
//!
//! Classifiers never talk to a runtime directly; they take
//! `&dyn TypeMetadata` so the same logic runs against a live
//! [`TypeRegistry`](crate::TypeRegistry) or against synthetic descriptors
//! in tests. Dynamic activation is a separate seam because it is the only
//! operation with a side effect (allocation) and the only one that can
//! fail.

use std::any::Any;

use thiserror::Error;

use crate::descriptor::TypeDescriptor;
use crate::ids::TypeId;

/// A freshly constructed instance of a dynamically described type.
/// Exclusively owned by the caller; the activator retains no reference.
pub type Instance = Box<dyn Any + Send>;

/// Read-only access to a runtime's type metadata.
///
/// Implementations must be consistent: repeated lookups of the same id
/// return equal descriptors. Descriptors are returned by value as immutable
/// snapshots.
pub trait TypeMetadata {
    /// Look up the descriptor for `ty`. `None` means the id is not known
    /// to this provider.
    fn lookup(&self, ty: TypeId) -> Option<TypeDescriptor>;
}

/// The runtime's dynamic-activation facility: construct a default instance
/// of a type from its descriptor alone.
pub trait Activator {
    /// Construct a default instance of `ty` through its parameterless
    /// construction path.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is not known to the provider; passing an unknown id
    /// is a contract violation, not a recoverable condition.
    fn create_instance(&self, ty: TypeId) -> Result<Instance, ActivationError>;
}

/// Why dynamic activation of a type failed.
///
/// Carries the simple type name, not the id: activation failures surface to
/// humans configuring a runtime, and the id alone is meaningless to them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActivationError {
    #[error("`{0}` is an interface and cannot be instantiated")]
    Interface(String),

    #[error("`{0}` is abstract and cannot be instantiated")]
    Abstract(String),

    #[error("`{0}` has no registered parameterless constructor")]
    MissingConstructor(String),

    #[error("constructor of `{0}` failed: {1}")]
    ConstructorFailed(String, String),
}
