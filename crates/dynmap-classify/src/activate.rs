//! Dynamic instantiation through the runtime's activation facility.

use dynmap_meta::{ActivationError, Activator, Instance, TypeId};
use thiserror::Error;
use tracing::trace;

/// Dynamic activation of a type failed.
///
/// The single failure kind of the classification surface; the runtime's own
/// construction failure is carried unchanged as the source.
#[derive(Debug, Error)]
#[error("failed to instantiate {type_id:?}")]
pub struct InstantiationError {
    pub type_id: TypeId,
    #[source]
    pub source: ActivationError,
}

/// Construct a default instance of `ty`.
///
/// Requires a publicly accessible parameterless construction path; fails
/// for interfaces, abstract types, types without such a path, and
/// constructor-body failures. No retry, no fallback construction strategy.
/// The returned instance is exclusively owned by the caller.
pub fn instantiate(activator: &dyn Activator, ty: TypeId) -> Result<Instance, InstantiationError> {
    activator.create_instance(ty).map_err(|source| {
        trace!(?ty, %source, "dynamic activation failed");
        InstantiationError {
            type_id: ty,
            source,
        }
    })
}
