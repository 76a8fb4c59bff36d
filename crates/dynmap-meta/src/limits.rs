//! Centralized limits and thresholds.

/// Maximum container nesting depth followed by recursive classification.
///
/// Well-formed type graphs are finite and acyclic in their generic-argument
/// structure, so this bound is never reached in practice; it exists to keep
/// pathological or adversarial descriptor graphs from overflowing the
/// stack. Past the bound, classification answers conservatively.
pub const MAX_CONTAINER_DEPTH: usize = 64;
