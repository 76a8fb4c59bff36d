//! Reserved namespace tokens of the standard type universe.
//!
//! Origin classification is a naming-convention signal: a type belongs to
//! the builtin universe when its qualified namespace token starts with one
//! of these prefixes. User types are free to implement the same
//! capabilities without ever matching here.

/// Prefix of every standard-library namespace token.
pub const BUILTIN_NAMESPACE: &str = "std";

/// Prefix of the standard collections sub-namespace. Matching this is the
/// coarse "enumerable by origin" signal, distinct from capability-based
/// enumerable detection.
pub const COLLECTIONS_NAMESPACE: &str = "std::collections";
