//! Error types for the NEARWATCH core.

use thiserror::Error;

/// Top-level error type for store construction and configuration.
///
/// Lookup misses are never errors — `get_by_designation` and
/// `get_by_name` return `None` for absence, which is a normal outcome.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A close approach references a designation no NEO carries.
    ///
    /// Raised only under [`LinkPolicy::Fail`](crate::LinkPolicy::Fail);
    /// the default policy leaves the approach unresolved instead.
    #[error("unresolved close approach #{index}: no NEO with designation {designation:?}")]
    UnresolvedApproach {
        /// The foreign-key designation that matched nothing.
        designation: String,
        /// Position of the approach in the input collection.
        index: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, DatabaseError>;
