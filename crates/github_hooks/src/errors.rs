//! Error types for hook model operations.
//!
//! The model types in this crate cannot fail on their own: accessors and
//! mutators perform no validation and no I/O. The only failure modes come
//! from crossing the JSON wire boundary, and this module defines them.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur when converting hook records to or from their JSON
/// wire representation.
///
/// ## Examples
///
/// ```rust
/// use github_hooks::{Error, RepositoryHook};
///
/// match RepositoryHook::from_json("not json") {
///     Ok(hook) => println!("Hook {} parsed", hook.id()),
///     Err(Error::Deserialization(source)) => eprintln!("Bad payload: {}", source),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error deserializing a hook payload received from GitHub.
    ///
    /// This error occurs when a payload cannot be parsed into the expected
    /// record shape. This may indicate:
    /// - A response body that is not JSON at all
    /// - A field carrying a value of the wrong type
    /// - Corrupted response data
    #[error("Failed to deserialize hook payload: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Error serializing a hook record for a GitHub request.
    ///
    /// This error occurs when a record cannot be encoded as JSON. With the
    /// field types this crate uses it is not expected in practice, but the
    /// encoder's failure mode is surfaced rather than swallowed.
    #[error("Failed to serialize hook record: {0}")]
    Serialization(#[source] serde_json::Error),
}
