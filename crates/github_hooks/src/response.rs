//! Webhook delivery-response types.
//!
//! This module contains the type representing the outcome GitHub records
//! for the most recent delivery attempt of a repository hook.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

/// Outcome of the most recent delivery attempt for a repository hook.
///
/// GitHub reports the result of the last POST to the hook's target URL as
/// part of the hook object. Every field is optional: a hook that has never
/// fired reports all of them as null, and the record round-trips such
/// payloads untouched.
///
/// # Examples
///
/// ```rust
/// use github_hooks::HookResponse;
///
/// let response: HookResponse = serde_json::from_str(
///     r#"{"code": 200, "status": "active", "message": "OK"}"#,
/// ).unwrap();
///
/// assert_eq!(response.code, Some(200));
/// assert_eq!(response.status.as_deref(), Some("active"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookResponse {
    /// HTTP status code returned by the target URL, if a delivery reached it.
    pub code: Option<i64>,

    /// Delivery status as reported by GitHub, e.g. `"active"` or `"unused"`.
    pub status: Option<String>,

    /// Response body excerpt or error description from the last delivery.
    pub message: Option<String>,
}
