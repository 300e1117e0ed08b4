//! Repository hook configuration model.
//!
//! This module contains the [`RepositoryHook`] type, the record at the
//! center of this crate. It mirrors the hook object of GitHub's repository
//! hooks API and is the serialization target for both directions of that
//! wire format: API responses deserialize into it, and creation or edit
//! request bodies serialize from it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::errors::Error;
use crate::response::HookResponse;

/// Configuration of a single repository webhook.
///
/// A freshly constructed record has every field at its zero or absent
/// value. Fields are populated incrementally, either by deserializing an
/// API response or by client code preparing a request through the chainable
/// `with_*` mutators. The record performs no validation: event names are
/// free-form strings (see [`crate::events`] for the set GitHub documents),
/// no field is required, and no mutator can fail.
///
/// Timestamps are held as [`DateTime<Utc>`], an immutable `Copy` type, so
/// a time value handed into or out of the record is always independent of
/// the caller's copy.
///
/// # Examples
///
/// Deserializing a hook from a GitHub API response:
///
/// ```rust
/// use github_hooks::RepositoryHook;
///
/// let payload = r#"{
///     "id": 1,
///     "name": "web",
///     "active": true,
///     "events": ["push", "pull_request"],
///     "config": {
///         "url": "https://example.com/webhook",
///         "content_type": "json"
///     },
///     "url": "https://api.github.com/repos/octocat/Hello-World/hooks/1",
///     "created_at": "2011-09-06T17:26:27Z",
///     "updated_at": "2011-09-06T20:39:23Z"
/// }"#;
///
/// let hook = RepositoryHook::from_json(payload).unwrap();
/// assert_eq!(hook.id(), 1);
/// assert_eq!(hook.name(), "web");
/// assert!(hook.active());
/// assert_eq!(hook.events(), ["push", "pull_request"]);
/// ```
///
/// Building a hook for a creation request:
///
/// ```rust
/// use github_hooks::{events, RepositoryHook};
///
/// let hook = RepositoryHook::new()
///     .with_name("web")
///     .with_active(true)
///     .with_events(vec![events::PUSH.to_string(), events::ISSUES.to_string()]);
///
/// assert!(hook.to_json().unwrap().contains("\"push\""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryHook {
    /// Whether the hook is currently enabled.
    active: bool,

    /// When the hook was created; assigned by GitHub.
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,

    /// When the hook was last updated; assigned by GitHub.
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,

    /// GitHub-assigned hook ID.
    id: u64,

    /// Event names that trigger the hook, in subscription order.
    events: Vec<String>,

    /// Outcome of the most recent delivery attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    last_response: Option<HookResponse>,

    /// Hook service name; `"web"` for ordinary webhooks.
    name: String,

    /// API URL of the hook itself.
    url: String,

    /// Service-specific configuration, e.g. payload URL and content type.
    config: HashMap<String, String>,
}

impl RepositoryHook {
    /// Creates an empty hook record.
    ///
    /// Every field starts at its zero or absent value, the shape of a hook
    /// that has not been populated from the API yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use github_hooks::RepositoryHook;
    ///
    /// let hook = RepositoryHook::new();
    /// assert!(!hook.active());
    /// assert_eq!(hook.id(), 0);
    /// assert_eq!(hook.created_at(), None);
    /// assert!(hook.events().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the hook is active.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Sets whether the hook is active.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns when the hook was created, if known.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Sets the creation timestamp.
    ///
    /// Pass `None` to clear a previously assigned value.
    pub fn with_created_at(mut self, created_at: Option<DateTime<Utc>>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns when the hook was last updated, if known.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Sets the last-updated timestamp.
    ///
    /// Pass `None` to clear a previously assigned value.
    pub fn with_updated_at(mut self, updated_at: Option<DateTime<Utc>>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Returns the GitHub-assigned hook ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Sets the hook ID.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Returns the subscribed event names in subscription order.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Sets the subscribed event names.
    ///
    /// The sequence is stored as given: order is preserved, duplicates are
    /// kept, and names outside the documented event set are accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use github_hooks::{events, RepositoryHook};
    ///
    /// let hook = RepositoryHook::new()
    ///     .with_events(vec![events::PUSH.to_string(), "my_custom_event".to_string()]);
    /// assert_eq!(hook.events(), ["push", "my_custom_event"]);
    /// ```
    pub fn with_events(mut self, events: Vec<String>) -> Self {
        self.events = events;
        self
    }

    /// Returns the outcome of the most recent delivery attempt, if any.
    pub fn last_response(&self) -> Option<&HookResponse> {
        self.last_response.as_ref()
    }

    /// Sets the most recent delivery outcome.
    ///
    /// Pass `None` to clear a previously assigned value.
    pub fn with_last_response(mut self, last_response: Option<HookResponse>) -> Self {
        self.last_response = last_response;
        self
    }

    /// Returns the hook service name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the hook service name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the API URL of the hook.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sets the API URL of the hook.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Returns the service-specific configuration.
    pub fn config(&self) -> &HashMap<String, String> {
        &self.config
    }

    /// Sets the service-specific configuration.
    ///
    /// Keys and values are stored as given, with no normalization.
    pub fn with_config(mut self, config: HashMap<String, String>) -> Self {
        self.config = config;
        self
    }

    /// Deserializes a hook record from its JSON wire representation.
    ///
    /// Fields missing from the payload are left at their default values, so
    /// partial objects (such as the body of a creation request) parse into a
    /// well-formed record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if the payload is not valid JSON
    /// or a field has an unexpected shape.
    pub fn from_json(payload: &str) -> Result<Self, Error> {
        let hook: Self = serde_json::from_str(payload).map_err(|e| {
            error!("Failed to deserialize hook payload");
            Error::Deserialization(e)
        })?;
        debug!(
            hook_id = hook.id,
            hook_name = %hook.name,
            "Deserialized repository hook"
        );
        Ok(hook)
    }

    /// Serializes the record into its JSON wire representation.
    ///
    /// Absent optional fields are omitted from the output, so a locally
    /// built record serializes into a valid creation or edit request body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the record cannot be encoded.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| {
            error!(hook_id = self.id, "Failed to serialize hook record");
            Error::Serialization(e)
        })
    }
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
