//! Known webhook event-type identifiers.
//!
//! GitHub identifies hook triggers by plain strings. The constants in this
//! module name the event set documented for the repository hooks API and
//! exist for readability when building the event list of a
//! [`RepositoryHook`](crate::RepositoryHook). Nothing validates against
//! this set: the API accepts arbitrary event names, so callers may use
//! strings that do not appear here.

/// Any git push to the repository.
pub const PUSH: &str = "push";

/// Any time an issue is opened or closed.
pub const ISSUES: &str = "issues";

/// Any time an issue is commented on.
pub const ISSUE_COMMENT: &str = "issue_comment";

/// Any time a commit is commented on.
pub const COMMIT_COMMENT: &str = "commit_comment";

/// Any time a pull request is opened, closed, or synchronized.
pub const PULL_REQUEST: &str = "pull_request";

/// Any time a commit is commented on from within a pull request review.
pub const PULL_REQUEST_REVIEW_COMMENT: &str = "pull_request_review_comment";

/// Any time a wiki page is updated.
pub const GOLLUM: &str = "gollum";

/// Any time a user watches the repository.
pub const WATCH: &str = "watch";

/// Any time a download is added to the repository.
pub const DOWNLOAD: &str = "download";

/// Any time the repository is forked.
pub const FORK: &str = "fork";

/// Any time a patch is applied to the repository from the fork queue.
pub const FORK_APPLY: &str = "fork_apply";

/// Any time a user is added as a collaborator to a non-organization
/// repository.
pub const MEMBER: &str = "member";

/// Any time the repository changes from private to public.
pub const PUBLIC: &str = "public";

/// Any time a team is added or modified on the repository.
pub const TEAM_ADD: &str = "team_add";

/// Any time a commit status update is received.
pub const STATUS: &str = "status";

/// Every event name in this module, in declaration order.
pub const KNOWN_EVENTS: &[&str] = &[
    PUSH,
    ISSUES,
    ISSUE_COMMENT,
    COMMIT_COMMENT,
    PULL_REQUEST,
    PULL_REQUEST_REVIEW_COMMENT,
    GOLLUM,
    WATCH,
    DOWNLOAD,
    FORK,
    FORK_APPLY,
    MEMBER,
    PUBLIC,
    TEAM_ADD,
    STATUS,
];

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
