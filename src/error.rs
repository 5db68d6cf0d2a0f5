//! Error types for page navigation.
//!
//! Most failures in this crate are deliberately local: a malformed section is
//! skipped, a missing menu container leaves the page untouched, and an
//! unresolved link target turns the click into a no-op. These variants exist
//! so that callers (and the bridges) can still observe what went wrong.

use thiserror::Error;

/// Errors that can occur while installing or driving page navigation.
#[derive(Debug, Error)]
pub enum NavError {
    /// The configuration parsed but describes an unusable setup.
    #[error("invalid navigation config: {0}")]
    InvalidConfig(String),

    /// The configuration was not valid JSON for [`crate::NavConfig`].
    #[error("config JSON error: {0}")]
    Config(#[from] serde_json::Error),

    /// The HTML source could not be read into a document.
    #[error("failed to parse HTML: {0}")]
    Parse(std::io::Error),

    /// The document could not be written back out as HTML.
    #[error("failed to serialize HTML: {0}")]
    Serialize(std::io::Error),

    /// No element carries the configured menu container id.
    #[error("menu container #{0} not found")]
    MissingContainer(String),

    /// A navigation link points at an id that no registered section has.
    #[error("navigation target #{0} does not resolve to a section")]
    UnresolvedTarget(String),

    /// A navigation link's href is not a `#fragment` reference.
    #[error("link href {0:?} is not a fragment reference")]
    MalformedHref(String),

    /// The live document rejected an operation.
    #[error("document host error: {0}")]
    Host(String),
}
