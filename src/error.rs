//! Error types.
//!
//! Not matching any route and not having expectations are ordinary outcomes
//! and never show up here. The errors below cover the surrounding plumbing:
//!
//! - [`PatternError`]: a route pattern that cannot be parsed.
//! - [`DumpError`]: a dump source that cannot produce a value. These are
//!   caught by [`dump`](crate::dump::dump) and rendered inline.
//! - [`TesterError`]: the crate-level error for suite loading, registry
//!   construction and current-request lookup.
//!
//! # Examples
//!
//! ```
//! use route_tester::error::PatternError;
//!
//! let err = PatternError::Unterminated { pattern: "blog/<id".into() };
//! assert_eq!(err.to_string(), "unterminated parameter in pattern 'blog/<id'");
//! ```

use crate::dump::DumpKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to parse a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `(` without a matching `)` or the other way round
    #[error("unbalanced parentheses in pattern '{pattern}'")]
    UnbalancedGroup { pattern: String },

    /// A `<` without a closing `>`
    #[error("unterminated parameter in pattern '{pattern}'")]
    Unterminated { pattern: String },

    /// `<>` or a bare `:` segment
    #[error("empty parameter name in pattern '{pattern}'")]
    EmptyName { pattern: String },

    /// The same parameter captured twice
    #[error("parameter '{name}' appears more than once in pattern '{pattern}'")]
    DuplicateParam { pattern: String, name: String },

    /// A constraint attached to a parameter the pattern never captures
    #[error("constraint on unknown parameter '{name}' in pattern '{pattern}'")]
    UnknownParam { pattern: String, name: String },

    /// Rejected by the `matchit` backend
    #[error("invalid matchit pattern '{pattern}': {message}")]
    Matchit { pattern: String, message: String },
}

/// Failure to fetch a value for a debug dump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DumpError {
    /// The source has nothing under this name
    #[error("{kind} '{name}' not found")]
    NotFound { kind: DumpKind, name: String },

    /// The source failed while loading the value
    #[error("{0}")]
    Source(String),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum TesterError {
    /// A route pattern failed to parse
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A suite file could not be parsed
    #[error("failed to parse suite {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A suite file could not be read
    #[error("failed to read suite {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two routes registered under the same identifier
    #[error("route '{0}' is defined more than once")]
    DuplicateRoute(String),

    /// Asked to test the current URL outside of a request
    #[error("no current request to take a URL from")]
    NoCurrentRequest,
}

/// Crate-level result alias.
pub type Result<T, E = TesterError> = std::result::Result<T, E>;
