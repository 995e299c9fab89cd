//! Debug dumps of configuration, localization and message catalogs.
//!
//! A dump walks a list of `label → name` entries and fetches each name from
//! a [`DumpSource`]. Fetch failures are caught per entry and kept as an
//! inline message, so one broken entry never hides the others.
//!
//! ```
//! use indexmap::IndexMap;
//! use route_tester::dump::{dump, DumpBody, DumpKind, MapSource};
//! use serde_json::json;
//!
//! let source = MapSource::new().insert(DumpKind::Config, "database", json!({"host": "localhost"}));
//!
//! let mut entries = IndexMap::new();
//! entries.insert("Database".to_string(), "database".to_string());
//! entries.insert("Cache".to_string(), "cache".to_string());
//!
//! let dump = dump(DumpKind::Config, &entries, &source);
//! assert!(matches!(dump.sections[0].body, DumpBody::Value(_)));
//! assert!(matches!(dump.sections[1].body, DumpBody::Failed(_)));
//! ```

use crate::error::DumpError;
use crate::{debug_log, warn_log};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Prefix of the inline message that replaces a failed fetch.
pub const FAILURE_PREFIX: &str = "Something went terribly wrong. Error message: ";

/// What a dump shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpKind {
    /// Configuration groups
    Config,
    /// Translation tables
    I18n,
    /// Message catalogs
    Message,
}

impl DumpKind {
    /// Title printed above the dump.
    pub fn heading(self) -> &'static str {
        match self {
            DumpKind::Config => "Config Dump",
            DumpKind::I18n => "I18n Dump",
            DumpKind::Message => "Message Dump",
        }
    }
}

impl fmt::Display for DumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DumpKind::Config => "config",
            DumpKind::I18n => "i18n",
            DumpKind::Message => "message",
        })
    }
}

/// Where dumped values come from.
pub trait DumpSource {
    /// Load the value stored under `name`.
    fn fetch(&self, kind: DumpKind, name: &str) -> Result<Value, DumpError>;
}

impl<F> DumpSource for F
where
    F: Fn(DumpKind, &str) -> Result<Value, DumpError>,
{
    fn fetch(&self, kind: DumpKind, name: &str) -> Result<Value, DumpError> {
        self(kind, name)
    }
}

/// In-memory [`DumpSource`].
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<(DumpKind, String), Value>,
}

impl MapSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn insert(mut self, kind: DumpKind, name: impl Into<String>, value: Value) -> Self {
        self.set(kind, name, value);
        self
    }

    /// Store `value` under `name`.
    pub fn set(&mut self, kind: DumpKind, name: impl Into<String>, value: Value) {
        self.values.insert((kind, name.into()), value);
    }
}

impl DumpSource for MapSource {
    fn fetch(&self, kind: DumpKind, name: &str) -> Result<Value, DumpError> {
        self.values
            .get(&(kind, name.to_string()))
            .cloned()
            .ok_or_else(|| DumpError::NotFound {
                kind,
                name: name.to_string(),
            })
    }
}

/// Content of one dump section.
#[derive(Debug, Clone, PartialEq)]
pub enum DumpBody {
    /// The fetched value
    Value(Value),
    /// The inline failure message
    Failed(String),
}

/// One labelled entry of a dump.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpSection {
    pub label: String,
    pub name: String,
    pub body: DumpBody,
}

/// A complete dump, sections in entry order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dump {
    pub kind: DumpKind,
    pub sections: Vec<DumpSection>,
}

impl Dump {
    /// Number of sections whose fetch failed.
    pub fn failures(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.body, DumpBody::Failed(_)))
            .count()
    }
}

/// Fetch every entry of `entries` (`label → name`) from `source`.
pub fn dump<S>(kind: DumpKind, entries: &IndexMap<String, String>, source: &S) -> Dump
where
    S: DumpSource + ?Sized,
{
    let sections = entries
        .iter()
        .map(|(label, name)| {
            let body = match source.fetch(kind, name) {
                Ok(value) => {
                    debug_log!("dumped {} '{}'", kind, name);
                    DumpBody::Value(value)
                }
                Err(err) => {
                    warn_log!("failed to dump {} '{}': {}", kind, name, err);
                    DumpBody::Failed(format!("{FAILURE_PREFIX}{err}"))
                }
            };
            DumpSection {
                label: label.clone(),
                name: name.clone(),
                body,
            }
        })
        .collect();

    Dump { kind, sections }
}
