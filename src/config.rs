//! Suite files.
//!
//! A suite is a TOML document listing routes, the URLs to test against them
//! and, optionally, the dump tables to render:
//!
//! ```toml
//! [[route]]
//! name = "blog"
//! pattern = "blog/<id>(/<title>)"
//! defaults = { controller = "blog", action = "article" }
//!
//! [[case]]
//! url = "blog/5/hello"
//! expected = { route = "blog", id = 5, title = "hello" }
//!
//! [[case]]
//! url = "about"
//!
//! [dump.config]
//! Database = "database"
//!
//! [dump.values.config]
//! database = { host = "localhost", port = 5432 }
//! ```
//!
//! Cases keep their file order. Expected values may be written as strings,
//! integers, floats or booleans; they are compared in their string form.

use crate::dump::{DumpKind, MapSource};
use crate::error::{Result, TesterError};
use crate::route::{Route, RouteRegistry};
use crate::tester::TestInput;
use crate::{debug_log, RouteParams};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// A parsed suite file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Suite {
    #[serde(default, rename = "route")]
    pub routes: Vec<RouteSpec>,
    #[serde(default, rename = "case")]
    pub cases: Vec<CaseSpec>,
    #[serde(default)]
    pub dump: DumpSpec,
}

/// One `[[route]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteSpec {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub defaults: IndexMap<String, Scalar>,
}

/// One `[[case]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    pub url: String,
    #[serde(default)]
    pub expected: Option<IndexMap<String, Scalar>>,
}

/// The `[dump.*]` tables: `label = "name"` per entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DumpSpec {
    #[serde(default)]
    pub config: IndexMap<String, String>,
    #[serde(default)]
    pub i18n: IndexMap<String, String>,
    #[serde(default)]
    pub message: IndexMap<String, String>,
    /// Inline values served by [`Suite::dump_source`]
    #[serde(default)]
    pub values: DumpValues,
}

/// The `[dump.values.*]` tables: `name = <any value>` per kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DumpValues {
    #[serde(default)]
    pub config: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub i18n: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub message: IndexMap<String, serde_json::Value>,
}

impl DumpSpec {
    /// Entries for `kind`.
    pub fn entries(&self, kind: DumpKind) -> &IndexMap<String, String> {
        match kind {
            DumpKind::Config => &self.config,
            DumpKind::I18n => &self.i18n,
            DumpKind::Message => &self.message,
        }
    }
}

/// A scalar TOML value used as a parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Boolean(b) => write!(f, "{b}"),
        }
    }
}

fn to_params(values: &IndexMap<String, Scalar>) -> RouteParams {
    values.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
}

impl Suite {
    /// Parse a suite from TOML text.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Build the ordered route registry.
    ///
    /// Fails on an invalid pattern or a repeated route name.
    pub fn registry(&self) -> Result<RouteRegistry> {
        let mut registry = RouteRegistry::new();
        for spec in &self.routes {
            let route = Route::new(spec.name.as_str(), &spec.pattern)?
                .defaults(spec.defaults.iter().map(|(k, v)| (k.clone(), v.to_string())));
            registry.push(route)?;
        }
        Ok(registry)
    }

    /// The suite's cases as tester input, one entry per `[[case]]` in file order.
    pub fn input(&self) -> TestInput {
        TestInput::Many(
            self.cases
                .iter()
                .map(|case| (case.url.clone(), case.expected.as_ref().map(to_params)))
                .collect(),
        )
    }

    /// A [`MapSource`] serving the suite's inline dump values.
    pub fn dump_source(&self) -> MapSource {
        let values = &self.dump.values;
        let mut source = MapSource::new();
        for (kind, table) in [
            (DumpKind::Config, &values.config),
            (DumpKind::I18n, &values.i18n),
            (DumpKind::Message, &values.message),
        ] {
            for (name, value) in table {
                source.set(kind, name.as_str(), value.clone());
            }
        }
        source
    }
}

/// Read and parse the suite at `path`.
pub fn load_suite(path: impl AsRef<Path>) -> Result<Suite> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| TesterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let suite = Suite::from_toml_str(&text).map_err(|source| TesterError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    debug_log!(
        "loaded suite {} ({} routes, {} cases)",
        path.display(),
        suite.routes.len(),
        suite.cases.len()
    );
    Ok(suite)
}
