//! # route-tester
//!
//! Find out which route a URL lands on, and whether that is the route you
//! meant.
//!
//! The tester runs each URL through an ordered [`RouteRegistry`], records the
//! first route that matches along with the parameters it extracted, and
//! diffs those parameters against the ones you expected.
//!
//! ```
//! use route_tester::{compare, Route, RouteParams, RouteRegistry, RouteTester};
//! use indexmap::IndexMap;
//!
//! let registry = RouteRegistry::new()
//!     .route(Route::new("blog", "blog/<id>")?.defaults([("controller", "blog"), ("action", "article")]))?
//!     .route(Route::new("default", "(<controller>(/<action>))")?)?;
//!
//! let mut urls = IndexMap::new();
//! urls.insert("blog/5".to_string(), Some(RouteParams::from([("id", "5")])));
//! urls.insert("nonexistent/path/here".to_string(), None);
//!
//! let cases = RouteTester::new(registry).test(urls);
//!
//! assert_eq!(cases[0].matched_route(), Some("blog"));
//! assert_eq!(cases[0].actual_params().get("action"), Some("article"));
//! assert!(!compare(&cases[0])["id"].mismatch);
//!
//! assert_eq!(cases[1].matched_route(), None);
//! # Ok::<(), route_tester::TesterError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`route`] | [`RouteDefinition`] trait, [`RouteRegistry`], built-in routes |
//! | [`matching`] | pattern syntax used by [`Route`] |
//! | [`tester`] | building [`TestCase`]s |
//! | [`compare`] | per-parameter diff and [`Summary`] |
//! | [`dump`] | config / i18n / message dumps |
//! | [`config`] | TOML suite files |
//! | [`report`] | plain-text output |
//! | `cli` | the `route-tester` command line (feature `cli`) |
//!
//! # Features
//!
//! | Feature | Default | |
//! |---------|---------|---|
//! | `log` | yes | log through the `log` crate |
//! | `tracing` | no | log through the `tracing` crate instead |
//! | `matchit` | no | `MatchitRoute` |
//! | `cli` | yes | the `route-tester` binary |

#[cfg(feature = "cli")]
pub mod cli;
pub mod compare;
pub mod config;
pub mod dump;
pub mod error;
pub mod logging;
pub mod matching;
pub mod params;
pub mod report;
pub mod route;
pub mod tester;

pub use compare::{
    compare, compare_with, CompareMode, ComparisonReport, ParamComparison, ParamValue, Summary,
    NONE_MARKER,
};
pub use config::{load_suite, Suite};
pub use error::{PatternError, TesterError};
pub use matching::normalize_url;
pub use params::{RouteParams, ROUTE_KEY};
pub use report::{render_case, render_dump, render_report};
#[cfg(feature = "matchit")]
pub use route::MatchitRoute;
pub use route::{route_fn, FnRoute, Route, RouteDefinition, RouteRegistry};
pub use tester::{build_test_cases, RequestContext, RouteTester, TestCase, TestInput};
