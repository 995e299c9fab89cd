//! Building test cases.
//!
//! A [`TestCase`] records what happened when one URL was run through a
//! [`RouteRegistry`]: which route matched first and what parameters it
//! produced. Callers may attach the parameters they *expected*, which the
//! [`compare`](crate::compare) module then diffs against the actual ones.
//!
//! # Input forms
//!
//! [`TestInput`] accepts a single URL, a list of URLs, or an ordered mapping
//! from URL to optional expectations. Every entry yields one case and output
//! order always follows input order; a URL listed twice is tested twice.
//!
//! ```
//! use indexmap::IndexMap;
//! use route_tester::{build_test_cases, Route, RouteParams, RouteRegistry};
//!
//! let registry = RouteRegistry::new()
//!     .route(Route::new("blog", "blog/<id>")?.defaults([("controller", "blog")]))?;
//!
//! // One URL
//! let cases = build_test_cases(&registry, "blog/5");
//! assert_eq!(cases[0].matched_route(), Some("blog"));
//!
//! // URLs with expectations
//! let mut urls = IndexMap::new();
//! urls.insert("blog/5".to_string(), Some(RouteParams::from([("id", "5")])));
//! urls.insert("about".to_string(), None);
//!
//! let cases = build_test_cases(&registry, urls);
//! assert_eq!(cases.len(), 2);
//! assert!(cases[1].matched_route().is_none());
//! # Ok::<(), route_tester::TesterError>(())
//! ```

use crate::error::{Result, TesterError};
use crate::params::ROUTE_KEY;
use crate::route::RouteRegistry;
use crate::{debug_log, info_log, RouteParams};
use indexmap::IndexMap;

// ============================================================================
// TestInput
// ============================================================================

/// URLs to test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestInput {
    /// A single URL without expectations
    Single(String),
    /// URLs in test order, each with optional expected parameters
    Many(Vec<(String, Option<RouteParams>)>),
}

impl TestInput {
    /// Number of URLs in the input.
    pub fn len(&self) -> usize {
        match self {
            TestInput::Single(_) => 1,
            TestInput::Many(urls) => urls.len(),
        }
    }

    /// Return `true` if there is nothing to test.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_pairs(self) -> Vec<(String, Option<RouteParams>)> {
        match self {
            TestInput::Single(url) => vec![(url, None)],
            TestInput::Many(urls) => urls,
        }
    }
}

impl From<&str> for TestInput {
    fn from(url: &str) -> Self {
        TestInput::Single(url.to_string())
    }
}

impl From<String> for TestInput {
    fn from(url: String) -> Self {
        TestInput::Single(url)
    }
}

impl From<Vec<String>> for TestInput {
    fn from(urls: Vec<String>) -> Self {
        TestInput::Many(urls.into_iter().map(|url| (url, None)).collect())
    }
}

impl From<&[&str]> for TestInput {
    fn from(urls: &[&str]) -> Self {
        TestInput::Many(urls.iter().map(|url| ((*url).to_string(), None)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TestInput {
    fn from(urls: [&str; N]) -> Self {
        TestInput::from(&urls[..])
    }
}

impl From<IndexMap<String, Option<RouteParams>>> for TestInput {
    fn from(urls: IndexMap<String, Option<RouteParams>>) -> Self {
        TestInput::Many(urls.into_iter().collect())
    }
}

impl From<IndexMap<String, RouteParams>> for TestInput {
    fn from(urls: IndexMap<String, RouteParams>) -> Self {
        TestInput::Many(
            urls.into_iter()
                .map(|(url, expected)| (url, Some(expected)))
                .collect(),
        )
    }
}

// ============================================================================
// TestCase
// ============================================================================

/// Outcome of running one URL through the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    url: String,
    matched_route: Option<String>,
    actual_params: RouteParams,
    expected_params: Option<RouteParams>,
}

impl TestCase {
    /// A case for `url` that has not matched anything yet.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            matched_route: None,
            actual_params: RouteParams::new(),
            expected_params: None,
        }
    }

    /// Attach expected parameters.
    pub fn with_expected(mut self, expected: RouteParams) -> Self {
        self.expected_params = Some(expected);
        self
    }

    /// Record a match.
    ///
    /// `params` come from the route; the identifier is added under
    /// [`ROUTE_KEY`], replacing any value the route put there.
    pub fn with_match(mut self, route: impl Into<String>, params: RouteParams) -> Self {
        let route = route.into();
        self.actual_params = params;
        self.actual_params.insert(ROUTE_KEY, route.clone());
        self.matched_route = Some(route);
        self
    }

    /// The URL that was tested.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Identifier of the route that matched, if any.
    pub fn matched_route(&self) -> Option<&str> {
        self.matched_route.as_deref()
    }

    /// Parameters produced by the matching route; empty if nothing matched.
    pub fn actual_params(&self) -> &RouteParams {
        &self.actual_params
    }

    /// Parameters the caller expected, if any were given.
    pub fn expected_params(&self) -> Option<&RouteParams> {
        self.expected_params.as_ref()
    }

    /// Return `true` if some route matched.
    pub fn is_matched(&self) -> bool {
        self.matched_route.is_some()
    }

    /// Return `true` if expectations were attached.
    pub fn has_expectations(&self) -> bool {
        self.expected_params.is_some()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Run every input URL through `routes`, first match wins.
///
/// Routes are tried in registration order. A URL nothing matches yields a
/// case with no matched route and empty parameters; that is a normal result.
pub fn build_test_cases(routes: &RouteRegistry, input: impl Into<TestInput>) -> Vec<TestCase> {
    input
        .into()
        .into_pairs()
        .into_iter()
        .map(|(url, expected)| {
            let mut case = TestCase::new(url);
            if let Some(expected) = expected {
                case = case.with_expected(expected);
            }
            run_case(routes, case)
        })
        .collect()
}

fn run_case(routes: &RouteRegistry, case: TestCase) -> TestCase {
    let found = routes
        .iter()
        .find_map(|route| route.matches(case.url()).map(|params| (route, params)));

    match found {
        Some((route, params)) => {
            debug_log!("'{}' matched route '{}'", case.url(), route.identifier());
            case.with_match(route.identifier(), params)
        }
        None => {
            info_log!("'{}' matched no route", case.url());
            case
        }
    }
}

// ============================================================================
// Request context
// ============================================================================

/// Supplies the URL of the request being served.
///
/// Implemented for closures and for plain strings (a fixed URL).
pub trait RequestContext {
    /// The current request's URL, or `None` outside of a request.
    fn current_url(&self) -> Option<String>;
}

impl<F> RequestContext for F
where
    F: Fn() -> Option<String>,
{
    fn current_url(&self) -> Option<String> {
        self()
    }
}

impl RequestContext for str {
    fn current_url(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl RequestContext for String {
    fn current_url(&self) -> Option<String> {
        Some(self.clone())
    }
}

/// Route tester bound to a registry.
///
/// ```
/// use route_tester::{Route, RouteRegistry, RouteTester};
///
/// let registry = RouteRegistry::new().route(Route::new("home", "")?)?;
/// let tester = RouteTester::new(registry);
///
/// let cases = tester.test_current("/")?;
/// assert_eq!(cases[0].matched_route(), Some("home"));
/// # Ok::<(), route_tester::TesterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTester {
    registry: RouteRegistry,
}

impl RouteTester {
    /// Create a tester over `registry`.
    pub fn new(registry: RouteRegistry) -> Self {
        Self { registry }
    }

    /// The routes this tester walks.
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Build test cases for `input`. See [`build_test_cases`].
    pub fn test(&self, input: impl Into<TestInput>) -> Vec<TestCase> {
        build_test_cases(&self.registry, input)
    }

    /// Test the URL of the current request.
    pub fn test_current<C>(&self, context: &C) -> Result<Vec<TestCase>>
    where
        C: RequestContext + ?Sized,
    {
        let url = context
            .current_url()
            .ok_or(TesterError::NoCurrentRequest)?;
        Ok(self.test(url))
    }
}
