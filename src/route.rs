//! Routes and the ordered registry the tester walks.
//!
//! The tester only needs two things from a route: a stable identifier and a
//! way to test a URL. That is the [`RouteDefinition`] trait. Anything that
//! can answer "does this URL match, and with which parameters" can be
//! registered, whether it wraps a host framework's router or is one of the
//! implementations shipped here:
//!
//! | Type | Matching |
//! |------|----------|
//! | [`Route`] | `<param>` / `:param` segments, optional `( ... )` groups, defaults |
//! | [`FnRoute`] | a closure, see [`route_fn`] |
//! | `MatchitRoute` | a single [`matchit`](https://docs.rs/matchit) entry (feature `matchit`) |
//!
//! # Example
//!
//! ```
//! use route_tester::{Route, RouteDefinition, RouteRegistry};
//!
//! let registry = RouteRegistry::new()
//!     .route(Route::new("blog", "blog/<id>(/<title>)")?
//!         .defaults([("controller", "blog"), ("action", "article")]))?
//!     .route(Route::new("default", "(<controller>(/<action>))")?
//!         .defaults([("controller", "welcome"), ("action", "index")]))?;
//!
//! assert_eq!(registry.len(), 2);
//! let params = registry.get("blog").unwrap().matches("blog/5").unwrap();
//! assert_eq!(params.get("id"), Some("5"));
//! assert_eq!(params.get("action"), Some("article"));
//! # Ok::<(), route_tester::TesterError>(())
//! ```

use crate::error::{PatternError, TesterError};
use crate::matching::{compile, normalize_url, CompiledPattern};
use crate::RouteParams;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// RouteDefinition trait
// ============================================================================

/// Something a URL can be tested against.
///
/// Implementations must be pure: the same URL always yields the same result.
pub trait RouteDefinition: Send + Sync + 'static {
    /// Stable identifier reported for URLs this route matches.
    fn identifier(&self) -> &str;

    /// Test `url`, returning the extracted parameters on success.
    fn matches(&self, url: &str) -> Option<RouteParams>;
}

// ============================================================================
// Pattern route
// ============================================================================

type Constraint = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Route matched by a compiled pattern.
///
/// See [`matching`](crate::matching) for the pattern syntax. Parameters not
/// captured by the URL fall back to [`defaults`](Self::defaults).
#[derive(Clone)]
pub struct Route {
    name: String,
    pattern: CompiledPattern,
    defaults: RouteParams,
    constraints: HashMap<String, Constraint>,
}

impl Route {
    /// Compile `pattern` into a route identified by `name`.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            name: name.into(),
            pattern: compile(pattern)?,
            defaults: RouteParams::new(),
            constraints: HashMap::new(),
        })
    }

    /// Add default parameter values.
    ///
    /// Captured values take precedence over defaults.
    pub fn defaults<I, K, V>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.defaults.extend(defaults);
        self
    }

    /// Only accept captures of `param` for which `check` returns `true`.
    ///
    /// Fails if the pattern has no such parameter.
    ///
    /// ```
    /// use route_tester::{Route, RouteDefinition};
    ///
    /// let route = Route::new("article", "blog/<id>")?
    ///     .constraint("id", |v| v.chars().all(|c| c.is_ascii_digit()))?;
    ///
    /// assert!(route.matches("blog/12").is_some());
    /// assert!(route.matches("blog/latest").is_none());
    /// # Ok::<(), route_tester::error::PatternError>(())
    /// ```
    pub fn constraint<F>(mut self, param: &str, check: F) -> Result<Self, PatternError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        if !self.pattern.param_names().iter().any(|p| p == param) {
            return Err(PatternError::UnknownParam {
                pattern: self.pattern.source().to_string(),
                name: param.to_string(),
            });
        }
        self.constraints.insert(param.to_string(), Arc::new(check));
        Ok(self)
    }

    /// The route's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern text this route was compiled from.
    pub fn pattern(&self) -> &str {
        self.pattern.source()
    }

    /// Default parameter values.
    pub fn default_params(&self) -> &RouteParams {
        &self.defaults
    }
}

impl RouteDefinition for Route {
    fn identifier(&self) -> &str {
        &self.name
    }

    fn matches(&self, url: &str) -> Option<RouteParams> {
        let accept = |name: &str, value: &str| {
            self.constraints
                .get(name)
                .map_or(true, |check| check(value))
        };
        let captured = self.pattern.match_url(url, &accept)?;
        let mut params = self.defaults.clone();
        params.extend(captured);
        Some(params)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("pattern", &self.pattern.source())
            .field("defaults", &self.defaults)
            .field("constraints", &self.constraints.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// route_fn helper
// ============================================================================

/// Route backed by a closure. Created by [`route_fn`].
pub struct FnRoute<F> {
    identifier: String,
    matcher: F,
}

/// Create a route from an identifier and a matching closure.
///
/// The closure sees the URL after [`normalize_url`], like every other route
/// type: no query string or fragment, no surrounding slashes. Handy for
/// wrapping a host router or for fixtures:
///
/// ```
/// use route_tester::{route_fn, RouteDefinition, RouteParams};
///
/// let health = route_fn("health", |url| {
///     (url == "healthz").then(|| RouteParams::from([("controller", "health")]))
/// });
/// assert_eq!(health.identifier(), "health");
/// assert!(health.matches("healthz").is_some());
/// assert!(health.matches("/healthz/?verbose=1").is_some());
/// assert!(health.matches("readyz").is_none());
/// ```
pub fn route_fn<F>(identifier: impl Into<String>, matcher: F) -> FnRoute<F>
where
    F: Fn(&str) -> Option<RouteParams> + Send + Sync + 'static,
{
    FnRoute {
        identifier: identifier.into(),
        matcher,
    }
}

impl<F> RouteDefinition for FnRoute<F>
where
    F: Fn(&str) -> Option<RouteParams> + Send + Sync + 'static,
{
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn matches(&self, url: &str) -> Option<RouteParams> {
        (self.matcher)(&*normalize_url(url))
    }
}

impl<F> fmt::Debug for FnRoute<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRoute")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// matchit-backed route
// ============================================================================

/// Route backed by a single [`matchit`] entry.
///
/// Uses matchit's syntax (`/blog/{id}`, `/files/{*path}`). URLs are
/// normalized the same way as for [`Route`] and given a leading slash.
#[cfg(feature = "matchit")]
pub struct MatchitRoute {
    name: String,
    path: String,
    router: matchit::Router<()>,
    defaults: RouteParams,
}

#[cfg(feature = "matchit")]
impl MatchitRoute {
    /// Register `path` as the route's only entry.
    pub fn new(name: impl Into<String>, path: &str) -> Result<Self, PatternError> {
        let path = format!("/{}", path.trim_start_matches('/'));
        let mut router = matchit::Router::new();
        router
            .insert(path.clone(), ())
            .map_err(|err| PatternError::Matchit {
                pattern: path.clone(),
                message: err.to_string(),
            })?;
        Ok(Self {
            name: name.into(),
            path,
            router,
            defaults: RouteParams::new(),
        })
    }

    /// Add default parameter values.
    pub fn defaults<I, K, V>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.defaults.extend(defaults);
        self
    }

    /// The registered matchit path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(feature = "matchit")]
impl RouteDefinition for MatchitRoute {
    fn identifier(&self) -> &str {
        &self.name
    }

    fn matches(&self, url: &str) -> Option<RouteParams> {
        let path = format!("/{}", normalize_url(url));
        let matched = self.router.at(&path).ok()?;
        let mut params = self.defaults.clone();
        params.extend(matched.params.iter());
        Some(params)
    }
}

#[cfg(feature = "matchit")]
impl fmt::Debug for MatchitRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchitRoute")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("defaults", &self.defaults)
            .finish()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Ordered set of routes.
///
/// Iteration order is registration order; the tester relies on it to decide
/// which route wins when several could match.
#[derive(Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<Arc<dyn RouteDefinition>>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push`](Self::push).
    pub fn route(mut self, route: impl RouteDefinition) -> Result<Self, TesterError> {
        self.push(route)?;
        Ok(self)
    }

    /// Append a route.
    ///
    /// Identifiers must be unique within a registry.
    pub fn push(&mut self, route: impl RouteDefinition) -> Result<(), TesterError> {
        self.push_shared(Arc::new(route))
    }

    /// Append a route that is already shared.
    pub fn push_shared(&mut self, route: Arc<dyn RouteDefinition>) -> Result<(), TesterError> {
        if self.get(route.identifier()).is_some() {
            return Err(TesterError::DuplicateRoute(route.identifier().to_string()));
        }
        self.routes.push(route);
        Ok(())
    }

    /// Look up a route by identifier.
    pub fn get(&self, identifier: &str) -> Option<&Arc<dyn RouteDefinition>> {
        self.routes.iter().find(|r| r.identifier() == identifier)
    }

    /// Iterate routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn RouteDefinition>> {
        self.routes.iter()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Return `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.routes.iter().map(|r| r.identifier()))
            .finish()
    }
}
