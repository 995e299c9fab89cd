//! Test utilities
//!
//! Fixture routes and assertion helpers shared by the integration tests.

#![allow(dead_code)]

use route_tester::*;

/// Install a test logger so `RUST_LOG=debug cargo test` shows matches.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Blog route with controller/action defaults
pub fn blog_route() -> Route {
    Route::new("blog", "blog/<id>")
        .unwrap()
        .defaults([("controller", "blog"), ("action", "article")])
}

/// A small application route table, most specific first
pub fn app_registry() -> RouteRegistry {
    RouteRegistry::new()
        .route(
            Route::new("docs/media", "guide/media(/<file>.<ext>)")
                .unwrap()
                .defaults([("controller", "userguide"), ("action", "media")]),
        )
        .unwrap()
        .route(
            Route::new("blog", "blog/<id>(/<title>)")
                .unwrap()
                .constraint("id", |v| v.chars().all(|c| c.is_ascii_digit()))
                .unwrap()
                .defaults([("controller", "blog"), ("action", "article")]),
        )
        .unwrap()
        .route(
            Route::new("default", "(<controller>(/<action>(/<id>)))")
                .unwrap()
                .defaults([("controller", "welcome"), ("action", "index")]),
        )
        .unwrap()
}

/// Registry containing a single route
pub fn registry_with(route: impl RouteDefinition) -> RouteRegistry {
    RouteRegistry::new().route(route).unwrap()
}

/// Build RouteParams from pairs
pub fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs.iter().copied().collect()
}

/// Assert that a parameter has the expected value
pub fn assert_param_equals(params: &RouteParams, key: &str, expected: &str) {
    let value = params.get(key);
    assert!(
        value.is_some(),
        "Parameter '{}' not found in RouteParams",
        key
    );
    assert_eq!(value.unwrap(), expected, "Parameter '{}' has wrong value", key);
}

/// Assert a comparison line
pub fn assert_comparison(
    report: &ComparisonReport,
    key: &str,
    result: &str,
    expected: &str,
    mismatch: bool,
) {
    let cmp = report
        .get(key)
        .unwrap_or_else(|| panic!("no comparison for '{}'", key));
    assert_eq!(cmp.result.to_string(), result, "result of '{}'", key);
    assert_eq!(cmp.expected.to_string(), expected, "expected of '{}'", key);
    assert_eq!(cmp.mismatch, mismatch, "mismatch flag of '{}'", key);
}
