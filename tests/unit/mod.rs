//! Unit tests module
//!
//! Contains unit tests for individual functions and components.

mod dump; // dump sections and inline failures
mod matching; // pattern syntax through Route
mod params; // RouteParams construction and merging
mod path_normalization_tests; // normalize_url
