//! Unit tests for URL normalization
//!
//! Tests the `normalize_url()` helper to ensure URLs are matched in one canonical form.

use route_tester::normalize_url;
use std::borrow::Cow;

#[test]
fn test_normalize_already_normalized() {
    // Already-normalized URLs come back borrowed
    assert!(matches!(normalize_url("blog/5"), Cow::Borrowed("blog/5")));
    assert!(matches!(normalize_url(""), Cow::Borrowed("")));
}

#[test]
fn test_normalize_surrounding_slashes() {
    assert_eq!(normalize_url("/blog/5"), "blog/5");
    assert_eq!(normalize_url("blog/5/"), "blog/5");
    assert_eq!(normalize_url("//blog/5//"), "blog/5");
}

#[test]
fn test_normalize_root_variations() {
    assert_eq!(normalize_url("/"), "");
    assert_eq!(normalize_url("//"), "");
    assert_eq!(normalize_url("/?page=1"), "");
}

#[test]
fn test_normalize_drops_query_and_fragment() {
    assert_eq!(normalize_url("search?q=rust"), "search");
    assert_eq!(normalize_url("/docs/intro#setup"), "docs/intro");
    assert_eq!(normalize_url("/docs/?a=1#b"), "docs");
}

#[test]
fn test_normalize_keeps_inner_structure() {
    // Only the edges are touched
    assert_eq!(normalize_url("/a//b/"), "a//b");
    assert_eq!(normalize_url("media/image.png"), "media/image.png");
}
