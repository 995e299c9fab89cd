//! Integration tests for suite files
//!
//! Loads `tests/fixtures/app_routes.toml` and runs it end to end.

mod common;

use common::*;
use route_tester::dump::{dump, DumpBody, DumpKind};
use route_tester::*;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/app_routes.toml")
}

fn run_fixture() -> (Suite, Vec<TestCase>) {
    init_logger();
    let suite = load_suite(fixture()).unwrap();
    let tester = RouteTester::new(suite.registry().unwrap());
    let cases = tester.test(suite.input());
    (suite, cases)
}

#[test]
fn test_suite_cases_in_file_order() {
    let (_, cases) = run_fixture();
    let urls: Vec<_> = cases.iter().map(TestCase::url).collect();
    assert_eq!(
        urls,
        [
            "guide/media/image.png",
            "blog/5/some-title",
            "blog/007",
            "welcome",
            "a/b/c/d",
        ]
    );
}

#[test]
fn test_suite_outcomes() {
    let (_, cases) = run_fixture();

    assert!(cases[0].passed());
    assert!(cases[1].passed());

    // "007" is not "7" unless compared loosely.
    assert!(!cases[2].passed());
    assert!(cases[2].passed_with(CompareMode::Loose));

    assert_eq!(cases[3].matched_route(), Some("default"));
    assert!(!cases[3].has_expectations());

    assert_eq!(cases[4].matched_route(), None);
    let report = compare(&cases[4]);
    assert_comparison(&report, "controller", "[none]", "a", true);
}

#[test]
fn test_suite_summary() {
    let (_, cases) = run_fixture();

    let exact = Summary::from_cases(&cases);
    assert_eq!(exact.total, 5);
    assert_eq!(exact.matched, 4);
    assert_eq!(exact.unmatched, 1);
    assert_eq!(exact.passed, 2);
    assert_eq!(exact.failed, 2);
    assert_eq!(exact.untested, 1);

    let loose = Summary::from_cases_with(&cases, CompareMode::Loose);
    assert_eq!(loose.passed, 3);
    assert_eq!(loose.failed, 1);
}

#[test]
fn test_suite_report_text() {
    let (_, cases) = run_fixture();
    let text = render_report(&cases, CompareMode::Exact);

    assert!(text.starts_with("guide/media/image.png -> docs/media\n"));
    assert!(text.contains("blog/007 -> blog\n"));
    assert!(text.contains("  id: result=007 expected=7 MISMATCH\n"));
    assert!(text.contains("a/b/c/d -> [no match]\n"));
    assert!(text.ends_with(
        "5 tested, 4 matched, 1 unmatched; 2 passed, 2 failed, 1 without expectations\n"
    ));
}

#[test]
fn test_suite_dumps() {
    let (suite, _) = run_fixture();
    let source = suite.dump_source();

    let config = dump(DumpKind::Config, suite.dump.entries(DumpKind::Config), &source);
    assert_eq!(config.sections.len(), 2);
    match &config.sections[0].body {
        DumpBody::Value(value) => assert_eq!(value["default"]["type"], "mysql"),
        DumpBody::Failed(message) => panic!("unexpected failure: {message}"),
    }
    assert_eq!(
        config.sections[1].body,
        DumpBody::Failed(
            "Something went terribly wrong. Error message: config 'nope' not found".into()
        )
    );

    let messages = dump(DumpKind::Message, suite.dump.entries(DumpKind::Message), &source);
    assert_eq!(messages.failures(), 0);
    assert!(render_dump(&messages).contains(":field must not be empty"));

    let i18n = dump(DumpKind::I18n, suite.dump.entries(DumpKind::I18n), &source);
    assert!(i18n.sections.is_empty());
}

#[test]
fn test_repeated_case_urls_keep_their_own_expectations() {
    let suite = Suite::from_toml_str(
        r#"
[[route]]
name = "any"
pattern = "<page>"

[[case]]
url = "about"
expected = { route = "any", page = "about" }

[[case]]
url = "about"
expected = { route = "other" }
"#,
    )
    .unwrap();

    let cases = RouteTester::new(suite.registry().unwrap()).test(suite.input());
    assert_eq!(cases.len(), 2);
    assert!(cases[0].passed());
    assert!(!cases[1].passed());
    assert_comparison(&compare(&cases[1]), "route", "any", "other", true);

    let summary = Summary::from_cases(&cases);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 1);
}

#[test]
fn test_malformed_suite_reports_path() {
    let err = Suite::from_toml_str("[[route]]\nname = 1\n").unwrap_err();
    assert!(!err.to_string().is_empty());

    let missing = fixture().with_file_name("missing.toml");
    let err = load_suite(&missing).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));
}
