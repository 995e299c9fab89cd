//! Plain-text rendering of test cases and dumps.
//!
//! ```text
//! blog/5 -> blog
//!   action: result=article expected=[none] MISMATCH
//!   controller: result=blog expected=[none] MISMATCH
//!   id: result=5 expected=5 ok
//!   route: result=blog expected=[none] MISMATCH
//! nonexistent/path -> [no match]
//!   foo: result=[none] expected=bar MISMATCH
//!
//! 2 tested, 1 matched, 1 unmatched; 0 passed, 2 failed, 0 without expectations
//! ```

use crate::compare::{compare_with, CompareMode, Summary};
use crate::dump::{Dump, DumpBody};
use crate::tester::TestCase;
use std::fmt;

/// Shown instead of a route name when nothing matched.
pub const NO_MATCH: &str = "[no match]";

/// [`Display`](fmt::Display) adapter for one test case.
#[derive(Debug, Clone, Copy)]
pub struct CaseDisplay<'a> {
    case: &'a TestCase,
    mode: CompareMode,
}

impl<'a> CaseDisplay<'a> {
    /// Render `case` comparing under `mode`.
    pub fn new(case: &'a TestCase, mode: CompareMode) -> Self {
        Self { case, mode }
    }
}

impl fmt::Display for CaseDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} -> {}",
            self.case.url(),
            self.case.matched_route().unwrap_or(NO_MATCH)
        )?;
        for (key, cmp) in compare_with(self.case, self.mode) {
            writeln!(
                f,
                "  {}: result={} expected={} {}",
                key,
                cmp.result,
                cmp.expected,
                if cmp.mismatch { "MISMATCH" } else { "ok" }
            )?;
        }
        Ok(())
    }
}

/// [`Display`](fmt::Display) adapter for a batch of cases plus summary.
#[derive(Debug, Clone, Copy)]
pub struct ReportDisplay<'a> {
    cases: &'a [TestCase],
    mode: CompareMode,
}

impl<'a> ReportDisplay<'a> {
    /// Render `cases` comparing under `mode`.
    pub fn new(cases: &'a [TestCase], mode: CompareMode) -> Self {
        Self { cases, mode }
    }
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in self.cases {
            write!(f, "{}", CaseDisplay::new(case, self.mode))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", Summary::from_cases_with(self.cases, self.mode))
    }
}

impl fmt::Display for Dump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind.heading())?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.label)?;
            match &section.body {
                DumpBody::Value(value) => {
                    let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                    writeln!(f, "{pretty}")?;
                }
                DumpBody::Failed(message) => writeln!(f, "{message}")?,
            }
        }
        Ok(())
    }
}

/// Render one case, comparing exactly.
pub fn render_case(case: &TestCase) -> String {
    CaseDisplay::new(case, CompareMode::Exact).to_string()
}

/// Render every case followed by a summary line.
pub fn render_report(cases: &[TestCase], mode: CompareMode) -> String {
    ReportDisplay::new(cases, mode).to_string()
}

/// Render a dump: heading, then each label and its value or failure.
pub fn render_dump(dump: &Dump) -> String {
    dump.to_string()
}
