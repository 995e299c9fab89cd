//! Diffing actual parameters against expectations.
//!
//! [`compare`] produces one [`ParamComparison`] per parameter name found on
//! either side. A key is only reported as matching when it is present on
//! both sides with equal values; anything else, including a case with no
//! expectations at all, is a mismatch.
//!
//! ```
//! use route_tester::{compare, ParamValue, RouteParams, TestCase};
//!
//! let case = TestCase::new("blog/5")
//!     .with_match("blog", RouteParams::from([("id", "5")]))
//!     .with_expected(RouteParams::from([("id", "5")]));
//!
//! let report = compare(&case);
//! assert!(!report["id"].mismatch);
//! assert!(report["route"].mismatch);
//! assert_eq!(report["route"].expected, ParamValue::Missing);
//! ```

use crate::tester::TestCase;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Text shown in place of an absent value.
pub const NONE_MARKER: &str = "[none]";

/// One side of a comparison.
///
/// Serializes as a plain string; [`Missing`](Self::Missing) becomes
/// [`NONE_MARKER`], the same text it displays as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// The parameter has this value
    Present(String),
    /// The parameter is absent on this side
    Missing,
}

impl ParamValue {
    fn from_option(value: Option<&str>) -> Self {
        value.map_or(ParamValue::Missing, |v| ParamValue::Present(v.to_string()))
    }

    /// The value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Present(value) => Some(value.as_str()),
            ParamValue::Missing => None,
        }
    }

    /// Return `true` for [`ParamValue::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, ParamValue::Missing)
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str().unwrap_or(NONE_MARKER))
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(NONE_MARKER))
    }
}

/// Result and expectation for a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamComparison {
    pub result: ParamValue,
    pub expected: ParamValue,
    pub mismatch: bool,
}

/// Per-parameter comparisons, ordered by parameter name.
pub type ComparisonReport = BTreeMap<String, ParamComparison>;

/// How values on both sides are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompareMode {
    /// Byte-for-byte string equality
    #[default]
    Exact,
    /// Integer comparison when both sides are integers, float comparison
    /// when both parse as finite numbers, exact string equality otherwise
    Loose,
}

impl CompareMode {
    /// Compare two present values under this mode.
    #[allow(clippy::float_cmp)]
    pub fn values_equal(self, result: &str, expected: &str) -> bool {
        match self {
            CompareMode::Exact => result == expected,
            CompareMode::Loose => {
                if let (Some(a), Some(b)) = (parse_integer(result), parse_integer(expected)) {
                    return a == b;
                }
                match (parse_number(result), parse_number(expected)) {
                    (Some(a), Some(b)) => a == b,
                    _ => result == expected,
                }
            }
        }
    }
}

fn parse_integer(value: &str) -> Option<i128> {
    value.trim().parse().ok()
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Compare a case's actual parameters with its expectations, exactly.
pub fn compare(case: &TestCase) -> ComparisonReport {
    compare_with(case, CompareMode::Exact)
}

/// Compare a case's actual parameters with its expectations using `mode`.
pub fn compare_with(case: &TestCase, mode: CompareMode) -> ComparisonReport {
    let actual = case.actual_params();
    let expected = case.expected_params();

    let mut keys: Vec<&str> = actual.keys().collect();
    if let Some(expected) = expected {
        keys.extend(expected.keys());
    }

    keys.into_iter()
        .map(|key| {
            let result = actual.get(key);
            let wanted = expected.and_then(|e| e.get(key));
            let mismatch = match (result, wanted) {
                (Some(r), Some(w)) => !mode.values_equal(r, w),
                _ => true,
            };
            (
                key.to_string(),
                ParamComparison {
                    result: ParamValue::from_option(result),
                    expected: ParamValue::from_option(wanted),
                    mismatch,
                },
            )
        })
        .collect()
}

impl TestCase {
    /// Return `true` if expectations were given and every key agrees exactly.
    pub fn passed(&self) -> bool {
        self.passed_with(CompareMode::Exact)
    }

    /// Like [`passed`](Self::passed), under `mode`.
    pub fn passed_with(&self, mode: CompareMode) -> bool {
        self.has_expectations() && compare_with(self, mode).values().all(|c| !c.mismatch)
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Counts over a batch of test cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Cases in the batch
    pub total: usize,
    /// Cases some route matched
    pub matched: usize,
    /// Cases no route matched
    pub unmatched: usize,
    /// Cases with expectations that all agreed
    pub passed: usize,
    /// Cases with expectations that disagreed somewhere
    pub failed: usize,
    /// Cases without expectations
    pub untested: usize,
}

impl Summary {
    /// Tally `cases`, comparing exactly.
    pub fn from_cases(cases: &[TestCase]) -> Self {
        Self::from_cases_with(cases, CompareMode::Exact)
    }

    /// Tally `cases`, comparing under `mode`.
    pub fn from_cases_with(cases: &[TestCase], mode: CompareMode) -> Self {
        cases.iter().fold(Summary::default(), |mut summary, case| {
            summary.total += 1;
            if case.is_matched() {
                summary.matched += 1;
            } else {
                summary.unmatched += 1;
            }
            if !case.has_expectations() {
                summary.untested += 1;
            } else if case.passed_with(mode) {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
            summary
        })
    }

    /// Return `true` if no case with expectations failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tested, {} matched, {} unmatched; {} passed, {} failed, {} without expectations",
            self.total, self.matched, self.unmatched, self.passed, self.failed, self.untested
        )
    }
}
