//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use scancrop_core::{Rect, RectSet};

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and every failed comparison.
pub struct RegParams {
    /// Name of the test (e.g., "merge")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Also installs an `env_logger` test logger so that library logs show
    /// up when `RUST_LOG` is set.
    pub fn new(test_name: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record(&mut self, failure: TestError) {
        log::error!("{}_reg: {}", self.test_name, failure);
        eprintln!("Failure in {}_reg: {}", self.test_name, failure);
        self.failures.push(failure);
    }

    /// Compare two numeric values
    ///
    /// Returns `true` if values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if (expected - actual).abs() > delta {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Check that a condition has the expected truth value
    pub fn compare_bools(&mut self, expected: bool, actual: bool) -> bool {
        self.index += 1;
        if expected != actual {
            self.record(TestError::BoolMismatch {
                index: self.index,
                expected,
            });
            false
        } else {
            true
        }
    }

    /// Compare two rectangle sets member by member, in order
    pub fn compare_rects(&mut self, expected: &RectSet, actual: &RectSet) -> bool {
        self.compare_rect_slices(expected.rects(), actual.rects())
    }

    /// Compare two rectangle sets ignoring member order
    pub fn compare_rects_unordered(&mut self, expected: &RectSet, actual: &RectSet) -> bool {
        let mut expected = expected.rects().to_vec();
        let mut actual = actual.rects().to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        self.compare_rect_slices(&expected, &actual)
    }

    fn compare_rect_slices(&mut self, expected: &[Rect], actual: &[Rect]) -> bool {
        self.index += 1;
        if expected != actual {
            self.record(TestError::RectMismatch {
                index: self.index,
                expected: format_rects(expected),
                actual: format_rects(actual),
            });
            false
        } else {
            true
        }
    }

    /// Finish the test, printing a summary
    ///
    /// Returns `true` if every comparison passed.
    pub fn cleanup(self) -> bool {
        let success = self.is_success();
        if success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        success
    }

    /// Finish the test, returning the first failure as an error
    pub fn finish(self) -> TestResult<()> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}

/// Render rectangles as `[(x0,y0)-(x1,y1), ...]` for failure messages
pub fn format_rects(rects: &[Rect]) -> String {
    let parts: Vec<String> = rects
        .iter()
        .map(|r| format!("({},{})-({},{})", r.x0, r.y0, r.x1, r.y1))
        .collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert_eq!(rp.index(), 3);
        assert!(!rp.is_success());
        assert!(matches!(
            rp.failures()[0],
            TestError::ValueMismatch { index: 3, .. }
        ));
    }

    #[test]
    fn test_compare_rects_unordered() {
        let a: RectSet = vec![
            Rect::new_unchecked(0, 0, 1, 1),
            Rect::new_unchecked(5, 5, 6, 6),
        ]
        .into();
        let b: RectSet = a.rects().iter().rev().copied().collect();

        let mut rp = RegParams::new("test_rects");
        assert!(!rp.compare_rects(&a, &b));
        assert!(rp.compare_rects_unordered(&a, &b));
        let err = rp.finish().unwrap_err();
        assert!(err.to_string().contains("(0,0)-(1,1)"));
    }

    #[test]
    fn test_cleanup_success() {
        let mut rp = RegParams::new("test_ok");
        rp.compare_bools(true, true);
        assert!(rp.cleanup());
    }
}
