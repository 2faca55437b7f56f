//! scancrop-test - Regression test framework for scancrop
//!
//! Integration tests record numbered comparisons on a [`RegParams`] and
//! assert on its summary at the end, in the style of a regression log:
//!
//! ```ignore
//! use scancrop_test::RegParams;
//!
//! let mut rp = RegParams::new("merge");
//! rp.compare_values(81.0, max_area as f64, 0.0);
//! rp.compare_rects(&expected, &merged);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter for the test logger installed by [`RegParams::new`]

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, format_rects};

use scancrop_core::{Rect, RectSet};

/// Build a [`RectSet`] from `(x0, y0, x1, y1)` tuples without validation
///
/// Test fixtures use this to describe inputs compactly, including
/// deliberately invalid ones.
pub fn rects(corners: &[(i32, i32, i32, i32)]) -> RectSet {
    corners
        .iter()
        .map(|&(x0, y0, x1, y1)| Rect::new_unchecked(x0, y0, x1, y1))
        .collect()
}
