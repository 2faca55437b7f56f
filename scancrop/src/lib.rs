//! Scancrop - Photo region detection for scanned sheets
//!
//! A flatbed scan of several photos yields many contours per photo: torn
//! corners, printed borders, and glare split each picture into fragments.
//! This crate consolidates the fragments' bounding boxes into one
//! rectangle per photo.
//!
//! # Overview
//!
//! - Rectangle model and geometry ([`Rect`], [`RectSet`])
//! - Fixpoint merging of touching or overlapping rectangles ([`merge`])
//! - Noise filtering relative to the largest region ([`find_scan_regions`])
//!
//! Contour detection and pixel cropping are left to the caller.
//!
//! # Example
//!
//! ```
//! use scancrop::{ScanConfig, find_scan_regions};
//!
//! // Bounding rects (x, y, width, height) of detected contours
//! let contours = [(10, 10, 100, 50), (10, 60, 100, 50), (300, 10, 80, 80), (200, 200, 3, 3)];
//!
//! let regions = find_scan_regions(&contours, &ScanConfig::default()).unwrap();
//! assert_eq!(regions.len(), 2);
//! assert_eq!(regions.max_area, 10_000);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use scancrop_core::*;

// Re-export the clustering engine
pub use scancrop_region::{
    MergeOptions, MergeOutcome, MergeStrategy, RegionError, RegionResult, ScanConfig,
    ScanRegions, WalkOrder, find_scan_regions, merge, merge_with_options, select_candidates,
};

// Re-export the engine crate as a module for the remaining helpers
pub use scancrop_region as region;
