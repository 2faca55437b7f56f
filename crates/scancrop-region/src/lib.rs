//! scancrop-region - Bounding-box clustering for scanned sheets
//!
//! This crate provides the clustering engine that consolidates fragmented
//! contour rectangles into whole photo regions:
//!
//! - **Merging** - Fuse touching or overlapping rectangles to a fixpoint
//! - **Candidate selection** - Discard regions that are small relative to
//!   the largest one
//! - **Configuration** - One explicit [`ScanConfig`] per call
//!
//! # Examples
//!
//! ## Merging fragments
//!
//! ```
//! use scancrop_core::RectSet;
//! use scancrop_region::merge;
//!
//! let rects = RectSet::from_corner_pairs(&[((0, 0), (5, 5)), ((4, 4), (10, 10))]).unwrap();
//! let (merged, max_area) = merge(rects).unwrap();
//! assert_eq!(merged.len(), 1);
//! assert_eq!(max_area, 100);
//! ```
//!
//! ## Locating photos from contour bounding rects
//!
//! ```
//! use scancrop_region::{ScanConfig, find_scan_regions};
//!
//! let contours = [(10, 10, 100, 50), (10, 60, 100, 50), (200, 200, 3, 3)];
//! let regions = find_scan_regions(&contours, &ScanConfig::default()).unwrap();
//! assert_eq!(regions.crop_boxes().unwrap(), vec![(10, 10, 100, 100)]);
//! ```

pub mod candidates;
pub mod config;
mod disjoint;
pub mod error;
pub mod merge;

// Re-export core types
pub use scancrop_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export merge types and functions
pub use merge::{
    MergeOptions, MergeOutcome, MergeStrategy, WalkOrder, canonical, covers, is_fixpoint, merge,
    merge_with_options,
};

// Re-export configuration
pub use config::{
    DEFAULT_AREA_RATIO, DEFAULT_BLUR_SIZE, DEFAULT_THRESHOLD, ScanConfig, validate_area_ratio,
};

// Re-export candidate selection
pub use candidates::{
    ScanRegions, area_threshold, bounding_rects_to_set, find_scan_regions, select_candidates,
};
