//! Scan configuration
//!
//! Parameters shared by the upstream contour detector, the clustering
//! engine, and the downstream area filter. Passed explicitly by the
//! caller; there is no global configuration.

use crate::error::{RegionError, RegionResult};
use crate::merge::MergeStrategy;

/// Default median-blur aperture for noise suppression
pub const DEFAULT_BLUR_SIZE: u32 = 5;

/// Default binarization threshold (pixels brighter than this are background)
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Default admission ratio relative to the largest merged region
pub const DEFAULT_AREA_RATIO: f64 = 0.4;

/// Options for locating photo regions on a scanned sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Median-blur aperture used by the contour detector (odd, >= 1)
    pub blur_size: u32,
    /// Binarization threshold used by the contour detector
    pub threshold: u8,
    /// Regions with `area <= max_area * area_ratio` are discarded
    pub area_ratio: f64,
    /// Strategy used to merge overlapping rectangles
    pub strategy: MergeStrategy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            blur_size: DEFAULT_BLUR_SIZE,
            threshold: DEFAULT_THRESHOLD,
            area_ratio: DEFAULT_AREA_RATIO,
            strategy: MergeStrategy::default(),
        }
    }
}

impl ScanConfig {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set median-blur aperture
    pub fn with_blur_size(mut self, blur_size: u32) -> Self {
        self.blur_size = blur_size;
        self
    }

    /// Set binarization threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set admission ratio
    pub fn with_area_ratio(mut self, area_ratio: f64) -> Self {
        self.area_ratio = area_ratio;
        self
    }

    /// Set merge strategy
    pub fn with_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check every field, naming the first offending one
    pub fn validate(&self) -> RegionResult<()> {
        if self.blur_size == 0 || self.blur_size % 2 == 0 {
            return Err(RegionError::InvalidParameters(format!(
                "blur_size must be odd and >= 1, got {}",
                self.blur_size
            )));
        }
        validate_area_ratio(self.area_ratio)
    }
}

/// Check that an admission ratio is finite and within `[0, 1]`
pub fn validate_area_ratio(ratio: f64) -> RegionResult<()> {
    if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
        return Err(RegionError::InvalidParameters(format!(
            "area_ratio must be within [0, 1], got {}",
            ratio
        )));
    }
    Ok(())
}
