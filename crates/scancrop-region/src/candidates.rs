//! Scan-region candidates
//!
//! Turns the bounding rectangles of detected contours into admitted photo
//! regions: merge overlapping fragments, then drop everything too small
//! relative to the largest merged region.

use log::debug;
use scancrop_core::{Rect, RectSet};

use crate::config::{ScanConfig, validate_area_ratio};
use crate::error::RegionResult;
use crate::merge::{MergeOptions, merge_with_options};

/// Photo regions admitted on one scanned sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRegions {
    /// Admitted regions, in merge output order
    pub regions: RectSet,
    /// Largest merged area before filtering
    pub max_area: u64,
    /// Admission threshold; regions at or below it were discarded
    pub threshold: u64,
    /// Number of merged regions discarded as noise
    pub discarded: usize,
}

impl ScanRegions {
    /// Number of admitted regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if no region was admitted
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Admitted regions as `(x, y, width, height)` crop boxes
    ///
    /// # Errors
    ///
    /// Fails if a merged region is wider or taller than `i32::MAX`.
    pub fn crop_boxes(&self) -> RegionResult<Vec<(i32, i32, i32, i32)>> {
        let boxes = self
            .regions
            .iter()
            .map(Rect::to_xywh)
            .collect::<scancrop_core::Result<Vec<_>>>()?;
        Ok(boxes)
    }
}

/// Convert `(x, y, width, height)` contour bounding rects to corner form.
pub fn bounding_rects_to_set(bounding_rects: &[(i32, i32, i32, i32)]) -> RegionResult<RectSet> {
    let rects = bounding_rects
        .iter()
        .map(|&(x, y, w, h)| Rect::from_xywh(x, y, w, h))
        .collect::<scancrop_core::Result<RectSet>>()?;
    Ok(rects)
}

/// Compute the admission threshold `max_area * ratio`, rounded down.
///
/// For integer areas, `area > floor(max_area * ratio)` is the same test
/// as `area > max_area * ratio`. The product is taken in `f64`, which is
/// exact for areas below `2^53`; with `ratio <= 1` it never exceeds
/// `max_area`.
pub fn area_threshold(max_area: u64, ratio: f64) -> RegionResult<u64> {
    validate_area_ratio(ratio)?;
    Ok(((max_area as f64 * ratio).floor() as u64).min(max_area))
}

/// Keep the rectangles whose area exceeds `max_area * ratio`.
pub fn select_candidates(rects: &RectSet, max_area: u64, ratio: f64) -> RegionResult<RectSet> {
    let threshold = area_threshold(max_area, ratio)?;
    Ok(rects.select_by_min_area(threshold))
}

/// Locate photo regions from contour bounding rects.
///
/// Runs the full in-memory pipeline: corner conversion, merge with
/// `config.strategy`, and area filtering with `config.area_ratio`.
pub fn find_scan_regions(
    bounding_rects: &[(i32, i32, i32, i32)],
    config: &ScanConfig,
) -> RegionResult<ScanRegions> {
    config.validate()?;

    let rects = bounding_rects_to_set(bounding_rects)?;
    let options = MergeOptions::new().with_strategy(config.strategy);
    let outcome = merge_with_options(rects, &options)?;

    let threshold = area_threshold(outcome.max_area, config.area_ratio)?;
    let regions = outcome.rects.select_by_min_area(threshold);
    let discarded = outcome.rects.len() - regions.len();

    debug!(
        "{} contours -> {} merged regions, {} admitted above area {}",
        bounding_rects.len(),
        outcome.rects.len(),
        regions.len(),
        threshold
    );

    Ok(ScanRegions {
        regions,
        max_area: outcome.max_area,
        threshold,
        discarded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;
    use crate::merge::MergeStrategy;

    #[test]
    fn test_bounding_rects_to_set() {
        let set = bounding_rects_to_set(&[(0, 0, 10, 10), (5, 6, 1, 2)]).unwrap();
        assert_eq!(
            set.rects(),
            &[
                Rect::new_unchecked(0, 0, 10, 10),
                Rect::new_unchecked(5, 6, 6, 8)
            ]
        );
        assert!(bounding_rects_to_set(&[(0, 0, -1, 10)]).is_err());
    }

    #[test]
    fn test_area_threshold() {
        assert_eq!(area_threshold(1000, 0.4).unwrap(), 400);
        assert_eq!(area_threshold(101, 0.4).unwrap(), 40);
        assert_eq!(area_threshold(0, 0.4).unwrap(), 0);
        assert!(area_threshold(100, 1.2).is_err());

        let full = u32::MAX as u64 * u32::MAX as u64;
        assert_eq!(area_threshold(full, 1.0).unwrap(), full);
        assert!(area_threshold(full, 0.4).unwrap() < full);
    }

    #[test]
    fn test_select_candidates_threshold_is_exclusive() {
        let rects: RectSet = vec![
            Rect::new_unchecked(0, 0, 10, 10), // 100
            Rect::new_unchecked(0, 0, 20, 2),  // 40
            Rect::new_unchecked(0, 0, 41, 1),  // 41
        ]
        .into();
        let kept = select_candidates(&rects, 100, 0.4).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.get(1).unwrap().area(), 41);
    }

    #[test]
    fn test_find_scan_regions() {
        // Two fragmented photos plus a speck of dust.
        let contours = [
            (10, 10, 100, 50),
            (10, 60, 100, 50), // touches the first fragment
            (300, 10, 80, 80),
            (200, 200, 3, 3),
        ];
        let result = find_scan_regions(&contours, &ScanConfig::default()).unwrap();
        assert_eq!(result.max_area, 10_000);
        assert_eq!(result.threshold, 4_000);
        assert_eq!(result.len(), 2);
        assert_eq!(result.discarded, 1);

        let mut boxes = result.crop_boxes().unwrap();
        boxes.sort_unstable();
        assert_eq!(boxes, vec![(10, 10, 100, 100), (300, 10, 80, 80)]);
    }

    #[test]
    fn test_find_scan_regions_strategies_agree() {
        let contours = [(0, 0, 5, 5), (4, 4, 5, 5), (8, 8, 5, 5), (40, 0, 20, 20)];
        let base = find_scan_regions(&contours, &ScanConfig::default()).unwrap();
        let other = find_scan_regions(
            &contours,
            &ScanConfig::default().with_strategy(MergeStrategy::DisjointSet),
        )
        .unwrap();
        let mut a = base.crop_boxes().unwrap();
        let mut b = other.crop_boxes().unwrap();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert_eq!(base.max_area, other.max_area);
    }

    #[test]
    fn test_find_scan_regions_empty() {
        let result = find_scan_regions(&[], &ScanConfig::default()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.max_area, 0);
        assert_eq!(result.discarded, 0);
    }

    #[test]
    fn test_find_scan_regions_region_too_wide_to_crop() {
        // Merged envelope spans 4e9 pixels, beyond i32 width.
        let contours = [(-2_000_000_000, 0, 2_000_000_000, 10), (0, 0, 2_000_000_000, 10)];
        let result = find_scan_regions(&contours, &ScanConfig::default()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.max_area, 40_000_000_000);
        let err = result.crop_boxes().unwrap_err();
        assert!(matches!(
            err,
            RegionError::Core(scancrop_core::Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_find_scan_regions_rejects_bad_config() {
        let config = ScanConfig::default().with_area_ratio(-1.0);
        assert!(find_scan_regions(&[(0, 0, 1, 1)], &config).is_err());
    }
}
