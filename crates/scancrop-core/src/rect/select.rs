//! Rectangle selection by area
//!
//! Indicator-based filtering used to discard small noise regions after
//! clustering.

use super::RectSet;

// ---- Types ----

/// Comparison applied between a rectangle's area and a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaRelation {
    /// Select if area < threshold
    LessThan,
    /// Select if area <= threshold
    LessThanOrEqual,
    /// Select if area > threshold
    GreaterThan,
    /// Select if area >= threshold
    GreaterThanOrEqual,
}

impl AreaRelation {
    #[inline]
    fn holds(self, area: u64, threshold: u64) -> bool {
        match self {
            AreaRelation::LessThan => area < threshold,
            AreaRelation::LessThanOrEqual => area <= threshold,
            AreaRelation::GreaterThan => area > threshold,
            AreaRelation::GreaterThanOrEqual => area >= threshold,
        }
    }
}

// ---- RectSet methods ----

impl RectSet {
    /// Generate a boolean indicator based on member area.
    pub fn make_area_indicator(&self, threshold: u64, relation: AreaRelation) -> Vec<bool> {
        self.iter()
            .map(|r| relation.holds(r.area(), threshold))
            .collect()
    }

    /// Keep members where the indicator is `true`.
    ///
    /// Missing indicator entries count as `false`.
    pub fn select_with_indicator(&self, indicator: &[bool]) -> RectSet {
        self.iter()
            .zip(indicator)
            .filter(|&(_, &keep)| keep)
            .map(|(r, _)| *r)
            .collect()
    }

    /// Keep members whose area satisfies `relation` against `threshold`.
    pub fn select_by_area(&self, threshold: u64, relation: AreaRelation) -> RectSet {
        let indicator = self.make_area_indicator(threshold, relation);
        self.select_with_indicator(&indicator)
    }

    /// Keep members whose area is strictly greater than `threshold`.
    ///
    /// Members at or below the threshold are treated as noise. Order is
    /// preserved.
    pub fn select_by_min_area(&self, threshold: u64) -> RectSet {
        self.select_by_area(threshold, AreaRelation::GreaterThan)
    }
}

// ---- Tests ----

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;

    fn sample() -> RectSet {
        vec![
            Rect::new_unchecked(0, 0, 10, 10),   // 100
            Rect::new_unchecked(0, 0, 20, 20),   // 400
            Rect::new_unchecked(0, 0, 5, 5),     // 25
            Rect::new_unchecked(50, 50, 70, 70), // 400
        ]
        .into()
    }

    #[test]
    fn test_make_area_indicator() {
        let set = sample();
        assert_eq!(
            set.make_area_indicator(100, AreaRelation::GreaterThan),
            vec![false, true, false, true]
        );
        assert_eq!(
            set.make_area_indicator(100, AreaRelation::GreaterThanOrEqual),
            vec![true, true, false, true]
        );
        assert_eq!(
            set.make_area_indicator(100, AreaRelation::LessThan),
            vec![false, false, true, false]
        );
        assert_eq!(
            set.make_area_indicator(100, AreaRelation::LessThanOrEqual),
            vec![true, false, true, false]
        );
    }

    #[test]
    fn test_select_with_short_indicator() {
        let set = sample();
        let result = set.select_with_indicator(&[true, false]);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(0).unwrap().area(), 100);
    }

    #[test]
    fn test_select_by_min_area_excludes_threshold() {
        let set = sample();
        let result = set.select_by_min_area(400);
        assert!(result.is_empty());

        let result = set.select_by_min_area(99);
        assert_eq!(result.len(), 3);
        // Order preserved
        assert_eq!(result.get(0).unwrap().area(), 100);
        assert_eq!(result.get(2).unwrap().x0, 50);
    }
}
