//! Overlapping-rectangle merging
//!
//! Consolidates every group of touching or overlapping rectangles,
//! transitively, into its minimal enveloping rectangle. Enveloping can
//! create overlaps that did not exist in the input, so merging runs to a
//! fixpoint: a full pass over the working set with no merge.
//!
//! The fixpoint does not depend on iteration order. Each merge joins
//! groups whose envelopes overlap, and any overlap-free grouping of the
//! input must put such groups together, so every run ends on the same
//! grouping. [`MergeStrategy`] therefore only changes how fast the
//! fixpoint is reached.
//!
//! # Examples
//!
//! ```
//! use scancrop_core::RectSet;
//! use scancrop_region::merge;
//!
//! // The first two overlap; their envelope then reaches the third.
//! let rects = RectSet::from_corner_pairs(&[
//!     ((0, 0), (3, 3)),
//!     ((2, 2), (6, 6)),
//!     ((5, 5), (9, 9)),
//! ])
//! .unwrap();
//!
//! let (merged, max_area) = merge(rects).unwrap();
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged.rects()[0].bottom_right(), (9, 9));
//! assert_eq!(max_area, 81);
//! ```

use log::{debug, trace};
use scancrop_core::{Rect, RectSet};

use crate::disjoint::merge_by_components;
use crate::error::RegionResult;

/// Order in which the restart strategy visits the working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOrder {
    /// Visit indices from 0 upward
    #[default]
    Ascending,
    /// Sort once by area, then visit from the largest-area end backward
    ///
    /// Freshly appended envelopes sit at that end, so dominant clusters
    /// keep growing before small fragments are revisited.
    AreaDescending,
}

/// Algorithm used to reach the merge fixpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Walk the set; on the first overlap found, replace the whole
    /// neighborhood with its envelope and restart the walk
    Restart {
        /// Visiting order of each walk
        order: WalkOrder,
    },
    /// Union every overlapping pair, envelope each component, and repeat
    /// rounds until a round performs no union
    DisjointSet,
}

impl Default for MergeStrategy {
    fn default() -> Self {
        MergeStrategy::Restart {
            order: WalkOrder::Ascending,
        }
    }
}

/// Options for [`merge_with_options`]
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Merge algorithm
    pub strategy: MergeStrategy,
}

impl MergeOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set merge strategy
    pub fn with_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Result of a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Rectangles at the fixpoint; no two of them overlap
    pub rects: RectSet,
    /// Area of the largest rectangle in `rects` (0 when empty)
    pub max_area: u64,
    /// Number of envelopes created, each replacing two or more members
    pub merges: usize,
    /// Number of walks (restart strategy) or rounds (disjoint-set strategy)
    pub passes: usize,
}

/// Merge all touching or overlapping rectangles to a fixpoint.
///
/// Returns the merged set and the largest area seen, using the default
/// ascending restart walk.
///
/// # Errors
///
/// Returns an invalid-rectangle error, before any merging, if an input
/// rectangle has `x1 < x0` or `y1 < y0`.
pub fn merge(rects: RectSet) -> RegionResult<(RectSet, u64)> {
    let outcome = merge_with_options(rects, &MergeOptions::default())?;
    Ok((outcome.rects, outcome.max_area))
}

/// Merge all touching or overlapping rectangles with the given strategy.
///
/// # Errors
///
/// Returns an invalid-rectangle error, before any merging, if an input
/// rectangle has `x1 < x0` or `y1 < y0`.
pub fn merge_with_options(rects: RectSet, options: &MergeOptions) -> RegionResult<MergeOutcome> {
    rects.validate()?;

    let input_len = rects.len();
    let outcome = match options.strategy {
        MergeStrategy::Restart { order } => merge_by_restart(rects, order)?,
        MergeStrategy::DisjointSet => merge_by_components(rects)?,
    };

    debug!(
        "merge fixpoint: {} -> {} rects, {} merges in {} passes, max area {}",
        input_len,
        outcome.rects.len(),
        outcome.merges,
        outcome.passes,
        outcome.max_area
    );
    Ok(outcome)
}

/// Restart-on-merge walk.
///
/// Removing members invalidates every index past the first removed one,
/// so the walk is abandoned after each merge and started again.
fn merge_by_restart(rects: RectSet, order: WalkOrder) -> RegionResult<MergeOutcome> {
    let mut working = rects;
    if order == WalkOrder::AreaDescending {
        working.sort_by_area(true);
    }

    let mut max_area = 0u64;
    let mut merges = 0usize;
    let mut passes = 0usize;

    loop {
        passes += 1;
        trace!("pass {}: {} rects", passes, working.len());

        let mut found = None;
        for step in 0..working.len() {
            let i = match order {
                WalkOrder::Ascending => step,
                WalkOrder::AreaDescending => working.len() - 1 - step,
            };
            let Some(visited) = working.get(i) else {
                continue;
            };
            max_area = max_area.max(visited.area());

            let neighbors = working.find_overlaps(i)?;
            if !neighbors.is_empty() {
                found = Some((i, neighbors));
                break;
            }
        }

        let Some((i, mut group)) = found else {
            break;
        };
        group.insert(i);

        let rects = working.rects();
        let envelope = group
            .iter()
            .map(|&j| rects[j])
            .reduce(|e, r| e.envelope(&r))
            .unwrap_or(rects[i]);

        debug!(
            "merging {} rects around index {} into ({}, {})-({}, {})",
            group.len(),
            i,
            envelope.x0,
            envelope.y0,
            envelope.x1,
            envelope.y1
        );

        let mut next: RectSet = rects
            .iter()
            .enumerate()
            .filter(|(j, _)| !group.contains(j))
            .map(|(_, r)| *r)
            .collect();
        next.push(envelope);
        working = next;
        merges += 1;
    }

    Ok(MergeOutcome {
        rects: working,
        max_area,
        merges,
        passes,
    })
}

/// Check that no two distinct members of `rects` overlap.
pub fn is_fixpoint(rects: &RectSet) -> bool {
    !rects.has_overlaps()
}

/// Check that every rectangle of `input` lies inside some rectangle of
/// `merged`.
pub fn covers(merged: &RectSet, input: &RectSet) -> bool {
    input.all_contained_in(merged)
}

/// Sort a merge result into a canonical order for comparison.
pub fn canonical(rects: &RectSet) -> Vec<Rect> {
    let mut sorted = rects.rects().to_vec();
    sorted.sort_unstable();
    sorted
}
