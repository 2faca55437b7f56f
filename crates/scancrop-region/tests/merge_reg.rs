//! Merge regression test
//!
//! Runs the reference scenarios through every merge strategy and checks
//! the merged rectangles and the reported maximum area.

use scancrop_core::RectSet;
use scancrop_region::{MergeOptions, MergeStrategy, WalkOrder, merge, merge_with_options};
use scancrop_test::{RegParams, rects};

const STRATEGIES: [MergeStrategy; 3] = [
    MergeStrategy::Restart {
        order: WalkOrder::Ascending,
    },
    MergeStrategy::Restart {
        order: WalkOrder::AreaDescending,
    },
    MergeStrategy::DisjointSet,
];

#[test]
fn merge_reg() {
    let mut rp = RegParams::new("merge");

    // --- Test 1: single rectangle is returned unchanged ---
    let (merged, max_area) = merge(rects(&[(0, 0, 10, 10)])).expect("merge single");
    rp.compare_rects(&rects(&[(0, 0, 10, 10)]), &merged);
    rp.compare_values(100.0, max_area as f64, 0.0);

    // --- Test 2: overlapping pair ---
    let (merged, max_area) = merge(rects(&[(0, 0, 5, 5), (4, 4, 10, 10)])).expect("merge pair");
    rp.compare_rects(&rects(&[(0, 0, 10, 10)]), &merged);
    rp.compare_values(100.0, max_area as f64, 0.0);

    // --- Test 3: disjoint pair ---
    let input = rects(&[(0, 0, 5, 5), (10, 10, 15, 15)]);
    let (merged, max_area) = merge(input.clone()).expect("merge disjoint");
    rp.compare_rects(&input, &merged);
    rp.compare_values(25.0, max_area as f64, 0.0);

    // --- Test 4: chain bridged by an envelope ---
    let (merged, max_area) =
        merge(rects(&[(0, 0, 3, 3), (2, 2, 6, 6), (5, 5, 9, 9)])).expect("merge chain");
    rp.compare_rects(&rects(&[(0, 0, 9, 9)]), &merged);
    rp.compare_values(81.0, max_area as f64, 0.0);

    // --- Test 5: empty input ---
    let (merged, max_area) = merge(RectSet::new()).expect("merge empty");
    rp.compare_values(0.0, merged.len() as f64, 0.0);
    rp.compare_values(0.0, max_area as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn merge_strategies_reg() {
    let mut rp = RegParams::new("merge_strategies");

    // A scanned sheet with three photos: one torn into four fragments, one
    // whose border contour split at a corner, and one intact, plus dust.
    let sheet = rects(&[
        (100, 100, 400, 180),
        (100, 182, 250, 400),
        (240, 170, 400, 400),
        (380, 390, 420, 410),
        (600, 100, 900, 300),
        (900, 300, 950, 320),
        (100, 600, 500, 900),
        (700, 800, 702, 803),
    ]);
    let expected = rects(&[
        (100, 100, 420, 410),
        (600, 100, 950, 320),
        (100, 600, 500, 900),
        (700, 800, 702, 803),
    ]);

    for strategy in STRATEGIES {
        let options = MergeOptions::new().with_strategy(strategy);
        let outcome = merge_with_options(sheet.clone(), &options).expect("merge sheet");
        rp.compare_rects_unordered(&expected, &outcome.rects);
        rp.compare_values(400.0 * 300.0, outcome.max_area as f64, 0.0);
        rp.compare_bools(true, outcome.merges < sheet.len());
    }

    assert!(rp.cleanup());
}

#[test]
fn merge_extreme_coordinates_reg() {
    let mut rp = RegParams::new("merge_extreme_coordinates");

    let input = rects(&[
        (i32::MIN, i32::MIN, 0, 0),
        (0, 0, i32::MAX, i32::MAX),
        (i32::MIN, i32::MAX, i32::MIN, i32::MAX),
    ]);
    let expected = rects(&[(i32::MIN, i32::MIN, i32::MAX, i32::MAX)]);

    for strategy in STRATEGIES {
        let options = MergeOptions::new().with_strategy(strategy);
        let outcome = merge_with_options(input.clone(), &options).expect("merge extremes");
        rp.compare_rects_unordered(&expected, &outcome.rects);
        rp.compare_bools(true, outcome.max_area == u32::MAX as u64 * u32::MAX as u64);
    }

    assert!(rp.cleanup());
}

#[test]
fn merge_invalid_reg() {
    let mut rp = RegParams::new("merge_invalid");

    for strategy in STRATEGIES {
        let options = MergeOptions::new().with_strategy(strategy);
        let result = merge_with_options(rects(&[(0, 0, 4, 4), (9, 9, 3, 12)]), &options);
        rp.compare_bools(
            true,
            result.as_ref().is_err_and(|e| e.is_invalid_rectangle()),
        );
    }

    assert!(rp.cleanup());
}
