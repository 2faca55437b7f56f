//! Disjoint-set merging
//!
//! Each round unions every pair of overlapping members and replaces each
//! component by its envelope. Envelopes of different components can
//! overlap even when no members did, so rounds repeat until one performs
//! no union.

use log::{debug, trace};
use scancrop_core::RectSet;

use crate::error::RegionResult;
use crate::merge::MergeOutcome;

/// Union-find over member indices
#[derive(Debug, Clone)]
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Find the root of `x`, halving paths on the way
    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Union by rank; returns `false` if already in one component
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    /// Members grouped by component, ordered by smallest member index
    fn components(&mut self) -> Vec<Vec<usize>> {
        let len = self.parent.len();
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); len];
        let mut order = Vec::new();
        for i in 0..len {
            let root = self.find(i);
            if by_root[root].is_empty() {
                order.push(root);
            }
            by_root[root].push(i);
        }
        order
            .into_iter()
            .map(|root| std::mem::take(&mut by_root[root]))
            .collect()
    }
}

/// Merge by repeated union-find rounds.
///
/// The input must already be validated.
pub(crate) fn merge_by_components(rects: RectSet) -> RegionResult<MergeOutcome> {
    let mut working = rects;
    let mut merges = 0usize;
    let mut passes = 0usize;

    loop {
        passes += 1;
        let len = working.len();
        trace!("round {}: {} rects", passes, len);

        let mut sets = DisjointSet::new(len);
        let mut unions = 0usize;
        for i in 0..len {
            for j in working.find_overlaps(i)? {
                if j > i && sets.union(i, j) {
                    unions += 1;
                }
            }
        }
        if unions == 0 {
            break;
        }

        let components = sets.components();
        let merged_groups = components.iter().filter(|c| c.len() > 1).count();
        debug!(
            "round {}: {} unions formed {} groups",
            passes, unions, merged_groups
        );
        merges += merged_groups;

        working = components
            .iter()
            .filter_map(|members| working.envelope_of(members).transpose())
            .collect::<scancrop_core::Result<RectSet>>()?;
    }

    let max_area = working.max_area();
    Ok(MergeOutcome {
        rects: working,
        max_area,
        merges,
        passes,
    })
}
