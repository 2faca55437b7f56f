//! Rectangle geometry and relationship operations
//!
//! Overlap testing, envelopes, and neighbor lookup
//! within a [`RectSet`].

use std::collections::BTreeSet;

use crate::error::{Error, Result};

use super::{Rect, RectSet};

// ---- Rect methods ----

impl Rect {
    /// Check if this rectangle overlaps or touches another.
    ///
    /// Both axis projections must intersect; a zero-width intersection
    /// (shared edge or corner) counts as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x1 < other.x0 || other.x1 < self.x0 || self.y1 < other.y0 || other.y1 < self.y0)
    }

    /// Compute the minimal rectangle enclosing both rectangles
    pub fn envelope(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

// ---- RectSet methods ----

impl RectSet {
    /// Find every other member that overlaps the member at `index`.
    ///
    /// The returned set never contains `index` itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index` is not a member.
    pub fn find_overlaps(&self, index: usize) -> Result<BTreeSet<usize>> {
        let target = self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })?;

        Ok(self
            .iter()
            .enumerate()
            .filter(|&(j, r)| j != index && target.overlaps(r))
            .map(|(j, _)| j)
            .collect())
    }

    /// Compute the minimal rectangle enclosing the members at `indices`.
    ///
    /// Returns `Ok(None)` for an empty index set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for the first index that is not
    /// a member.
    pub fn envelope_of<'a, I>(&self, indices: I) -> Result<Option<Rect>>
    where
        I: IntoIterator<Item = &'a usize>,
    {
        let mut envelope: Option<Rect> = None;
        for &i in indices {
            let r = self.get(i).ok_or(Error::IndexOutOfBounds {
                index: i,
                len: self.len(),
            })?;
            envelope = Some(match envelope {
                Some(e) => e.envelope(r),
                None => *r,
            });
        }
        Ok(envelope)
    }

    /// Check whether any two distinct members overlap.
    pub fn has_overlaps(&self) -> bool {
        let rects = self.rects();
        rects
            .iter()
            .enumerate()
            .any(|(i, a)| rects[i + 1..].iter().any(|b| a.overlaps(b)))
    }

    /// Check if every member of `self` lies inside some member of `container`.
    pub fn all_contained_in(&self, container: &RectSet) -> bool {
        self.iter()
            .all(|target| container.iter().any(|c| c.contains_rect(target)))
    }
}

// ---- Tests ----
