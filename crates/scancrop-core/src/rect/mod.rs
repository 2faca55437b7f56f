//! Rect, RectSet - Axis-aligned rectangle regions
//!
//! A [`Rect`] is stored as its top-left `(x0, y0)` and bottom-right
//! `(x1, y1)` corners. Area is always derived from the corners and is
//! exact in `u64` for any pair of `i32` corners.

mod geometry;
mod select;

pub use select::AreaRelation;

use crate::error::{Error, Result};

/// An axis-aligned rectangle given by two corner points
///
/// This is a small Copy value. Merging never mutates a rectangle in place;
/// it builds a new enveloping rectangle instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Rect {
    /// Left x coordinate
    pub x0: i32,
    /// Top y coordinate
    pub y0: i32,
    /// Right x coordinate
    pub x1: i32,
    /// Bottom y coordinate
    pub y1: i32,
}

impl Rect {
    /// Create a new rectangle from its corners
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRectangle`] if `x1 < x0` or `y1 < y0`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Self> {
        let rect = Self { x0, y0, x1, y1 };
        rect.check()?;
        Ok(rect)
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle from an `(x, y, width, height)` bounding rect
    ///
    /// This is the form produced by contour bounding-rect routines.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative, or if the far
    /// corner does not fit in `i32`.
    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rect dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        let (Some(x1), Some(y1)) = (x.checked_add(w), y.checked_add(h)) else {
            return Err(Error::InvalidParameter(format!(
                "rect corner overflows: x={}, y={}, w={}, h={}",
                x, y, w, h
            )));
        };
        Ok(Self { x0: x, y0: y, x1, y1 })
    }

    /// Create a rectangle from two corner points given in any order
    pub fn from_corners(p: (i32, i32), q: (i32, i32)) -> Self {
        Self {
            x0: p.0.min(q.0),
            y0: p.1.min(q.1),
            x1: p.0.max(q.0),
            y1: p.1.max(q.1),
        }
    }

    /// Top-left corner
    #[inline]
    pub fn top_left(&self) -> (i32, i32) {
        (self.x0, self.y0)
    }

    /// Bottom-right corner
    #[inline]
    pub fn bottom_right(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    /// Get the width, or 0 if `x1 < x0`
    #[inline]
    pub fn width(&self) -> u64 {
        u64::try_from(i64::from(self.x1) - i64::from(self.x0)).unwrap_or(0)
    }

    /// Get the height, or 0 if `y1 < y0`
    #[inline]
    pub fn height(&self) -> u64 {
        u64::try_from(i64::from(self.y1) - i64::from(self.y0)).unwrap_or(0)
    }

    /// Get the area
    ///
    /// Both sides are at most `2^32 - 1`, so the product always fits.
    /// Zero for a rectangle that fails [`Rect::is_valid`].
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// Check the corner invariant `x1 >= x0 && y1 >= y0`
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x1 >= self.x0 && self.y1 >= self.y0
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }

    /// Check the corner invariant, reporting the offending corners
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRectangle`] if the rectangle is not valid.
    pub fn check(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidRectangle {
                x0: self.x0,
                y0: self.y0,
                x1: self.x1,
                y1: self.y1,
            })
        }
    }

    /// Check if this rectangle contains another (boundaries inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Convert to `(x, y, width, height)` crop geometry
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the width or height does not
    /// fit in `i32`, and [`Error::InvalidRectangle`] for an invalid rect.
    pub fn to_xywh(&self) -> Result<(i32, i32, i32, i32)> {
        self.check()?;
        let (Ok(w), Ok(h)) = (i32::try_from(self.width()), i32::try_from(self.height())) else {
            return Err(Error::InvalidParameter(format!(
                "rect ({}, {})-({}, {}) is too large for crop geometry",
                self.x0, self.y0, self.x1, self.y1
            )));
        };
        Ok((self.x0, self.y0, w, h))
    }
}

/// Ordered collection of rectangles
///
/// Duplicates are allowed; two members may be geometrically identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RectSet {
    rects: Vec<Rect>,
}

impl RectSet {
    /// Create a new empty RectSet
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Build a RectSet from plain `((x0, y0), (x1, y1))` corner pairs
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRectangle`] for the first pair whose
    /// bottom-right corner lies above or left of its top-left corner.
    pub fn from_corner_pairs(pairs: &[((i32, i32), (i32, i32))]) -> Result<Self> {
        pairs
            .iter()
            .map(|&((x0, y0), (x1, y1))| Rect::new(x0, y0, x1, y1))
            .collect()
    }

    /// Get the number of rectangles
    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Get a rectangle by index
    pub fn get(&self, index: usize) -> Option<&Rect> {
        self.rects.get(index)
    }

    /// Add a rectangle
    pub fn push(&mut self, r: Rect) {
        self.rects.push(r);
    }

    /// Get all rectangles as a slice
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Check every member against the corner invariant
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRectangle`] for the first invalid member.
    pub fn validate(&self) -> Result<()> {
        self.rects.iter().try_for_each(Rect::check)
    }

    /// Compute the bounding box of all rectangles
    pub fn bounding_box(&self) -> Option<Rect> {
        if self.rects.is_empty() {
            return None;
        }

        let mut x0 = i32::MAX;
        let mut y0 = i32::MAX;
        let mut x1 = i32::MIN;
        let mut y1 = i32::MIN;

        for r in &self.rects {
            x0 = x0.min(r.x0);
            y0 = y0.min(r.y0);
            x1 = x1.max(r.x1);
            y1 = y1.max(r.y1);
        }

        Some(Rect { x0, y0, x1, y1 })
    }

    /// Largest member area, or 0 for an empty set
    pub fn max_area(&self) -> u64 {
        self.rects.iter().map(Rect::area).max().unwrap_or(0)
    }

    /// Sort rectangles by area
    ///
    /// The sort is stable, so equal-area members keep their relative order.
    pub fn sort_by_area(&mut self, ascending: bool) {
        if ascending {
            self.rects.sort_by_key(|r| r.area());
        } else {
            self.rects.sort_by(|a, b| b.area().cmp(&a.area()));
        }
    }

    /// Create an iterator over rectangles
    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.rects.iter()
    }
}

impl From<Vec<Rect>> for RectSet {
    fn from(rects: Vec<Rect>) -> Self {
        Self { rects }
    }
}

impl FromIterator<Rect> for RectSet {
    fn from_iter<T: IntoIterator<Item = Rect>>(iter: T) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RectSet {
    type Item = Rect;
    type IntoIter = std::vec::IntoIter<Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.into_iter()
    }
}

impl<'a> IntoIterator for &'a RectSet {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
