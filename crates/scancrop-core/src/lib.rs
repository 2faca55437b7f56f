//! Scancrop Core - Rectangle data structures for scanned-sheet photo detection
//!
//! This crate provides the geometric primitives used by the clustering
//! engine:
//!
//! - [`Rect`] - An axis-aligned rectangle given by two corner points
//! - [`RectSet`] - An ordered collection of rectangles
//! - [`AreaRelation`] - Area comparisons for noise filtering
//!
//! No pixel data is handled here. Rectangles arrive from an external
//! contour detector and leave as crop geometry for an external cropper.
//!
//! # Examples
//!
//! ```
//! use scancrop_core::{Rect, RectSet};
//!
//! let set = RectSet::from_corner_pairs(&[((0, 0), (5, 5)), ((5, 5), (10, 10))]).unwrap();
//! assert!(set.rects()[0].overlaps(&set.rects()[1]));
//! assert_eq!(set.find_overlaps(0).unwrap().len(), 1);
//! assert_eq!(set.bounding_box(), Some(Rect::new(0, 0, 10, 10).unwrap()));
//! ```

pub mod error;
pub mod rect;

pub use error::{Error, Result};
pub use rect::{AreaRelation, Rect, RectSet};
