#![forbid(unsafe_code)]

//! Geometry and dimension primitives shared by the splitkit crates.

pub mod geometry;
pub mod length;

pub use geometry::{Orientation, Point, Rect, Size};
pub use length::{LengthError, LengthUnit, PaneLength};
