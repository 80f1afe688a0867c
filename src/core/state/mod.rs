//! Outline state handed over by the host editor.

pub mod contour;
pub mod ufo_point;

pub use contour::{ContourData, GlyphData};
pub use ufo_point::{PointData, UfoPointType};
