//! Showdist
//!
//! Distance, angle and BCP length annotations for selected points of a
//! glyph outline.
pub mod core;
pub mod data;
pub mod editing;
pub mod geometry;
pub mod logging;
pub mod systems;
pub mod ui;
