//! Editing Functionality
//!
//! Selection handling for points of the current glyph.

pub mod selection;

pub use selection::{PointRef, SelectedPoint, Selection};
