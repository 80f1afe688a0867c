//! Core functionality
//!
//! This module contains:
//! - Outline state (points, contours, glyphs)
//! - Settings and the user configuration file
//! - Error handling helpers

pub mod config;
pub mod errors;
pub mod state;

pub use config::{ConfigFile, ShowDistSettings};
pub use errors::{FileContext, ShowDistResult};
pub use state::{ContourData, GlyphData, PointData, UfoPointType};
