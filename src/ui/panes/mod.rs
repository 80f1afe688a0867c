//! Text panes shown inside a glyph view

pub mod distance_pane;

pub use distance_pane::{format_multi_point, format_selection, format_single_point};
