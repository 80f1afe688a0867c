//! Geometric evaluation of selected points

pub mod bcp;
pub mod selection_box;

// Re-export commonly used items
pub use bcp::{
    classify_bcp_direction, format_pair_info, pair_info, BcpIndicator, PointPair,
    HORIZONTAL_THRESHOLD_DEGREES,
};
pub use selection_box::{compute_box, format_angle, GeometryResult};
