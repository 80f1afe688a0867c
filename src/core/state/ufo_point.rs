//! UFO-compliant point data structures
//!
//! Points keep their UFO point type so the distance display can tell
//! anchors (on-curve points) apart from BCPs (off-curve control points).

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// UFO-compliant point type enumeration
/// Maps directly to the UFO specification point types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UfoPointType {
    /// First point in an open contour
    #[serde(rename = "move")]
    Move,
    /// Draws straight line from previous point
    #[serde(rename = "line")]
    Line,
    /// Part of curve segment (control point)
    #[serde(rename = "offcurve")]
    OffCurve,
    /// Draws cubic Bézier curve
    #[serde(rename = "curve")]
    Curve,
    /// Draws quadratic curve
    #[serde(rename = "qcurve")]
    QCurve,
}

impl UfoPointType {
    /// Check if this point type is on-curve (an anchor)
    pub fn is_on_curve(&self) -> bool {
        !matches!(self, UfoPointType::OffCurve)
    }

    /// Check if this point type is a BCP
    pub fn is_off_curve(&self) -> bool {
        matches!(self, UfoPointType::OffCurve)
    }
}

/// A single point of a contour
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub point_type: UfoPointType,
}

impl PointData {
    pub fn new(x: f64, y: f64, point_type: UfoPointType) -> Self {
        Self { x, y, point_type }
    }

    /// Create a move point (first point in an open contour)
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::Move)
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::Line)
    }

    /// Create an off-curve control point
    pub fn off_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::OffCurve)
    }

    pub fn curve_to(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::Curve)
    }

    pub fn qcurve_to(x: f64, y: f64) -> Self {
        Self::new(x, y, UfoPointType::QCurve)
    }

    /// Position in glyph design space
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True for off-curve points
    pub fn is_control(&self) -> bool {
        self.point_type.is_off_curve()
    }

    /// True for on-curve points
    pub fn is_anchor(&self) -> bool {
        self.point_type.is_on_curve()
    }
}

impl From<PointData> for Point {
    fn from(point: PointData) -> Self {
        point.position()
    }
}

impl From<&PointData> for Point {
    fn from(point: &PointData) -> Self {
        point.position()
    }
}
