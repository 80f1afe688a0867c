//! Bounding box, offsets, distance and angle of a set of points
//!
//! Angles are measured from the horizontal axis: `atan2(dist_y, dist_x)`.
//! Both extents are non-negative, so angles always fall in [0°, 90°].

use kurbo::{Point, Rect};

/// Axis-aligned bounding box of `points`.
///
/// An empty collection yields the zero box ((0, 0), (0, 0)).
pub fn compute_box<I>(points: I) -> Rect
where
    I: IntoIterator,
    I::Item: Into<Point>,
{
    let mut points = points.into_iter().map(Into::into);
    let Some(first) = points.next() else {
        return Rect::ZERO;
    };
    points.fold(Rect::from_points(first, first), |rect, pt| rect.union_pt(pt))
}

/// Geometry derived from a point collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryResult {
    pub bounds: Rect,
    /// Horizontal extent of the bounds
    pub dist_x: f64,
    /// Vertical extent of the bounds
    pub dist_y: f64,
    /// Length of the bounds' diagonal
    pub dist: f64,
    /// Angle of the diagonal in degrees
    pub angle: f64,
}

impl GeometryResult {
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        Self::from_box(compute_box(points))
    }

    pub fn from_box(bounds: Rect) -> Self {
        let dist_x = bounds.x1 - bounds.x0;
        let dist_y = bounds.y1 - bounds.y0;
        Self {
            bounds,
            dist_x,
            dist_y,
            dist: dist_x.hypot(dist_y),
            angle: dist_y.atan2(dist_x).to_degrees(),
        }
    }

    /// Nothing to report: all points coincide
    pub fn is_degenerate(&self) -> bool {
        self.dist == 0.0 && self.dist_x == 0.0 && self.dist_y == 0.0
    }

    /// Exactly horizontal or exactly vertical
    pub fn is_axis_angle(&self) -> bool {
        self.angle == 0.0 || self.angle == 90.0
    }

    /// All points lie on one horizontal or vertical line
    pub fn is_axis_aligned(&self) -> bool {
        self.is_axis_angle() && (self.dist == self.dist_x || self.dist == self.dist_y)
    }

    pub fn nice_angle(&self) -> String {
        format_angle(self.angle)
    }
}

/// Two decimals; the ".00" suffix is dropped for whole-degree angles only.
pub fn format_angle(angle: f64) -> String {
    let formatted = format!("{:.2}", angle);
    if angle.fract() == 0.0 {
        if let Some(whole) = formatted.strip_suffix(".00") {
            return whole.to_string();
        }
    }
    formatted
}
