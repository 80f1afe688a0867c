//! BCP (off-curve control point) direction and length annotations

use kurbo::Point;

use super::selection_box::{format_angle, GeometryResult};

/// Angle below which a handle counts as horizontal
pub const HORIZONTAL_THRESHOLD_DEGREES: f64 = 45.0;

/// Which way a BCP points away from its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BcpIndicator {
    Left,
    Right,
    Down,
    Up,
}

impl BcpIndicator {
    pub fn glyph(self) -> char {
        match self {
            BcpIndicator::Left => '⟝',
            BcpIndicator::Right => '⟞',
            BcpIndicator::Down => '⟘',
            BcpIndicator::Up => '⟙',
        }
    }

    /// Left and Up lines are listed before Right and Down lines
    pub fn sort_rank(self) -> u8 {
        match self {
            BcpIndicator::Left | BcpIndicator::Up => 0,
            BcpIndicator::Right | BcpIndicator::Down => 1,
        }
    }
}

/// A control point and the anchor it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    pub control: Point,
    pub anchor: Point,
}

impl PointPair {
    pub fn new(control: impl Into<Point>, anchor: impl Into<Point>) -> Self {
        Self {
            control: control.into(),
            anchor: anchor.into(),
        }
    }

    pub fn geometry(&self) -> GeometryResult {
        GeometryResult::from_points([self.control, self.anchor])
    }
}

pub fn classify_bcp_direction(pair: &PointPair) -> BcpIndicator {
    classify_with_geometry(pair, &pair.geometry())
}

fn classify_with_geometry(pair: &PointPair, geometry: &GeometryResult) -> BcpIndicator {
    let delta = pair.control - pair.anchor;
    if geometry.angle < HORIZONTAL_THRESHOLD_DEGREES {
        if delta.x < 0.0 {
            BcpIndicator::Left
        } else {
            BcpIndicator::Right
        }
    } else if delta.y < 0.0 {
        BcpIndicator::Down
    } else {
        BcpIndicator::Up
    }
}

/// One annotation line for a pair, e.g. "⟞ 120 ∡ 12.50°".
///
/// Returns `None` when the control point sits on its anchor.
pub fn pair_info(pair: &PointPair) -> Option<(BcpIndicator, String)> {
    let geometry = pair.geometry();
    if geometry.is_degenerate() {
        return None;
    }

    let indicator = classify_with_geometry(pair, &geometry);
    let mut line = format!("{} {:.0}", indicator.glyph(), geometry.dist);
    if !geometry.is_axis_angle() {
        line.push_str(&format!(" ∡ {}°", format_angle(geometry.angle)));
    }
    Some((indicator, line))
}

/// Like [`pair_info`], rendering the degenerate case as an empty string
pub fn format_pair_info(pair: &PointPair) -> String {
    pair_info(pair).map(|(_, line)| line).unwrap_or_default()
}
