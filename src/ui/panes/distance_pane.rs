//! Distance Pane Module
//!
//! Builds the text shown in the small distance widget of a glyph view:
//! offsets, angle and diagonal for multi-point selections, and BCP
//! lengths for a single selected point.

use tracing::trace;

use crate::core::state::GlyphData;
use crate::editing::selection::{SelectedPoint, Selection};
use crate::geometry::{pair_info, GeometryResult, PointPair};

// ============================================================================
// SELECTION DISPATCH
// ============================================================================

/// Text for the current selection of `glyph`
pub fn format_selection(glyph: &GlyphData, selection: &Selection) -> String {
    let resolved = selection.resolve(glyph);
    trace!(
        "Formatting {} of {} selected points in '{}'",
        resolved.len(),
        selection.len(),
        glyph.name
    );

    match resolved.as_slice() {
        [single] => format_single_point(single),
        points => {
            let geometry = GeometryResult::from_points(points.iter().map(|p| p.point));
            format_multi_point(&geometry)
        }
    }
}

// ============================================================================
// MULTI-POINT SELECTION
// ============================================================================

/// Summary for zero or several selected points.
///
/// Axis-aligned selections leave out the diagonal, which would only repeat
/// the horizontal or vertical offset.
pub fn format_multi_point(geometry: &GeometryResult) -> String {
    if geometry.is_degenerate() {
        return String::new();
    }

    if geometry.is_axis_aligned() {
        format!(
            "↦ {:.0} ↥ {:.0}\n∡ {}°",
            geometry.dist_x,
            geometry.dist_y,
            geometry.nice_angle()
        )
    } else {
        format!(
            "↦ {:.0} ↥ {:.0}\n∡ {}° ⤢ {:.2}",
            geometry.dist_x,
            geometry.dist_y,
            geometry.nice_angle(),
            geometry.dist
        )
    }
}

// ============================================================================
// SINGLE POINT
// ============================================================================

/// BCP info for a single selected point, one line per handle
pub fn format_single_point(selected: &SelectedPoint<'_>) -> String {
    let lines = if selected.point.is_control() {
        control_point_lines(selected)
    } else {
        anchor_point_lines(selected)
    };
    lines.join("\n")
}

/// A selected BCP: its length relative to the anchor it hangs off
fn control_point_lines(selected: &SelectedPoint<'_>) -> Vec<String> {
    let Some(anchor) = selected
        .contour
        .bcp_anchor_index(selected.index)
        .and_then(|i| selected.contour.get(i))
    else {
        trace!("BCP {} has no anchor", selected.index);
        return Vec::new();
    };

    pair_info(&PointPair::new(selected.point, anchor))
        .map(|(_, line)| vec![line])
        .unwrap_or_default()
}

/// A selected anchor: one line for each adjacent BCP, Left/Up first
fn anchor_point_lines(selected: &SelectedPoint<'_>) -> Vec<String> {
    let (previous, next) = selected.contour.adjacent_bcp_indices(selected.index);

    let mut lines: Vec<_> = [previous, next]
        .into_iter()
        .flatten()
        .filter_map(|i| selected.contour.get(i))
        .filter_map(|bcp| pair_info(&PointPair::new(bcp, selected.point)))
        .collect();

    lines.sort_by_key(|(indicator, _)| indicator.sort_rank());
    lines.into_iter().map(|(_, line)| line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{ContourData, PointData};
    use crate::editing::selection::PointRef;

    fn glyph_with(points: Vec<PointData>) -> GlyphData {
        GlyphData::new("test", vec![ContourData::new(points)])
    }

    fn select(indices: &[usize]) -> Selection {
        indices.iter().map(|&i| PointRef::new(0, i)).collect()
    }

    #[test]
    fn empty_selection_is_empty() {
        let glyph = glyph_with(vec![PointData::line_to(0.0, 0.0)]);
        assert_eq!(format_selection(&glyph, &Selection::new()), "");
    }

    #[test]
    fn coinciding_points_are_empty() {
        let glyph = glyph_with(vec![
            PointData::line_to(5.0, 5.0),
            PointData::line_to(5.0, 5.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[0, 1])), "");
    }

    #[test]
    fn vertical_selection_collapses() {
        let glyph = glyph_with(vec![
            PointData::line_to(10.0, 0.0),
            PointData::line_to(10.0, 50.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[0, 1])), "↦ 0 ↥ 50\n∡ 90°");
    }

    #[test]
    fn horizontal_selection_collapses() {
        let glyph = glyph_with(vec![
            PointData::line_to(0.0, 20.0),
            PointData::line_to(75.0, 20.0),
            PointData::line_to(30.0, 20.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[0, 1, 2])), "↦ 75 ↥ 0\n∡ 0°");
    }

    #[test]
    fn diagonal_selection_shows_distance() {
        let glyph = glyph_with(vec![
            PointData::line_to(0.0, 0.0),
            PointData::line_to(30.0, 40.0),
        ]);
        assert_eq!(
            format_selection(&glyph, &select(&[0, 1])),
            "↦ 30 ↥ 40\n∡ 53.13° ⤢ 50.00"
        );
    }

    #[test]
    fn selected_bcp_measures_against_predecessor() {
        let glyph = glyph_with(vec![
            PointData::curve_to(0.0, 0.0),
            PointData::off_curve(0.0, 60.0),
            PointData::off_curve(40.0, 100.0),
            PointData::curve_to(100.0, 100.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[1])), "⟙ 60");
        // predecessor is a BCP, so the successor anchor is used
        assert_eq!(format_selection(&glyph, &select(&[2])), "⟝ 60");
    }

    #[test]
    fn bcp_without_anchor_is_empty() {
        let glyph = glyph_with(vec![
            PointData::off_curve(0.0, 0.0),
            PointData::off_curve(10.0, 10.0),
            PointData::off_curve(20.0, 0.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[1])), "");
    }

    #[test]
    fn anchor_lists_leading_handle_first() {
        // predecessor points right, successor points left
        let forward = glyph_with(vec![
            PointData::curve_to(0.0, 0.0),
            PointData::off_curve(-30.0, 0.0),
            PointData::off_curve(-50.0, 50.0),
            PointData::curve_to(-100.0, 100.0),
            PointData::off_curve(40.0, 2.0),
        ]);
        let text = format_selection(&forward, &select(&[0]));
        assert_eq!(text, "⟝ 30\n⟞ 40 ∡ 2.86°");

        // same handles, opposite winding
        let reversed = glyph_with(vec![
            PointData::curve_to(0.0, 0.0),
            PointData::off_curve(40.0, 2.0),
            PointData::off_curve(50.0, 50.0),
            PointData::curve_to(100.0, 100.0),
            PointData::off_curve(-30.0, 0.0),
        ]);
        assert_eq!(format_selection(&reversed, &select(&[0])), text);
    }

    #[test]
    fn anchor_lists_up_before_down() {
        let glyph = glyph_with(vec![
            PointData::curve_to(0.0, 0.0),
            PointData::off_curve(0.0, 35.0),
            PointData::off_curve(50.0, 80.0),
            PointData::curve_to(100.0, 100.0),
            PointData::off_curve(0.0, -20.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[0])), "⟙ 35\n⟘ 20");
    }

    #[test]
    fn anchor_lists_up_before_right() {
        // predecessor points right, successor points up
        let glyph = glyph_with(vec![
            PointData::curve_to(0.0, 0.0),
            PointData::off_curve(0.0, 30.0),
            PointData::off_curve(50.0, 80.0),
            PointData::curve_to(100.0, 100.0),
            PointData::off_curve(40.0, 0.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[0])), "⟙ 30\n⟞ 40");
    }

    #[test]
    fn anchor_without_handles_is_empty() {
        let glyph = glyph_with(vec![
            PointData::line_to(0.0, 0.0),
            PointData::line_to(10.0, 0.0),
            PointData::line_to(10.0, 10.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[1])), "");
    }

    #[test]
    fn single_point_contour_is_empty() {
        let glyph = glyph_with(vec![PointData::move_to(10.0, 10.0)]);
        assert_eq!(format_selection(&glyph, &select(&[0])), "");

        let lonely_bcp = glyph_with(vec![PointData::off_curve(10.0, 10.0)]);
        assert_eq!(format_selection(&lonely_bcp, &select(&[0])), "");
    }

    #[test]
    fn handle_on_its_anchor_is_skipped() {
        let glyph = glyph_with(vec![
            PointData::curve_to(0.0, 0.0),
            PointData::off_curve(0.0, 0.0),
            PointData::off_curve(50.0, 50.0),
            PointData::curve_to(100.0, 100.0),
            PointData::off_curve(-20.0, 0.0),
        ]);
        assert_eq!(format_selection(&glyph, &select(&[0])), "⟝ 20");
    }
}
