//! UFO format conversion utilities
//!
//! Converts norad glyph outlines into the plain data the distance display
//! works on. This is the adapter layer between a norad-based host and the
//! geometry code.

use crate::core::state::{ContourData, GlyphData, PointData, UfoPointType};

impl GlyphData {
    /// Convert from a norad glyph; components are ignored
    pub fn from_norad_glyph(norad_glyph: &norad::Glyph) -> Self {
        let contours = norad_glyph
            .contours
            .iter()
            .map(ContourData::from_norad_contour)
            .collect();

        Self {
            name: norad_glyph.name().to_string(),
            contours,
        }
    }
}

impl ContourData {
    pub fn from_norad_contour(norad_contour: &norad::Contour) -> Self {
        let points = norad_contour
            .points
            .iter()
            .map(PointData::from_norad_point)
            .collect();

        Self { points }
    }
}

impl PointData {
    pub fn from_norad_point(norad_point: &norad::ContourPoint) -> Self {
        Self {
            x: norad_point.x,
            y: norad_point.y,
            point_type: UfoPointType::from_norad_point_type(&norad_point.typ),
        }
    }
}

impl UfoPointType {
    pub fn from_norad_point_type(norad_type: &norad::PointType) -> Self {
        match norad_type {
            norad::PointType::Move => UfoPointType::Move,
            norad::PointType::Line => UfoPointType::Line,
            norad::PointType::OffCurve => UfoPointType::OffCurve,
            norad::PointType::Curve => UfoPointType::Curve,
            norad::PointType::QCurve => UfoPointType::QCurve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norad_point(x: f64, y: f64, typ: norad::PointType) -> norad::ContourPoint {
        norad::ContourPoint::new(x, y, typ, false, None, None)
    }

    #[test]
    fn glyph_from_norad_keeps_point_types() {
        let mut glyph = norad::Glyph::new("n");
        glyph.contours.push(norad::Contour::new(
            vec![
                norad_point(0.0, 0.0, norad::PointType::Curve),
                norad_point(0.0, 55.0, norad::PointType::OffCurve),
                norad_point(45.0, 100.0, norad::PointType::OffCurve),
                norad_point(100.0, 100.0, norad::PointType::Curve),
            ],
            None,
        ));

        let data = GlyphData::from_norad_glyph(&glyph);
        assert_eq!(data.name, "n");
        assert_eq!(data.contours.len(), 1);
        assert_eq!(data.contours[0].points[1], PointData::off_curve(0.0, 55.0));
        assert!(data.contours[0].points[3].is_anchor());
    }

    #[test]
    fn contour_from_norad_maps_every_point_type() {
        let contour = norad::Contour::new(
            vec![
                norad_point(0.0, 0.0, norad::PointType::Move),
                norad_point(10.0, 0.0, norad::PointType::Line),
                norad_point(15.0, 2.0, norad::PointType::OffCurve),
                norad_point(20.0, 5.0, norad::PointType::QCurve),
                norad_point(30.0, 5.0, norad::PointType::Curve),
            ],
            None,
        );

        let data = ContourData::from_norad_contour(&contour);
        assert_eq!(
            data,
            ContourData::new(vec![
                PointData::move_to(0.0, 0.0),
                PointData::line_to(10.0, 0.0),
                PointData::off_curve(15.0, 2.0),
                PointData::qcurve_to(20.0, 5.0),
                PointData::curve_to(30.0, 5.0),
            ])
        );
    }
}
