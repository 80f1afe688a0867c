//! Point selection
//!
//! The host hands over a fresh selection with every notification. A
//! selection is a set of references into the glyph; it owns no points.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::state::{ContourData, GlyphData, PointData};

/// Address of a point inside a glyph: contour index plus point index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointRef {
    pub contour: usize,
    pub index: usize,
}

impl PointRef {
    pub fn new(contour: usize, index: usize) -> Self {
        Self { contour, index }
    }
}

/// The set of selected points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    points: BTreeSet<PointRef>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every point of the glyph (select all)
    pub fn all(glyph: &GlyphData) -> Self {
        glyph.all_points().into_iter().collect()
    }

    pub fn insert(&mut self, point: PointRef) -> bool {
        self.points.insert(point)
    }

    pub fn remove(&mut self, point: &PointRef) -> bool {
        self.points.remove(point)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn contains(&self, point: &PointRef) -> bool {
        self.points.contains(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointRef> {
        self.points.iter()
    }

    /// Resolve against `glyph`, silently dropping dangling references
    pub fn resolve<'a>(&self, glyph: &'a GlyphData) -> Vec<SelectedPoint<'a>> {
        self.points
            .iter()
            .filter_map(|&point_ref| SelectedPoint::resolve(glyph, point_ref))
            .collect()
    }
}

impl FromIterator<PointRef> for Selection {
    fn from_iter<I: IntoIterator<Item = PointRef>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// A selected point together with its owning contour
#[derive(Debug, Clone, Copy)]
pub struct SelectedPoint<'a> {
    pub point: &'a PointData,
    pub contour: &'a ContourData,
    pub index: usize,
}

impl<'a> SelectedPoint<'a> {
    pub fn resolve(glyph: &'a GlyphData, point_ref: PointRef) -> Option<Self> {
        let contour = glyph.contour(point_ref.contour)?;
        let point = contour.get(point_ref.index)?;
        Some(Self {
            point,
            contour,
            index: point_ref.index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph() -> GlyphData {
        GlyphData::new(
            "o",
            vec![
                ContourData::new(vec![
                    PointData::line_to(0.0, 0.0),
                    PointData::line_to(10.0, 0.0),
                    PointData::line_to(10.0, 10.0),
                ]),
                ContourData::new(vec![PointData::move_to(5.0, 5.0)]),
            ],
        )
    }

    #[test]
    fn resolve_drops_dangling_references() {
        let glyph = glyph();
        let selection: Selection = [PointRef::new(0, 2), PointRef::new(0, 7), PointRef::new(3, 0)]
            .into_iter()
            .collect();

        let resolved = selection.resolve(&glyph);
        assert_eq!(resolved.len(), 1);
        assert_eq!(*resolved[0].point, PointData::line_to(10.0, 10.0));
        assert_eq!(resolved[0].index, 2);
    }

    #[test]
    fn select_all_covers_every_contour() {
        let glyph = glyph();
        let selection = Selection::all(&glyph);
        assert_eq!(selection.len(), 4);
        assert!(selection.contains(&PointRef::new(1, 0)));
    }

    #[test]
    fn selected_point_keeps_its_contour() {
        let glyph = glyph();
        let lonely = SelectedPoint::resolve(&glyph, PointRef::new(1, 0)).unwrap();
        assert_eq!(lonely.contour.len(), 1);
        assert_eq!(*lonely.point, PointData::move_to(5.0, 5.0));
    }

    #[test]
    fn duplicate_references_collapse() {
        let mut selection = Selection::new();
        assert!(selection.insert(PointRef::new(0, 1)));
        assert!(!selection.insert(PointRef::new(0, 1)));
        assert_eq!(selection.len(), 1);
        assert!(selection.remove(&PointRef::new(0, 1)));
        assert!(selection.is_empty());
    }
}
