//! Contour and glyph outline data
//!
//! A contour is a closed, cyclic sequence of points. Neighbour lookups wrap
//! around with modular index arithmetic; a contour needs at least two points
//! before any point has a neighbour.

use serde::{Deserialize, Serialize};

use super::ufo_point::PointData;
use crate::editing::selection::PointRef;

/// A cyclic sequence of points owned by a glyph
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourData {
    pub points: Vec<PointData>,
}

impl ContourData {
    pub fn new(points: Vec<PointData>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PointData> {
        self.points.get(index)
    }

    /// Index of the first point equal to `point`
    pub fn index_of(&self, point: &PointData) -> Option<usize> {
        self.points.iter().position(|p| p == point)
    }

    /// Cyclic predecessor of `index`
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        let len = self.len();
        if len < 2 || index >= len {
            return None;
        }
        Some((index + len - 1) % len)
    }

    /// Cyclic successor of `index`
    pub fn next_index(&self, index: usize) -> Option<usize> {
        let len = self.len();
        if len < 2 || index >= len {
            return None;
        }
        Some((index + 1) % len)
    }

    /// Previous and next neighbour indices
    pub fn neighbors(&self, index: usize) -> (Option<usize>, Option<usize>) {
        (self.previous_index(index), self.next_index(index))
    }

    /// The on-curve point a BCP at `index` hangs off.
    ///
    /// The predecessor wins unless it is itself a BCP, in which case the
    /// successor is used. Returns `None` when neither neighbour is an anchor.
    pub fn bcp_anchor_index(&self, index: usize) -> Option<usize> {
        let (previous, next) = self.neighbors(index);
        [previous, next]
            .into_iter()
            .flatten()
            .find(|&i| self.points[i].is_anchor())
    }

    /// BCPs directly before and after the anchor at `index`
    pub fn adjacent_bcp_indices(&self, index: usize) -> (Option<usize>, Option<usize>) {
        let is_bcp = |i: &usize| self.points[*i].is_control();
        let (previous, next) = self.neighbors(index);
        (previous.filter(is_bcp), next.filter(is_bcp))
    }
}

/// The outline of a single glyph
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphData {
    pub name: String,
    pub contours: Vec<ContourData>,
}

impl GlyphData {
    pub fn new(name: impl Into<String>, contours: Vec<ContourData>) -> Self {
        Self {
            name: name.into(),
            contours,
        }
    }

    pub fn contour(&self, index: usize) -> Option<&ContourData> {
        self.contours.get(index)
    }

    /// Look up a point by reference
    pub fn point(&self, point_ref: PointRef) -> Option<&PointData> {
        self.contour(point_ref.contour)?.get(point_ref.index)
    }

    /// References to every point in the glyph, in contour order
    pub fn all_points(&self) -> Vec<PointRef> {
        self.contours
            .iter()
            .enumerate()
            .flat_map(|(contour, data)| {
                (0..data.len()).map(move |index| PointRef::new(contour, index))
            })
            .collect()
    }
}
