use std::f32::consts::PI;

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::common;

/// Angle between the shaft and each barb of an arrowhead
pub const ARROWHEAD_ANGLE: f32 = PI / 6.0;
pub const MIN_ARROWHEAD_LENGTH: f32 = 1.5;

/// Freehand pen stroke: the points in the order they were drawn
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Freehand {
    pub points: Vec<Pos2>,
}

impl Freehand {
    /// Start a stroke with a single point (a draft, not yet valid)
    pub fn new(start: Pos2) -> Self {
        Self {
            points: vec![common::clamp_pos(start)],
        }
    }

    pub fn from_points(points: Vec<Pos2>) -> Self {
        Self {
            points: points.into_iter().map(common::clamp_pos).collect(),
        }
    }

    /// Append a point unless it lies closer than `min_distance` to the last one.
    /// Returns whether the point was kept.
    pub fn push_point(&mut self, point: Pos2, min_distance: f32) -> bool {
        let point = common::clamp_pos(point);
        if let Some(last) = self.points.last() {
            if last.distance(point) < min_distance {
                return false;
            }
        }
        self.points.push(point);
        true
    }

    pub fn extent(&self) -> Rect {
        common::calculate_bounds(&self.points, 0.0)
    }

    /// At least two points that do not all coincide
    pub fn is_valid(&self) -> bool {
        if self.points.len() < 2 {
            return false;
        }
        let extent = self.extent();
        extent.width() > 0.0 || extent.height() > 0.0
    }

    pub fn segments(&self) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    pub(crate) fn mirror_x(&mut self, axis: f32) {
        for point in &mut self.points {
            point.x = 2.0 * axis - point.x;
        }
    }

    pub(crate) fn mirror_y(&mut self, axis: f32) {
        for point in &mut self.points {
            point.y = 2.0 * axis - point.y;
        }
    }
}

/// Straight segment shared by the `line` and `arrow` variants
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

impl Segment {
    pub fn new(start: Pos2, end: Pos2) -> Self {
        let start = common::clamp_pos(start);
        let end = common::clamp_pos(end);
        Self {
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
        }
    }

    pub fn start(&self) -> Pos2 {
        Pos2::new(self.start_x, self.start_y)
    }

    pub fn end(&self) -> Pos2 {
        Pos2::new(self.end_x, self.end_y)
    }

    pub fn set_end(&mut self, end: Pos2) {
        let end = common::clamp_pos(end);
        self.end_x = end.x;
        self.end_y = end.y;
    }

    pub fn midpoint(&self) -> Pos2 {
        self.start().lerp(self.end(), 0.5)
    }

    pub fn length(&self) -> f32 {
        self.start().distance(self.end())
    }

    /// Angle of the segment in radians, measured from the positive x axis (y down)
    pub fn angle(&self) -> f32 {
        (self.end_y - self.start_y).atan2(self.end_x - self.start_x)
    }

    pub fn extent(&self) -> Rect {
        Rect::from_two_pos(self.start(), self.end())
    }

    pub fn is_valid(&self) -> bool {
        self.length() >= common::MIN_SHAPE_EXTENT
    }

    /// The two barb tips of an arrowhead drawn at the end point
    pub fn arrowhead(&self, stroke_width: f32) -> [Pos2; 2] {
        let length = (stroke_width * 1.5).max(MIN_ARROWHEAD_LENGTH);
        let angle = self.angle();
        let end = self.end();
        let barb = |theta: f32| end - Vec2::new(theta.cos(), theta.sin()) * length;
        [barb(angle - ARROWHEAD_ANGLE), barb(angle + ARROWHEAD_ANGLE)]
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.start_x += delta.x;
        self.start_y += delta.y;
        self.end_x += delta.x;
        self.end_y += delta.y;
    }

    pub(crate) fn mirror_x(&mut self, axis: f32) {
        self.start_x = 2.0 * axis - self.start_x;
        self.end_x = 2.0 * axis - self.end_x;
    }

    pub(crate) fn mirror_y(&mut self, axis: f32) {
        self.start_y = 2.0 * axis - self.start_y;
        self.end_y = 2.0 * axis - self.end_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_point_respects_min_distance() {
        let mut stroke = Freehand::new(Pos2::new(10.0, 10.0));
        assert!(!stroke.push_point(Pos2::new(10.1, 10.0), 0.3));
        assert!(stroke.push_point(Pos2::new(11.0, 10.0), 0.3));
        assert_eq!(stroke.points.len(), 2);
    }

    #[test]
    fn single_point_and_coincident_points_are_invalid() {
        assert!(!Freehand::new(Pos2::new(5.0, 5.0)).is_valid());
        let same = Freehand::from_points(vec![Pos2::new(5.0, 5.0), Pos2::new(5.0, 5.0)]);
        assert!(!same.is_valid());
        let two = Freehand::from_points(vec![Pos2::new(5.0, 5.0), Pos2::new(6.0, 5.0)]);
        assert!(two.is_valid());
    }

    #[test]
    fn arrowhead_barbs_sit_behind_the_tip() {
        let segment = Segment::new(Pos2::new(20.0, 50.0), Pos2::new(80.0, 50.0));
        let [left, right] = segment.arrowhead(2.0);
        assert!(left.x < 80.0 && right.x < 80.0);
        assert!((left.y - 50.0).abs() > 0.1);
        assert!(((left.y - 50.0) + (right.y - 50.0)).abs() < 1e-4);
    }
}
