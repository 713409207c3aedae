use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::common;

/// Axis-aligned box; `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub filled: bool,
}

impl Rectangle {
    /// Box spanning two opposite corners, in either order
    pub fn from_corners(a: Pos2, b: Pos2, filled: bool) -> Self {
        let rect = Rect::from_two_pos(common::clamp_pos(a), common::clamp_pos(b));
        Self {
            x: rect.min.x,
            y: rect.min.y,
            width: rect.width(),
            height: rect.height(),
            filled,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    pub fn is_valid(&self) -> bool {
        self.width >= common::MIN_SHAPE_EXTENT && self.height >= common::MIN_SHAPE_EXTENT
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// Ellipse with independent radii; a circle when `rx == ry`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    pub filled: bool,
}

impl Ellipse {
    /// Ellipse centered on `center` whose radii reach `cursor`, shrunk to stay on the canvas
    pub fn from_center(center: Pos2, cursor: Pos2, filled: bool) -> Self {
        let center = common::clamp_pos(center);
        let cursor = common::clamp_pos(cursor);
        let max_rx = center.x.min(common::CANVAS_MAX - center.x);
        let max_ry = center.y.min(common::CANVAS_MAX - center.y);
        Self {
            cx: center.x,
            cy: center.y,
            rx: (cursor.x - center.x).abs().min(max_rx),
            ry: (cursor.y - center.y).abs().min(max_ry),
            filled,
        }
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.cx, self.cy)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center(), Vec2::new(self.rx * 2.0, self.ry * 2.0))
    }

    pub fn is_valid(&self) -> bool {
        self.rx >= common::MIN_SHAPE_EXTENT && self.ry >= common::MIN_SHAPE_EXTENT
    }

    /// `sqrt(((x-cx)/rx)² + ((y-cy)/ry)²)`; 1.0 on the outline. Infinite for a degenerate ellipse.
    pub fn normalized_distance(&self, pos: Pos2) -> f32 {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return f32::INFINITY;
        }
        let dx = (pos.x - self.cx) / self.rx;
        let dy = (pos.y - self.cy) / self.ry;
        (dx * dx + dy * dy).sqrt()
    }

    /// Radii within 20% of each other read as a circle rather than an oval
    pub fn is_circular(&self) -> bool {
        if self.ry <= 0.0 {
            return false;
        }
        let ratio = self.rx / self.ry;
        (0.8..=1.25).contains(&ratio)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.cx += delta.x;
        self.cy += delta.y;
    }
}
