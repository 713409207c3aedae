use egui::{Color32, CursorIcon, Painter, Pos2, Rect, Response, Stroke};

use crate::geometry::Corner;
use crate::input::to_screen;

/// Cursor shown while hovering the handle on `corner`
pub fn cursor_icon(corner: Corner) -> CursorIcon {
    match corner {
        Corner::TopLeft | Corner::BottomRight => CursorIcon::ResizeNwSe,
        Corner::TopRight | Corner::BottomLeft => CursorIcon::ResizeNeSw,
    }
}

/// A corner handle on a selected image. Dragging is routed through the editor's
/// input handling; this widget only paints the handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandle {
    corner: Corner,
    /// Canvas percent
    position: Pos2,
    /// Screen points
    radius: f32,
}

impl ResizeHandle {
    pub fn new(corner: Corner, position: Pos2, radius: f32) -> Self {
        Self {
            corner,
            position,
            radius,
        }
    }

    /// One handle per corner of `rect`
    pub fn for_rect(rect: Rect, radius: f32) -> [ResizeHandle; 4] {
        Corner::ALL.map(|corner| ResizeHandle::new(corner, corner.of(rect), radius))
    }

    /// Get the corner this handle represents
    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn paint(&self, painter: &Painter, canvas: Rect) {
        let center = to_screen(self.position, canvas);
        painter.circle_filled(center, self.radius, Color32::from_rgb(30, 120, 255));
        painter.circle_stroke(center, self.radius, Stroke::new(1.0, Color32::WHITE));
    }

    /// Set the resize cursor when the pointer hovers this handle
    pub fn hover_cursor(&self, response: &Response, canvas: Rect) {
        let center = to_screen(self.position, canvas);
        let hovered = response
            .hover_pos()
            .is_some_and(|pos| pos.distance(center) <= self.radius);
        if hovered {
            response.ctx.set_cursor_icon(cursor_icon(self.corner));
        }
    }
}
