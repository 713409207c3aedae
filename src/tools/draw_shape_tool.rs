use egui::{Pos2, Vec2};
use log::debug;

use super::{DraftKind, ToolSettings};
use crate::element::{
    clamp_pos, Element, ElementKind, Ellipse, Freehand, Rectangle, Segment, CANVAS_MAX,
};
use crate::geometry::constrain::{constrain_to_square, snap_to_angle, ANGLE_STEP};

/// Start a zero-extent draft at `pos` using the current tool settings
pub fn begin_draft(kind: DraftKind, pos: Pos2, settings: &ToolSettings) -> Element {
    let pos = clamp_pos(pos);
    let kind = match kind {
        DraftKind::Freehand => ElementKind::Freehand(Freehand::new(pos)),
        DraftKind::Rectangle => ElementKind::Rectangle(Rectangle::from_corners(pos, pos, settings.fill_shapes)),
        DraftKind::Circle => ElementKind::Circle(Ellipse::from_center(pos, pos, settings.fill_shapes)),
        DraftKind::Line => ElementKind::Line(Segment::new(pos, pos)),
        DraftKind::Arrow => ElementKind::Arrow(Segment::new(pos, pos)),
    };
    let draft = Element::new(kind, &settings.style);
    debug!("Began {} draft at ({:.1}, {:.1})", draft.type_name(), pos.x, pos.y);
    draft
}

/// Grow `draft` toward `cursor`.
///
/// Rectangles span anchor to cursor, circles are centered on the anchor, lines
/// and arrows move their end point and freehand strokes append a point once it
/// is at least `min_point_distance` from the last one. With `precision` held,
/// boxes become squares, ellipses become circles and segments snap to 45°.
pub fn update_draft(draft: &mut Element, anchor: Pos2, cursor: Pos2, precision: bool, min_point_distance: f32) {
    let cursor = clamp_pos(cursor);
    match &mut draft.kind {
        ElementKind::Freehand(stroke) => {
            stroke.push_point(cursor, min_point_distance);
        }
        ElementKind::Rectangle(rect) => {
            let end = if precision { constrain_to_square(anchor, cursor) } else { cursor };
            *rect = Rectangle::from_corners(anchor, end, rect.filled);
        }
        ElementKind::Circle(ellipse) => {
            let end = if precision { equal_radii(anchor, cursor) } else { cursor };
            *ellipse = Ellipse::from_center(anchor, end, ellipse.filled);
        }
        ElementKind::Line(segment) | ElementKind::Arrow(segment) => {
            let end = if precision { snap_to_angle(anchor, cursor, ANGLE_STEP) } else { cursor };
            segment.set_end(end);
        }
        ElementKind::Text(_) | ElementKind::Sticker(_) | ElementKind::Image(_) => {}
    }
}

fn equal_radii(center: Pos2, cursor: Pos2) -> Pos2 {
    let center = clamp_pos(center);
    let delta = cursor - center;
    let room = center
        .x
        .min(CANVAS_MAX - center.x)
        .min(center.y)
        .min(CANVAS_MAX - center.y);
    let radius = delta.x.abs().max(delta.y.abs()).min(room);
    center + Vec2::splat(radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ToolSettings {
        ToolSettings::default()
    }

    #[test]
    fn rectangle_grows_from_anchor_in_any_direction() {
        let anchor = Pos2::new(50.0, 50.0);
        let mut draft = begin_draft(DraftKind::Rectangle, anchor, &settings());
        update_draft(&mut draft, anchor, Pos2::new(30.0, 40.0), false, 0.3);
        match draft.kind {
            ElementKind::Rectangle(rect) => {
                assert_eq!((rect.x, rect.y, rect.width, rect.height), (30.0, 40.0, 20.0, 10.0));
            }
            other => panic!("unexpected draft {other:?}"),
        }
    }

    #[test]
    fn precision_circle_has_equal_radii() {
        let anchor = Pos2::new(50.0, 50.0);
        let mut draft = begin_draft(DraftKind::Circle, anchor, &settings());
        update_draft(&mut draft, anchor, Pos2::new(60.0, 54.0), true, 0.3);
        match draft.kind {
            ElementKind::Circle(ellipse) => {
                assert_eq!(ellipse.rx, 10.0);
                assert_eq!(ellipse.ry, 10.0);
            }
            other => panic!("unexpected draft {other:?}"),
        }
    }

    #[test]
    fn freehand_skips_points_closer_than_minimum() {
        let anchor = Pos2::new(10.0, 10.0);
        let mut draft = begin_draft(DraftKind::Freehand, anchor, &settings());
        update_draft(&mut draft, anchor, Pos2::new(10.1, 10.0), false, 0.3);
        update_draft(&mut draft, anchor, Pos2::new(11.0, 10.0), false, 0.3);
        match &draft.kind {
            ElementKind::Freehand(stroke) => assert_eq!(stroke.points.len(), 2),
            other => panic!("unexpected draft {other:?}"),
        }
    }

    #[test]
    fn precision_line_snaps_horizontal() {
        let anchor = Pos2::new(20.0, 50.0);
        let mut draft = begin_draft(DraftKind::Line, anchor, &settings());
        update_draft(&mut draft, anchor, Pos2::new(60.0, 53.0), true, 0.3);
        match draft.kind {
            ElementKind::Line(segment) => assert!((segment.end_y - 50.0).abs() < 1e-4),
            other => panic!("unexpected draft {other:?}"),
        }
    }
}
