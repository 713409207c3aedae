use egui::Pos2;

use super::Corner;
use crate::element::{distance_to_line_segment, Element, ElementKind, Rectangle};

/// Default pick tolerance, in canvas percent
pub const DEFAULT_HIT_TOLERANCE: f32 = 1.0;
/// Default radius around an image corner that grabs its resize handle
pub const RESIZE_HANDLE_RADIUS: f32 = 2.0;

/// Whether `pos` falls on or in `element` within `tolerance`.
///
/// Stickers and images are tested against their unrotated box.
pub fn hit_test(pos: Pos2, element: &Element, tolerance: f32) -> bool {
    let stroke_reach = tolerance + element.stroke_width / 2.0;
    match &element.kind {
        ElementKind::Freehand(stroke) => {
            if stroke.points.len() == 1 {
                return stroke.points[0].distance(pos) < stroke_reach;
            }
            stroke
                .segments()
                .any(|(a, b)| distance_to_line_segment(pos, a, b) < stroke_reach)
        }
        ElementKind::Line(segment) | ElementKind::Arrow(segment) => {
            distance_to_line_segment(pos, segment.start(), segment.end()) < stroke_reach
        }
        ElementKind::Rectangle(rect) => {
            if rect.filled {
                rect.rect().contains(pos)
            } else {
                near_rectangle_edge(pos, rect, tolerance)
            }
        }
        ElementKind::Circle(ellipse) => {
            let distance = ellipse.normalized_distance(pos);
            if ellipse.filled {
                distance <= 1.0
            } else {
                let smallest_radius = ellipse.rx.min(ellipse.ry);
                if smallest_radius <= 0.0 {
                    return false;
                }
                (distance - 1.0).abs() <= tolerance / smallest_radius
            }
        }
        ElementKind::Text(label) => label.text_box().contains(pos),
        ElementKind::Sticker(sticker) => sticker.rect().contains(pos),
        ElementKind::Image(image) => image.rect().contains(pos),
    }
}

fn near_rectangle_edge(pos: Pos2, rect: &Rectangle, tolerance: f32) -> bool {
    let r = rect.rect();
    let edges = [
        (r.left_top(), r.right_top()),
        (r.right_top(), r.right_bottom()),
        (r.right_bottom(), r.left_bottom()),
        (r.left_bottom(), r.left_top()),
    ];
    edges
        .iter()
        .any(|(a, b)| distance_to_line_segment(pos, *a, *b) <= tolerance)
}

/// Topmost (highest z-index) element under `pos`
pub fn topmost_hit(elements: &[Element], pos: Pos2, tolerance: f32) -> Option<&Element> {
    elements
        .iter()
        .filter(|element| hit_test(pos, element, tolerance))
        .max_by_key(|element| element.z_index)
}

/// Which corner handle of an image element is under `pos`, if any.
/// Other variants have no handles.
pub fn hit_test_resize_handle(pos: Pos2, element: &Element, handle_radius: f32) -> Option<Corner> {
    let image = element.as_image()?;
    let rect = image.rect();
    Corner::ALL
        .into_iter()
        .find(|corner| corner.of(rect).distance(pos) <= handle_radius)
}
