use egui::{Pos2, Rect, Vec2};

use super::Corner;
use crate::element::{clamp_pos, CANVAS_MAX, CANVAS_MIN};

/// New box after dragging `corner` of `original` to `pointer`.
///
/// The opposite corner stays fixed and the dragged corner never crosses it.
/// With `keep_aspect`, whichever axis changed relatively more drives the scale
/// and the other dimension is derived from the original ratio.
pub fn resize_from_corner(
    original: Rect,
    corner: Corner,
    pointer: Pos2,
    keep_aspect: bool,
    min_size: f32,
) -> Rect {
    let fixed = corner.opposite().of(original);
    let pointer = clamp_pos(pointer);

    let dir_x = if matches!(corner, Corner::TopRight | Corner::BottomRight) { 1.0 } else { -1.0 };
    let dir_y = if matches!(corner, Corner::BottomLeft | Corner::BottomRight) { 1.0 } else { -1.0 };
    let room_x = if dir_x > 0.0 { CANVAS_MAX - fixed.x } else { fixed.x - CANVAS_MIN };
    let room_y = if dir_y > 0.0 { CANVAS_MAX - fixed.y } else { fixed.y - CANVAS_MIN };

    let dragged_w = (pointer.x - fixed.x) * dir_x;
    let dragged_h = (pointer.y - fixed.y) * dir_y;

    let (width, height) = if keep_aspect && original.width() > 0.0 && original.height() > 0.0 {
        let (ow, oh) = (original.width(), original.height());
        let scale = (dragged_w / ow).max(dragged_h / oh);
        let min_scale = (min_size / ow).max(min_size / oh);
        let max_scale = (room_x / ow).min(room_y / oh);
        let scale = if min_scale <= max_scale {
            scale.clamp(min_scale, max_scale)
        } else {
            max_scale
        };
        (ow * scale, oh * scale)
    } else {
        (
            clamp_extent(dragged_w, min_size, room_x),
            clamp_extent(dragged_h, min_size, room_y),
        )
    };

    let min = Pos2::new(
        if dir_x > 0.0 { fixed.x } else { fixed.x - width },
        if dir_y > 0.0 { fixed.y } else { fixed.y - height },
    );
    Rect::from_min_size(min, Vec2::new(width, height))
}

fn clamp_extent(value: f32, min: f32, room: f32) -> f32 {
    if min <= room { value.clamp(min, room) } else { room }
}
