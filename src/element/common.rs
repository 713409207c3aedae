use egui::{Pos2, Rect, Vec2};

// Canvas space is a percentage of the canvas width/height on each axis.
pub const CANVAS_MIN: f32 = 0.0;
pub const CANVAS_MAX: f32 = 100.0;

/// Smallest width/height (or radius) a drawn shape may have and still be committed
pub const MIN_SHAPE_EXTENT: f32 = 0.5;
/// Smallest width/height an image may be resized to
pub const MIN_IMAGE_SIZE: f32 = 2.0;

/// Clamp a single coordinate into canvas space. NaN collapses to the canvas origin.
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        return CANVAS_MIN;
    }
    value.clamp(CANVAS_MIN, CANVAS_MAX)
}

/// Clamp a point into canvas space
pub fn clamp_pos(pos: Pos2) -> Pos2 {
    Pos2::new(clamp_percent(pos.x), clamp_percent(pos.y))
}

/// Calculate distance from a point to a line segment (useful for stroke hit testing)
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len_sq = line_vec.length_sq();
    if line_len_sq == 0.0 {
        return point_vec.length();
    }

    let t = (point_vec.dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let projection = line_start + line_vec * t;
    (point - projection).length()
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

/// Box of the given size centered on `(x, y)`
pub(crate) fn centered_rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::from_center_size(Pos2::new(x, y), Vec2::new(width, height))
}

/// Limit `delta` so that `extent` stays inside the canvas after translation.
///
/// An extent that cannot move on an axis (already spanning the canvas, or
/// partially outside it on both sides) gets a zero delta on that axis.
pub(crate) fn clamp_delta(extent: Rect, delta: Vec2) -> Vec2 {
    Vec2::new(
        clamp_axis(extent.min.x, extent.max.x, delta.x),
        clamp_axis(extent.min.y, extent.max.y, delta.y),
    )
}

fn clamp_axis(min: f32, max: f32, delta: f32) -> f32 {
    let lo = CANVAS_MIN - min;
    let hi = CANVAS_MAX - max;
    if lo > hi || delta.is_nan() {
        0.0
    } else {
        delta.clamp(lo, hi)
    }
}
