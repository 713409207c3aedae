//! Precision-modifier constraints applied while drawing.
use std::f32::consts::FRAC_PI_4;

use egui::{Pos2, Vec2};

use crate::element::{clamp_pos, CANVAS_MAX, CANVAS_MIN};

/// Angle increment lines and arrows snap to while the precision modifier is held
pub const ANGLE_STEP: f32 = FRAC_PI_4;

/// Move `cursor` so that anchor→cursor spans equal extents on both axes.
/// The side is the larger of the two deltas, shortened to stay on the canvas.
pub fn constrain_to_square(anchor: Pos2, cursor: Pos2) -> Pos2 {
    let anchor = clamp_pos(anchor);
    let delta = cursor - anchor;
    let sign_x = if delta.x < 0.0 { -1.0 } else { 1.0 };
    let sign_y = if delta.y < 0.0 { -1.0 } else { 1.0 };

    let room_x = if sign_x < 0.0 { anchor.x - CANVAS_MIN } else { CANVAS_MAX - anchor.x };
    let room_y = if sign_y < 0.0 { anchor.y - CANVAS_MIN } else { CANVAS_MAX - anchor.y };
    let side = delta.x.abs().max(delta.y.abs()).min(room_x).min(room_y);

    anchor + Vec2::new(sign_x * side, sign_y * side)
}

/// Rotate anchor→cursor onto the nearest multiple of `step` radians, keeping its
/// length but shortening it where it would leave the canvas.
pub fn snap_to_angle(anchor: Pos2, cursor: Pos2, step: f32) -> Pos2 {
    let anchor = clamp_pos(anchor);
    let delta = cursor - anchor;
    let length = delta.length();
    if length == 0.0 || step <= 0.0 {
        return clamp_pos(cursor);
    }

    let angle = (delta.y.atan2(delta.x) / step).round() * step;
    let direction = Vec2::new(angle.cos(), angle.sin());
    let length = length.min(room_along(anchor.x, direction.x)).min(room_along(anchor.y, direction.y));
    clamp_pos(anchor + direction * length)
}

fn room_along(origin: f32, direction: f32) -> f32 {
    if direction > f32::EPSILON {
        (CANVAS_MAX - origin) / direction
    } else if direction < -f32::EPSILON {
        (origin - CANVAS_MIN) / -direction
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_uses_larger_delta_and_keeps_direction() {
        let end = constrain_to_square(Pos2::new(50.0, 50.0), Pos2::new(40.0, 65.0));
        assert_eq!(end, Pos2::new(35.0, 65.0));
    }

    #[test]
    fn square_shrinks_at_canvas_edge() {
        let end = constrain_to_square(Pos2::new(90.0, 50.0), Pos2::new(95.0, 80.0));
        assert_eq!(end, Pos2::new(100.0, 60.0));
    }

    #[test]
    fn angle_snaps_to_45_degree_steps() {
        let end = snap_to_angle(Pos2::new(10.0, 10.0), Pos2::new(30.0, 12.0), ANGLE_STEP);
        assert!((end.y - 10.0).abs() < 1e-4);
        assert!(end.x > 29.0);

        let end = snap_to_angle(Pos2::new(10.0, 10.0), Pos2::new(30.0, 28.0), ANGLE_STEP);
        assert!(((end.x - 10.0) - (end.y - 10.0)).abs() < 1e-3);
    }
}
