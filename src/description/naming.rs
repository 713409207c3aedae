//! Plain-language names for positions, sizes and proportions on the canvas.
use egui::Pos2;

/// Upper bound of the first third of an axis
pub const FIRST_THIRD: f32 = 33.0;
/// Upper bound (inclusive) of the middle third of an axis
pub const SECOND_THIRD: f32 = 67.0;

fn vertical_band(y: f32) -> &'static str {
    if y < FIRST_THIRD {
        "top"
    } else if y <= SECOND_THIRD {
        "middle"
    } else {
        "bottom"
    }
}

fn horizontal_band(x: f32) -> &'static str {
    if x < FIRST_THIRD {
        "left"
    } else if x <= SECOND_THIRD {
        "center"
    } else {
        "right"
    }
}

/// "the center", "the left side", "the top", "the bottom-right", ...
pub fn position_name(pos: Pos2) -> String {
    match (vertical_band(pos.y), horizontal_band(pos.x)) {
        ("middle", "center") => "the center".to_string(),
        ("middle", side) => format!("the {side} side"),
        (edge, "center") => format!("the {edge}"),
        (edge, side) => format!("the {edge}-{side}"),
    }
}

/// Size word for a `width × height` box in canvas percent
pub fn size_name(width: f32, height: f32) -> &'static str {
    let area = width * height;
    if area < 100.0 {
        "tiny"
    } else if area < 900.0 {
        "small"
    } else if area < 2500.0 {
        "medium-sized"
    } else {
        "large"
    }
}

/// Proportion word for a `width × height` box
pub fn shape_name(width: f32, height: f32) -> &'static str {
    if height <= 0.0 {
        return "wide horizontal";
    }
    let ratio = width / height;
    if ratio > 2.5 {
        "wide horizontal"
    } else if ratio > 1.3 {
        "horizontal"
    } else if ratio >= 0.77 {
        "square-ish"
    } else if ratio >= 0.4 {
        "vertical"
    } else {
        "tall vertical"
    }
}

/// Orientation of a straight segment from its axis deltas
pub fn line_orientation(dx: f32, dy: f32) -> &'static str {
    let (dx, dy) = (dx.abs(), dy.abs());
    if dy <= dx * 0.3 {
        "horizontal"
    } else if dx <= dy * 0.3 {
        "vertical"
    } else {
        "diagonal"
    }
}
