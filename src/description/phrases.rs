use super::naming::{line_orientation, position_name, shape_name, size_name};
use crate::element::{Element, ElementKind, Segment};
use crate::region::LabeledRegion;

/// Freehand strokes with fewer points are too small to describe
pub const MIN_DESCRIBED_POINTS: usize = 3;

/// A described element, split by where it goes in the prose
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phrase {
    /// A literal text label to render in the image
    Text(String),
    /// A visual guide: shape, stroke, sticker or image
    Guide(String),
}

/// `product photo in the center (large area)`
pub fn region_phrase(region: &LabeledRegion) -> String {
    format!(
        "{} in {} ({} area)",
        region.label.trim(),
        position_name(region.center()),
        size_name(region.width, region.height)
    )
}

pub fn element_phrase(element: &Element) -> Option<Phrase> {
    let phrase = match &element.kind {
        ElementKind::Rectangle(rect) => {
            let style = if rect.filled { "filled" } else { "outlined" };
            Phrase::Guide(format!(
                "a {} {} {} box in {}",
                size_name(rect.width, rect.height),
                shape_name(rect.width, rect.height),
                style,
                position_name(rect.rect().center())
            ))
        }
        ElementKind::Circle(ellipse) => {
            let noun = if ellipse.is_circular() { "circle" } else { "oval" };
            let article = if ellipse.filled { "a filled" } else { "an outlined" };
            Phrase::Guide(format!("{article} {noun} in {}", position_name(ellipse.center())))
        }
        ElementKind::Arrow(segment) => Phrase::Guide(arrow_phrase(segment)),
        ElementKind::Line(segment) => Phrase::Guide(format!(
            "a {} line in {}",
            line_orientation(segment.end_x - segment.start_x, segment.end_y - segment.start_y),
            position_name(segment.midpoint())
        )),
        ElementKind::Freehand(stroke) => {
            if stroke.points.len() < MIN_DESCRIBED_POINTS {
                return None;
            }
            Phrase::Guide(format!("a freehand mark in {}", position_name(stroke.extent().center())))
        }
        ElementKind::Text(label) => {
            let text = label.text.trim();
            if text.is_empty() {
                return None;
            }
            Phrase::Text(format!(
                "the text \"{}\" in {}",
                text,
                position_name(label.anchor())
            ))
        }
        ElementKind::Sticker(sticker) => {
            let position = position_name(sticker.center());
            if sticker.is_emoji() && !sticker.content.is_empty() {
                Phrase::Guide(format!("a {} sticker in {}", sticker.content, position))
            } else {
                Phrase::Guide(format!("a decorative sticker in {position}"))
            }
        }
        ElementKind::Image(image) => Phrase::Guide(format!(
            "a {} image in {}",
            size_name(image.width, image.height),
            position_name(image.center())
        )),
    };
    Some(phrase)
}

fn arrow_phrase(segment: &Segment) -> String {
    let from = position_name(segment.start());
    let to = position_name(segment.end());
    if from == to {
        format!("an arrow in {from}")
    } else {
        format!("an arrow pointing from {from} to {to}")
    }
}

/// "a", "a and b", "a, b and c"
pub fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}
