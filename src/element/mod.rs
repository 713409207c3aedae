//! Annotation elements drawn on the composition canvas.
//!
//! All coordinates and extents are percentages (0–100) of the canvas width or
//! height, which keeps the model independent of the rendered resolution.
use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id_generator::generate_id;

mod common;
pub(crate) mod image;
pub(crate) mod shape;
pub(crate) mod sticker;
pub(crate) mod stroke;
pub(crate) mod text;

pub use common::{
    clamp_percent, clamp_pos, CANVAS_MAX, CANVAS_MIN, MIN_IMAGE_SIZE, MIN_SHAPE_EXTENT,
};
pub(crate) use common::{centered_rect, distance_to_line_segment};
pub use image::ImageBox;
pub use shape::{Ellipse, Rectangle};
pub use sticker::{Sticker, StickerTemplate, STICKER_TYPE_EMOJI};
pub use stroke::{Freehand, Segment};
pub use text::{TextLabel, CHAR_WIDTH_FACTOR};

/// Opaque, stable element identifier
pub type ElementId = Uuid;

/// Visual attributes shared by every element variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    pub color: String,
    pub stroke_width: f32,
    /// 0–100
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: "#ef4444".to_string(),
            stroke_width: 3.0,
            opacity: 100.0,
        }
    }
}

/// Partial style update for the selected element; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    pub color: Option<String>,
    pub stroke_width: Option<f32>,
    pub opacity: Option<f32>,
}

/// Per-variant geometry, discriminated by `type` when serialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Freehand(Freehand),
    Rectangle(Rectangle),
    Circle(Ellipse),
    Line(Segment),
    Arrow(Segment),
    Text(TextLabel),
    Sticker(Sticker),
    Image(ImageBox),
}

impl ElementKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::Freehand(_) => "freehand",
            ElementKind::Rectangle(_) => "rectangle",
            ElementKind::Circle(_) => "circle",
            ElementKind::Line(_) => "line",
            ElementKind::Arrow(_) => "arrow",
            ElementKind::Text(_) => "text",
            ElementKind::Sticker(_) => "sticker",
            ElementKind::Image(_) => "image",
        }
    }
}

/// One annotation on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    /// Dense 1..N stacking order within the element list; 0 until the element is committed
    pub z_index: u32,
    /// 0–100
    pub opacity: f32,
    pub color: String,
    pub stroke_width: f32,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// Create a new element with a fresh id and the given style
    pub fn new(kind: ElementKind, style: &Style) -> Self {
        Self {
            id: generate_id(),
            z_index: 0,
            opacity: style.opacity.clamp(0.0, 100.0),
            color: style.color.clone(),
            stroke_width: style.stroke_width.max(0.0),
            kind,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Geometric extent used for clamping: the shape itself, or just the anchor point for text
    pub fn extent(&self) -> Rect {
        match &self.kind {
            ElementKind::Freehand(stroke) => stroke.extent(),
            ElementKind::Rectangle(rect) => rect.rect(),
            ElementKind::Circle(ellipse) => ellipse.rect(),
            ElementKind::Line(segment) | ElementKind::Arrow(segment) => segment.extent(),
            ElementKind::Text(label) => Rect::from_min_max(label.anchor(), label.anchor()),
            ElementKind::Sticker(sticker) => sticker.rect(),
            ElementKind::Image(image) => image.rect(),
        }
    }

    /// Visual bounding box (the approximate glyph box for text)
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            ElementKind::Text(label) => label.text_box(),
            _ => self.extent(),
        }
    }

    pub fn centroid(&self) -> Pos2 {
        self.bounds().center()
    }

    /// Whether the element may be committed to the element list
    pub fn is_valid(&self) -> bool {
        match &self.kind {
            ElementKind::Freehand(stroke) => stroke.is_valid(),
            ElementKind::Rectangle(rect) => rect.is_valid(),
            ElementKind::Circle(ellipse) => ellipse.is_valid(),
            ElementKind::Line(segment) | ElementKind::Arrow(segment) => segment.is_valid(),
            ElementKind::Text(label) => label.is_valid(),
            ElementKind::Sticker(sticker) => sticker.is_valid(),
            ElementKind::Image(image) => image.is_valid(),
        }
    }

    /// Only images expose interactive resize handles
    pub fn is_resizable(&self) -> bool {
        matches!(self.kind, ElementKind::Image(_))
    }

    /// Translate by `delta`, limited so the element stays on the canvas.
    /// Returns the delta actually applied.
    pub fn translate(&mut self, delta: Vec2) -> Vec2 {
        let applied = common::clamp_delta(self.extent(), delta);
        if applied == Vec2::ZERO {
            return applied;
        }
        match &mut self.kind {
            ElementKind::Freehand(stroke) => stroke.translate(applied),
            ElementKind::Rectangle(rect) => rect.translate(applied),
            ElementKind::Circle(ellipse) => ellipse.translate(applied),
            ElementKind::Line(segment) | ElementKind::Arrow(segment) => segment.translate(applied),
            ElementKind::Text(label) => label.translate(applied),
            ElementKind::Sticker(sticker) => sticker.translate(applied),
            ElementKind::Image(image) => image.translate(applied),
        }
        applied
    }

    /// Mirror the geometry left-to-right within its own bounds.
    /// Returns false for variants that are symmetric about their center.
    pub fn flip_horizontal(&mut self) -> bool {
        let axis = self.extent().center().x;
        match &mut self.kind {
            ElementKind::Freehand(stroke) => stroke.mirror_x(axis),
            ElementKind::Line(segment) | ElementKind::Arrow(segment) => segment.mirror_x(axis),
            _ => return false,
        }
        true
    }

    /// Mirror the geometry top-to-bottom within its own bounds
    pub fn flip_vertical(&mut self) -> bool {
        let axis = self.extent().center().y;
        match &mut self.kind {
            ElementKind::Freehand(stroke) => stroke.mirror_y(axis),
            ElementKind::Line(segment) | ElementKind::Arrow(segment) => segment.mirror_y(axis),
            _ => return false,
        }
        true
    }

    pub fn apply_style(&mut self, patch: &StylePatch) -> bool {
        let before = (self.color.clone(), self.stroke_width, self.opacity);
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(width) = patch.stroke_width {
            self.stroke_width = width.max(0.0);
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity.clamp(0.0, 100.0);
        }
        before != (self.color.clone(), self.stroke_width, self.opacity)
    }

    /// Copy with a fresh id, not yet committed
    pub fn duplicate(&self) -> Self {
        Self {
            id: generate_id(),
            z_index: 0,
            ..self.clone()
        }
    }

    pub fn as_image(&self) -> Option<&ImageBox> {
        match &self.kind {
            ElementKind::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextLabel> {
        match &self.kind {
            ElementKind::Text(label) => Some(label),
            _ => None,
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    pub fn create_freehand(points: Vec<Pos2>, style: &Style) -> Element {
        Element::new(ElementKind::Freehand(Freehand::from_points(points)), style)
    }

    pub fn create_rectangle(x: f32, y: f32, width: f32, height: f32, filled: bool, style: &Style) -> Element {
        let rect = Rectangle::from_corners(Pos2::new(x, y), Pos2::new(x + width, y + height), filled);
        Element::new(ElementKind::Rectangle(rect), style)
    }

    pub fn create_circle(cx: f32, cy: f32, rx: f32, ry: f32, filled: bool, style: &Style) -> Element {
        let ellipse = Ellipse::from_center(Pos2::new(cx, cy), Pos2::new(cx + rx, cy + ry), filled);
        Element::new(ElementKind::Circle(ellipse), style)
    }

    pub fn create_line(start: Pos2, end: Pos2, style: &Style) -> Element {
        Element::new(ElementKind::Line(Segment::new(start, end)), style)
    }

    pub fn create_arrow(start: Pos2, end: Pos2, style: &Style) -> Element {
        Element::new(ElementKind::Arrow(Segment::new(start, end)), style)
    }

    pub fn create_text(anchor: Pos2, text: &str, font_size: f32, font_family: &str, style: &Style) -> Element {
        Element::new(
            ElementKind::Text(TextLabel::new(anchor, text, font_size, font_family)),
            style,
        )
    }

    pub fn create_sticker(template: &StickerTemplate, center: Pos2, size: f32, style: &Style) -> Element {
        Element::new(ElementKind::Sticker(Sticker::from_template(template, center, size)), style)
    }

    pub fn create_image(src: &str, center: Pos2, width: f32, height: f32, style: &Style) -> Element {
        let center = clamp_pos(center);
        let image = ImageBox {
            x: center.x,
            y: center.y,
            width: width.clamp(MIN_IMAGE_SIZE, CANVAS_MAX),
            height: height.clamp(MIN_IMAGE_SIZE, CANVAS_MAX),
            src: src.to_string(),
            rotation: 0.0,
            maintain_aspect_ratio: true,
        };
        Element::new(ElementKind::Image(image), style)
    }
}
