use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::common;

/// Approximate glyph advance as a fraction of the font size
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Text label anchored at its baseline-left point `(x, y)`.
/// `font_size` is expressed in canvas percent like every other extent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
    pub font_family: String,
}

impl TextLabel {
    pub fn new(anchor: Pos2, text: impl Into<String>, font_size: f32, font_family: impl Into<String>) -> Self {
        let anchor = common::clamp_pos(anchor);
        Self {
            x: anchor.x,
            y: anchor.y,
            text: text.into(),
            font_size,
            font_family: font_family.into(),
        }
    }

    pub fn anchor(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// Approximate box covered by the glyphs: grows right from the anchor and up from the baseline
    pub fn text_box(&self) -> Rect {
        let width = self.text.chars().count() as f32 * self.font_size * CHAR_WIDTH_FACTOR;
        let height = self.font_size;
        Rect::from_min_size(Pos2::new(self.x, self.y - height), Vec2::new(width, height))
    }

    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}
