use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::common;

/// `sticker_type` value for stickers whose `content` is an emoji
pub const STICKER_TYPE_EMOJI: &str = "emoji";

/// Catalog entry a sticker is stamped from. Only its geometric contract matters
/// to the canvas; the catalog itself lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerTemplate {
    pub sticker_id: String,
    pub content: String,
    pub sticker_type: String,
}

impl StickerTemplate {
    pub fn emoji(sticker_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sticker_id: sticker_id.into(),
            content: content.into(),
            sticker_type: STICKER_TYPE_EMOJI.to_string(),
        }
    }
}

/// Sticker stamped on the canvas; `(x, y)` is the center
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub sticker_id: String,
    pub content: String,
    pub sticker_type: String,
    pub rotation: f32,
}

impl Sticker {
    /// Stamp `template` centered on `center`, pushed inward so the box stays on the canvas
    pub fn from_template(template: &StickerTemplate, center: Pos2, size: f32) -> Self {
        let size = size.clamp(common::MIN_SHAPE_EXTENT, common::CANVAS_MAX);
        let half = size / 2.0;
        let center = common::clamp_pos(center);
        Self {
            x: center.x.clamp(half, common::CANVAS_MAX - half),
            y: center.y.clamp(half, common::CANVAS_MAX - half),
            width: size,
            height: size,
            sticker_id: template.sticker_id.clone(),
            content: template.content.clone(),
            sticker_type: template.sticker_type.clone(),
            rotation: 0.0,
        }
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// Unrotated box around the center
    pub fn rect(&self) -> Rect {
        common::centered_rect(self.x, self.y, self.width, self.height)
    }

    pub fn is_emoji(&self) -> bool {
        self.sticker_type == STICKER_TYPE_EMOJI && !self.content.trim().is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.width >= common::MIN_SHAPE_EXTENT && self.height >= common::MIN_SHAPE_EXTENT
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}
