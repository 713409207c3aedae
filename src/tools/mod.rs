//! Tools selectable in the editor and the gesture behavior each one maps to.
use egui::Key;
use serde::{Deserialize, Serialize};

use crate::element::{StickerTemplate, Style};

mod draw_shape_tool;
mod selection_tool;

pub use draw_shape_tool::{begin_draft, update_draft};
pub use selection_tool::{drag_to, resize_image};

/// Enum representing all available tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Pen,
    Rectangle,
    Circle,
    Line,
    Arrow,
    Text,
    Sticker,
    Eraser,
}

/// Which kind of draft a drawing tool produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Freehand,
    Rectangle,
    Circle,
    Line,
    Arrow,
}

/// Gesture strategy for a tool, resolved once when a gesture starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolBehavior {
    /// Hit-test, select and drag or resize
    Select,
    /// Draw a draft element between pointer-down and pointer-up
    Draw(DraftKind),
    /// Open inline text entry at the pointer
    Text,
    /// Drop the configured sticker centered on the pointer
    PlaceSticker,
    /// Delete the topmost element under the pointer
    Erase,
}

impl Tool {
    pub const ALL: [Tool; 9] = [
        Tool::Select,
        Tool::Pen,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Line,
        Tool::Arrow,
        Tool::Text,
        Tool::Sticker,
        Tool::Eraser,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Pen => "pen",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Line => "line",
            Tool::Arrow => "arrow",
            Tool::Text => "text",
            Tool::Sticker => "sticker",
            Tool::Eraser => "eraser",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Select => "⬉",
            Tool::Pen => "✏",
            Tool::Rectangle => "▭",
            Tool::Circle => "◯",
            Tool::Line => "╱",
            Tool::Arrow => "➡",
            Tool::Text => "T",
            Tool::Sticker => "★",
            Tool::Eraser => "⌫",
        }
    }

    /// Single-letter keyboard shortcut
    pub fn shortcut(&self) -> Key {
        match self {
            Tool::Select => Key::V,
            Tool::Pen => Key::P,
            Tool::Rectangle => Key::R,
            Tool::Circle => Key::C,
            Tool::Line => Key::L,
            Tool::Arrow => Key::A,
            Tool::Text => Key::T,
            Tool::Sticker => Key::S,
            Tool::Eraser => Key::E,
        }
    }

    pub fn from_shortcut(key: Key) -> Option<Tool> {
        Tool::ALL.into_iter().find(|tool| tool.shortcut() == key)
    }

    pub fn behavior(&self) -> ToolBehavior {
        match self {
            Tool::Select => ToolBehavior::Select,
            Tool::Pen => ToolBehavior::Draw(DraftKind::Freehand),
            Tool::Rectangle => ToolBehavior::Draw(DraftKind::Rectangle),
            Tool::Circle => ToolBehavior::Draw(DraftKind::Circle),
            Tool::Line => ToolBehavior::Draw(DraftKind::Line),
            Tool::Arrow => ToolBehavior::Draw(DraftKind::Arrow),
            Tool::Text => ToolBehavior::Text,
            Tool::Sticker => ToolBehavior::PlaceSticker,
            Tool::Eraser => ToolBehavior::Erase,
        }
    }
}

/// Current tool options applied to newly created elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolSettings {
    pub style: Style,
    /// Whether new rectangles and circles are filled
    pub fill_shapes: bool,
    pub font_size: f32,
    pub font_family: String,
    pub sticker: StickerTemplate,
    pub sticker_size: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            style: Style::default(),
            fill_shapes: false,
            font_size: 4.0,
            font_family: "sans-serif".to_string(),
            sticker: StickerTemplate::emoji("star", "⭐"),
            sticker_size: 10.0,
        }
    }
}
