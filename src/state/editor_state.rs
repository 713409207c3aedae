/// The gesture state machine of the canvas editor.
///
/// The editor is always in exactly one of these states. Every gesture starts
/// from `Idle` and every gesture ends, committed or aborted, back in `Idle`:
/// ```text
///              ┌──────────────┐
///        ┌─────►   Drawing    ├─────┐
///        │     └──────────────┘     │
///        │     ┌──────────────┐     │
/// ┌──────┴─┐   │   Dragging   │   ┌─▼──────┐
/// │  Idle  ├───►              ├───►  Idle  │
/// └──────┬─┘   └──────────────┘   └─▲──────┘
///        │     ┌──────────────┐     │
///        ├─────►   Resizing   ├─────┤
///        │     └──────────────┘     │
///        │     ┌──────────────┐     │
///        └─────► EditingText  ├─────┘
///              └──────────────┘
/// ```
///
/// The active tool is held next to the state, not inside it; a tool change
/// while a gesture is in progress aborts the gesture.
use egui::{Pos2, Vec2};

use crate::element::{Element, ElementId};
use crate::geometry::Corner;

/// The possible states of the editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A drawing tool is growing a draft that is not yet in the document
    Drawing {
        draft: Element,
        anchor: Pos2,
    },
    /// The select tool is moving a committed element
    Dragging {
        element_id: ElementId,
        /// Pointer position where the drag began
        origin: Pos2,
        /// The element as it was before the drag, restored on abort
        original: Element,
        /// Displacement applied so far, after clamping
        applied: Vec2,
    },
    /// A corner handle of the selected image is being dragged
    Resizing {
        element_id: ElementId,
        corner: Corner,
        original: Element,
    },
    /// The inline text entry is open at `anchor`
    EditingText {
        anchor: Pos2,
        text: String,
    },
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "idle",
            EditorState::Drawing { .. } => "drawing",
            EditorState::Dragging { .. } => "dragging",
            EditorState::Resizing { .. } => "resizing",
            EditorState::EditingText { .. } => "editing_text",
        }
    }

    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            // From Idle, any gesture may start
            (EditorState::Idle, _) => true,
            // Every gesture ends in Idle
            (_, EditorState::Idle) => true,
            // Gestures update their own data
            (EditorState::Drawing { .. }, EditorState::Drawing { .. }) => true,
            (EditorState::Dragging { .. }, EditorState::Dragging { .. }) => true,
            (EditorState::Resizing { .. }, EditorState::Resizing { .. }) => true,
            (EditorState::EditingText { .. }, EditorState::EditingText { .. }) => true,
            _ => false,
        }
    }

    /// Returns true if the editor is currently in an idle state
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns true while a pointer gesture (draw, drag, resize) is active
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            EditorState::Drawing { .. } | EditorState::Dragging { .. } | EditorState::Resizing { .. }
        )
    }

    /// Returns true while the inline text entry is open
    pub fn is_editing_text(&self) -> bool {
        matches!(self, EditorState::EditingText { .. })
    }

    /// The uncommitted draft, if drawing
    pub fn draft(&self) -> Option<&Element> {
        match self {
            EditorState::Drawing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Anchor and current text of the open text entry
    pub fn text_entry(&self) -> Option<(Pos2, &str)> {
        match self {
            EditorState::EditingText { anchor, text } => Some((*anchor, text.as_str())),
            _ => None,
        }
    }
}
