use crate::element::ElementId;
use crate::tools::Tool;

/// Notifications broadcast by the editor after it changes
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    /// Gesture state changed; carries state names only
    StateChanged {
        old: &'static str,
        new: &'static str,
    },
    ElementAdded {
        id: ElementId,
    },
    ElementRemoved {
        id: ElementId,
    },
    ElementUpdated {
        id: ElementId,
    },
    SelectionChanged {
        selected: Option<ElementId>,
    },
    /// A history entry was pushed, undone or redone
    HistoryChanged {
        can_undo: bool,
        can_redo: bool,
    },
    /// Placements or regions changed
    LayoutChanged,
    /// A snapshot replaced the whole canvas
    DocumentLoaded,
}

impl EditorEvent {
    /// Whether observers of the canvas content (description, renderer) must recompute
    pub fn changes_content(&self) -> bool {
        matches!(
            self,
            EditorEvent::ElementAdded { .. }
                | EditorEvent::ElementRemoved { .. }
                | EditorEvent::ElementUpdated { .. }
                | EditorEvent::HistoryChanged { .. }
                | EditorEvent::LayoutChanged
                | EditorEvent::DocumentLoaded
        )
    }
}
