/// The interaction controller of the canvas editor.
///
/// `EditorContext` owns everything the canvas is made of: the committed element
/// list, the asset placements, the labeled regions, the undo history and the
/// gesture state machine. It is the only writer; renderers and the description
/// generator read from it.
///
/// # Event flow
///
/// Input arrives through [`EditorContext::handle_event`] (or the per-event
/// entry points) as canvas-percent positions and key presses:
/// - pointer-down resolves the active tool's [`ToolBehavior`] once and starts a
///   gesture (draw, drag, resize), opens text entry, stamps a sticker or erases
/// - pointer-move updates the gesture in progress
/// - pointer-up validates and commits it with exactly one history entry, or
///   discards it silently
/// - `Escape` aborts a gesture and leaves the committed list untouched
///
/// # Example
///
/// ```rust
/// use egui::Pos2;
/// use sketch_canvas::state::EditorContext;
/// use sketch_canvas::tools::Tool;
///
/// let mut editor = EditorContext::default();
/// editor.set_tool(Tool::Rectangle);
/// editor.on_pointer_down(Pos2::new(10.0, 10.0), false);
/// editor.on_pointer_move(Pos2::new(30.0, 30.0), false);
/// editor.on_pointer_up(Pos2::new(30.0, 30.0), false);
/// assert_eq!(editor.elements().len(), 1);
///
/// editor.undo();
/// assert!(editor.elements().is_empty());
/// ```
use egui::{Key, Modifiers, Pos2, Vec2};
use log::{debug, info, warn};
use uuid::Uuid;

use super::persistence::{CanvasSnapshot, PersistenceResult};
use super::EditorState;
use crate::command::{Command, CommandError, CommandHistory};
use crate::config::EditorConfig;
use crate::description::{self, CompositionDescription};
use crate::document::Document;
use crate::element::{clamp_pos, factory, Element, ElementId, ElementKind, ImageBox, StylePatch};
use crate::error::TransitionError;
use crate::event::{EditorEvent, EventBus};
use crate::geometry::hit_testing::{hit_test_resize_handle, topmost_hit};
use crate::input::InputEvent;
use crate::layer::LayerOp;
use crate::placement::{AssetInfo, PlacementId, PlacementSet};
use crate::region::RegionSet;
use crate::snap::SnapConfig;
use crate::tools::{self, DraftKind, Tool, ToolBehavior, ToolSettings};

/// Offset applied to duplicated elements, in canvas percent
pub const DUPLICATE_OFFSET: f32 = 2.0;
/// Larger side of an inserted image element, in canvas percent
pub const DEFAULT_IMAGE_EXTENT: f32 = 50.0;

/// The main context for the canvas editor.
#[derive(Debug)]
pub struct EditorContext {
    config: EditorConfig,
    state: EditorState,
    tool: Tool,
    settings: ToolSettings,
    document: Document,
    placements: PlacementSet,
    regions: RegionSet,
    selected: Option<ElementId>,
    history: CommandHistory,
    /// The event bus for broadcasting editor events
    pub event_bus: EventBus,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    /// Creates an empty editor in the `Idle` state with the select tool active
    pub fn new(config: EditorConfig) -> Self {
        Self {
            settings: config.tool_settings(),
            placements: PlacementSet::new(config.snap, config.canvas_aspect_ratio),
            history: CommandHistory::with_limit(config.history_limit),
            config,
            state: EditorState::Idle,
            tool: Tool::default(),
            document: Document::new(),
            regions: RegionSet::new(),
            selected: None,
            event_bus: EventBus::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Gets a reference to the current state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Tool options for elements created from now on
    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    /// Committed elements in ascending z-order
    pub fn elements(&self) -> &[Element] {
        self.document.elements()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn placements(&self) -> &PlacementSet {
        &self.placements
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.document.find(id))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Snapping applies to shape tools and placement moves alike
    pub fn set_snap(&mut self, snap: SnapConfig) {
        self.config.snap = snap;
        self.placements.set_snap_config(snap);
    }

    /// Attempts to transition to a new state, validating the transition and emitting
    /// a `StateChanged` event when the state kind changes.
    pub fn transition_to(&mut self, new_state: EditorState) -> Result<(), TransitionError> {
        if !self.state.can_transition_to(&new_state) {
            return Err(TransitionError::InvalidStateTransition {
                from: self.state.name(),
                to: new_state.name(),
            });
        }
        let old = std::mem::replace(&mut self.state, new_state);
        self.emit_state_change(old.name());
        Ok(())
    }

    /// Leave the current state for `Idle`, returning it for the caller to finish
    fn take_state(&mut self) -> EditorState {
        let old = std::mem::take(&mut self.state);
        self.emit_state_change(old.name());
        old
    }

    fn emit_state_change(&self, old: &'static str) {
        let new = self.state.name();
        if old != new {
            debug!("State {} -> {}", old, new);
            self.event_bus.emit(EditorEvent::StateChanged { old, new });
        }
    }

    /// Select an element by id; `None` or an unknown id clears the selection
    pub fn select(&mut self, id: Option<ElementId>) {
        let id = id.filter(|id| self.document.contains(*id));
        if self.selected != id {
            self.selected = id;
            self.event_bus.emit(EditorEvent::SelectionChanged { selected: id });
        }
    }

    /// Switch tools. A gesture in progress is aborted first.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        if !self.state.is_idle() {
            self.cancel_gesture();
        }
        let old = std::mem::replace(&mut self.tool, tool);
        debug!("Tool {} -> {}", old.name(), tool.name());
        self.event_bus.emit(EditorEvent::ToolChanged { old, new: tool });
    }

    /// Single entry point for canvas input
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { pos, precision } => self.on_pointer_down(*pos, *precision),
            InputEvent::PointerMove { pos, precision } => self.on_pointer_move(*pos, *precision),
            InputEvent::PointerUp { pos, precision } => self.on_pointer_up(*pos, *precision),
            InputEvent::KeyDown { key, modifiers } => self.on_key_down(*key, *modifiers),
        }
    }

    pub fn on_pointer_down(&mut self, pos: Pos2, _precision: bool) {
        if self.state.is_editing_text() {
            // clicking away blurs the entry
            self.cancel_text();
        }
        if !self.state.is_idle() {
            warn!("Pointer down ignored while {}", self.state.name());
            return;
        }
        let pos = clamp_pos(pos);

        match self.tool.behavior() {
            ToolBehavior::Select => self.begin_select(pos),
            ToolBehavior::Draw(kind) => {
                let anchor = self.snap_for(kind, pos);
                let draft = tools::begin_draft(kind, anchor, &self.settings);
                self.select(None);
                self.enter(EditorState::Drawing { draft, anchor });
            }
            ToolBehavior::Text => {
                self.select(None);
                self.enter(EditorState::EditingText {
                    anchor: pos,
                    text: String::new(),
                });
            }
            ToolBehavior::PlaceSticker => {
                let sticker = factory::create_sticker(
                    &self.settings.sticker,
                    pos,
                    self.settings.sticker_size,
                    &self.settings.style,
                );
                self.commit(Command::AddElement(sticker), "Add sticker");
            }
            ToolBehavior::Erase => {
                let hit = topmost_hit(self.document.elements(), pos, self.config.hit_tolerance).map(|element| element.id);
                if let Some(id) = hit {
                    if self.selected == Some(id) {
                        self.select(None);
                    }
                    self.commit(Command::RemoveElement(id), "Erase element");
                }
            }
        }
    }

    fn begin_select(&mut self, pos: Pos2) {
        if let Some(selected) = self.selected_element() {
            if let Some(corner) = hit_test_resize_handle(pos, selected, self.config.handle_radius) {
                let state = EditorState::Resizing {
                    element_id: selected.id,
                    corner,
                    original: selected.clone(),
                };
                self.enter(state);
                return;
            }
        }

        match topmost_hit(self.document.elements(), pos, self.config.hit_tolerance).cloned() {
            Some(element) => {
                self.select(Some(element.id));
                self.enter(EditorState::Dragging {
                    element_id: element.id,
                    origin: pos,
                    original: element,
                    applied: Vec2::ZERO,
                });
            }
            None => self.select(None),
        }
    }

    fn enter(&mut self, state: EditorState) {
        if let Err(err) = self.transition_to(state) {
            warn!("{}", err);
        }
    }

    /// Shape tools snap their anchor and cursor; freehand strokes never snap
    fn snap_for(&self, kind: DraftKind, pos: Pos2) -> Pos2 {
        match kind {
            DraftKind::Freehand => clamp_pos(pos),
            _ => self.config.snap.apply_pos(pos),
        }
    }

    pub fn on_pointer_move(&mut self, pos: Pos2, precision: bool) {
        let pos = clamp_pos(pos);
        let snap = self.config.snap;
        let min_point_distance = self.config.min_point_distance;

        match &mut self.state {
            EditorState::Drawing { draft, anchor } => {
                let cursor = match &draft.kind {
                    ElementKind::Freehand(_) => pos,
                    _ => snap.apply_pos(pos),
                };
                tools::update_draft(draft, *anchor, cursor, precision, min_point_distance);
            }
            EditorState::Dragging {
                origin,
                original,
                applied,
                ..
            } => {
                let (moved, delta) = tools::drag_to(original, *origin, pos);
                *applied = delta;
                self.document.replace(moved);
            }
            EditorState::Resizing { corner, original, .. } => {
                if let Some(resized) = tools::resize_image(original, *corner, pos) {
                    self.document.replace(resized);
                }
            }
            EditorState::Idle | EditorState::EditingText { .. } => {}
        }
    }

    pub fn on_pointer_up(&mut self, pos: Pos2, precision: bool) {
        if !self.state.is_gesture() {
            return;
        }
        // the release position counts as a final move
        self.on_pointer_move(pos, precision);

        match self.take_state() {
            EditorState::Drawing { draft, .. } => {
                if draft.is_valid() {
                    let label = format!("Add {}", draft.type_name());
                    self.commit(Command::AddElement(draft), &label);
                } else {
                    debug!("Discarding degenerate {} draft", draft.type_name());
                }
            }
            EditorState::Dragging {
                element_id,
                original,
                applied,
                ..
            } => {
                if applied.length() >= self.config.move_threshold {
                    self.record("Move element");
                    self.event_bus.emit(EditorEvent::ElementUpdated { id: element_id });
                } else {
                    // a click, not a move
                    self.document.replace(original);
                }
            }
            EditorState::Resizing {
                element_id,
                original,
                ..
            } => {
                let changed = self.document.find(element_id).is_some_and(|element| *element != original);
                if changed {
                    self.record("Resize image");
                    self.event_bus.emit(EditorEvent::ElementUpdated { id: element_id });
                }
            }
            EditorState::Idle | EditorState::EditingText { .. } => {}
        }
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) {
        if self.state.is_editing_text() {
            match key {
                Key::Escape => self.cancel_text(),
                Key::Enter => {
                    self.confirm_text();
                }
                _ => {}
            }
            return;
        }

        let command = modifiers.command || modifiers.ctrl;
        match key {
            Key::Z if command && modifiers.shift => {
                self.redo();
            }
            Key::Z if command => {
                self.undo();
            }
            Key::Y if command => {
                self.redo();
            }
            Key::Escape => {
                if self.state.is_gesture() {
                    self.cancel_gesture();
                } else {
                    self.select(None);
                }
            }
            Key::Delete | Key::Backspace => {
                self.delete_selected();
            }
            _ if !command && !modifiers.alt => {
                if let Some(tool) = Tool::from_shortcut(key) {
                    self.set_tool(tool);
                }
            }
            _ => {}
        }
    }

    /// Abort the gesture in progress. The committed element list is left exactly
    /// as it was before the gesture started.
    pub fn cancel_gesture(&mut self) {
        match self.take_state() {
            EditorState::Dragging { original, .. } | EditorState::Resizing { original, .. } => {
                self.document.replace(original);
            }
            EditorState::Drawing { draft, .. } => {
                debug!("Aborted {} draft", draft.type_name());
            }
            EditorState::EditingText { .. } | EditorState::Idle => {}
        }
    }

    /// Replace the text typed into the open entry
    pub fn update_text_entry(&mut self, value: &str) {
        if let EditorState::EditingText { text, .. } = &mut self.state {
            *text = value.to_string();
        }
    }

    /// Commit the open text entry. Blank text is discarded.
    pub fn confirm_text(&mut self) -> Option<ElementId> {
        let EditorState::EditingText { anchor, text } = self.take_state() else {
            return None;
        };
        if text.trim().is_empty() {
            debug!("Discarding empty text entry");
            return None;
        }
        let element = factory::create_text(
            anchor,
            &text,
            self.settings.font_size,
            &self.settings.font_family,
            &self.settings.style,
        );
        let id = element.id;
        self.commit(Command::AddElement(element), "Add text").then_some(id)
    }

    /// Close the text entry without committing
    pub fn cancel_text(&mut self) {
        if self.state.is_editing_text() {
            self.take_state();
        }
    }

    /// Delete the selected element. No-op without a selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        self.select(None);
        self.commit(Command::RemoveElement(id), "Delete element")
    }

    pub fn bring_forward(&mut self) -> bool {
        self.reorder_selected(LayerOp::BringForward)
    }

    pub fn send_backward(&mut self) -> bool {
        self.reorder_selected(LayerOp::SendBackward)
    }

    pub fn bring_to_front(&mut self) -> bool {
        self.reorder_selected(LayerOp::BringToFront)
    }

    pub fn send_to_back(&mut self) -> bool {
        self.reorder_selected(LayerOp::SendToBack)
    }

    fn reorder_selected(&mut self, op: LayerOp) -> bool {
        match self.selected {
            Some(id) => self.commit(Command::Reorder { id, op }, op.label()),
            None => false,
        }
    }

    pub fn flip_horizontal(&mut self) -> bool {
        self.edit_selected("Flip horizontal", Element::flip_horizontal)
    }

    pub fn flip_vertical(&mut self) -> bool {
        self.edit_selected("Flip vertical", Element::flip_vertical)
    }

    /// Apply color, opacity or stroke width changes to the selected element
    pub fn update_selected_style(&mut self, patch: &StylePatch) -> bool {
        self.edit_selected("Update style", |element| element.apply_style(patch))
    }

    /// Edit a copy of the selected element and commit it if `edit` reports a change
    fn edit_selected(&mut self, label: &str, edit: impl FnOnce(&mut Element) -> bool) -> bool {
        let Some(mut element) = self.selected_element().cloned() else {
            debug!("{}: {}", label, CommandError::NoSelection);
            return false;
        };
        if !edit(&mut element) {
            return false;
        }
        self.commit(Command::UpdateElement(element), label)
    }

    /// Copy the selected element, offset slightly, on top of the stack and select it
    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        let mut copy = self.selected_element()?.duplicate();
        copy.translate(Vec2::splat(DUPLICATE_OFFSET));
        let id = copy.id;
        if self.commit(Command::AddElement(copy), "Duplicate element") {
            self.select(Some(id));
            Some(id)
        } else {
            None
        }
    }

    /// Remove every element as one undoable step. No-op on an empty canvas.
    pub fn clear_canvas(&mut self) -> bool {
        if !self.state.is_idle() {
            self.cancel_gesture();
        }
        self.select(None);
        self.commit(Command::Clear, "Clear canvas")
    }

    /// Add an image element centered on the canvas and select it
    pub fn insert_image(&mut self, src: &str, pixel_size: Vec2) -> Option<ElementId> {
        let image = ImageBox::centered(src, pixel_size, self.config.canvas_aspect_ratio, DEFAULT_IMAGE_EXTENT);
        let element = Element::new(ElementKind::Image(image), &self.settings.style);
        let id = element.id;
        if self.commit(Command::AddElement(element), "Add image") {
            self.select(Some(id));
            Some(id)
        } else {
            None
        }
    }

    /// Place an asset with its default centered placement
    pub fn add_asset(&mut self, asset: &AssetInfo) -> PlacementId {
        let id = self.placements.add_asset(asset);
        self.event_bus.emit(EditorEvent::LayoutChanged);
        id
    }

    pub fn remove_placement(&mut self, id: PlacementId) -> bool {
        let removed = self.placements.remove(id).is_some();
        if removed {
            self.event_bus.emit(EditorEvent::LayoutChanged);
        }
        removed
    }

    /// Run placement edits, notifying observers afterwards
    pub fn update_placements<R>(&mut self, edit: impl FnOnce(&mut PlacementSet) -> R) -> R {
        let result = edit(&mut self.placements);
        self.event_bus.emit(EditorEvent::LayoutChanged);
        result
    }

    /// Create a labeled region from a drag; tiny drags are ignored
    pub fn create_region(&mut self, start: Pos2, end: Pos2) -> Option<Uuid> {
        let id = self.regions.create_from_drag(start, end)?;
        self.event_bus.emit(EditorEvent::LayoutChanged);
        Some(id)
    }

    /// Run region edits, notifying observers afterwards
    pub fn update_regions<R>(&mut self, edit: impl FnOnce(&mut RegionSet) -> R) -> R {
        let result = edit(&mut self.regions);
        self.event_bus.emit(EditorEvent::LayoutChanged);
        result
    }

    /// Step back one history entry. The selection is cleared.
    pub fn undo(&mut self) -> bool {
        if !self.state.is_idle() {
            self.cancel_gesture();
        }
        match self.history.undo() {
            Some(elements) => {
                self.restore_elements(elements);
                true
            }
            None => false,
        }
    }

    /// Step forward one history entry. The selection is cleared.
    pub fn redo(&mut self) -> bool {
        if !self.state.is_idle() {
            self.cancel_gesture();
        }
        match self.history.redo() {
            Some(elements) => {
                self.restore_elements(elements);
                true
            }
            None => false,
        }
    }

    fn restore_elements(&mut self, elements: Vec<Element>) {
        self.document.replace_all(elements);
        self.select(None);
        self.emit_history();
    }

    /// Describe the current composition for an image generator
    pub fn describe(&self) -> CompositionDescription {
        description::generate(self.document.elements(), self.regions.regions())
    }

    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot::new(
            self.document.elements().to_vec(),
            self.placements.placements().to_vec(),
            self.regions.regions().to_vec(),
        )
    }

    /// Replace the whole canvas with a validated snapshot. History restarts with
    /// the snapshot as its baseline. An invalid snapshot leaves the editor untouched.
    pub fn restore(&mut self, snapshot: CanvasSnapshot) -> PersistenceResult<()> {
        snapshot.validate()?;
        if !self.state.is_idle() {
            self.cancel_gesture();
        }
        self.select(None);
        self.document.replace_all(snapshot.elements);
        self.placements.replace_all(snapshot.placements);
        self.regions.replace_all(snapshot.regions);
        self.history.reset(self.document.elements().to_vec());
        info!(
            "Restored snapshot with {} elements, {} placements, {} regions",
            self.document.len(),
            self.placements.len(),
            self.regions.len()
        );
        self.event_bus.emit(EditorEvent::DocumentLoaded);
        self.emit_history();
        Ok(())
    }

    /// Execute `command` and record one history entry on success
    fn commit(&mut self, command: Command, label: &str) -> bool {
        match command.execute(&mut self.document) {
            Ok(()) => {
                info!("{}", label);
                self.record(label);
                match command {
                    Command::AddElement(element) => self.event_bus.emit(EditorEvent::ElementAdded { id: element.id }),
                    Command::RemoveElement(id) => self.event_bus.emit(EditorEvent::ElementRemoved { id }),
                    Command::UpdateElement(element) => {
                        self.event_bus.emit(EditorEvent::ElementUpdated { id: element.id })
                    }
                    Command::Reorder { id, .. } => self.event_bus.emit(EditorEvent::ElementUpdated { id }),
                    Command::Clear => {}
                }
                true
            }
            Err(err) => {
                debug!("{} skipped: {}", label, err);
                false
            }
        }
    }

    fn record(&mut self, label: &str) {
        self.history.push(label, self.document.elements());
        self.emit_history();
    }

    fn emit_history(&self) {
        self.event_bus.emit(EditorEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventRecorder;

    fn draw(editor: &mut EditorContext, tool: Tool, from: Pos2, to: Pos2) {
        editor.set_tool(tool);
        editor.on_pointer_down(from, false);
        editor.on_pointer_move(to, false);
        editor.on_pointer_up(to, false);
    }

    #[test]
    fn rectangle_gesture_commits_once() {
        let mut editor = EditorContext::default();
        draw(&mut editor, Tool::Rectangle, Pos2::new(10.0, 10.0), Pos2::new(30.0, 40.0));
        assert_eq!(editor.elements().len(), 1);
        assert_eq!(editor.history().entries().len(), 1);
        assert_eq!(editor.history().current_action(), Some("Add rectangle"));
        assert!(editor.state().is_idle());
    }

    #[test]
    fn degenerate_draft_is_discarded() {
        let mut editor = EditorContext::default();
        draw(&mut editor, Tool::Line, Pos2::new(10.0, 10.0), Pos2::new(10.0, 10.0));
        assert!(editor.elements().is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn escape_aborts_a_drag_without_history() {
        let mut editor = EditorContext::default();
        draw(&mut editor, Tool::Rectangle, Pos2::new(10.0, 10.0), Pos2::new(30.0, 30.0));
        let before = editor.elements().to_vec();

        editor.set_tool(Tool::Select);
        editor.on_pointer_down(Pos2::new(10.0, 20.0), false);
        editor.on_pointer_move(Pos2::new(40.0, 50.0), false);
        assert_ne!(editor.elements(), &before[..]);
        editor.on_key_down(Key::Escape, Modifiers::NONE);

        assert_eq!(editor.elements(), &before[..]);
        assert_eq!(editor.history().entries().len(), 1);
        assert!(editor.state().is_idle());
    }

    #[test]
    fn click_without_movement_only_selects() {
        let mut editor = EditorContext::default();
        draw(&mut editor, Tool::Rectangle, Pos2::new(10.0, 10.0), Pos2::new(30.0, 30.0));
        let id = editor.elements()[0].id;
        let before = editor.elements()[0].bounds();

        editor.set_tool(Tool::Select);
        editor.on_pointer_down(Pos2::new(10.0, 20.0), false);
        editor.on_pointer_up(Pos2::new(10.2, 20.1), false);

        assert_eq!(editor.selected(), Some(id));
        assert_eq!(editor.history().entries().len(), 1);
        assert_eq!(editor.elements()[0].bounds(), before);
    }

    #[test]
    fn text_entry_commits_on_enter_and_discards_blank() {
        let mut editor = EditorContext::default();
        editor.set_tool(Tool::Text);
        editor.on_pointer_down(Pos2::new(50.0, 50.0), false);
        editor.update_text_entry("   ");
        editor.on_key_down(Key::Enter, Modifiers::NONE);
        assert!(editor.elements().is_empty());

        editor.on_pointer_down(Pos2::new(50.0, 50.0), false);
        editor.update_text_entry("EPIC");
        editor.on_key_down(Key::Enter, Modifiers::NONE);
        assert_eq!(editor.elements().len(), 1);
        assert_eq!(editor.elements()[0].as_text().map(|label| label.text.as_str()), Some("EPIC"));
    }

    #[test]
    fn tool_letters_are_ignored_while_typing() {
        let mut editor = EditorContext::default();
        editor.set_tool(Tool::Text);
        editor.on_pointer_down(Pos2::new(20.0, 20.0), false);
        editor.on_key_down(Key::R, Modifiers::NONE);
        assert_eq!(editor.tool(), Tool::Text);
        assert!(editor.state().is_editing_text());
    }

    #[test]
    fn undo_clears_selection_and_emits_history() {
        let mut editor = EditorContext::default();
        let recorder = EventRecorder::default();
        editor.event_bus.subscribe(Box::new(recorder.clone()));

        draw(&mut editor, Tool::Rectangle, Pos2::new(10.0, 10.0), Pos2::new(30.0, 30.0));
        editor.select(Some(editor.elements()[0].id));
        editor.on_key_down(Key::Z, Modifiers::COMMAND);

        assert!(editor.elements().is_empty());
        assert_eq!(editor.selected(), None);
        assert!(recorder.events().contains(&EditorEvent::HistoryChanged {
            can_undo: false,
            can_redo: true
        }));
    }

    #[test]
    fn selection_commands_require_a_selection() {
        let mut editor = EditorContext::default();
        assert!(!editor.delete_selected());
        assert!(!editor.bring_to_front());
        assert!(!editor.flip_horizontal());
        assert_eq!(editor.duplicate_selected(), None);
    }

    #[test]
    fn invalid_snapshot_leaves_editor_untouched() {
        let mut editor = EditorContext::default();
        draw(&mut editor, Tool::Rectangle, Pos2::new(10.0, 10.0), Pos2::new(30.0, 30.0));
        let mut snapshot = editor.snapshot();
        snapshot.elements[0].z_index = 7;

        assert!(editor.restore(snapshot).is_err());
        assert_eq!(editor.elements().len(), 1);
        assert!(editor.can_undo());
    }
}
