use egui::Pos2;
use log::{info, warn};

use crate::config::EditorConfig;
use crate::description::CompositionDescription;
use crate::event::ChangeTracker;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, placement_panel, text_entry_window, tools_panel};
use crate::placement::{AssetInfo, PlacementId};
use crate::renderer::Renderer;
use crate::state::{CanvasSnapshot, EditorContext};

/// Demo shell around [`EditorContext`]: palettes on the sides, the canvas in the
/// middle and the generated description underneath.
pub struct SketchApp {
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
    tracker: ChangeTracker,
    description: CompositionDescription,
    /// Canvas drags create labeled regions instead of driving the active tool
    region_mode: bool,
    region_start: Option<Pos2>,
    assets: Vec<AssetInfo>,
    selected_placement: Option<PlacementId>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_editor(EditorContext::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = EditorConfig::discover().unwrap_or_else(|err| {
            warn!("{}; using default config", err);
            EditorConfig::default()
        });
        let mut app = Self::with_editor(EditorContext::new(config));

        // Restore the canvas from the last session
        let snapshot = cc
            .storage
            .and_then(|storage| eframe::get_value::<CanvasSnapshot>(storage, eframe::APP_KEY));
        if let Some(snapshot) = snapshot {
            match app.editor.restore(snapshot) {
                Ok(()) => info!("Restored previous session"),
                Err(err) => warn!("Discarding stored canvas: {}", err),
            }
        }
        app.refresh_description();
        app
    }

    fn with_editor(editor: EditorContext) -> Self {
        let tracker = ChangeTracker::new();
        editor.event_bus.subscribe(Box::new(tracker.clone()));
        let description = editor.describe();
        Self {
            editor,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            tracker,
            description,
            region_mode: false,
            region_start: None,
            assets: sample_assets(),
            selected_placement: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn description(&self) -> &CompositionDescription {
        &self.description
    }

    pub fn assets(&self) -> &[AssetInfo] {
        &self.assets
    }

    pub fn region_mode(&self) -> bool {
        self.region_mode
    }

    pub fn set_region_mode(&mut self, enabled: bool) {
        self.region_mode = enabled;
        self.region_start = None;
    }

    pub fn selected_placement(&self) -> Option<PlacementId> {
        self.selected_placement.filter(|id| self.editor.placements().get(*id).is_some())
    }

    pub fn select_placement(&mut self, id: Option<PlacementId>) {
        self.selected_placement = id;
    }

    /// Translate raw egui input on the canvas into editor events.
    /// Presses are dropped when another window covers the canvas under the pointer.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas: egui::Rect, pointer_on_canvas: bool) {
        let keyboard = !ctx.wants_keyboard_input();
        for event in self.input.process_input(ctx, canvas, keyboard) {
            if !pointer_on_canvas && matches!(event, InputEvent::PointerDown { .. }) {
                continue;
            }
            if self.region_mode {
                self.handle_region_input(&event);
            } else {
                self.editor.handle_event(&event);
            }
        }
    }

    fn handle_region_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { pos, .. } => self.region_start = Some(*pos),
            InputEvent::PointerUp { pos, .. } => {
                if let Some(start) = self.region_start.take() {
                    self.editor.create_region(start, *pos);
                }
            }
            InputEvent::PointerMove { .. } => {}
            InputEvent::KeyDown { .. } => self.editor.handle_event(event),
        }
    }

    /// Start of the region drag in progress, for the rubber band preview
    pub fn region_start(&self) -> Option<Pos2> {
        self.region_start
    }

    fn refresh_description(&mut self) {
        self.description = self.editor.describe();
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.editor.snapshot());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        placement_panel(self, ctx);
        central_panel(self, ctx);
        text_entry_window(self, ctx);

        if self.tracker.take_dirty() {
            self.refresh_description();
        }
    }
}

fn sample_assets() -> Vec<AssetInfo> {
    vec![
        AssetInfo {
            id: "product-shot".to_string(),
            url: "assets/product-shot.png".to_string(),
            thumbnail_url: "assets/product-shot-thumb.png".to_string(),
            width: 1200,
            height: 1200,
            processed_url: Some("assets/product-shot-cutout.png".to_string()),
        },
        AssetInfo {
            id: "team-photo".to_string(),
            url: "assets/team-photo.jpg".to_string(),
            thumbnail_url: "assets/team-photo-thumb.jpg".to_string(),
            width: 1920,
            height: 1080,
            processed_url: None,
        },
    ]
}
