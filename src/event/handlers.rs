use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::trace;

use crate::event::{EditorEvent, EventHandler};

/// Raises a shared flag whenever the canvas content changes, so derived views
/// such as the composition description know to recompute
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    dirty: Arc<AtomicBool>,
}

impl ChangeTracker {
    /// Creates a new tracker with the flag cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once per batch of changes, clearing the flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::Relaxed)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Relaxed)
    }
}

impl EventHandler for ChangeTracker {
    fn handle_event(&mut self, event: &EditorEvent) {
        if event.changes_content() {
            trace!("Content changed: {:?}", event);
            self.dirty.store(true, Ordering::Relaxed);
        }
    }
}

/// Keeps every event it receives; handy for inspecting the editor from tests
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<std::sync::Mutex<Vec<EditorEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &EditorEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
