//! Snapshot-based undo/redo over the element list.
use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::Element;
use crate::id_generator::generate_id;
use crate::util::time;

/// Default number of retained history entries
pub const MAX_HISTORY_SIZE: usize = 50;

/// One committed state of the element list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// Milliseconds since the epoch
    pub timestamp: u64,
    /// Deep copy of the element list after the action
    pub elements: Vec<Element>,
    pub action: String,
}

/// Linear history of full element-list snapshots.
///
/// `current` points at the entry matching the document; `None` means the
/// document is at the baseline (an empty canvas, or the last loaded snapshot).
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: Vec<HistoryEntry>,
    current: Option<usize>,
    limit: usize,
    baseline: Vec<Element>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Creates a new empty history with the default size limit
    pub fn new() -> Self {
        Self::with_limit(MAX_HISTORY_SIZE)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            limit: limit.max(1),
            baseline: Vec::new(),
        }
    }

    /// Record the element list after a committed action.
    ///
    /// Any redo entries beyond the current position are discarded and the
    /// oldest entries are dropped once the limit is exceeded.
    pub fn push(&mut self, action: impl Into<String>, elements: &[Element]) {
        let keep = self.current.map_or(0, |index| index + 1);
        self.entries.truncate(keep);

        let entry = HistoryEntry {
            id: generate_id(),
            timestamp: time::timestamp_millis(),
            elements: elements.to_vec(),
            action: action.into(),
        };
        debug!("History push '{}' ({} elements)", entry.action, entry.elements.len());
        self.entries.push(entry);

        // Trim history if it exceeds max size
        while self.entries.len() > self.limit {
            self.entries.remove(0);
        }
        self.current = Some(self.entries.len() - 1);
    }

    /// Step back one entry, returning the element list to restore
    pub fn undo(&mut self) -> Option<Vec<Element>> {
        let index = self.current?;
        if let Some(entry) = self.entries.get(index) {
            info!("Undo '{}'", entry.action);
        }
        if index == 0 {
            self.current = None;
            Some(self.baseline.clone())
        } else {
            self.current = Some(index - 1);
            self.entries.get(index - 1).map(|entry| entry.elements.clone())
        }
    }

    /// Step forward one entry, returning the element list to restore
    pub fn redo(&mut self) -> Option<Vec<Element>> {
        let next = self.next_index();
        let entry = self.entries.get(next)?;
        info!("Redo '{}'", entry.action);
        self.current = Some(next);
        Some(entry.elements.clone())
    }

    fn next_index(&self) -> usize {
        self.current.map_or(0, |index| index + 1)
    }

    /// Returns true if there are entries that can be undone
    pub fn can_undo(&self) -> bool {
        self.current.is_some()
    }

    /// Returns true if there are entries that can be redone
    pub fn can_redo(&self) -> bool {
        self.next_index() < self.entries.len()
    }

    /// Drop all entries and start over from `baseline`
    pub fn reset(&mut self, baseline: Vec<Element>) {
        self.entries.clear();
        self.current = None;
        self.baseline = baseline;
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Position of the entry matching the document, `None` at the baseline
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_action(&self) -> Option<&str> {
        self.current
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.action.as_str())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, Style};
    use egui::Pos2;

    fn element(x: f32) -> Element {
        factory::create_line(Pos2::new(x, 10.0), Pos2::new(x + 10.0, 10.0), &Style::default())
    }

    #[test]
    fn undo_first_entry_returns_baseline() {
        let mut history = CommandHistory::new();
        assert!(!history.can_undo());
        history.push("Add line", &[element(1.0)]);
        assert!(history.can_undo());
        assert_eq!(history.undo(), Some(Vec::new()));
        assert!(!history.can_undo());
        assert!(history.can_redo());
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn push_truncates_redo_branch() {
        let mut history = CommandHistory::new();
        history.push("a", &[element(1.0)]);
        history.push("b", &[element(2.0)]);
        history.undo();
        history.push("c", &[element(3.0)]);
        assert!(!history.can_redo());
        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.current_action(), Some("c"));
    }

    #[test]
    fn limit_drops_oldest_entries() {
        let mut history = CommandHistory::with_limit(3);
        for i in 0..5 {
            history.push(format!("step {i}"), &[element(i as f32)]);
        }
        assert_eq!(history.entries().len(), 3);
        assert_eq!(history.entries()[0].action, "step 2");
        assert_eq!(history.current_index(), Some(2));
    }

    #[test]
    fn entries_are_independent_copies() {
        let mut history = CommandHistory::new();
        let mut elements = vec![element(1.0)];
        history.push("a", &elements);
        elements[0].color = "#123456".into();
        assert_ne!(history.entries()[0].elements[0].color, "#123456");
    }

    #[test]
    fn reset_uses_new_baseline() {
        let mut history = CommandHistory::new();
        let loaded = vec![element(5.0)];
        history.reset(loaded.clone());
        history.push("a", &[]);
        assert_eq!(history.undo(), Some(loaded));
    }
}
