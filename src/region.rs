//! Labeled regions: rectangles that say what content belongs in an area of the
//! composition, independent of anything drawn there.
use egui::{Pos2, Rect};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::clamp_pos;
use crate::id_generator::generate_id;

/// Regions narrower or shorter than this are treated as stray clicks
pub const MIN_REGION_SIZE: f32 = 2.0;

/// Outline colors handed out to new regions in turn
pub const REGION_PALETTE: [&str; 6] = ["#3b82f6", "#22c55e", "#f59e0b", "#a855f7", "#ec4899", "#14b8a6"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRegion {
    pub id: Uuid,
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: String,
    pub color: String,
}

impl LabeledRegion {
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::new(self.x, self.y), egui::vec2(self.width, self.height))
    }

    pub fn center(&self) -> Pos2 {
        self.rect().center()
    }

    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.width > MIN_REGION_SIZE && self.height > MIN_REGION_SIZE
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSet {
    regions: Vec<LabeledRegion>,
    created: usize,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> &[LabeledRegion] {
        &self.regions
    }

    pub fn get(&self, id: Uuid) -> Option<&LabeledRegion> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// Create a region spanning a drag from `start` to `end`.
    /// Returns `None` when either side is not larger than [`MIN_REGION_SIZE`].
    pub fn create_from_drag(&mut self, start: Pos2, end: Pos2) -> Option<Uuid> {
        let rect = Rect::from_two_pos(clamp_pos(start), clamp_pos(end));
        let color = REGION_PALETTE[self.created % REGION_PALETTE.len()];
        let region = LabeledRegion {
            id: generate_id(),
            x: rect.min.x,
            y: rect.min.y,
            width: rect.width(),
            height: rect.height(),
            label: String::new(),
            color: color.to_string(),
        };
        if !region.is_valid() {
            debug!("Ignoring {:.1}x{:.1} region drag", region.width, region.height);
            return None;
        }
        self.created += 1;
        let id = region.id;
        self.regions.push(region);
        Some(id)
    }

    pub fn set_label(&mut self, id: Uuid, label: &str) -> bool {
        match self.regions.iter_mut().find(|region| region.id == id) {
            Some(region) => {
                region.label = label.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<LabeledRegion> {
        let index = self.regions.iter().position(|region| region.id == id)?;
        Some(self.regions.remove(index))
    }

    /// Most recently created region containing `pos`
    pub fn region_at(&self, pos: Pos2) -> Option<&LabeledRegion> {
        self.regions.iter().rev().find(|region| region.rect().contains(pos))
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn replace_all(&mut self, regions: Vec<LabeledRegion>) {
        self.created = regions.len();
        self.regions = regions;
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_drags_do_not_create_regions() {
        let mut regions = RegionSet::new();
        assert!(regions.create_from_drag(Pos2::new(10.0, 10.0), Pos2::new(11.5, 40.0)).is_none());
        assert!(regions.is_empty());
    }

    #[test]
    fn drag_in_any_direction_creates_normalized_region() {
        let mut regions = RegionSet::new();
        let id = regions
            .create_from_drag(Pos2::new(60.0, 70.0), Pos2::new(20.0, 30.0))
            .unwrap();
        let region = regions.get(id).unwrap();
        assert_eq!((region.x, region.y, region.width, region.height), (20.0, 30.0, 40.0, 40.0));
        assert!(!region.has_label());
        assert_eq!(region.color, REGION_PALETTE[0]);
    }

    #[test]
    fn colors_cycle_and_labels_update() {
        let mut regions = RegionSet::new();
        let first = regions.create_from_drag(Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0)).unwrap();
        let second = regions.create_from_drag(Pos2::new(5.0, 5.0), Pos2::new(20.0, 20.0)).unwrap();
        assert_eq!(regions.get(second).unwrap().color, REGION_PALETTE[1]);
        assert!(regions.set_label(first, "logo"));
        assert_eq!(regions.get(first).unwrap().label, "logo");
        assert_eq!(regions.region_at(Pos2::new(7.0, 7.0)).map(|r| r.id), Some(second));
        assert!(regions.remove(second).is_some());
        assert_eq!(regions.region_at(Pos2::new(7.0, 7.0)).map(|r| r.id), Some(first));
    }
}
