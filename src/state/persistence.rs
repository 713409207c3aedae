use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::Element;
use crate::layer::Layered;
use crate::placement::AssetPlacement;
use crate::region::LabeledRegion;
use crate::util::time;

/// Snapshot format written by this version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur during snapshot persistence
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid snapshot name: {0:?}")]
    InvalidName(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Everything the canvas owns, as handed to a persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSnapshot {
    pub version: u32,
    /// Seconds since the epoch
    pub timestamp: u64,
    pub elements: Vec<Element>,
    #[serde(default)]
    pub placements: Vec<AssetPlacement>,
    #[serde(default)]
    pub regions: Vec<LabeledRegion>,
}

impl CanvasSnapshot {
    pub fn new(elements: Vec<Element>, placements: Vec<AssetPlacement>, regions: Vec<LabeledRegion>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            timestamp: time::timestamp_secs(),
            elements,
            placements,
            regions,
        }
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate; a snapshot that fails any check is rejected whole
    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the invariants the editor relies on: supported version, valid
    /// finite geometry, unique ids and dense z-indices in each collection
    pub fn validate(&self) -> PersistenceResult<()> {
        if self.version == 0 || self.version > SNAPSHOT_VERSION {
            return Err(invalid(format!("unsupported version {}", self.version)));
        }

        for element in &self.elements {
            let bounds = element.bounds();
            let finite = [bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y]
                .iter()
                .all(|value| value.is_finite());
            if !finite {
                return Err(invalid(format!("element {} has non-finite geometry", element.id)));
            }
            if !element.is_valid() {
                return Err(invalid(format!("{} element {} is degenerate", element.type_name(), element.id)));
            }
        }
        check_collection("element", &self.elements)?;

        for placement in &self.placements {
            let values = [
                placement.position.x,
                placement.position.y,
                placement.size.width,
                placement.size.height,
                placement.rotation,
                placement.opacity,
            ];
            if !values.iter().all(|value| value.is_finite()) {
                return Err(invalid(format!("placement {} has non-finite geometry", placement.id)));
            }
        }
        check_collection("placement", &self.placements)?;

        let mut region_ids = HashSet::new();
        for region in &self.regions {
            let values = [region.x, region.y, region.width, region.height];
            if !values.iter().all(|value| value.is_finite()) {
                return Err(invalid(format!("region {} has non-finite geometry", region.id)));
            }
            if !region_ids.insert(region.id) {
                return Err(invalid(format!("duplicate region id {}", region.id)));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> PersistenceError {
    warn!("Rejecting snapshot: {}", message);
    PersistenceError::InvalidSnapshot(message)
}

fn check_collection<T: Layered>(kind: &str, items: &[T]) -> PersistenceResult<()> {
    let mut ids = HashSet::new();
    for item in items {
        if !ids.insert(item.layer_id()) {
            return Err(invalid(format!("duplicate {kind} id {}", item.layer_id())));
        }
    }
    let mut z_indices: Vec<u32> = items.iter().map(Layered::z_index).collect();
    z_indices.sort_unstable();
    let dense = z_indices
        .iter()
        .enumerate()
        .all(|(index, z_index)| *z_index == index as u32 + 1);
    if !dense {
        return Err(invalid(format!("{kind} z-indices are not a dense 1..N run")));
    }
    Ok(())
}

/// Persistence collaborator: stores snapshots by name and returns them unchanged
pub trait SnapshotStore {
    fn save(&mut self, name: &str, snapshot: &CanvasSnapshot) -> PersistenceResult<()>;
    fn load(&self, name: &str) -> PersistenceResult<CanvasSnapshot>;
    fn names(&self) -> PersistenceResult<Vec<String>>;
}

/// One pretty-printed JSON file per snapshot name inside a directory
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PersistenceResult<PathBuf> {
        let acceptable = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !acceptable {
            return Err(PersistenceError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&mut self, name: &str, snapshot: &CanvasSnapshot) -> PersistenceResult<()> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, snapshot.to_json()?)?;
        info!("Saved snapshot '{}' ({} elements)", name, snapshot.elements.len());
        Ok(())
    }

    fn load(&self, name: &str) -> PersistenceResult<CanvasSnapshot> {
        let path = self.path_for(name)?;
        let json = fs::read_to_string(path)?;
        let snapshot = CanvasSnapshot::from_json(&json)?;
        info!("Loaded snapshot '{}'", name);
        Ok(snapshot)
    }

    fn names(&self) -> PersistenceResult<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                    return None;
                }
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, Style};
    use egui::Pos2;

    fn element(z_index: u32) -> Element {
        let mut element = factory::create_line(Pos2::new(1.0, 1.0), Pos2::new(20.0, 20.0), &Style::default());
        element.z_index = z_index;
        element
    }

    #[test]
    fn rejects_gaps_in_z_order() {
        let snapshot = CanvasSnapshot::new(vec![element(1), element(3)], Vec::new(), Vec::new());
        assert!(matches!(snapshot.validate(), Err(PersistenceError::InvalidSnapshot(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let first = element(1);
        let mut second = first.clone();
        second.z_index = 2;
        let snapshot = CanvasSnapshot::new(vec![first, second], Vec::new(), Vec::new());
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn rejects_future_versions() {
        let mut snapshot = CanvasSnapshot::new(Vec::new(), Vec::new(), Vec::new());
        snapshot.version = SNAPSHOT_VERSION + 1;
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn store_rejects_path_like_names() {
        let store = FileSnapshotStore::new(std::env::temp_dir());
        assert!(matches!(store.load("../etc"), Err(PersistenceError::InvalidName(_))));
    }
}
