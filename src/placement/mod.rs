//! Whole-asset placement on the canvas.
//!
//! A placement positions one media asset (photo, product shot, logo) on the
//! composition. It shares the percent coordinate space, snapping and dense
//! z-order rules of annotation elements but is kept in its own collection.
use egui::{Pos2, Rect, Vec2};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::image::fit_extent;
use crate::element::{clamp_percent, CANVAS_MAX, MIN_IMAGE_SIZE};
use crate::id_generator::generate_id;
use crate::layer::{self, LayerOp, Layered};
use crate::snap::SnapConfig;

mod presets;

pub use presets::{PositionPreset, SizePreset, PRESET_TOLERANCE};

/// Larger side of a freshly placed asset, in canvas percent
pub const DEFAULT_PLACEMENT_EXTENT: f32 = 80.0;
/// Both dimensions at or above this derive the `cover` fit mode
pub const COVER_THRESHOLD: f32 = 95.0;
/// Offset applied to duplicated placements
pub const DUPLICATE_OFFSET: f32 = 2.0;

pub type PlacementId = Uuid;

/// Media library record supplied by the asset collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub id: String,
    pub url: String,
    pub thumbnail_url: String,
    /// Pixel width of the original image
    pub width: u32,
    pub height: u32,
    /// Background-removed version, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_url: Option<String>,
}

impl AssetInfo {
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Which point of the placement box `position` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Anchor location as a fraction of the box size from its top-left corner
    pub fn fraction(&self) -> Vec2 {
        let x = match self {
            Anchor::TopLeft | Anchor::Left | Anchor::BottomLeft => 0.0,
            Anchor::Top | Anchor::Center | Anchor::Bottom => 0.5,
            Anchor::TopRight | Anchor::Right | Anchor::BottomRight => 1.0,
        };
        let y = match self {
            Anchor::TopLeft | Anchor::Top | Anchor::TopRight => 0.0,
            Anchor::Left | Anchor::Center | Anchor::Right => 0.5,
            Anchor::BottomLeft | Anchor::Bottom | Anchor::BottomRight => 1.0,
        };
        Vec2::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPosition {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub anchor: Anchor,
}

impl PlacementPosition {
    pub fn pos(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    Percent,
    Pixels,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementSize {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub unit: SizeUnit,
    pub maintain_aspect_ratio: bool,
    /// width / height captured when the lock was switched on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_ratio: Option<f32>,
}

impl PlacementSize {
    fn ratio(&self) -> Option<f32> {
        if !self.maintain_aspect_ratio {
            return None;
        }
        self.locked_ratio.filter(|ratio| ratio.is_finite() && *ratio > 0.0)
    }
}

/// How the asset image fills its placement box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    Contain,
    Cover,
    Fill,
}

impl FitMode {
    pub const ALL: [FitMode; 3] = [FitMode::Contain, FitMode::Cover, FitMode::Fill];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitMode::Contain => "contain",
            FitMode::Cover => "cover",
            FitMode::Fill => "fill",
        }
    }
}

/// Positioning record for one asset on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPlacement {
    pub id: PlacementId,
    pub asset_id: String,
    pub position: PlacementPosition,
    pub size: PlacementSize,
    /// Degrees in [0, 360)
    pub rotation: f32,
    /// 0–100
    pub opacity: f32,
    pub z_index: u32,
    /// Explicit override; absent means derived from the size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_mode: Option<FitMode>,
    /// Show the original image instead of the background-removed one
    pub use_original_url: bool,
}

impl AssetPlacement {
    /// Centered placement whose larger side spans [`DEFAULT_PLACEMENT_EXTENT`],
    /// sized to keep the asset's own proportions on a canvas of `canvas_aspect`.
    pub fn for_asset(asset: &AssetInfo, canvas_aspect: f32, z_index: u32) -> Self {
        let (width, height) = fit_extent(asset.pixel_size(), canvas_aspect, DEFAULT_PLACEMENT_EXTENT);
        Self {
            id: generate_id(),
            asset_id: asset.id.clone(),
            position: PlacementPosition {
                x: 50.0,
                y: 50.0,
                anchor: Anchor::Center,
            },
            size: PlacementSize {
                width,
                height,
                unit: SizeUnit::Percent,
                maintain_aspect_ratio: true,
                locked_ratio: Some(width / height),
            },
            rotation: 0.0,
            opacity: 100.0,
            z_index,
            fit_mode: None,
            use_original_url: true,
        }
    }

    /// Explicit fit mode, or `cover` when the box nearly fills the canvas and `contain` otherwise
    pub fn effective_fit_mode(&self) -> FitMode {
        self.fit_mode.unwrap_or(
            if self.size.width >= COVER_THRESHOLD && self.size.height >= COVER_THRESHOLD {
                FitMode::Cover
            } else {
                FitMode::Contain
            },
        )
    }

    /// Box on the canvas, resolved through the anchor
    pub fn rect(&self) -> Rect {
        let size = Vec2::new(self.size.width, self.size.height);
        let min = self.position.pos() - size * self.position.anchor.fraction();
        Rect::from_min_size(min, size)
    }

    /// Image URL this placement renders
    pub fn source_url<'a>(&self, asset: &'a AssetInfo) -> &'a str {
        match (&asset.processed_url, self.use_original_url) {
            (Some(processed), false) => processed,
            _ => &asset.url,
        }
    }

    pub fn active_position_preset(&self) -> Option<PositionPreset> {
        PositionPreset::matching(self.position.pos())
    }

    fn set_width(&mut self, width: f32) {
        match self.size.ratio() {
            Some(ratio) => {
                let (width, height) = locked_extent(width, ratio);
                self.size.width = width;
                self.size.height = height;
            }
            None => self.size.width = width.clamp(MIN_IMAGE_SIZE, CANVAS_MAX),
        }
    }

    fn set_height(&mut self, height: f32) {
        match self.size.ratio() {
            Some(ratio) => {
                let (width, height) = locked_extent(height * ratio, ratio);
                self.size.width = width;
                self.size.height = height;
            }
            None => self.size.height = height.clamp(MIN_IMAGE_SIZE, CANVAS_MAX),
        }
    }
}

/// Fit a `width / ratio` box inside the allowed extents without bending the ratio.
/// When no width satisfies both sides the larger side wins and the smaller one
/// stays under the minimum.
fn locked_extent(width: f32, ratio: f32) -> (f32, f32) {
    let lower = MIN_IMAGE_SIZE.max(MIN_IMAGE_SIZE * ratio);
    let upper = CANVAS_MAX.min(CANVAS_MAX * ratio);
    let width = if lower <= upper {
        width.clamp(lower, upper)
    } else {
        upper
    };
    (width, width / ratio)
}

impl Layered for AssetPlacement {
    fn layer_id(&self) -> Uuid {
        self.id
    }

    fn z_index(&self) -> u32 {
        self.z_index
    }

    fn set_z_index(&mut self, z_index: u32) {
        self.z_index = z_index;
    }
}

/// The placement collection, kept sorted by z-index.
///
/// Every setter takes a placement id and returns whether a placement changed;
/// unknown ids are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSet {
    placements: Vec<AssetPlacement>,
    snap: SnapConfig,
    canvas_aspect: f32,
}

impl Default for PlacementSet {
    fn default() -> Self {
        Self::new(SnapConfig::default(), 16.0 / 9.0)
    }
}

impl PlacementSet {
    pub fn new(snap: SnapConfig, canvas_aspect: f32) -> Self {
        Self {
            placements: Vec::new(),
            snap,
            canvas_aspect,
        }
    }

    pub fn placements(&self) -> &[AssetPlacement] {
        &self.placements
    }

    pub fn get(&self, id: PlacementId) -> Option<&AssetPlacement> {
        self.placements.iter().find(|placement| placement.id == id)
    }

    fn get_mut(&mut self, id: PlacementId) -> Option<&mut AssetPlacement> {
        self.placements.iter_mut().find(|placement| placement.id == id)
    }

    /// All placements of one asset, bottom to top
    pub fn for_asset<'a>(&'a self, asset_id: &'a str) -> impl Iterator<Item = &'a AssetPlacement> + 'a {
        self.placements
            .iter()
            .filter(move |placement| placement.asset_id == asset_id)
    }

    pub fn snap_config(&self) -> SnapConfig {
        self.snap
    }

    pub fn set_snap_config(&mut self, snap: SnapConfig) {
        self.snap = snap;
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Place `asset` with the default centered placement on top of the stack.
    /// An asset already on the canvas keeps its existing placement.
    pub fn add_asset(&mut self, asset: &AssetInfo) -> PlacementId {
        if let Some(existing) = self.for_asset(&asset.id).next() {
            debug!("Asset {} already placed as {}", asset.id, existing.id);
            return existing.id;
        }
        let placement = AssetPlacement::for_asset(asset, self.canvas_aspect, layer::next_z_index(&self.placements));
        let id = placement.id;
        info!(
            "Placed asset {} at {:.1}x{:.1}%",
            asset.id, placement.size.width, placement.size.height
        );
        self.placements.push(placement);
        id
    }

    /// Second placement of the same asset, offset slightly and put on top
    pub fn duplicate(&mut self, id: PlacementId) -> Option<PlacementId> {
        let source = self.get(id)?;
        let mut copy = source.clone();
        copy.id = generate_id();
        copy.z_index = layer::next_z_index(&self.placements);
        copy.position.x = clamp_percent(copy.position.x + DUPLICATE_OFFSET);
        copy.position.y = clamp_percent(copy.position.y + DUPLICATE_OFFSET);
        let copy_id = copy.id;
        self.placements.push(copy);
        Some(copy_id)
    }

    /// Remove one placement and close the z-order gap
    pub fn remove(&mut self, id: PlacementId) -> Option<AssetPlacement> {
        let removed = layer::remove(&mut self.placements, id)?;
        info!("Removed placement {} of asset {}", removed.id, removed.asset_id);
        Some(removed)
    }

    /// Remove every placement of an asset. Returns how many were removed.
    pub fn remove_asset(&mut self, asset_id: &str) -> usize {
        let before = self.placements.len();
        self.placements.retain(|placement| placement.asset_id != asset_id);
        layer::normalize(&mut self.placements);
        before - self.placements.len()
    }

    /// Move the anchor point, snapped when snapping is on, clamped to the canvas
    pub fn set_position(&mut self, id: PlacementId, x: f32, y: f32) -> bool {
        let snap = self.snap;
        self.update(id, |placement| {
            placement.position.x = snap.apply(x);
            placement.position.y = snap.apply(y);
        })
    }

    pub fn set_anchor(&mut self, id: PlacementId, anchor: Anchor) -> bool {
        self.update(id, |placement| placement.position.anchor = anchor)
    }

    pub fn apply_position_preset(&mut self, id: PlacementId, preset: PositionPreset) -> bool {
        let target = preset.position();
        self.update(id, |placement| {
            placement.position = PlacementPosition {
                x: target.x,
                y: target.y,
                anchor: Anchor::Center,
            };
        })
    }

    /// Size presets set the width and let the aspect lock derive the height.
    /// `Fill` centers the placement, covers the whole canvas and drops the lock.
    pub fn apply_size_preset(&mut self, id: PlacementId, preset: SizePreset) -> bool {
        self.update(id, |placement| match preset {
            SizePreset::Fill => {
                placement.position = PlacementPosition {
                    x: 50.0,
                    y: 50.0,
                    anchor: Anchor::Center,
                };
                placement.size.width = CANVAS_MAX;
                placement.size.height = CANVAS_MAX;
                placement.size.maintain_aspect_ratio = false;
                placement.size.locked_ratio = None;
            }
            _ => {
                if placement.size.ratio().is_some() {
                    placement.set_width(preset.extent());
                } else {
                    placement.size.width = preset.extent();
                    placement.size.height = preset.extent();
                }
            }
        })
    }

    pub fn set_width(&mut self, id: PlacementId, width: f32) -> bool {
        self.update(id, |placement| placement.set_width(width))
    }

    pub fn set_height(&mut self, id: PlacementId, height: f32) -> bool {
        self.update(id, |placement| placement.set_height(height))
    }

    /// Toggle the aspect lock. Locking captures the current width/height ratio.
    pub fn set_aspect_lock(&mut self, id: PlacementId, locked: bool) -> bool {
        self.update(id, |placement| {
            placement.size.maintain_aspect_ratio = locked;
            placement.size.locked_ratio = if locked && placement.size.height > 0.0 {
                Some(placement.size.width / placement.size.height)
            } else {
                None
            };
        })
    }

    /// `None` returns to the derived fit mode
    pub fn set_fit_mode(&mut self, id: PlacementId, fit_mode: Option<FitMode>) -> bool {
        self.update(id, |placement| placement.fit_mode = fit_mode)
    }

    pub fn set_use_original_url(&mut self, id: PlacementId, use_original: bool) -> bool {
        self.update(id, |placement| placement.use_original_url = use_original)
    }

    /// Flip between the original and background-removed image. Returns the new value.
    pub fn toggle_use_original_url(&mut self, id: PlacementId) -> Option<bool> {
        let placement = self.get_mut(id)?;
        placement.use_original_url = !placement.use_original_url;
        Some(placement.use_original_url)
    }

    pub fn set_rotation(&mut self, id: PlacementId, degrees: f32) -> bool {
        let degrees = if degrees.is_finite() { degrees.rem_euclid(360.0) } else { 0.0 };
        self.update(id, |placement| placement.rotation = degrees)
    }

    pub fn set_opacity(&mut self, id: PlacementId, opacity: f32) -> bool {
        self.update(id, |placement| placement.opacity = clamp_percent(opacity))
    }

    pub fn reorder(&mut self, id: PlacementId, op: LayerOp) -> bool {
        op.apply(&mut self.placements, id)
    }

    pub fn clear(&mut self) {
        self.placements.clear();
    }

    /// Swap in a loaded placement list, normalizing its z-order
    pub fn replace_all(&mut self, mut placements: Vec<AssetPlacement>) {
        layer::normalize(&mut placements);
        self.placements = placements;
    }

    fn update(&mut self, id: PlacementId, apply: impl FnOnce(&mut AssetPlacement)) -> bool {
        match self.get_mut(id) {
            Some(placement) => {
                apply(placement);
                true
            }
            None => false,
        }
    }
}
