//! Grid and landmark snapping for canvas coordinates.
use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::element::clamp_percent;

/// Edge and center coordinates that attract nearby values
pub const LANDMARKS: [f32; 3] = [0.0, 50.0, 100.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapConfig {
    pub enabled: bool,
    /// Grid increment in canvas percent; 0 disables the grid but keeps landmarks
    pub grid_size: f32,
    /// Values this close to a landmark snap onto it
    pub landmark_threshold: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            grid_size: 5.0,
            landmark_threshold: 2.0,
        }
    }
}

impl SnapConfig {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Snap when enabled; always clamps into the canvas
    pub fn apply(&self, value: f32) -> f32 {
        if self.enabled {
            snap_to_grid(value, self.grid_size, self.landmark_threshold)
        } else {
            clamp_percent(value)
        }
    }

    pub fn apply_pos(&self, pos: Pos2) -> Pos2 {
        Pos2::new(self.apply(pos.x), self.apply(pos.y))
    }
}

/// Round to the nearest grid increment, with values near 0, 50 or 100 pulled
/// exactly onto that landmark, then clamp to [0, 100].
pub fn snap_to_grid(value: f32, grid_size: f32, landmark_threshold: f32) -> f32 {
    if value.is_nan() {
        return clamp_percent(value);
    }
    if let Some(landmark) = LANDMARKS
        .iter()
        .copied()
        .find(|landmark| (value - landmark).abs() <= landmark_threshold)
    {
        return landmark;
    }
    let snapped = if grid_size > 0.0 {
        (value / grid_size).round() * grid_size
    } else {
        value
    };
    clamp_percent(snapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_grid() {
        assert_eq!(snap_to_grid(23.0, 5.0, 2.0), 25.0);
        assert_eq!(snap_to_grid(22.4, 5.0, 2.0), 20.0);
    }

    #[test]
    fn landmarks_win_within_threshold() {
        assert_eq!(snap_to_grid(48.6, 10.0, 2.0), 50.0);
        assert_eq!(snap_to_grid(1.9, 10.0, 2.0), 0.0);
        assert_eq!(snap_to_grid(98.5, 7.0, 2.0), 100.0);
    }

    #[test]
    fn result_is_clamped() {
        assert_eq!(snap_to_grid(130.0, 5.0, 0.0), 100.0);
        assert_eq!(snap_to_grid(-12.0, 5.0, 0.0), 0.0);
    }

    #[test]
    fn disabled_config_only_clamps() {
        let config = SnapConfig::default();
        assert_eq!(config.apply(23.3), 23.3);
        assert_eq!(config.apply(101.0), 100.0);
        assert_eq!(SnapConfig::enabled().apply(23.3), 25.0);
    }
}
