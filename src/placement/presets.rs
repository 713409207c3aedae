use egui::Pos2;
use serde::{Deserialize, Serialize};

/// A placement counts as sitting on a position preset within this distance per axis
pub const PRESET_TOLERANCE: f32 = 5.0;

const NEAR: f32 = 15.0;
const MID: f32 = 50.0;
const FAR: f32 = 85.0;

/// The 3×3 grid of quick positions: corners, edge midpoints and center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionPreset {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl PositionPreset {
    /// Row-major, top row first
    pub const ALL: [PositionPreset; 9] = [
        PositionPreset::TopLeft,
        PositionPreset::Top,
        PositionPreset::TopRight,
        PositionPreset::Left,
        PositionPreset::Center,
        PositionPreset::Right,
        PositionPreset::BottomLeft,
        PositionPreset::Bottom,
        PositionPreset::BottomRight,
    ];

    pub fn position(&self) -> Pos2 {
        let (x, y) = match self {
            PositionPreset::TopLeft => (NEAR, NEAR),
            PositionPreset::Top => (MID, NEAR),
            PositionPreset::TopRight => (FAR, NEAR),
            PositionPreset::Left => (NEAR, MID),
            PositionPreset::Center => (MID, MID),
            PositionPreset::Right => (FAR, MID),
            PositionPreset::BottomLeft => (NEAR, FAR),
            PositionPreset::Bottom => (MID, FAR),
            PositionPreset::BottomRight => (FAR, FAR),
        };
        Pos2::new(x, y)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PositionPreset::TopLeft => "Top left",
            PositionPreset::Top => "Top",
            PositionPreset::TopRight => "Top right",
            PositionPreset::Left => "Left",
            PositionPreset::Center => "Center",
            PositionPreset::Right => "Right",
            PositionPreset::BottomLeft => "Bottom left",
            PositionPreset::Bottom => "Bottom",
            PositionPreset::BottomRight => "Bottom right",
        }
    }

    /// Whether `pos` is within [`PRESET_TOLERANCE`] of this preset on both axes
    pub fn is_active_at(&self, pos: Pos2) -> bool {
        let target = self.position();
        (pos.x - target.x).abs() <= PRESET_TOLERANCE && (pos.y - target.y).abs() <= PRESET_TOLERANCE
    }

    /// The preset `pos` currently sits on, if any
    pub fn matching(pos: Pos2) -> Option<PositionPreset> {
        Self::ALL.into_iter().find(|preset| preset.is_active_at(pos))
    }
}

/// Quick sizes; `Fill` also recenters the placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Small,
    Medium,
    Large,
    Fill,
}

impl SizePreset {
    pub const ALL: [SizePreset; 4] = [
        SizePreset::Small,
        SizePreset::Medium,
        SizePreset::Large,
        SizePreset::Fill,
    ];

    /// Width in canvas percent
    pub fn extent(&self) -> f32 {
        match self {
            SizePreset::Small => 25.0,
            SizePreset::Medium => 50.0,
            SizePreset::Large => 75.0,
            SizePreset::Fill => 100.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizePreset::Small => "Small",
            SizePreset::Medium => "Medium",
            SizePreset::Large => "Large",
            SizePreset::Fill => "Fill",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_is_active_within_tolerance() {
        assert!(PositionPreset::TopLeft.is_active_at(Pos2::new(19.0, 11.0)));
        assert!(!PositionPreset::TopLeft.is_active_at(Pos2::new(21.0, 15.0)));
        assert_eq!(PositionPreset::matching(Pos2::new(52.0, 48.0)), Some(PositionPreset::Center));
        assert_eq!(PositionPreset::matching(Pos2::new(30.0, 30.0)), None);
    }
}
