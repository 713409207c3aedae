//! Editor tuning knobs, loadable from a JSON file.
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::MAX_HISTORY_SIZE;
use crate::element::Style;
use crate::geometry::hit_testing::{DEFAULT_HIT_TOLERANCE, RESIZE_HANDLE_RADIUS};
use crate::snap::SnapConfig;
use crate::tools::ToolSettings;

/// Environment variable naming a config file for [`EditorConfig::discover`]
pub const CONFIG_ENV_VAR: &str = "SKETCH_CANVAS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Pick distance for hit testing, in canvas percent
    pub hit_tolerance: f32,
    /// Grab radius of image resize handles
    pub handle_radius: f32,
    /// Freehand points closer than this to the previous point are dropped
    pub min_point_distance: f32,
    /// Drags shorter than this are treated as clicks
    pub move_threshold: f32,
    pub history_limit: usize,
    pub snap: SnapConfig,
    pub default_style: Style,
    pub default_font_size: f32,
    pub default_font_family: String,
    pub sticker_size: f32,
    /// Canvas width / height, used to keep placed assets in proportion
    pub canvas_aspect_ratio: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            handle_radius: RESIZE_HANDLE_RADIUS,
            min_point_distance: 0.3,
            move_threshold: 0.5,
            history_limit: MAX_HISTORY_SIZE,
            snap: SnapConfig::default(),
            default_style: Style::default(),
            default_font_size: 4.0,
            default_font_family: "sans-serif".to_string(),
            sticker_size: 10.0,
            canvas_aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Load from the file named by `SKETCH_CANVAS_CONFIG`, or fall back to defaults
    pub fn discover() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("hitTolerance", self.hit_tolerance),
            ("handleRadius", self.handle_radius),
            ("defaultFontSize", self.default_font_size),
            ("stickerSize", self.sticker_size),
            ("canvasAspectRatio", self.canvas_aspect_ratio),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, value)| !(value.is_finite() && *value > 0.0)) {
            return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
        }
        if !(self.min_point_distance >= 0.0 && self.move_threshold >= 0.0) {
            return Err(ConfigError::Invalid("distance thresholds must not be negative".into()));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid("historyLimit must be at least 1".into()));
        }
        if self.snap.enabled && self.snap.grid_size < 0.0 {
            return Err(ConfigError::Invalid("snap.gridSize must not be negative".into()));
        }
        Ok(())
    }

    /// Tool settings seeded from the configured defaults
    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            style: self.default_style.clone(),
            font_size: self.default_font_size,
            font_family: self.default_font_family.clone(),
            sticker_size: self.sticker_size,
            ..ToolSettings::default()
        }
    }
}
