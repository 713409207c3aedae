use egui::{Pos2, Rect, Vec2};
use log::info;
use serde::{Deserialize, Serialize};

use super::common;

/// Image element placed on the canvas; `(x, y)` is the center.
/// The only variant with interactive resize handles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub src: String,
    pub rotation: f32,
    pub maintain_aspect_ratio: bool,
}

impl ImageBox {
    /// Centered image whose larger side spans `extent` percent, keeping the
    /// source's aspect ratio as seen on a canvas of `canvas_aspect` (width / height).
    pub fn centered(src: impl Into<String>, pixel_size: Vec2, canvas_aspect: f32, extent: f32) -> Self {
        let (width, height) = fit_extent(pixel_size, canvas_aspect, extent);
        info!("🖼️ Centering image {}x{} as {:.1}%x{:.1}%", pixel_size.x, pixel_size.y, width, height);
        Self {
            x: 50.0,
            y: 50.0,
            width,
            height,
            src: src.into(),
            rotation: 0.0,
            maintain_aspect_ratio: true,
        }
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// Unrotated box around the center
    pub fn rect(&self) -> Rect {
        common::centered_rect(self.x, self.y, self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 { self.width / self.height } else { 1.0 }
    }

    pub fn is_valid(&self) -> bool {
        self.width >= common::MIN_SHAPE_EXTENT && self.height >= common::MIN_SHAPE_EXTENT
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.x = rect.center().x;
        self.y = rect.center().y;
        self.width = rect.width();
        self.height = rect.height();
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// Percent width/height for a `pixel_size` asset whose larger canvas-relative side spans `extent`
pub(crate) fn fit_extent(pixel_size: Vec2, canvas_aspect: f32, extent: f32) -> (f32, f32) {
    let extent = extent.clamp(common::MIN_IMAGE_SIZE, common::CANVAS_MAX);
    let source_ratio = if pixel_size.y > 0.0 && pixel_size.x > 0.0 {
        pixel_size.x / pixel_size.y
    } else {
        1.0
    };
    let canvas_aspect = if canvas_aspect > 0.0 { canvas_aspect } else { 1.0 };
    // width% / height% that renders with the source's proportions
    let percent_ratio = source_ratio / canvas_aspect;
    if percent_ratio >= 1.0 {
        (extent, extent / percent_ratio)
    } else {
        (extent * percent_ratio, extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_extent_respects_source_and_canvas_ratio() {
        // Square canvas: a 2:1 asset is twice as wide as tall
        let (w, h) = fit_extent(Vec2::new(200.0, 100.0), 1.0, 80.0);
        assert_eq!((w, h), (80.0, 40.0));

        // 16:9 asset on a 16:9 canvas fills proportionally
        let (w, h) = fit_extent(Vec2::new(1600.0, 900.0), 16.0 / 9.0, 80.0);
        assert!((w - 80.0).abs() < 1e-4 && (h - 80.0).abs() < 1e-4);

        // Portrait asset: height drives
        let (w, h) = fit_extent(Vec2::new(100.0, 400.0), 1.0, 80.0);
        assert_eq!((w, h), (20.0, 80.0));
    }

    #[test]
    fn zero_pixel_size_falls_back_to_square() {
        let (w, h) = fit_extent(Vec2::ZERO, 1.0, 50.0);
        assert_eq!((w, h), (50.0, 50.0));
    }
}
