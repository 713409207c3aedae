// src/renderer.rs
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::element::{Element, ElementKind};
use crate::input::to_screen;
use crate::placement::AssetPlacement;
use crate::region::LabeledRegion;
use crate::state::EditorContext;
use crate::widgets::ResizeHandle;

const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
const PLACEMENT_FILL: Color32 = Color32::from_gray(225);
const SELECTION_COLOR: Color32 = Color32::from_rgb(33, 150, 243);
const FALLBACK_COLOR: Color32 = Color32::BLACK;

/// Parse a `#rrggbb` color, falling back to black
pub fn parse_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or(FALLBACK_COLOR)
}

pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Paints the canvas: placements at the bottom, then elements in z-order,
/// then regions, the draft in progress and the selection overlay on top.
#[derive(Debug)]
pub struct Renderer {
    show_regions: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self { show_regions: true }
    }

    pub fn show_regions(&self) -> bool {
        self.show_regions
    }

    pub fn set_show_regions(&mut self, show: bool) {
        self.show_regions = show;
    }

    /// Renders the current frame
    pub fn render(&self, painter: &Painter, canvas: Rect, editor: &EditorContext) {
        painter.rect_filled(canvas, 0.0, CANVAS_BACKGROUND);

        let mut placements: Vec<&AssetPlacement> = editor.placements().placements().iter().collect();
        placements.sort_by_key(|placement| placement.z_index);
        for placement in placements {
            self.draw_placement(painter, canvas, placement);
        }

        for element in editor.elements() {
            self.draw_element(painter, canvas, element);
        }

        if self.show_regions {
            for region in editor.regions().regions() {
                self.draw_region(painter, canvas, region);
            }
        }

        if let Some(draft) = editor.state().draft() {
            self.draw_element(painter, canvas, draft);
        }

        if let Some(selected) = editor.selected_element() {
            self.draw_selection(painter, canvas, selected, editor.config().handle_radius);
        }
    }

    fn draw_placement(&self, painter: &Painter, canvas: Rect, placement: &AssetPlacement) {
        let rect = to_screen_rect(placement.rect(), canvas);
        let alpha = placement.opacity / 100.0;
        painter.rect_filled(rect, 2.0, PLACEMENT_FILL.gamma_multiply(alpha));
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, Color32::GRAY.gamma_multiply(alpha)));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("🖼 {}", placement.asset_id),
            FontId::proportional(14.0),
            Color32::DARK_GRAY,
        );
    }

    pub fn draw_element(&self, painter: &Painter, canvas: Rect, element: &Element) {
        let color = parse_color(&element.color).gamma_multiply(element.opacity / 100.0);
        let stroke = Stroke::new(element.stroke_width, color);

        match &element.kind {
            ElementKind::Freehand(freehand) => {
                let points: Vec<Pos2> = freehand.points.iter().map(|point| to_screen(*point, canvas)).collect();
                match points.as_slice() {
                    [] => {}
                    [only] => {
                        painter.circle_filled(*only, element.stroke_width / 2.0, color);
                    }
                    _ => {
                        painter.add(Shape::line(points, stroke));
                    }
                }
            }
            ElementKind::Rectangle(rectangle) => {
                let rect = to_screen_rect(rectangle.rect(), canvas);
                if rectangle.filled {
                    painter.rect_filled(rect, 0.0, color);
                } else {
                    painter.rect_stroke(rect, 0.0, stroke);
                }
            }
            ElementKind::Circle(ellipse) => {
                let center = to_screen(ellipse.center(), canvas);
                let radius = Vec2::new(ellipse.rx * canvas.width(), ellipse.ry * canvas.height()) / 100.0;
                let shape = if ellipse.filled {
                    Shape::ellipse_filled(center, radius, color)
                } else {
                    Shape::ellipse_stroke(center, radius, stroke)
                };
                painter.add(shape);
            }
            ElementKind::Line(segment) => {
                painter.line_segment([to_screen(segment.start(), canvas), to_screen(segment.end(), canvas)], stroke);
            }
            ElementKind::Arrow(segment) => {
                let end = to_screen(segment.end(), canvas);
                painter.line_segment([to_screen(segment.start(), canvas), end], stroke);
                for barb in segment.arrowhead(element.stroke_width) {
                    painter.line_segment([end, to_screen(barb, canvas)], stroke);
                }
            }
            ElementKind::Text(label) => {
                let font_size = label.font_size * canvas.height() / 100.0;
                painter.text(
                    to_screen(label.anchor(), canvas),
                    Align2::LEFT_BOTTOM,
                    &label.text,
                    FontId::proportional(font_size.max(1.0)),
                    color,
                );
            }
            ElementKind::Sticker(sticker) => {
                let rect = to_screen_rect(sticker.rect(), canvas);
                let glyph = if sticker.is_emoji() { sticker.content.as_str() } else { "★" };
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(rect.height().max(1.0)),
                    Color32::WHITE.gamma_multiply(element.opacity / 100.0),
                );
            }
            ElementKind::Image(image) => {
                let rect = to_screen_rect(image.rect(), canvas);
                painter.rect_filled(rect, 0.0, PLACEMENT_FILL.gamma_multiply(element.opacity / 100.0));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "🖼",
                    FontId::proportional((rect.height() / 3.0).max(1.0)),
                    Color32::DARK_GRAY,
                );
            }
        }
    }

    fn draw_region(&self, painter: &Painter, canvas: Rect, region: &LabeledRegion) {
        let color = parse_color(&region.color);
        let rect = to_screen_rect(region.rect(), canvas);
        painter.rect_filled(rect, 4.0, color.gamma_multiply(0.1));
        painter.rect_stroke(rect, 4.0, Stroke::new(2.0, color));
        if region.has_label() {
            painter.text(
                rect.left_top() + Vec2::new(6.0, 4.0),
                Align2::LEFT_TOP,
                region.label.trim(),
                FontId::proportional(13.0),
                color,
            );
        }
    }

    fn draw_selection(&self, painter: &Painter, canvas: Rect, element: &Element, handle_radius: f32) {
        let rect = to_screen_rect(element.bounds(), canvas);
        painter.rect_stroke(rect.expand(2.0), 2.0, Stroke::new(1.0, SELECTION_COLOR));

        if let Some(image) = element.as_image() {
            let radius = handle_radius * canvas.width().min(canvas.height()) / 100.0;
            for handle in ResizeHandle::for_rect(image.rect(), radius) {
                handle.paint(painter, canvas);
            }
        }
    }
}

/// Map a canvas-percent rect to screen space
pub fn to_screen_rect(rect: Rect, canvas: Rect) -> Rect {
    Rect::from_min_max(to_screen(rect.min, canvas), to_screen(rect.max, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_round_trip() {
        let color = parse_color("#ef4444");
        assert_eq!(color, Color32::from_rgb(0xef, 0x44, 0x44));
        assert_eq!(color_to_hex(color), "#ef4444");
        assert_eq!(parse_color("not a color"), FALLBACK_COLOR);
    }

    #[test]
    fn percent_rects_scale_to_the_canvas() {
        let canvas = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(400.0, 200.0));
        let rect = to_screen_rect(Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(50.0, 100.0)), canvas);
        assert_eq!(rect, Rect::from_min_max(Pos2::new(100.0, 50.0), Pos2::new(300.0, 250.0)));
    }

    #[test]
    fn render_basics() {
        let mut editor = EditorContext::default();
        editor.insert_image("photo.png", Vec2::new(800.0, 600.0));
        let ctx = egui::Context::default();
        ctx.begin_pass(egui::RawInput::default());
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::splat(100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), canvas);

        Renderer::new().render(&painter, canvas, &editor);
    }
}
