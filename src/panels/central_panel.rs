use egui::{Color32, Key, Stroke};

use crate::input::to_screen;
use crate::renderer::to_screen_rect;
use crate::widgets::ResizeHandle;
use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("description_panel")
        .resizable(true)
        .default_height(90.0)
        .show(ctx, |ui| {
            let description = app.description();
            ui.horizontal(|ui| {
                ui.heading("Description");
                ui.label(format!("confidence {:.0}%", description.confidence * 100.0));
            });
            ui.label(&description.description);
            if !description.prompt_description.is_empty() {
                ui.separator();
                ui.weak(&description.prompt_description);
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let aspect = app.editor().config().canvas_aspect_ratio;
        let size = if available.x / available.y > aspect {
            egui::vec2(available.y * aspect, available.y)
        } else {
            egui::vec2(available.x, available.x / aspect)
        };
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let canvas = response.rect;

        app.handle_input(ctx, canvas, response.contains_pointer());
        app.renderer().render(&painter, canvas, app.editor());

        if let Some(selected) = app.editor().selected_element() {
            if let Some(image) = selected.as_image() {
                let radius = app.editor().config().handle_radius * canvas.width().min(canvas.height()) / 100.0;
                for handle in ResizeHandle::for_rect(image.rect(), radius) {
                    handle.hover_cursor(&response, canvas);
                }
            }
        }

        // Rubber band for the region being dragged out
        if let (Some(start), Some(hover)) = (app.region_start(), response.hover_pos()) {
            let start = to_screen(start, canvas);
            painter.rect_stroke(
                egui::Rect::from_two_pos(start, hover),
                4.0,
                Stroke::new(1.5, Color32::from_rgb(59, 130, 246)),
            );
        }

        if let Some((anchor, _)) = app.editor().state().text_entry() {
            let caret = to_screen_rect(egui::Rect::from_center_size(anchor, egui::vec2(0.3, 4.0)), canvas);
            painter.rect_filled(caret, 0.0, Color32::DARK_GRAY);
        }
    });
}

/// Floating text box shown while the text tool is entering a label
pub fn text_entry_window(app: &mut SketchApp, ctx: &egui::Context) {
    let Some((_, text)) = app.editor().state().text_entry() else {
        return;
    };
    let mut text = text.to_string();
    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new("Text")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let response = ui.text_edit_singleline(&mut text);
            response.request_focus();
            if response.changed() {
                app.editor_mut().update_text_entry(&text);
            }
            if ui.input(|input| input.key_pressed(Key::Enter)) {
                confirm = true;
            }
            if ui.input(|input| input.key_pressed(Key::Escape)) {
                cancel = true;
            }
            ui.horizontal(|ui| {
                confirm |= ui.button("Add").clicked();
                cancel |= ui.button("Cancel").clicked();
            });
        });

    if confirm {
        app.editor_mut().confirm_text();
    } else if cancel {
        app.editor_mut().cancel_text();
    }
}
