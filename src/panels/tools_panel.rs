use egui::Slider;

use crate::components::ToolButton;
use crate::element::{StickerTemplate, StylePatch};
use crate::renderer::{color_to_hex, parse_color};
use crate::tools::Tool;
use crate::SketchApp;

const STICKERS: [(&str, &str); 6] = [
    ("star", "⭐"),
    ("heart", "❤"),
    ("fire", "🔥"),
    ("sparkles", "✨"),
    ("check", "✔"),
    ("arrow", "➡"),
];

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Tools");
                ui.horizontal_wrapped(|ui| {
                    let active = app.editor().tool();
                    for tool in Tool::ALL {
                        if ToolButton::new(tool, tool == active).show(ui).clicked() {
                            log::info!("Tool selected from UI: {}", tool.name());
                            app.set_region_mode(false);
                            app.editor_mut().set_tool(tool);
                        }
                    }
                });
                ui.label(format!("State: {}", app.editor().state().name()));
                ui.separator();

                style_section(app, ui);
                ui.separator();
                canvas_section(app, ui);
                ui.separator();
                selection_section(app, ui);
                ui.separator();
                history_section(app, ui);
                ui.separator();
                regions_section(app, ui);
            });
        });
}

fn style_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Style");
    let settings = app.editor_mut().settings_mut();

    ui.horizontal(|ui| {
        ui.label("Color:");
        let mut color = parse_color(&settings.style.color);
        if egui::color_picker::color_edit_button_srgba(ui, &mut color, egui::color_picker::Alpha::Opaque).changed() {
            settings.style.color = color_to_hex(color);
        }
    });
    ui.horizontal(|ui| {
        ui.label("Thickness:");
        ui.add(Slider::new(&mut settings.style.stroke_width, 1.0..=20.0));
    });
    ui.horizontal(|ui| {
        ui.label("Opacity:");
        ui.add(Slider::new(&mut settings.style.opacity, 0.0..=100.0).suffix("%"));
    });
    ui.checkbox(&mut settings.fill_shapes, "Fill shapes");
    ui.horizontal(|ui| {
        ui.label("Font size:");
        ui.add(Slider::new(&mut settings.font_size, 1.0..=20.0));
    });

    ui.horizontal_wrapped(|ui| {
        for (sticker_id, emoji) in STICKERS {
            let selected = settings.sticker.sticker_id == sticker_id;
            if ui.selectable_label(selected, emoji).clicked() {
                settings.sticker = StickerTemplate::emoji(sticker_id, emoji);
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Sticker size:");
        ui.add(Slider::new(&mut settings.sticker_size, 2.0..=40.0));
    });
}

fn canvas_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Canvas");

    let mut snap = app.editor().config().snap;
    let mut changed = ui.checkbox(&mut snap.enabled, "Snap to grid").changed();
    ui.add_enabled_ui(snap.enabled, |ui| {
        changed |= ui.add(Slider::new(&mut snap.grid_size, 1.0..=25.0).text("grid")).changed();
    });
    if changed {
        app.editor_mut().set_snap(snap);
    }

    let mut region_mode = app.region_mode();
    if ui.checkbox(&mut region_mode, "Draw labeled regions").changed() {
        app.set_region_mode(region_mode);
    }
    let mut show_regions = app.renderer().show_regions();
    if ui.checkbox(&mut show_regions, "Show regions").changed() {
        app.renderer_mut().set_show_regions(show_regions);
    }

    if ui.button("Clear canvas").clicked() {
        app.editor_mut().clear_canvas();
    }
}

fn selection_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Selection");
    let Some(selected) = app.editor().selected_element() else {
        ui.weak("Nothing selected");
        return;
    };
    ui.label(format!("{} (layer {})", selected.type_name(), selected.z_index));

    let editor = app.editor_mut();
    ui.horizontal_wrapped(|ui| {
        if ui.button("Forward").clicked() {
            editor.bring_forward();
        }
        if ui.button("Backward").clicked() {
            editor.send_backward();
        }
        if ui.button("To front").clicked() {
            editor.bring_to_front();
        }
        if ui.button("To back").clicked() {
            editor.send_to_back();
        }
    });
    ui.horizontal_wrapped(|ui| {
        if ui.button("Flip ↔").clicked() {
            editor.flip_horizontal();
        }
        if ui.button("Flip ↕").clicked() {
            editor.flip_vertical();
        }
        if ui.button("Duplicate").clicked() {
            editor.duplicate_selected();
        }
        if ui.button("Delete").clicked() {
            editor.delete_selected();
        }
    });
    if ui.button("Apply current style").clicked() {
        let style = editor.settings().style.clone();
        editor.update_selected_style(&StylePatch {
            color: Some(style.color),
            stroke_width: Some(style.stroke_width),
            opacity: Some(style.opacity),
        });
    }
}

fn history_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("History");
    let editor = app.editor_mut();
    ui.horizontal(|ui| {
        if ui.add_enabled(editor.can_undo(), egui::Button::new("Undo")).clicked() {
            editor.undo();
        }
        if ui.add_enabled(editor.can_redo(), egui::Button::new("Redo")).clicked() {
            editor.redo();
        }
    });

    let history = editor.history();
    ui.label(format!("{} / {} entries", history.entries().len(), history.limit()));
    egui::Grid::new("command_history_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (index, entry) in history.entries().iter().enumerate().rev() {
                let current = history.current_index() == Some(index);
                ui.label(if current { "▶" } else { "" });
                if current {
                    ui.strong(&entry.action);
                } else {
                    ui.label(&entry.action);
                }
                ui.end_row();
            }
        });
}

fn regions_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Regions");
    let regions: Vec<(uuid::Uuid, String)> = app
        .editor()
        .regions()
        .regions()
        .iter()
        .map(|region| (region.id, region.label.clone()))
        .collect();
    if regions.is_empty() {
        ui.weak("Enable region mode and drag on the canvas");
    }

    for (id, mut label) in regions {
        ui.horizontal(|ui| {
            if ui.text_edit_singleline(&mut label).changed() {
                app.editor_mut().update_regions(|regions| regions.set_label(id, &label));
            }
            if ui.small_button("✖").clicked() {
                app.editor_mut().update_regions(|regions| regions.remove(id));
            }
        });
    }
}
