use egui::Slider;

use crate::layer::LayerOp;
use crate::placement::{AssetPlacement, FitMode, PositionPreset, SizePreset};
use crate::SketchApp;

/// Asset library and the settings of the selected placement
pub fn placement_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::right("placement_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Assets");
                let assets = app.assets().to_vec();
                for asset in &assets {
                    ui.horizontal(|ui| {
                        ui.label(format!("{} ({}×{})", asset.id, asset.width, asset.height));
                        if ui.small_button("Place").clicked() {
                            let id = app.editor_mut().add_asset(asset);
                            app.select_placement(Some(id));
                        }
                    });
                }
                ui.separator();

                ui.heading("Placements");
                let placements: Vec<AssetPlacement> = app.editor().placements().placements().to_vec();
                let selected = app.selected_placement();
                for placement in placements.iter().rev() {
                    let label = format!("{} · layer {}", placement.asset_id, placement.z_index);
                    if ui.selectable_label(selected == Some(placement.id), label).clicked() {
                        app.select_placement(Some(placement.id));
                    }
                }

                let Some(placement) = selected.and_then(|id| placements.iter().find(|p| p.id == id)) else {
                    return;
                };
                ui.separator();
                placement_settings(app, ui, placement);
            });
        });
}

fn placement_settings(app: &mut SketchApp, ui: &mut egui::Ui, placement: &AssetPlacement) {
    let id = placement.id;
    let editor = app.editor_mut();

    ui.label("Position");
    let active = placement.active_position_preset();
    egui::Grid::new("position_presets").show(ui, |ui| {
        for (index, preset) in PositionPreset::ALL.into_iter().enumerate() {
            if ui
                .selectable_label(active == Some(preset), "●")
                .on_hover_text(preset.label())
                .clicked()
            {
                editor.update_placements(|set| set.apply_position_preset(id, preset));
            }
            if index % 3 == 2 {
                ui.end_row();
            }
        }
    });

    let (mut x, mut y) = (placement.position.x, placement.position.y);
    let moved_x = ui.add(Slider::new(&mut x, 0.0..=100.0).text("x")).changed();
    let moved_y = ui.add(Slider::new(&mut y, 0.0..=100.0).text("y")).changed();
    if moved_x || moved_y {
        editor.update_placements(|set| set.set_position(id, x, y));
    }

    ui.label("Size");
    ui.horizontal(|ui| {
        for preset in SizePreset::ALL {
            if ui.button(preset.label()).clicked() {
                editor.update_placements(|set| set.apply_size_preset(id, preset));
            }
        }
    });
    let mut width = placement.size.width;
    if ui.add(Slider::new(&mut width, 2.0..=100.0).text("width")).changed() {
        editor.update_placements(|set| set.set_width(id, width));
    }
    let mut height = placement.size.height;
    if ui.add(Slider::new(&mut height, 2.0..=100.0).text("height")).changed() {
        editor.update_placements(|set| set.set_height(id, height));
    }
    let mut locked = placement.size.maintain_aspect_ratio;
    if ui.checkbox(&mut locked, "Lock aspect ratio").changed() {
        editor.update_placements(|set| set.set_aspect_lock(id, locked));
    }

    let effective = placement.effective_fit_mode();
    egui::ComboBox::from_label("Fit")
        .selected_text(match placement.fit_mode {
            Some(mode) => mode.as_str().to_string(),
            None => format!("auto ({})", effective.as_str()),
        })
        .show_ui(ui, |ui| {
            if ui.selectable_label(placement.fit_mode.is_none(), "auto").clicked() {
                editor.update_placements(|set| set.set_fit_mode(id, None));
            }
            for mode in FitMode::ALL {
                if ui.selectable_label(placement.fit_mode == Some(mode), mode.as_str()).clicked() {
                    editor.update_placements(|set| set.set_fit_mode(id, Some(mode)));
                }
            }
        });

    let mut opacity = placement.opacity;
    if ui.add(Slider::new(&mut opacity, 0.0..=100.0).text("opacity")).changed() {
        editor.update_placements(|set| set.set_opacity(id, opacity));
    }
    let mut rotation = placement.rotation;
    if ui.add(Slider::new(&mut rotation, 0.0..=359.0).text("rotation")).changed() {
        editor.update_placements(|set| set.set_rotation(id, rotation));
    }
    let mut original = placement.use_original_url;
    if ui.checkbox(&mut original, "Use original image").changed() {
        editor.update_placements(|set| set.set_use_original_url(id, original));
    }

    ui.horizontal_wrapped(|ui| {
        for op in [LayerOp::BringToFront, LayerOp::BringForward, LayerOp::SendBackward, LayerOp::SendToBack] {
            if ui.small_button(op.label()).clicked() {
                editor.update_placements(|set| set.reorder(id, op));
            }
        }
    });
    ui.horizontal(|ui| {
        if ui.button("Duplicate").clicked() {
            editor.update_placements(|set| set.duplicate(id));
        }
        if ui.button("Remove").clicked() {
            editor.remove_placement(id);
        }
    });
}
