// src/gui/components/search_form.rs
//
// Filter inputs. Select controls come from the controller's form, so the
// combo boxes show exactly what bootstrap populated.

use eframe::egui;

use crate::{
    config::consts::{INDUSTRY_SELECT, PREFECTURE_SELECT},
    gui::app::App,
    select::Controls,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let form = &mut app.controller.form;

    egui::Grid::new("search_form_grid")
        .num_columns(4)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Prefecture");
            select_combo(ui, &mut form.selects, PREFECTURE_SELECT);
            ui.label("Municipality");
            ui.add(egui::TextEdit::singleline(&mut form.municipality).hint_text("e.g. 渋谷区"));
            ui.end_row();

            ui.label("Industry");
            select_combo(ui, &mut form.selects, INDUSTRY_SELECT);
            ui.label("Keywords");
            ui.add(egui::TextEdit::singleline(&mut form.keywords).hint_text("e.g. IT導入 設備投資"));
            ui.end_row();

            ui.label("Results");
            ui.add(egui::TextEdit::singleline(&mut form.top_k).desired_width(60.0));
            ui.end_row();
        });
}

fn select_combo(ui: &mut egui::Ui, controls: &mut Controls, id: &str) {
    let Some(control) = controls.get_mut(id) else {
        // Bootstrap already logged the missing control.
        ui.label("—");
        return;
    };

    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(control.selected_label())
        .width(240.0)
        .show_ui(ui, |ui| {
            for (i, opt) in control.options().iter().enumerate() {
                if ui.selectable_label(control.is_selected(i), opt.label.as_str()).clicked() {
                    picked = Some(i);
                }
            }
        });

    if let Some(i) = picked {
        control.select_index(i);
        logd!("UI: #{id} → {:?}", control.value());
    }
}
