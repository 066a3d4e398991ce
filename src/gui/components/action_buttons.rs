// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let blue = egui::Color32::from_rgb(21, 101, 192);

        let button_search = ui.add_enabled(
            app.controller.trigger_enabled(),
            egui::Button::new(
                egui::RichText::new("SEARCH")
                .color(egui::Color32::WHITE)
                .strong())
            .fill(blue));

        if button_search.clicked() {
            actions::search(app, ui.ctx());
        }

        if ui.button("Clear").clicked() {
            actions::clear(app);
        }

        ui.separator();

        if ui.button("Copy").on_hover_text("Copy results as HTML").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").on_hover_text("Write results page").clicked() {
            actions::export(app);
        }
        ui.add(egui::TextEdit::singleline(&mut app.out_path_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(200.0));
    });

    ui.horizontal(|ui| {
        if !app.controller.trigger_enabled() {
            ui.add(Spinner::new().size(16.0));
        }

        let status = &app.controller.surface().status;
        if status.is_error() {
            let red = egui::Color32::from_rgb(198, 40, 40);
            ui.label(egui::RichText::new("error").color(egui::Color32::WHITE).background_color(red));
        }
        ui.label(status.text());

        if let Some(notice) = &app.notice {
            ui.separator();
            ui.label(egui::RichText::new(notice.as_str()).weak());
        }
    });
}
