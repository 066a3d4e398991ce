// src/gui/components/results.rs
//
// Result cards. Text is drawn as plain labels, so nothing here needs HTML
// escaping; the HTML form of the same cards lives in `render`.

use eframe::egui::{self, Color32, RichText};

use crate::{
    gui::app::App,
    render::{BadgeClass, Block, Card, LINK_LABEL, NO_MATCHES, NO_REASONS},
};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for block in app.controller.surface().blocks() {
                match block {
                    Block::NoMatches => {
                        ui.label(RichText::new(NO_MATCHES).weak());
                    }
                    Block::Card(card) => draw_card(ui, card),
                }
                ui.add_space(8.0);
            }
        });
}

fn badge_color(class: BadgeClass) -> Color32 {
    match class {
        BadgeClass::Subsidy => Color32::from_rgb(21, 101, 192),
        BadgeClass::Grant => Color32::from_rgb(46, 125, 50),
    }
}

fn draw_card(ui: &mut egui::Ui, card: &Card) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(card.badge.as_str())
                    .small()
                    .color(Color32::WHITE)
                    .background_color(badge_color(card.badge_class)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("confidence {}", card.confidence)).weak());
            });
        });

        ui.label(RichText::new(card.title.as_str()).heading());

        if !card.meta.is_empty() {
            ui.label(RichText::new(card.meta_line()).small().weak());
        }
        if !card.summary.is_empty() {
            ui.add_space(4.0);
            ui.label(card.summary.as_str());
        }

        ui.add_space(4.0);
        let pill = ui.visuals().faint_bg_color;
        ui.horizontal_wrapped(|ui| {
            if let Some(url) = &card.link {
                ui.hyperlink_to(LINK_LABEL, url);
            }
            if card.reasons.is_empty() {
                ui.label(NO_REASONS);
            }
            for reason in &card.reasons {
                ui.label(
                    RichText::new(reason.as_str())
                        .small()
                        .background_color(pill),
                );
            }
        });
    });
}
