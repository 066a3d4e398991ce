// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let surface = app.controller.surface();

    if surface.blocks().is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.notice("Nothing to copy");
        return;
    }

    let html = surface.results_html();
    logf!("Copy: results html ({} blocks, {} bytes)", surface.blocks().len(), html.len());

    ui_ctx.copy_text(html);
    app.notice("Copied results HTML to clipboard");
}
