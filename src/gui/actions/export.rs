// src/gui/actions/export.rs
use std::path::PathBuf;

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    let text = app.out_path_text.trim();
    let path = if text.is_empty() { file::default_results_path() } else { PathBuf::from(text) };

    let msg = if app.controller.surface().blocks().is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        s!("Nothing to export")
    } else {
        match file::write_results_page(&path, app.controller.surface()) {
            Ok(p) => {
                logf!("Export: OK → {}", p.display());
                format!("Exported {}", p.display())
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        }
    };

    app.notice(msg);
}
