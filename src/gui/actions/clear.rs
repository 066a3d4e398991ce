// src/gui/actions/clear.rs
use crate::gui::app::App;

pub fn clear(app: &mut App) {
    // Dropping the receiver orphans any running worker; the controller
    // would ignore its generation anyway.
    app.inflight = None;
    app.notice = None;
    app.controller.reset();
}
