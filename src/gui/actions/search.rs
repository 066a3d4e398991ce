// src/gui/actions/search.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    core::net::SearchTransport,
    error::SearchError,
    gui::app::{App, Completion, Inflight},
};

/// Start a search on a worker thread. The UI picks the outcome up in `poll`.
pub fn search(app: &mut App, ui_ctx: &egui::Context) {
    let Some(pending) = app.controller.begin_search() else {
        return;
    };
    let generation = pending.generation;

    let Some(transport) = app.transport.clone() else {
        app.controller.complete(
            generation,
            Err(SearchError::Transport(s!("HTTP client unavailable"))),
        );
        return;
    };

    let (tx, rx) = mpsc::channel();
    let repaint = ui_ctx.clone();

    let spawned = thread::Builder::new()
        .name(format!("search-{generation}"))
        .spawn(move || {
            let outcome = transport.search(&pending.endpoint, &pending.request);
            // Receiver is gone if the form was reset meanwhile.
            let _ = tx.send(Completion { generation, outcome });
            repaint.request_repaint();
        });

    match spawned {
        Ok(_) => app.inflight = Some(Inflight { generation, rx }),
        Err(e) => {
            loge!("Search: worker spawn failed: {e}");
            app.controller
                .complete(generation, Err(SearchError::Transport(e.to_string())));
        }
    }
}

/// Apply a finished search, if any. Called once per frame.
pub fn poll(app: &mut App) {
    let Some(inflight) = &app.inflight else {
        return;
    };
    let generation = inflight.generation;

    match inflight.rx.try_recv() {
        Ok(done) => {
            app.inflight = None;
            app.controller.complete(done.generation, done.outcome);
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            app.inflight = None;
            loge!("Search: worker #{generation} exited without a result");
            app.controller.complete(
                generation,
                Err(SearchError::Transport(s!("search worker stopped unexpectedly"))),
            );
        }
    }
}
