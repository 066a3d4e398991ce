// src/gui/app.rs
use std::{error::Error, sync::mpsc::Receiver};

use eframe::egui;

use crate::{
    config::endpoint::HostContext,
    controller::{ClientContext, SearchController},
    core::net::HttpTransport,
    error::SearchError,
    file,
    model::SearchResponse,
};

use super::{actions, components, fonts};

pub fn run(options: eframe::NativeOptions, host: HostContext) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Subsidy & Grant Search",
        options,
        Box::new(move |cc| {
            fonts::install_cjk_fonts(&cc.egui_ctx);
            Ok(Box::new(App::new(ClientContext::new(&host))))
        }),
    )?;
    Ok(())
}

/// Outcome of a search worker, tagged with its generation.
pub struct Completion {
    pub generation: u64,
    pub outcome: Result<SearchResponse, SearchError>,
}

/// The search currently running on a worker thread.
pub struct Inflight {
    pub generation: u64,
    pub rx: Receiver<Completion>,
}

pub struct App {
    // single source of truth for form/status/results (UI thread only)
    pub controller: SearchController,

    // None if the HTTP client could not be built; searches then fail
    pub transport: Option<HttpTransport>,
    pub inflight: Option<Inflight>,

    // export path text field
    pub out_path_text: String,

    // transient feedback for copy/export, separate from the search status
    pub notice: Option<String>,
}

impl App {
    pub fn new(ctx: ClientContext) -> Self {
        let transport = match HttpTransport::new() {
            Ok(t) => Some(t),
            Err(e) => {
                loge!("Init: HTTP client unavailable: {e}");
                None
            }
        };

        logf!("Init: GUI ready, endpoint={}", ctx.endpoint());

        Self {
            controller: SearchController::new(ctx),
            transport,
            inflight: None,
            out_path_text: file::default_results_path().to_string_lossy().into_owned(),
            notice: None,
        }
    }

    #[inline]
    pub fn notice<T: Into<String>>(&mut self, msg: T) {
        self.notice = Some(msg.into());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::top("search_form").show(ctx, |ui| {
            ui.add_space(6.0);
            components::search_form::draw(ui, self);
            ui.separator();
            components::action_buttons::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::results::draw(ui, self);
        });
    }
}
