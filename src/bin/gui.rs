// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use subsidy_search::{config::endpoint::HostContext, gui};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/app.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

/// `--origin <url>` is the only flag; it stands in for the page origin.
fn host_context() -> HostContext {
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        if a == "--origin" {
            if let Some(origin) = args.next() {
                return HostContext::from_origin(&origin);
            }
        }
    }
    HostContext::none()
}

fn main() {
    subsidy_search::log::init();

    let mut viewport = ViewportBuilder::default().with_inner_size([960.0, 720.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, host_context()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
