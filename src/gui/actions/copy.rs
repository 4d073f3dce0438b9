// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.output.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    logf!("Copy: {} bytes", app.output.len());
    ui_ctx.copy_text(app.output.clone());
    app.status("Copied to clipboard");
}
