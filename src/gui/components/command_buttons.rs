// src/gui/components/command_buttons.rs

use eframe::egui;
use crate::{gui::{actions, app::App}, runner::Command};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = app.has_page();
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for cmd in Command::ALL {
            let btn = ui.add_enabled(enabled, egui::Button::new(cmd.label()));
            if btn.clicked() {
                clicked = Some(cmd);
            }
        }
    });

    if let Some(cmd) = clicked {
        logd!("UI: Command clicked → {}", cmd.name());
        actions::command(app, cmd);
    }
}
