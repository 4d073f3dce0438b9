// src/gui/components/top_bar.rs

use eframe::egui;
use crate::{
    config::options::OutputFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Input page ---
    ui.horizontal(|ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.input_text)
                .hint_text("saved event page (.html)")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            actions::load(app);
        }
    });

    // --- Translation table ---
    ui.horizontal(|ui| {
        ui.label("Table:");
        ui.add(
            egui::TextEdit::singleline(&mut app.table_text)
                .hint_text("built-in (or a JSON [source, key] list)")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        if ui.button("Apply").clicked() {
            actions::table(app);
        }
    });

    // --- Format + Include headers ---
    ui.horizontal(|ui| {
        let output = &mut app.state.options.output;
        let prev_fmt = output.format;

        ui.label("Format:");
        ui.selectable_value(&mut output.format, OutputFormat::Json, OutputFormat::Json.label());
        ui.selectable_value(&mut output.format, OutputFormat::Tsv, OutputFormat::Tsv.label());

        if output.format != prev_fmt {
            logf!("UI: Output format → {:?}", output.format);
            if !app.out_path_dirty {
                app.out_path_text = output.out_path().to_string_lossy().into_owned();
            }
        }

        // Headers only mean something for TSV
        ui.add_enabled_ui(output.format == OutputFormat::Tsv, |ui| {
            let before = output.include_headers;
            ui.checkbox(&mut output.include_headers, "Include headers");
            if output.include_headers != before {
                logf!("UI: Include_headers → {}", output.include_headers);
            }
        });
    });

    // --- Output path + Copy / Save ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Save").clicked() {
            actions::save(app);
        }

        ui.label(format!("Status: {}", app.status));
    });
}
