// src/gui/components/block_panel.rs
//
// One row per accordion block: index, open flag, translated header.
// Ticking the box toggles the block on the loaded page.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, host::BlockHost};

struct Row {
    ix: usize,
    open: bool,
    raw: String,
    translated: String,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Blocks");

    let Some(page) = app.page.as_ref() else {
        ui.label("No page loaded");
        return;
    };

    let rows: Vec<Row> = page
        .block_headers()
        .into_iter()
        .enumerate()
        .map(|(ix, raw)| Row {
            ix,
            open: page.is_open(ix),
            translated: app.translator.translate(&raw),
            raw,
        })
        .collect();

    let mut toggled = Vec::new();
    let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(24.0))
        .column(Column::exact(40.0))
        .column(Column::remainder().clip(true))
        .header(row_h, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            header.col(|ui| { ui.strong("Open"); });
            header.col(|ui| { ui.strong("Block"); });
        })
        .body(|body| {
            body.rows(row_h, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.col(|ui| { ui.label(r.ix.to_string()); });
                row.col(|ui| {
                    let mut open = r.open;
                    if ui.checkbox(&mut open, "").changed() {
                        toggled.push(r.ix);
                    }
                });
                row.col(|ui| {
                    let resp = ui.label(RichText::new(&r.translated).monospace());
                    if r.translated != r.raw {
                        resp.on_hover_text(r.raw.as_str());
                    }
                });
            });
        });

    if let Some(page) = app.page.as_mut() {
        for ix in toggled {
            page.toggle(ix);
            logd!("UI: Block {} toggled → open={}", ix, page.is_open(ix));
        }
    }
}
