// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, options::TableSource, state::AppState},
    runner,
    specs::Accordion,
    translate::Translator,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Loaded page; its block open/closed flags are the only state shared between commands.
    pub page: Option<Accordion>,
    pub translator: Translator,
    /// Translation table path field; empty means built-in.
    pub table_text: String,

    // output text field UX (we map this <-> OutputOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    /// Output area. Replaced wholesale by each successful command.
    pub output: String,
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        let translator = match runner::load_translator(&state.options.table) {
            Ok(t) => t,
            Err(e) => {
                loge!("Init: translation table: {e}; using built-in");
                status = format!("Table error: {e} (using built-in)");
                Translator::builtin().clone()
            }
        };

        let table_text = match &state.options.table {
            TableSource::File(p) => p.to_string_lossy().into_owned(),
            TableSource::BuiltIn => s!(),
        };
        let out_path_text = state.options.output.out_path().to_string_lossy().into_owned();
        logf!("Init: {} translation rules", translator.len());

        Self {
            state,
            page: None,
            translator,
            table_text,
            out_path_text,
            out_path_dirty: false,
            output: s!(),
            status,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn has_page(&self) -> bool { self.page.is_some() }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::top_bar::draw(ui, self);
            ui.separator();
            components::command_buttons::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::SidePanel::left("blocks")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                components::block_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::output_area::draw(ui, self);
        });
    }
}
