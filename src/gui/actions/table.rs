// src/gui/actions/table.rs
use crate::{config::options::TableSource, file, gui::app::App, runner};

/// Switch the translation table to the typed file, or back to the built-in
/// one when the field is empty. A bad file keeps the current table.
pub fn table(app: &mut App) {
    let source = match file::path_from_text(&app.table_text) {
        Some(path) => TableSource::File(path),
        None => TableSource::BuiltIn,
    };

    match runner::load_translator(&source) {
        Ok(tr) => {
            let msg = match &source {
                TableSource::BuiltIn => format!("Built-in table ({} rules)", tr.len()),
                TableSource::File(p) => format!("Table {} ({} rules)", p.display(), tr.len()),
            };
            logf!("Table: {msg}");
            app.translator = tr;
            app.state.options.table = source;
            app.status(msg);
        }
        Err(e) => {
            loge!("Table: {e}");
            app.status(format!("Table error: {e}"));
        }
    }
}
