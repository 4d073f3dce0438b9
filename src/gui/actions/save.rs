// src/gui/actions/save.rs
use crate::{file, gui::app::App};

pub fn save(app: &mut App) {
    // normalize out_path first
    if app.out_path_dirty {
        app.state.options.output.set_path(&app.out_path_text);
        logf!("Save: Out path set → {}", app.state.options.output.out_path().display());
        app.out_path_dirty = false;
    }

    if app.output.is_empty() {
        app.status("Nothing to save");
        logd!("Save: Clicked, but there's nothing to save");
        return;
    }

    let path = app.state.options.output.out_path();
    let msg = match file::write_output(&path, &app.output) {
        Ok(p) => format!("Saved {}", p.display()),
        Err(e) => {
            loge!("Save: Error: {}", e);
            format!("Save error: {e}")
        }
    };
    app.status(msg);
}
