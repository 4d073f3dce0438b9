// src/gui/actions/load.rs
use crate::{file, gui::app::App, host::BlockHost, scrape, specs::Accordion};

pub fn load(app: &mut App) {
    let Some(path) = file::path_from_text(&app.state.gui.input_text) else {
        app.status("Enter the path of a saved event page");
        logd!("Load: Clicked with an empty path");
        return;
    };

    match Accordion::load(&path) {
        Ok(page) => {
            let open = scrape::open_blocks(&page).len();
            let msg = format!("Loaded {} ({} blocks, {} open)", path.display(), page.block_count(), open);
            app.page = Some(page);
            app.state.options.input = Some(path);
            app.status(msg);
        }
        Err(e) => {
            loge!("Load: {}: {}", path.display(), e);
            app.status(format!("Load error: {e}"));
        }
    }
}
