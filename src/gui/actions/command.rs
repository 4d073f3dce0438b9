// src/gui/actions/command.rs
use crate::{gui::app::App, output, runner::{self, Command}};

/// Run one command against the loaded page. On failure the output area keeps
/// its previous text and the error goes to the status line.
pub fn command(app: &mut App, cmd: Command) {
    let Some(page) = app.page.as_mut() else {
        app.status("No page loaded");
        logd!("Command: {} clicked without a page", cmd.label());
        return;
    };

    let result = runner::run(cmd, page, &app.translator)
        .and_then(|outcome| {
            let text = output::render(&outcome, &app.state.options.output)?;
            Ok((outcome, text))
        });

    match result {
        Ok((outcome, Some(text))) => {
            app.output = text;
            app.status(format!("{}: {} entries", cmd.label(), outcome.len()));
        }
        Ok((_, None)) => app.status(format!("{}: done", cmd.label())),
        Err(e) => app.status(format!("{} failed: {e}", cmd.label())),
    }
}
