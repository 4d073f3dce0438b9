// src/output.rs
// Formatting of command results for the output area / stdout / files.

use serde::Serialize;

use crate::bonus::Evaluation;
use crate::config::options::{OutputFormat, OutputOptions};
use crate::data::Outcome;
use crate::error::Result;
use crate::tsv;

/// Pretty JSON, two-space indent, keys in insertion order.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Text for the output sink, or `None` when the command leaves it untouched.
pub fn render(outcome: &Outcome, opts: &OutputOptions) -> Result<Option<String>> {
    let text = match (outcome, opts.format) {
        (Outcome::Collapsed(_), _) => return Ok(None),
        (Outcome::Farming(r), OutputFormat::Json) => to_json(r)?,
        (Outcome::Projects(r), OutputFormat::Json) => to_json(r)?,
        (Outcome::Farming(r), OutputFormat::Tsv) => tsv::farming_to_string(r, opts.include_headers),
        (Outcome::Projects(r), OutputFormat::Tsv) => tsv::projects_to_string(r, opts.include_headers),
    };
    Ok(Some(text))
}

/// Expected yields after bonuses, in the chosen format.
pub fn render_yields(eval: &Evaluation, opts: &OutputOptions) -> Result<String> {
    match opts.format {
        OutputFormat::Json => to_json(eval),
        OutputFormat::Tsv => Ok(tsv::yields_to_string(eval, opts.include_headers)),
    }
}
