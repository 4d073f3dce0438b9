// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The page does not have the shape the readers expect.
    #[error("unexpected page layout: {0}")]
    Schema(String),

    /// A numeric cell that is present but does not read as a number.
    #[error("could not read {what} from {text:?}")]
    Number { what: &'static str, text: String },

    #[error("no page loaded")]
    NoDocument,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad translation pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
