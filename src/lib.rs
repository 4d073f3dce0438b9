// src/lib.rs

#[macro_use]
pub mod macros;

pub mod bonus;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod host;
pub mod log;
pub mod output;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod translate;
pub mod tsv;

pub use error::{Error, Result};
