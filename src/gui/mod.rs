// src/gui/mod.rs
pub mod app;
mod actions;
mod components;

pub use app::{run, App};
