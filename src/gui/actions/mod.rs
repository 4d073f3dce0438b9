// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load, command, copy, save, table}.

mod command;
mod copy;
mod load;
mod save;
mod table;

pub use command::command;
pub use copy::copy;
pub use load::load;
pub use save::save;
pub use table::table;
