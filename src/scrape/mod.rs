// src/scrape/mod.rs
//
// Aggregation over a BlockHost: block selection, farming, projects.
// Page layout knowledge stays in `specs`; these only see host tables.

mod blocks;
mod farming;
mod projects;

pub use blocks::{collapse_all, open_blocks, set_block_open_state};
pub use farming::{parse_farming, parse_node};
pub use projects::{parse_projects, parse_projects_in, project_cost, project_name};
