// src/specs/mod.rs
//! # Page readers
//!
//! Everything that knows *where things live in the saved HTML* sits here.
//!
//! ## What lives here
//! - [`Accordion`]: the page as a list of collapsible blocks (implements
//!   [`crate::host::BlockHost`]).
//! - `node`: one farming node table → [`crate::host::NodeTable`].
//! - `project`: one project table → [`crate::host::ProjectTable`].
//!
//! ## What does **not** live here
//! - Translation, number parsing, aggregation: see `scrape`.
//! - Output formatting: see `output` / `tsv`.
//!
//! ## Conventions
//! - Readers return raw text; translation happens in the aggregators.
//! - A missing element is an [`crate::error::Error::Schema`] naming what was
//!   expected and where. No partial tables are returned.
//! - Tests run offline against small hand-written fixtures.

pub mod accordion;
pub mod node;
pub mod project;

pub use accordion::Accordion;
pub use node::read_node;
pub use project::read_project;
