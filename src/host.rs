// src/host.rs
//! The document the commands run against.
//!
//! Commands never touch HTML directly. They see a list of collapsible blocks
//! (header text + open flag), can toggle a block, and can ask for the tables
//! inside a block's content region in one of two shapes. `specs::Accordion`
//! implements this over a saved page; tests use an in-memory fake.

use crate::error::Result;

/// One item icon in a drop table: label from the icon's title, stack size from its text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCell {
    pub label: String,
    pub stack: String,
}

impl ItemCell {
    pub fn new(label: impl Into<String>, stack: impl Into<String>) -> Self {
        Self { label: label.into(), stack: stack.into() }
    }
}

/// A farming node: name, item icons, and chance texts (index-aligned with `items`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeTable {
    pub name: String,
    pub items: Vec<ItemCell>,
    pub chances: Vec<String>,
}

/// A project table: header line, `/`-separated materials and counts. All raw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectTable {
    pub header: String,
    pub materials: String,
    pub counts: String,
}

pub trait BlockHost {
    /// Raw header text of every block, in document order.
    fn block_headers(&self) -> Vec<String>;

    fn is_open(&self, ix: usize) -> bool;

    /// Flip one block, as if its header were clicked.
    fn toggle(&mut self, ix: usize);

    /// Farming tables inside block `ix`, in document order.
    fn node_tables(&self, ix: usize) -> Result<Vec<NodeTable>>;

    /// Project tables inside block `ix`, in document order.
    fn project_tables(&self, ix: usize) -> Result<Vec<ProjectTable>>;

    fn block_count(&self) -> usize {
        self.block_headers().len()
    }
}
