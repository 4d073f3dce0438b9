// tests/common/mod.rs
//
// Offline fixtures: saved-page HTML built from strings, and an in-memory host.
#![allow(dead_code)]

use kz_parse::host::{BlockHost, NodeTable, ProjectTable};
use kz_parse::Result;

/// `(label, stack, chance)` per item icon.
pub fn node_table(name: &str, items: &[(&str, &str, &str)]) -> String {
    let icons: String = items
        .iter()
        .map(|(label, stack, _)| format!(r#"<td><div class="itemST" title="{label}">{stack}</div></td>"#))
        .collect();
    let chances: String = items.iter().map(|(_, _, c)| format!("<td>{c}</td>")).collect();
    format!(
        "<table><tr><th>{name}</th><th>AP 20</th></tr>\
         <tr><td>敵</td></tr>\
         <tr><td colspan=\"2\"><table><tr>{icons}</tr><tr>{chances}</tr></table></td></tr></table>"
    )
}

pub fn project_table(header: &str, materials: &str, counts: &str) -> String {
    format!(
        "<table><tr><td>{header}</td></tr><tr><td>{materials}</td></tr><tr><td>{counts}</td></tr></table>"
    )
}

/// `(header, open, content)` per block.
pub fn page(blocks: &[(&str, bool, String)]) -> String {
    let body: String = blocks
        .iter()
        .map(|(h, open, content)| {
            let class = if *open { r#" class="open""# } else { "" };
            format!("<dt{class}>{h}</dt><dd>{content}</dd>")
        })
        .collect();
    format!(r#"<html><body><h1>Event</h1><dl class="accordion">{body}</dl></body></html>"#)
}

#[derive(Default)]
pub struct FakeBlock {
    pub header: String,
    pub open: bool,
    pub nodes: Vec<NodeTable>,
    pub projects: Vec<ProjectTable>,
}

impl FakeBlock {
    pub fn new(header: &str, open: bool) -> Self {
        Self { header: header.into(), open, ..Default::default() }
    }
}

/// Records every toggle so tests can check which blocks were clicked.
#[derive(Default)]
pub struct FakeHost {
    pub blocks: Vec<FakeBlock>,
    pub clicks: Vec<usize>,
}

impl FakeHost {
    pub fn new(blocks: Vec<FakeBlock>) -> Self {
        Self { blocks, clicks: Vec::new() }
    }

    pub fn open_flags(&self) -> Vec<bool> {
        self.blocks.iter().map(|b| b.open).collect()
    }
}

impl BlockHost for FakeHost {
    fn block_headers(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.header.clone()).collect()
    }

    fn is_open(&self, ix: usize) -> bool {
        self.blocks[ix].open
    }

    fn toggle(&mut self, ix: usize) {
        self.blocks[ix].open = !self.blocks[ix].open;
        self.clicks.push(ix);
    }

    fn node_tables(&self, ix: usize) -> Result<Vec<NodeTable>> {
        Ok(self.blocks[ix].nodes.clone())
    }

    fn project_tables(&self, ix: usize) -> Result<Vec<ProjectTable>> {
        Ok(self.blocks[ix].projects.clone())
    }
}
