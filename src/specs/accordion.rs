// src/specs/accordion.rs
//! A saved event page as a [`BlockHost`].
//!
//! Blocks are the `dt` headers directly under `.accordion`; each block's
//! content is the next element sibling of its header (the `dd`). A header
//! carrying the `open` class is open when the page is loaded. After that the
//! open flags live here and toggling only flips them; the HTML is never
//! rewritten.

use std::{fs, path::Path};

use scraper::{ElementRef, Html};

use crate::config::consts::{ACCORDION_HEADERS, OPEN_CLASS};
use crate::core::html::{has_class, next_element_sibling, require, selector, text_of};
use crate::error::{Error, Result};
use crate::host::{BlockHost, NodeTable, ProjectTable};

use super::{node::read_node, project::read_project};

pub struct Accordion {
    html: Html,
    headers: Vec<String>,
    open: Vec<bool>,
}

impl Accordion {
    pub fn parse(text: &str) -> Result<Self> {
        let html = Html::parse_document(text);
        let dt = selector(ACCORDION_HEADERS)?;

        let (headers, open): (Vec<String>, Vec<bool>) = html
            .select(&dt)
            .map(|h| (text_of(h), has_class(h, OPEN_CLASS)))
            .unzip();

        if headers.is_empty() {
            return Err(Error::Schema(s!("no accordion blocks on page")));
        }
        logd!("Page: {} blocks, {} open", headers.len(), open.iter().filter(|o| **o).count());

        Ok(Self { html, headers, open })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let page = Self::parse(&text)?;
        logf!("Page: loaded {} ({} blocks)", path.display(), page.headers.len());
        Ok(page)
    }

    /// Content region of block `ix`.
    fn content(&self, ix: usize) -> Result<ElementRef<'_>> {
        let dt = selector(ACCORDION_HEADERS)?;
        let header = require(self.html.select(&dt).nth(ix), &format!("block header #{ix}"))?;
        require(next_element_sibling(header), &format!("content of block {:?}", self.headers[ix]))
    }
}

impl BlockHost for Accordion {
    fn block_headers(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn is_open(&self, ix: usize) -> bool {
        self.open.get(ix).copied().unwrap_or(false)
    }

    fn toggle(&mut self, ix: usize) {
        if let Some(o) = self.open.get_mut(ix) {
            *o = !*o;
        }
    }

    fn node_tables(&self, ix: usize) -> Result<Vec<NodeTable>> {
        self.content(ix)?.child_elements().map(read_node).collect()
    }

    fn project_tables(&self, ix: usize) -> Result<Vec<ProjectTable>> {
        self.content(ix)?.child_elements().map(read_project).collect()
    }

    fn block_count(&self) -> usize {
        self.headers.len()
    }
}
