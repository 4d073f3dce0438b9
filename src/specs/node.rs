// src/specs/node.rs
//! Reads one farming node table.
//!
//! Layout (browser-normalised, so `<tbody>` is always present):
//! ```text
//! <table><tbody>
//!   <tr><th>NODE NAME</th>…</tr>
//!   …
//!   <tr>…<table><tbody>                              ← last row: drop table
//!        <tr><td><div class="itemST" title="LABEL">STACK</div></td>…</tr>
//!        <tr><td>12.5%</td>…</tr>                    ← chances, same order
//!   </tbody></table></tr>
//! </tbody></table>
//! ```

use scraper::ElementRef;

use crate::config::consts::{ITEM_CELL, ITEM_LABEL_ATTR};
use crate::core::html::{attr, first_child, last_child, nth_child, raw_text, require, select_first, selector, text_of};
use crate::error::{Error, Result};
use crate::host::{ItemCell, NodeTable};

pub fn read_node(table: ElementRef<'_>) -> Result<NodeTable> {
    let th = selector("th")?;
    let tbody = selector("tbody")?;
    let item = selector(ITEM_CELL)?;

    let name = text_of(require(select_first(table, &th), "node name cell (th)")?);
    let ctx = |what: &str| format!("{what} in node {name:?}");

    let body = require(first_child(table), &ctx("table body"))?;
    let drop_row = require(last_child(body), &ctx("drop row"))?;
    let drop_body = require(select_first(drop_row, &tbody), &ctx("drop table"))?;
    let icons_row = require(first_child(drop_body), &ctx("item icon row"))?;
    let chances_row = require(nth_child(drop_body, 1), &ctx("chance row"))?;

    let mut items = Vec::new();
    for icon in icons_row.select(&item) {
        let label = attr(icon, ITEM_LABEL_ATTR)
            .ok_or_else(|| Error::Schema(ctx("item label (title)")))?;
        items.push(ItemCell::new(label, text_of(icon)));
    }

    let chances = chances_row.child_elements().map(raw_text).collect();

    Ok(NodeTable { name, items, chances })
}
