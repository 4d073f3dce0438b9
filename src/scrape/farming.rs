// src/scrape/farming.rs
// Drop tables → expected yield per node.

use crate::core::sanitize::{parse_chance, parse_int_prefix};
use crate::data::{FarmingResult, NodeDrops};
use crate::error::{Error, Result};
use crate::host::{BlockHost, NodeTable};
use crate::translate::Translator;

use super::blocks::{open_blocks, set_block_open_state};

/// Accumulate one node's drops, keeping only `filter` resources when given.
///
/// A missing or non-numeric stack size counts as one item per drop.
/// A chance cell that does not read as a percentage is an error, as is an
/// item icon without a matching chance cell.
pub fn parse_node(
    node: &NodeTable,
    tr: &Translator,
    filter: Option<&[&str]>,
) -> Result<NodeDrops> {
    let mut drops = NodeDrops::new();

    for (i, item) in node.items.iter().enumerate() {
        let key = tr.translate(&item.label);
        if let Some(f) = filter {
            if !f.contains(&key.as_str()) { continue; }
        }

        let per_stack = parse_int_prefix(&item.stack).unwrap_or(1);

        let text = node.chances.get(i).ok_or_else(|| {
            Error::Schema(format!("no chance cell for item {} in node {:?}", i + 1, node.name))
        })?;
        let chance = parse_chance(text)
            .ok_or_else(|| Error::Number { what: "drop chance", text: text.clone() })?;

        drops.entry(key).or_default().add(chance, per_stack);
    }

    Ok(drops)
}

/// Open the selected blocks, then read every node table in every open block.
/// Nodes whose translated names collide keep the later node's drops.
pub fn parse_farming<H: BlockHost + ?Sized>(
    host: &mut H,
    tr: &Translator,
    sections: &[&str],
    exclude: bool,
    resources: Option<&[&str]>,
) -> Result<FarmingResult> {
    set_block_open_state(host, tr, sections, exclude);

    let mut result = FarmingResult::new();
    for ix in open_blocks(host) {
        for node in host.node_tables(ix)? {
            let name = tr.translate(&node.name);
            let drops = parse_node(&node, tr, resources)?;
            if result.insert(name.clone(), drops).is_some() {
                logd!("Farming: duplicate node {name:?}, keeping the later one");
            }
        }
    }

    logf!("Farming: {} nodes", result.len());
    Ok(result)
}
