// src/scrape/blocks.rs
// Block selection: decide which blocks should be open and click the ones that differ.

use crate::host::BlockHost;
use crate::translate::Translator;

/// Open exactly the blocks whose translated header is (or, with `exclude`, is not) in `names`.
/// Blocks already in the wanted state are left alone. Returns how many were toggled.
pub fn set_block_open_state<H: BlockHost + ?Sized>(
    host: &mut H,
    tr: &Translator,
    names: &[&str],
    exclude: bool,
) -> usize {
    let mut toggled = 0;
    for (ix, header) in host.block_headers().iter().enumerate() {
        let name = tr.translate(header);
        let listed = names.contains(&name.as_str());
        let should_open = if exclude { !listed } else { listed };
        if should_open != host.is_open(ix) {
            host.toggle(ix);
            toggled += 1;
        }
    }
    logd!("Blocks: toggled {toggled} (exclude={exclude}, names={})", names.len());
    toggled
}

/// Indices of the blocks open right now, in document order.
pub fn open_blocks<H: BlockHost + ?Sized>(host: &H) -> Vec<usize> {
    (0..host.block_count()).filter(|&ix| host.is_open(ix)).collect()
}

/// Close every open block. Returns how many were closed.
pub fn collapse_all<H: BlockHost + ?Sized>(host: &mut H) -> usize {
    let open = open_blocks(host);
    for &ix in &open {
        host.toggle(ix);
    }
    logd!("Blocks: collapsed {}", open.len());
    open.len()
}
