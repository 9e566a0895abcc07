//! Booklet ordering - arranging page numbers for duplex printing and binding
//!
//! This module orchestrates the ordering pipeline:
//! 1. Validate the configuration
//! 2. Pad the requested pages to whole sheets
//! 3. Split the padded list into signatures
//! 4. Compose each signature into print slots
//! 5. Concatenate the signatures in print order

mod compose;
mod io;
mod sequence;

pub use compose::compose;
pub use io::{load_page_numbers, load_pdf, page_numbers};
pub use sequence::{assemble, faces};

use crate::config::ImpositionConfig;
use crate::layout::{PageSlot, pad, partition, sheet_capacity, signature_capacity};
use crate::types::*;
use std::collections::BTreeSet;

/// Main ordering function
///
/// Returns one slot per physical print position in final print order. An
/// empty page set yields an empty sequence.
pub fn impose(
    pages: impl IntoIterator<Item = u32>,
    config: &ImpositionConfig,
) -> Result<Vec<PageSlot>> {
    config.validate()?;

    let pages = collect_pages(pages)?;
    if pages.is_empty() {
        log::debug!("no pages requested, nothing to impose");
        return Ok(Vec::new());
    }

    let padded = pad(&pages, sheet_capacity(config.nup));
    log::debug!(
        "imposing {} pages ({} after padding) as {:?} {}-up",
        pages.len(),
        padded.len(),
        config.style,
        config.nup
    );

    let signatures = partition(padded, signature_capacity(config));
    let composed = signatures
        .iter()
        .map(|signature| compose(signature, config))
        .collect();

    Ok(assemble(composed))
}

/// Flat page order, `None` marking blank slots
pub fn page_order(
    pages: impl IntoIterator<Item = u32>,
    config: &ImpositionConfig,
) -> Result<Vec<Option<u32>>> {
    Ok(impose(pages, config)?.iter().map(PageSlot::page).collect())
}

fn collect_pages(pages: impl IntoIterator<Item = u32>) -> Result<BTreeSet<u32>> {
    let mut set = BTreeSet::new();
    for page in pages {
        if page == 0 {
            return Err(BookletError::InvalidPage(page));
        }
        set.insert(page);
    }
    Ok(set)
}
