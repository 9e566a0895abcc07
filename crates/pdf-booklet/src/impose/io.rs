//! Document adapter: read the page-number set of a PDF

use crate::types::*;
use lopdf::Document;
use std::collections::BTreeSet;
use std::path::Path;

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!("loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// All page numbers of a document (1-based, ascending)
pub fn page_numbers(doc: &Document) -> BTreeSet<u32> {
    doc.get_pages().keys().copied().collect()
}

/// Load a PDF and return its page numbers
pub async fn load_page_numbers(path: impl AsRef<Path>) -> Result<BTreeSet<u32>> {
    let doc = load_pdf(path).await?;
    Ok(page_numbers(&doc))
}
