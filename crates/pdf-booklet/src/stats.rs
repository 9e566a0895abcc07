use crate::config::ImpositionConfig;
use crate::constants::SIDES_PER_SHEET;
use crate::layout::{SignatureCapacity, padded_count, sheet_capacity, signature_capacity};
use crate::types::*;

/// Calculate statistics for ordering `page_count` pages without composing them
pub fn calculate_statistics(
    page_count: usize,
    config: &ImpositionConfig,
) -> Result<ImpositionStatistics> {
    config.validate()?;

    let per_sheet = sheet_capacity(config.nup);
    let padded_pages = padded_count(page_count, per_sheet);
    let output_sheets = padded_pages / per_sheet;

    let sheets_per_signature = match signature_capacity(config) {
        SignatureCapacity::Unbounded if output_sheets == 0 => Vec::new(),
        SignatureCapacity::Unbounded => vec![output_sheets],
        SignatureCapacity::Pages(pages) => {
            let per_signature = pages / per_sheet;
            (0..output_sheets)
                .step_by(per_signature)
                .map(|first| per_signature.min(output_sheets - first))
                .collect()
        }
    };

    Ok(ImpositionStatistics {
        source_pages: page_count,
        padded_pages,
        blank_pages_added: padded_pages - page_count,
        output_sheets,
        output_pages: output_sheets * SIDES_PER_SHEET,
        signatures: sheets_per_signature.len(),
        sheets_per_signature,
    })
}
