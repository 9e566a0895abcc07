//! Sheet and signature capacity, blank padding

use super::SlotSource;
use crate::config::ImpositionConfig;
use crate::constants::SIDES_PER_SHEET;
use crate::types::NUp;
use std::collections::BTreeSet;

/// Pages printed on one physical sheet (front and back)
pub fn sheet_capacity(nup: NUp) -> usize {
    nup.count() * SIDES_PER_SHEET
}

/// How many pages one signature may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureCapacity {
    /// Every sheet nests into a single signature
    Unbounded,
    /// Signatures hold at most this many pages (always whole sheets)
    Pages(usize),
}

/// Signature capacity for a configuration.
///
/// Saddle-stitch styles nest any number of sheets unless multifolio caps the
/// signature at `folio_size` sheets. Perfect-bound sheets are cut and stacked,
/// so each sheet is its own signature.
pub fn signature_capacity(config: &ImpositionConfig) -> SignatureCapacity {
    let sheet = sheet_capacity(config.nup);
    if !config.style.is_nestable() {
        return SignatureCapacity::Pages(sheet);
    }
    match config.folio_size {
        Some(sheets) => SignatureCapacity::Pages(sheets.saturating_mul(sheet)),
        None => SignatureCapacity::Unbounded,
    }
}

/// Smallest multiple of `sheet_capacity` that holds `page_count` pages
pub fn padded_count(page_count: usize, sheet_capacity: usize) -> usize {
    page_count.div_ceil(sheet_capacity) * sheet_capacity
}

/// Lay out the requested pages in ascending order and append blanks up to a
/// whole number of sheets.
pub fn pad(pages: &BTreeSet<u32>, sheet_capacity: usize) -> Vec<SlotSource> {
    let total = padded_count(pages.len(), sheet_capacity);
    let mut padded = Vec::with_capacity(total);
    padded.extend(pages.iter().map(|&number| SlotSource::Page(number)));
    padded.resize(total, SlotSource::Blank);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve;

    #[test]
    fn test_sheet_capacity() {
        assert_eq!(sheet_capacity(NUp::Two), 4);
        assert_eq!(sheet_capacity(NUp::Four), 8);
        assert_eq!(sheet_capacity(NUp::Six), 12);
        assert_eq!(sheet_capacity(NUp::Eight), 16);
    }

    #[test]
    fn test_padded_count() {
        assert_eq!(padded_count(0, 8), 0);
        assert_eq!(padded_count(1, 8), 8);
        assert_eq!(padded_count(8, 8), 8);
        assert_eq!(padded_count(9, 8), 16);
        assert_eq!(padded_count(13, 12), 24);
    }

    #[test]
    fn test_pad_appends_blanks_after_highest_page() {
        let pages: BTreeSet<u32> = [9, 2, 5].into_iter().collect();
        let padded = pad(&pages, 4);
        assert_eq!(
            padded,
            vec![
                SlotSource::Page(2),
                SlotSource::Page(5),
                SlotSource::Page(9),
                SlotSource::Blank,
            ]
        );
    }

    #[test]
    fn test_pad_full_sheet_adds_nothing() {
        let pages: BTreeSet<u32> = (1..=8).collect();
        let padded = pad(&pages, 8);
        assert_eq!(padded.len(), 8);
        assert!(padded.iter().all(|slot| !slot.is_blank()));
    }

    #[test]
    fn test_signature_capacity_policy() {
        let booklet = resolve(4, "btype:booklet", None).unwrap();
        assert_eq!(signature_capacity(&booklet), SignatureCapacity::Unbounded);

        let advanced = resolve(4, "btype:bookletadvanced", None).unwrap();
        assert_eq!(signature_capacity(&advanced), SignatureCapacity::Unbounded);

        let perfect = resolve(4, "btype:perfectbound", None).unwrap();
        assert_eq!(signature_capacity(&perfect), SignatureCapacity::Pages(8));

        let folios = resolve(2, "multifolio:on, foliosize:3", None).unwrap();
        assert_eq!(signature_capacity(&folios), SignatureCapacity::Pages(12));
    }
}
