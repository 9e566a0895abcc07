//! Signature planning
//!
//! A signature is the group of sheets that is folded and bound as one unit.
//! Saddle-stitch booklets normally nest every sheet into a single signature;
//! perfect-bound sheets and multi-folio booklets are split into fixed-size
//! windows of the padded page list.

use super::{SignatureCapacity, SlotSource};

/// An ordered window of consecutive padded pages bound together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Position in the output (0 = printed and bound first)
    pub index: usize,
    /// Pages in ascending reading order, blanks last
    pub pages: Vec<SlotSource>,
}

impl Signature {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn sheet_count(&self, sheet_capacity: usize) -> usize {
        self.pages.len() / sheet_capacity
    }
}

/// Split the padded page list into signatures, first window first.
///
/// With a fixed capacity every window is full except possibly the last one of
/// a multi-folio booklet, which still holds whole sheets because the input is
/// padded to whole sheets.
pub fn partition(padded: Vec<SlotSource>, capacity: SignatureCapacity) -> Vec<Signature> {
    if padded.is_empty() {
        return Vec::new();
    }

    match capacity {
        SignatureCapacity::Unbounded => vec![Signature {
            index: 0,
            pages: padded,
        }],
        SignatureCapacity::Pages(size) => {
            debug_assert!(size > 0, "signature capacity must be positive");
            padded
                .chunks(size)
                .enumerate()
                .map(|(index, pages)| Signature {
                    index,
                    pages: pages.to_vec(),
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(count: u32) -> Vec<SlotSource> {
        (1..=count).map(SlotSource::Page).collect()
    }

    #[test]
    fn test_unbounded_is_single_signature() {
        let signatures = partition(pages(24), SignatureCapacity::Unbounded);
        assert_eq!(signatures.len(), 1);
        assert_eq!(signatures[0].index, 0);
        assert_eq!(signatures[0].len(), 24);
    }

    #[test]
    fn test_fixed_windows_in_order() {
        let signatures = partition(pages(16), SignatureCapacity::Pages(8));
        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[0].pages.first(), Some(&SlotSource::Page(1)));
        assert_eq!(signatures[1].pages.first(), Some(&SlotSource::Page(9)));
        assert_eq!(signatures[1].index, 1);
    }

    #[test]
    fn test_short_trailing_folio_keeps_whole_sheets() {
        // Three 4-page sheets with two sheets per folio
        let signatures = partition(pages(12), SignatureCapacity::Pages(8));
        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[0].sheet_count(4), 2);
        assert_eq!(signatures[1].sheet_count(4), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(partition(Vec::new(), SignatureCapacity::Unbounded).is_empty());
        assert!(partition(Vec::new(), SignatureCapacity::Pages(4)).is_empty());
    }
}
