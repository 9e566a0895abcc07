//! Final slot sequencing

use crate::layout::PageSlot;

/// Concatenate composed signatures in signature order.
///
/// Earlier signatures are printed first and sit outside later ones, so no
/// slot ever moves across a signature boundary.
pub fn assemble(composed: Vec<Vec<PageSlot>>) -> Vec<PageSlot> {
    composed.into_iter().flatten().collect()
}

/// Split a print-ordered slot sequence into printed faces (one output page each)
pub fn faces(slots: &[PageSlot]) -> Vec<&[PageSlot]> {
    slots
        .chunk_by(|a, b| {
            a.signature_index == b.signature_index
                && a.sheet_index == b.sheet_index
                && a.face == b.face
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridPosition, SheetSide, SlotSource};

    fn slot(page: u32, signature_index: usize, face: SheetSide) -> PageSlot {
        PageSlot {
            source: SlotSource::Page(page),
            signature_index,
            sheet_index: 0,
            face,
            grid_pos: GridPosition::new(0, 0),
        }
    }

    #[test]
    fn test_assemble_keeps_signature_order() {
        let first = vec![slot(1, 0, SheetSide::Front), slot(2, 0, SheetSide::Back)];
        let second = vec![slot(3, 1, SheetSide::Front), slot(4, 1, SheetSide::Back)];
        let pages: Vec<_> = assemble(vec![first, second])
            .iter()
            .filter_map(PageSlot::page)
            .collect();
        assert_eq!(pages, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_faces_split_on_face_and_signature() {
        let slots = vec![
            slot(1, 0, SheetSide::Front),
            slot(3, 0, SheetSide::Front),
            slot(2, 0, SheetSide::Back),
            slot(4, 0, SheetSide::Back),
            slot(5, 1, SheetSide::Front),
        ];
        let grouped = faces(&slots);
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].len(), 2);
        assert_eq!(grouped[2][0].page(), Some(5));
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(Vec::new()).is_empty());
    }
}
