//! Layout data types for booklet ordering
//!
//! These types carry the result of the ordering pipeline to the component
//! that places page images on the output sheet.

use std::fmt;

/// What a print slot shows: a requested page or a padding blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotSource {
    /// Logical page number (1-based)
    Page(u32),
    /// Blank placeholder added to fill the last sheet
    Blank,
}

impl SlotSource {
    pub fn page(self) -> Option<u32> {
        match self {
            SlotSource::Page(number) => Some(number),
            SlotSource::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        self == SlotSource::Blank
    }
}

impl fmt::Display for SlotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotSource::Page(number) => write!(f, "{number}"),
            SlotSource::Blank => f.write_str("_"),
        }
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One physical print position
///
/// Slots are produced in final print order: signature by signature, sheet by
/// sheet, front face before back face, and row-major within a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlot {
    pub source: SlotSource,
    /// Index of the signature this slot belongs to (0 = outermost/first)
    pub signature_index: usize,
    /// Sheet index within the signature (0 = outermost sheet)
    pub sheet_index: usize,
    pub face: SheetSide,
    /// Cell on the face grid as printed
    pub grid_pos: GridPosition,
}

impl PageSlot {
    pub fn page(&self) -> Option<u32> {
        self.source.page()
    }
}
