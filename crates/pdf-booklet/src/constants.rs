//! Shared constants for booklet ordering
//!
//! This module centralizes the fixed numbers used by the descriptor
//! resolver, the padder and the stream filters.

use crate::types::PaperSize;

// =============================================================================
// Sheets
// =============================================================================

/// Printed sides of one physical sheet (front and back)
pub const SIDES_PER_SHEET: usize = 2;

// =============================================================================
// Descriptor Defaults
// =============================================================================

/// Paper size used when neither the descriptor nor the caller names one
pub const DEFAULT_PAPER_SIZE: PaperSize = PaperSize::A4;

/// Sheets per signature when `multifolio` is on and `foliosize` is absent
pub const DEFAULT_FOLIO_SIZE: usize = 8;

// =============================================================================
// Page Selection
// =============================================================================

/// Most pages a single page-range selection may name
pub const MAX_SELECTED_PAGES: usize = 100_000;

// =============================================================================
// Stream Filters
// =============================================================================

/// Filter name for LZW-compressed streams
pub const LZW_FILTER: &str = "LZWDecode";

/// Filter name for zlib/deflate-compressed streams
pub const FLATE_FILTER: &str = "FlateDecode";

/// Parameter key selecting the LZW code-width switch point
pub const EARLY_CHANGE_PARAM: &str = "EarlyChange";

/// `EarlyChange` value assumed when the parameter is absent
pub const DEFAULT_EARLY_CHANGE: i64 = 1;

/// Minimum LZW code size for byte-oriented data
pub const LZW_LITERAL_BITS: u8 = 8;
