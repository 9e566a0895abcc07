use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid page number: {0} (pages start at 1)")]
    InvalidPage(u32),
    #[error("Filter error: {0}")]
    Filter(String),
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes accepted in the `papersize` descriptor token:
/// the ISO A, B and C series (0 to 10) plus the US sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    A7,
    A8,
    A9,
    A10,
    B0,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    B8,
    B9,
    B10,
    C0,
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    C10,
    Letter,
    Legal,
    Ledger,
    Tabloid,
}

impl PaperSize {
    const ALL: [PaperSize; 37] = [
        PaperSize::A0,
        PaperSize::A1,
        PaperSize::A2,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::A6,
        PaperSize::A7,
        PaperSize::A8,
        PaperSize::A9,
        PaperSize::A10,
        PaperSize::B0,
        PaperSize::B1,
        PaperSize::B2,
        PaperSize::B3,
        PaperSize::B4,
        PaperSize::B5,
        PaperSize::B6,
        PaperSize::B7,
        PaperSize::B8,
        PaperSize::B9,
        PaperSize::B10,
        PaperSize::C0,
        PaperSize::C1,
        PaperSize::C2,
        PaperSize::C3,
        PaperSize::C4,
        PaperSize::C5,
        PaperSize::C6,
        PaperSize::C7,
        PaperSize::C8,
        PaperSize::C9,
        PaperSize::C10,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Ledger,
        PaperSize::Tabloid,
    ];

    /// Name and portrait dimensions (width, height) in mm
    fn info(self) -> (&'static str, f32, f32) {
        match self {
            PaperSize::A0 => ("A0", 841.0, 1189.0),
            PaperSize::A1 => ("A1", 594.0, 841.0),
            PaperSize::A2 => ("A2", 420.0, 594.0),
            PaperSize::A3 => ("A3", 297.0, 420.0),
            PaperSize::A4 => ("A4", 210.0, 297.0),
            PaperSize::A5 => ("A5", 148.0, 210.0),
            PaperSize::A6 => ("A6", 105.0, 148.0),
            PaperSize::A7 => ("A7", 74.0, 105.0),
            PaperSize::A8 => ("A8", 52.0, 74.0),
            PaperSize::A9 => ("A9", 37.0, 52.0),
            PaperSize::A10 => ("A10", 26.0, 37.0),
            PaperSize::B0 => ("B0", 1000.0, 1414.0),
            PaperSize::B1 => ("B1", 707.0, 1000.0),
            PaperSize::B2 => ("B2", 500.0, 707.0),
            PaperSize::B3 => ("B3", 353.0, 500.0),
            PaperSize::B4 => ("B4", 250.0, 353.0),
            PaperSize::B5 => ("B5", 176.0, 250.0),
            PaperSize::B6 => ("B6", 125.0, 176.0),
            PaperSize::B7 => ("B7", 88.0, 125.0),
            PaperSize::B8 => ("B8", 62.0, 88.0),
            PaperSize::B9 => ("B9", 44.0, 62.0),
            PaperSize::B10 => ("B10", 31.0, 44.0),
            PaperSize::C0 => ("C0", 917.0, 1297.0),
            PaperSize::C1 => ("C1", 648.0, 917.0),
            PaperSize::C2 => ("C2", 458.0, 648.0),
            PaperSize::C3 => ("C3", 324.0, 458.0),
            PaperSize::C4 => ("C4", 229.0, 324.0),
            PaperSize::C5 => ("C5", 162.0, 229.0),
            PaperSize::C6 => ("C6", 114.0, 162.0),
            PaperSize::C7 => ("C7", 81.0, 114.0),
            PaperSize::C8 => ("C8", 57.0, 81.0),
            PaperSize::C9 => ("C9", 40.0, 57.0),
            PaperSize::C10 => ("C10", 28.0, 40.0),
            PaperSize::Letter => ("Letter", 215.9, 279.4),
            PaperSize::Legal => ("Legal", 215.9, 355.6),
            PaperSize::Ledger => ("Ledger", 279.4, 431.8),
            PaperSize::Tabloid => ("Tabloid", 279.4, 431.8),
        }
    }

    /// Get base dimensions (always portrait: width < height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        let (_, width, height) = self.info();
        (width, height)
    }

    pub fn name(self) -> &'static str {
        self.info().0
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = BookletError;

    fn from_str(s: &str) -> Result<Self> {
        PaperSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BookletError::InvalidConfig(format!("unknown paper size: {s}")))
    }
}

/// A paper size together with the orientation selected by its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperFormat {
    pub size: PaperSize,
    pub orientation: Orientation,
}

impl PaperFormat {
    pub fn new(size: PaperSize, orientation: Orientation) -> Self {
        Self { size, orientation }
    }

    /// Sheet dimensions (width, height) in mm with the orientation applied
    pub fn dimensions_mm(&self) -> (f32, f32) {
        let (w, h) = self.size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

impl FromStr for PaperFormat {
    type Err = BookletError;

    /// Parse `A5`, `A5L` (landscape) or `A5P` (explicit portrait).
    ///
    /// A full size name wins over a suffix, so `Legal` is never read as `Lega` + `l`.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if let Ok(size) = token.parse::<PaperSize>() {
            return Ok(Self::new(size, Orientation::Portrait));
        }

        let unknown = || BookletError::InvalidConfig(format!("unknown paper size: {token}"));
        let Some((idx, suffix)) = token.char_indices().last() else {
            return Err(unknown());
        };
        let orientation = match suffix.to_ascii_uppercase() {
            'L' => Orientation::Landscape,
            'P' => Orientation::Portrait,
            _ => return Err(unknown()),
        };
        let size = token[..idx].parse().map_err(|_| unknown())?;
        Ok(Self::new(size, orientation))
    }
}

/// Which sheet edge the duplex printer flips along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingEdge {
    #[default]
    Long,
    Short,
}

impl FromStr for BindingEdge {
    type Err = BookletError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "long" => Ok(BindingEdge::Long),
            "short" => Ok(BindingEdge::Short),
            _ => Err(BookletError::InvalidConfig(format!(
                "unknown binding: {s} (expected long or short)"
            ))),
        }
    }
}

/// The `btype` descriptor token, before the fold axis is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookletType {
    #[default]
    Booklet,
    BookletAdvanced,
    PerfectBound,
}

impl FromStr for BookletType {
    type Err = BookletError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "booklet" => Ok(BookletType::Booklet),
            "bookletadvanced" => Ok(BookletType::BookletAdvanced),
            "perfectbound" => Ok(BookletType::PerfectBound),
            _ => Err(BookletError::InvalidConfig(format!(
                "unknown btype: {s} (expected booklet, bookletadvanced or perfectbound)"
            ))),
        }
    }
}

/// Imposition style after resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BookletStyle {
    /// Saddle-stitch booklet folded along the side edge
    SimpleSidefold,
    /// Saddle-stitch booklet folded along the top edge
    SimpleTopfold,
    /// Sheets are cut once and the lower stack is nested inside the upper one
    Advanced,
    /// Cut, stacked leaves glued at a flat spine
    PerfectBound,
}

impl BookletStyle {
    /// Styles whose sheets nest inside each other, so one signature may span many sheets
    pub fn is_nestable(self) -> bool {
        !matches!(self, BookletStyle::PerfectBound)
    }
}

/// Logical pages per sheet side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub enum NUp {
    Two,
    Four,
    Six,
    Eight,
}

impl NUp {
    pub fn count(self) -> usize {
        match self {
            NUp::Two => 2,
            NUp::Four => 4,
            NUp::Six => 6,
            NUp::Eight => 8,
        }
    }
}

impl TryFrom<usize> for NUp {
    type Error = BookletError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            2 => Ok(NUp::Two),
            4 => Ok(NUp::Four),
            6 => Ok(NUp::Six),
            8 => Ok(NUp::Eight),
            _ => Err(BookletError::InvalidConfig(format!(
                "unsupported n-up value: {value} (expected 2, 4, 6 or 8)"
            ))),
        }
    }
}

impl From<NUp> for usize {
    fn from(nup: NUp) -> Self {
        nup.count()
    }
}

impl fmt::Display for NUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// True when the booklet fold runs along the top edge of the output sheet.
///
/// Portrait sheets flipped on the short edge and landscape sheets flipped on the
/// long edge both turn over top-to-bottom, which puts the spine at the top.
pub fn is_top_fold(orientation: Orientation, binding: BindingEdge) -> bool {
    matches!(
        (orientation, binding),
        (Orientation::Portrait, BindingEdge::Short) | (Orientation::Landscape, BindingEdge::Long)
    )
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionStatistics {
    /// Number of requested pages
    pub source_pages: usize,
    /// Page count after padding to whole sheets
    pub padded_pages: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
    /// Total number of physical sheets
    pub output_sheets: usize,
    /// Output page count (front and back of each sheet)
    pub output_pages: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Sheets in each signature, outermost first
    pub sheets_per_signature: Vec<usize>,
}
