use crate::constants::{DEFAULT_FOLIO_SIZE, DEFAULT_PAPER_SIZE};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validated booklet configuration
///
/// Built once per invocation by [`resolve`] or [`ImpositionConfig::new`].
/// The page order depends on `nup`, `style`, `binding` and `orientation`;
/// `paper_size` is carried along for the component that places pages on the
/// sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImpositionConfig {
    pub nup: NUp,
    pub style: BookletStyle,
    pub binding: BindingEdge,
    pub orientation: Orientation,
    pub paper_size: PaperSize,
    /// Sheets per signature for multi-folio booklets (`None` = one signature)
    pub folio_size: Option<usize>,
}

impl ImpositionConfig {
    /// Build a configuration from already-parsed parts.
    ///
    /// The style is derived from `btype` and the fold axis implied by the
    /// paper orientation and binding edge.
    pub fn new(
        nup: NUp,
        btype: BookletType,
        binding: BindingEdge,
        paper: PaperFormat,
    ) -> Result<Self> {
        let style = match btype {
            BookletType::Booklet if is_top_fold(paper.orientation, binding) => {
                BookletStyle::SimpleTopfold
            }
            BookletType::Booklet => BookletStyle::SimpleSidefold,
            BookletType::BookletAdvanced => BookletStyle::Advanced,
            BookletType::PerfectBound => BookletStyle::PerfectBound,
        };

        let config = Self {
            nup,
            style,
            binding,
            orientation: paper.orientation,
            paper_size: paper.size,
            folio_size: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Split a nestable booklet into signatures of at most `sheets` sheets
    pub fn with_folio_size(self, sheets: usize) -> Result<Self> {
        let config = Self {
            folio_size: Some(sheets),
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub fn is_top_fold(&self) -> bool {
        is_top_fold(self.orientation, self.binding)
    }

    pub fn paper_format(&self) -> PaperFormat {
        PaperFormat::new(self.paper_size, self.orientation)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let supported = match self.style {
            BookletStyle::SimpleSidefold => {
                matches!(self.nup, NUp::Two | NUp::Four | NUp::Six | NUp::Eight)
            }
            BookletStyle::SimpleTopfold => matches!(self.nup, NUp::Two | NUp::Four),
            BookletStyle::Advanced => self.nup == NUp::Four,
            BookletStyle::PerfectBound => matches!(self.nup, NUp::Two | NUp::Four | NUp::Eight),
        };
        if !supported {
            return Err(BookletError::InvalidConfig(format!(
                "{:?} does not support {}-up",
                self.style, self.nup
            )));
        }

        // The fold axis is a physical consequence of orientation and binding,
        // so a saddle-stitch style must agree with it.
        match self.style {
            BookletStyle::SimpleSidefold if self.is_top_fold() => {
                return Err(BookletError::InvalidConfig(format!(
                    "{:?} paper bound on the {:?} edge folds along the top; use SimpleTopfold",
                    self.orientation, self.binding
                )));
            }
            BookletStyle::SimpleTopfold if !self.is_top_fold() => {
                return Err(BookletError::InvalidConfig(format!(
                    "{:?} paper bound on the {:?} edge folds along the side; use SimpleSidefold",
                    self.orientation, self.binding
                )));
            }
            BookletStyle::Advanced if self.is_top_fold() => {
                return Err(BookletError::InvalidConfig(
                    "bookletadvanced does not support top-fold binding \
                     (portrait short edge or landscape long edge)"
                        .to_string(),
                ));
            }
            _ => {}
        }

        match (self.style, self.folio_size) {
            (_, Some(0)) => Err(BookletError::InvalidConfig(
                "foliosize must be at least 1 sheet".to_string(),
            )),
            (BookletStyle::PerfectBound, Some(_)) => Err(BookletError::InvalidConfig(
                "multifolio does not apply to perfectbound (every sheet is its own signature)"
                    .to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// Resolve an n-up count and a descriptor such as
/// `"papersize:A5L, btype:booklet, binding:short"` into a configuration.
///
/// Keys: `papersize`, `btype`, `binding`, `multifolio`, `foliosize`.
/// Missing keys fall back to booklet, long-edge binding and `default_paper`
/// (A4 portrait when that is `None`). Anything unrecognized is an error.
pub fn resolve(
    nup: usize,
    descriptor: &str,
    default_paper: Option<PaperFormat>,
) -> Result<ImpositionConfig> {
    let nup = NUp::try_from(nup)?;
    let parsed = Descriptor::parse(descriptor)?;

    let paper = parsed
        .paper
        .or(default_paper)
        .unwrap_or(PaperFormat::new(DEFAULT_PAPER_SIZE, Orientation::Portrait));

    let folio_size = match (parsed.multifolio, parsed.folio_size) {
        (Some(true), size) => Some(size.unwrap_or(DEFAULT_FOLIO_SIZE)),
        (_, Some(_)) => {
            return Err(BookletError::InvalidConfig(
                "foliosize requires multifolio:on".to_string(),
            ));
        }
        _ => None,
    };

    let mut config = ImpositionConfig::new(
        nup,
        parsed.btype.unwrap_or_default(),
        parsed.binding.unwrap_or_default(),
        paper,
    )?;
    if let Some(sheets) = folio_size {
        config = config.with_folio_size(sheets)?;
    }

    log::debug!("resolved booklet descriptor {descriptor:?} -> {config:?}");
    Ok(config)
}

/// Raw descriptor values, each key given at most once
#[derive(Debug, Default)]
struct Descriptor {
    paper: Option<PaperFormat>,
    btype: Option<BookletType>,
    binding: Option<BindingEdge>,
    multifolio: Option<bool>,
    folio_size: Option<usize>,
}

impl Descriptor {
    fn parse(descriptor: &str) -> Result<Self> {
        let mut parsed = Descriptor::default();

        for entry in descriptor.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let (key, value) = entry.split_once(':').ok_or_else(|| {
                BookletError::InvalidConfig(format!("expected key:value, got {entry:?}"))
            })?;
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim();
            if value.is_empty() {
                return Err(BookletError::InvalidConfig(format!(
                    "missing value for {key}"
                )));
            }

            match key.as_str() {
                "papersize" => set_once(&mut parsed.paper, value.parse()?, &key)?,
                "btype" => set_once(&mut parsed.btype, value.parse()?, &key)?,
                "binding" => set_once(&mut parsed.binding, value.parse()?, &key)?,
                "multifolio" => set_once(&mut parsed.multifolio, parse_switch(value)?, &key)?,
                "foliosize" => set_once(&mut parsed.folio_size, parse_folio_size(value)?, &key)?,
                _ => {
                    return Err(BookletError::InvalidConfig(format!(
                        "unknown descriptor key: {key}"
                    )));
                }
            }
        }

        Ok(parsed)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &str) -> Result<()> {
    if slot.is_some() {
        return Err(BookletError::InvalidConfig(format!(
            "{key} given more than once"
        )));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        _ => Err(BookletError::InvalidConfig(format!(
            "expected on or off, got {value}"
        ))),
    }
}

fn parse_folio_size(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(sheets) if sheets > 0 => Ok(sheets),
        _ => Err(BookletError::InvalidConfig(format!(
            "foliosize must be a positive number of sheets, got {value}"
        ))),
    }
}
