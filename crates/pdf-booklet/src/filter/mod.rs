//! Named stream filters
//!
//! Byte-buffer-in, byte-buffer-out compression used by the surrounding
//! document toolkit. A filter is selected by its PDF name and configured from
//! an integer parameter map (the stream's `DecodeParms`).

mod flate;
mod lzw;

pub use flate::{decode_flate, encode_flate};
pub use lzw::{decode_lzw, encode_lzw};

use crate::constants::{DEFAULT_EARLY_CHANGE, EARLY_CHANGE_PARAM, FLATE_FILTER, LZW_FILTER};
use crate::types::*;
use std::collections::HashMap;

/// Integer filter parameters keyed by PDF name (e.g. `EarlyChange`)
pub type FilterParams = HashMap<String, i64>;

/// A configured stream filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// LZWDecode; `early_change` widens codes one entry early
    Lzw { early_change: bool },
    /// FlateDecode (zlib)
    Flate,
}

impl Filter {
    /// Select and configure a filter by name
    pub fn from_name(name: &str, params: &FilterParams) -> Result<Self> {
        match name {
            LZW_FILTER => {
                reject_predictor(name, params)?;
                let early_change = match params
                    .get(EARLY_CHANGE_PARAM)
                    .copied()
                    .unwrap_or(DEFAULT_EARLY_CHANGE)
                {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(BookletError::Filter(format!(
                            "{EARLY_CHANGE_PARAM} must be 0 or 1, got {other}"
                        )));
                    }
                };
                Ok(Filter::Lzw { early_change })
            }
            FLATE_FILTER => {
                reject_predictor(name, params)?;
                Ok(Filter::Flate)
            }
            _ => Err(BookletError::UnsupportedFilter(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Filter::Lzw { .. } => LZW_FILTER,
            Filter::Flate => FLATE_FILTER,
        }
    }

    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        match *self {
            Filter::Lzw { early_change } => encode_lzw(data, early_change),
            Filter::Flate => encode_flate(data),
        }
    }

    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        match *self {
            Filter::Lzw { early_change } => decode_lzw(data, early_change),
            Filter::Flate => decode_flate(data),
        }
    }
}

/// Encode `data` with the named filter
pub fn encode(name: &str, params: &FilterParams, data: &[u8]) -> Result<Vec<u8>> {
    Filter::from_name(name, params)?.encode(data)
}

/// Decode `data` with the named filter
pub fn decode(name: &str, params: &FilterParams, data: &[u8]) -> Result<Vec<u8>> {
    Filter::from_name(name, params)?.decode(data)
}

// Predictors post-process image rows; none are implemented here.
fn reject_predictor(name: &str, params: &FilterParams) -> Result<()> {
    match params.get("Predictor") {
        Some(&predictor) if predictor > 1 => Err(BookletError::Filter(format!(
            "{name}: predictor {predictor} is not supported"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, i64)]) -> FilterParams {
        entries
            .iter()
            .map(|&(key, value)| (key.to_string(), value))
            .collect()
    }

    #[test]
    fn test_early_change_defaults_to_enabled() {
        let filter = Filter::from_name("LZWDecode", &FilterParams::new()).unwrap();
        assert_eq!(filter, Filter::Lzw { early_change: true });
    }

    #[test]
    fn test_early_change_disabled() {
        let filter = Filter::from_name("LZWDecode", &params(&[("EarlyChange", 0)])).unwrap();
        assert_eq!(filter, Filter::Lzw { early_change: false });
    }

    #[test]
    fn test_early_change_out_of_range() {
        let err = Filter::from_name("LZWDecode", &params(&[("EarlyChange", 2)])).unwrap_err();
        assert!(matches!(err, BookletError::Filter(_)));
    }

    #[test]
    fn test_unknown_filter() {
        let err = Filter::from_name("DCTDecode", &FilterParams::new()).unwrap_err();
        assert!(matches!(err, BookletError::UnsupportedFilter(name) if name == "DCTDecode"));
    }

    #[test]
    fn test_predictor_rejected() {
        let err = Filter::from_name("FlateDecode", &params(&[("Predictor", 12)])).unwrap_err();
        assert!(err.to_string().contains("predictor 12"));
        assert!(Filter::from_name("FlateDecode", &params(&[("Predictor", 1)])).is_ok());
    }

    #[test]
    fn test_named_round_trip() {
        let data = b"the quick brown fox jumps over the lazy dog, the quick brown fox";
        for name in ["LZWDecode", "FlateDecode"] {
            let encoded = encode(name, &FilterParams::new(), data).unwrap();
            let decoded = decode(name, &FilterParams::new(), &encoded).unwrap();
            assert_eq!(decoded, data, "{name}");
        }
    }
}
