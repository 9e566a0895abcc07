//! FlateDecode filter

use crate::types::*;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::io::{Read, Write};

/// Decode zlib data
pub fn decode_flate(data: &[u8]) -> Result<Vec<u8>> {
    log::debug!("Flate decode begin: {} bytes in", data.len());

    let mut decoded = Vec::new();
    ZlibDecoder::new(data)
        .read_to_end(&mut decoded)
        .map_err(|e| BookletError::Filter(format!("FlateDecode failed: {e}")))?;

    log::debug!("Flate decode end: {} bytes out", decoded.len());
    Ok(decoded)
}

/// Encode data as a zlib stream
pub fn encode_flate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    let encoded = encoder.finish()?;
    log::debug!("Flate encode: {} bytes in, {} bytes out", data.len(), encoded.len());
    Ok(encoded)
}
