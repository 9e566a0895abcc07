//! LZWDecode filter

use crate::constants::LZW_LITERAL_BITS;
use crate::types::*;
use weezl::BitOrder;
use weezl::decode::Decoder;
use weezl::encode::Encoder;

/// Decode LZW data (MSB-first, 8-bit literals).
///
/// With `early_change` the code width grows one code before the table fills,
/// which is the PDF default.
pub fn decode_lzw(data: &[u8], early_change: bool) -> Result<Vec<u8>> {
    log::debug!("LZW decode begin: {} bytes in", data.len());

    let mut decoder = if early_change {
        Decoder::with_tiff_size_switch(BitOrder::Msb, LZW_LITERAL_BITS)
    } else {
        Decoder::new(BitOrder::Msb, LZW_LITERAL_BITS)
    };
    let decoded = decoder
        .decode(data)
        .map_err(|e| BookletError::Filter(format!("LZWDecode failed: {e:?}")))?;

    log::debug!("LZW decode end: {} bytes out", decoded.len());
    Ok(decoded)
}

/// Encode data with LZW, matching [`decode_lzw`]'s code-width behaviour
pub fn encode_lzw(data: &[u8], early_change: bool) -> Result<Vec<u8>> {
    log::debug!("LZW encode begin: {} bytes in", data.len());

    let mut encoder = if early_change {
        Encoder::with_tiff_size_switch(BitOrder::Msb, LZW_LITERAL_BITS)
    } else {
        Encoder::new(BitOrder::Msb, LZW_LITERAL_BITS)
    };
    let encoded = encoder
        .encode(data)
        .map_err(|e| BookletError::Filter(format!("LZW encode failed: {e:?}")))?;

    log::debug!("LZW encode end: {} bytes out", encoded.len());
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Example stream from the PDF reference: codes 256 45 258 258 65 259 66 257
    const REFERENCE_STREAM: [u8; 9] = [0x80, 0x0B, 0x60, 0x50, 0x22, 0x0C, 0x0C, 0x85, 0x01];

    #[test]
    fn test_decode_reference_stream() {
        let decoded = decode_lzw(&REFERENCE_STREAM, true).unwrap();
        assert_eq!(decoded, b"-----A---B");
    }

    #[test]
    fn test_decode_reference_stream_without_early_change() {
        // The table never reaches a width switch, so both settings agree
        let decoded = decode_lzw(&REFERENCE_STREAM, false).unwrap();
        assert_eq!(decoded, b"-----A---B");
    }

    #[test]
    fn test_round_trip_past_code_width_switch() {
        // Enough distinct sequences to grow codes beyond 9 bits
        let data: Vec<u8> = (0..20_000u32).map(|i| (i * 7 % 251) as u8 ^ (i / 13) as u8).collect();
        for early_change in [true, false] {
            let encoded = encode_lzw(&data, early_change).unwrap();
            assert_eq!(decode_lzw(&encoded, early_change).unwrap(), data);
        }
    }

    #[test]
    fn test_empty_data() {
        let encoded = encode_lzw(&[], true).unwrap();
        assert!(decode_lzw(&encoded, true).unwrap().is_empty());
    }
}
