//! Settings-file text decoding.
//!
//! The monitored product writes its settings as 16-bit Unicode. A
//! byte-order mark wins when present; otherwise the profile's default
//! applies. Decoding is strict: malformed bytes are an error, never
//! replacement characters.

const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];
const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Default encoding assumed for input without a byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingProfile {
    /// BOM-less input decodes as UTF-16 little-endian, the product's
    /// native convention on Windows.
    Windows,
    /// BOM-less input decodes as UTF-8.
    Utf8,
}

/// Decode raw file bytes into text, honoring any leading byte-order mark.
pub fn decode_text(bytes: &[u8], profile: EncodingProfile) -> Result<String, String> {
    if let Some(rest) = bytes.strip_prefix(&BOM_UTF16_LE) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&BOM_UTF16_BE) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&BOM_UTF8) {
        return decode_utf8(rest);
    }

    match profile {
        EncodingProfile::Windows => decode_utf16(bytes, u16::from_le_bytes),
        EncodingProfile::Utf8 => decode_utf8(bytes),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err(format!(
            "UTF-16 input has odd byte length {}",
            bytes.len()
        ));
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| "UTF-16 input has unpaired surrogates".to_string())
}

fn decode_utf8(bytes: &[u8]) -> Result<String, String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|err| format!("invalid UTF-8: {err}"))
}
