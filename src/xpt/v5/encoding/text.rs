//! Character field decoding for XPT v5.
//!
//! Character data in observation records is ISO-8859-1 (Latin-1). Every
//! byte maps directly to the Unicode code point of the same value, so
//! decoding cannot fail.

/// Decodes a fixed-width character field.
///
/// Trailing ASCII spaces are the field padding and are stripped before
/// decoding; other trailing whitespace is data and survives.
#[must_use]
pub fn decode_field(bytes: &[u8]) -> String {
    let trimmed = trim_trailing_spaces(bytes);
    decode_latin1(trimmed)
}

/// Decodes bytes as ISO-8859-1.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub(crate) fn trim_trailing_spaces(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != b' ')
        .map_or(0, |pos| pos + 1);
    &bytes[..end]
}
