//! Timestamp handling for XPT v5 headers.
//!
//! Header dates are 16-byte ASCII fields in the SAS `DDMONYY:HH:MM:SS`
//! form (e.g. `16FEB11:10:07:55`), with an uppercase three-letter English
//! month and a two-digit year.

use chrono::NaiveDateTime;

use crate::error::{Result, XptError};
use crate::xpt::v5::encoding::decode_field;

/// Parses a header date field to a timestamp.
///
/// The field is right-trimmed of space padding before parsing.
///
/// # Errors
///
/// Returns [`XptError::InvalidDate`] if the field does not match
/// `DDMONYY:HH:MM:SS`.
pub fn parse_header_date(field: &[u8]) -> Result<NaiveDateTime> {
    let text = decode_field(field);
    NaiveDateTime::parse_from_str(&text, "%d%b%y:%H:%M:%S")
        .map_err(|_| XptError::InvalidDate { text })
}
