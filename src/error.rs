//! Error types for the xptread crate.
//!
//! This module provides a unified error type [`XptError`] covering I/O
//! failures, XPT format parsing errors, and the IBM float codec's range
//! errors. All errors halt the row stream immediately; nothing is retried
//! internally.

use thiserror::Error;

/// Unified error type for all XPT operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XptError {
    /// Underlying I/O error from the byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixed-prefix or fixed-literal header byte-string does not match.
    #[error("invalid XPT header: expected {expected}")]
    InvalidHeader {
        /// Description of the header content that was expected.
        expected: &'static str,
    },

    /// A 16-byte date field failed the `DDMONYY:HH:MM:SS` parse.
    #[error("invalid date in header: {text:?}")]
    InvalidDate {
        /// The raw text of the unparsable date field.
        text: String,
    },

    /// A numeric variable declares a length outside 2..=8 bytes.
    #[error("numeric variable '{name}' must be 2 to 8 bytes long, not {length}")]
    UnsupportedNumericWidth {
        /// Name of the offending variable.
        name: String,
        /// Declared field length.
        length: i16,
    },

    /// A zero-fraction IBM value has neither a zero first byte nor an
    /// accepted missing-value marker.
    #[error("neither zero nor a missing value: first byte 0x{byte:02x}")]
    InvalidMissingValue {
        /// First byte of the offending field.
        byte: u8,
    },

    /// A short read ended mid-row with non-space bytes.
    #[error("incomplete record at end of observation data ({len} bytes)")]
    IncompleteRecord {
        /// Number of bytes in the partial block.
        len: usize,
    },

    /// A partial trailing block does not restore 80-byte alignment.
    #[error("insufficient padding at end of file")]
    InsufficientPadding,

    /// The bytes after the all-space sentinel block do not restore
    /// 80-byte alignment.
    #[error("incorrect padding at end of file")]
    IncorrectPadding,

    /// Non-space data follows the first member's observations.
    #[error("cannot read files with multiple members")]
    MultipleMembersUnsupported,

    /// Encode target magnitude is too large for IBM format.
    #[error("cannot store magnitude more than ~ 16^63 in IBM format")]
    Overflow,

    /// Encode target magnitude is too small for IBM format.
    #[error("cannot store magnitude less than ~ 16^-65 in IBM format")]
    Underflow,

    /// Encoding an infinity was requested.
    #[error("cannot convert infinity to IBM format")]
    InfinityUnsupported,
}

/// Result type for XPT operations.
pub type Result<T> = std::result::Result<T, XptError>;
