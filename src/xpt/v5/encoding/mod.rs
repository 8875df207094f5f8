//! Field encodings for XPT v5.
//!
//! Numeric fields are IBM floating point, character fields are fixed-width
//! ISO-8859-1. Both decoders live here.

mod ibm_float;
mod text;

pub use ibm_float::{MissingValue, decode_ibm, encode_ibm, missing_code};
pub use text::{decode_field, decode_latin1};
pub(crate) use text::trim_trailing_spaces;
