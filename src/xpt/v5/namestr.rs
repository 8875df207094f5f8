//! NAMESTR record handling for XPT v5.
//!
//! Each variable in an XPT v5 file is described by one NAMESTR record of
//! 140 bytes (or 136 on some VMS-origin files; the two differ only in the
//! length of the opaque reserved tail). All integer fields are big-endian
//! two's complement.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::{Result, XptError};
use crate::xpt::v5::encoding::decode_field;

/// One variable of the member dataset, immutable after header parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Variable name, at most 8 ASCII bytes, trimmed of trailing spaces.
    pub name: String,
    /// Variable label, trimmed.
    pub label: String,
    /// True for IBM-float fields, false for fixed-width character fields.
    pub numeric: bool,
    /// 0-based byte offset of this field within an observation row.
    pub position: usize,
    /// Field width in bytes.
    pub size: usize,
    /// Display format name, trimmed (may be empty).
    pub format: String,
    /// Informat name, trimmed (may be empty).
    pub informat: String,
}

/// Unpacks one NAMESTR record.
///
/// `data` must be a full 136- or 140-byte record; the reserved tail past
/// byte 88 is ignored, so both sizes decode identically.
///
/// # Errors
///
/// Returns [`XptError::UnsupportedNumericWidth`] if a numeric variable
/// declares a length outside 2..=8, or [`XptError::InvalidHeader`] if a
/// length or position field is negative.
pub fn unpack_namestr(data: &[u8]) -> Result<Variable> {
    let mut cursor = Cursor::new(data);

    let ntype = cursor.read_i16::<BigEndian>()?;
    let _nhfun = cursor.read_i16::<BigEndian>()?;
    let length = cursor.read_i16::<BigEndian>()?;
    let _number = cursor.read_i16::<BigEndian>()?;

    let name = decode_field(&data[8..16]);
    let label = decode_field(&data[16..56]);
    let format = decode_field(&data[56..64]);
    // Format width/decimals/justify (64..70) and the fill bytes (70..72)
    // are display metadata this reader does not interpret.
    let informat = decode_field(&data[72..80]);

    cursor.set_position(84);
    let position = cursor.read_i32::<BigEndian>()?;

    let numeric = ntype == 1;
    if numeric && !(2..=8).contains(&length) {
        return Err(XptError::UnsupportedNumericWidth { name, length });
    }

    let size = usize::try_from(length).map_err(|_| XptError::InvalidHeader {
        expected: "non-negative NAMESTR field length",
    })?;
    let position = usize::try_from(position).map_err(|_| XptError::InvalidHeader {
        expected: "non-negative NAMESTR field position",
    })?;

    Ok(Variable {
        name,
        label,
        numeric,
        position,
        size,
        format,
        informat,
    })
}
