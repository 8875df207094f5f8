//! Observation stream handling for XPT v5.
//!
//! Observation data is a run of fixed-width rows followed by ASCII-space
//! padding that rounds the section up to a multiple of 80 bytes. There is
//! no row count in the headers; the end of data is detected from the
//! padding itself, either as a short final read or as a full block of
//! spaces (the sentinel).

use std::io::Read;

use crate::error::{Result, XptError};
use crate::xpt::v5::constants::{PAD_CHAR, RECORD_LEN};
use crate::xpt::v5::encoding::{decode_field, decode_ibm};
use crate::xpt::v5::namestr::Variable;

use super::reader::{Row, Value};

/// What a row-sized read turned out to be.
pub(crate) enum BlockOutcome {
    /// A full data row is in the buffer.
    Row,
    /// End of observation data.
    End,
}

/// Reads the next row-sized block and classifies it.
///
/// `block` must be exactly one row long; `count` is the number of rows
/// already emitted, which determines how much trailing padding restores
/// 80-byte alignment.
pub(crate) fn read_block<R: Read>(
    source: &mut R,
    block: &mut [u8],
    count: usize,
) -> Result<BlockOutcome> {
    let row_len = block.len();
    let n = read_full(source, block)?;

    if n < row_len {
        // The file ended mid-block: only space padding may remain, and
        // unless the trailer is empty it must land on a record boundary.
        if block[..n].iter().any(|&b| b != PAD_CHAR) {
            return Err(XptError::IncompleteRecord { len: n });
        }
        if n != 0 && (count * row_len + n) % RECORD_LEN != 0 {
            return Err(XptError::InsufficientPadding);
        }
        return Ok(BlockOutcome::End);
    }

    if block.iter().all(|&b| b == PAD_CHAR) {
        // Padding sentinel. Anything after it that is not space padding
        // would be a second member's header.
        let mut rest = Vec::new();
        source.read_to_end(&mut rest)?;
        if rest.iter().any(|&b| b != PAD_CHAR) {
            return Err(XptError::MultipleMembersUnsupported);
        }
        if row_len + rest.len() != RECORD_LEN - (count * row_len) % RECORD_LEN {
            return Err(XptError::IncorrectPadding);
        }
        return Ok(BlockOutcome::End);
    }

    Ok(BlockOutcome::Row)
}

/// Decodes one row block into values, in variable declaration order.
pub(crate) fn decode_row(block: &[u8], variables: &[Variable]) -> Result<Row> {
    let mut values = Vec::with_capacity(variables.len());
    for var in variables {
        let field = &block[var.position..var.position + var.size];
        let value = if var.numeric {
            Value::Numeric(decode_ibm(field)?)
        } else {
            Value::Character(decode_field(field))
        };
        values.push(value);
    }
    Ok(values)
}

/// Reads until the buffer is full or the source is exhausted, returning
/// the number of bytes read.
fn read_full<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(XptError::Io(e)),
        }
    }
    Ok(filled)
}
