//! Main XPT v5 reader.
//!
//! [`XptReader`] owns the byte source for its lifetime. Construction
//! eagerly parses and validates every header section; observation rows
//! are then produced lazily through [`XptReader::rows`], a single-pass
//! pull iterator that advances the stream one row block at a time.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::xpt::v5::namestr::Variable;

use super::obs::{BlockOutcome, decode_row, read_block};
use super::parse::parse_header;

/// Library-level file metadata, captured once from the library header.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileMetadata {
    /// Format version as a `(major, minor)` tuple, e.g. `(5, 0)`.
    pub version: (u8, u8),
    /// Originating operating system string.
    pub os: String,
    /// File creation timestamp.
    pub created: NaiveDateTime,
    /// File modification timestamp.
    pub modified: NaiveDateTime,
}

/// Metadata of the single member dataset in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberMetadata {
    /// Dataset name.
    pub name: String,
    /// Dataset label (may be empty).
    pub label: String,
    /// Dataset type string (may be empty).
    pub dataset_type: String,
    /// Member creation timestamp.
    pub created: NaiveDateTime,
    /// Member modification timestamp.
    pub modified: NaiveDateTime,
}

/// One decoded observation value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A numeric value; missing values surface as NaN.
    Numeric(f64),
    /// A character value, decoded from ISO-8859-1 and right-trimmed of
    /// ASCII spaces.
    Character(String),
}

impl Value {
    /// Returns the numeric value, if this is a numeric field.
    #[must_use]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Character(_) => None,
        }
    }

    /// Returns the character value, if this is a character field.
    #[must_use]
    pub fn as_character(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Character(s) => Some(s),
        }
    }

    /// True for a missing numeric value.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Numeric(v) if v.is_nan())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Character(s) => f.write_str(s),
        }
    }
}

/// One observation: decoded values in variable declaration order.
pub type Row = Vec<Value>;

/// Streaming reader for XPT v5 files.
#[derive(Debug)]
pub struct XptReader<R: Read> {
    source: R,
    metadata: FileMetadata,
    member: MemberMetadata,
    variables: Vec<Variable>,
    row_len: usize,
    rows_read: usize,
    finished: bool,
}

impl<R: Read> XptReader<R> {
    /// Creates a reader over a byte source, eagerly parsing all headers.
    ///
    /// # Errors
    ///
    /// Returns an error if any header section fails validation, or if the
    /// source fails before the first observation byte.
    pub fn new(mut source: R) -> Result<Self> {
        let header = parse_header(&mut source)?;
        // A member with no variables has a zero-length row block; there is
        // nothing to stream.
        let finished = header.row_len == 0;
        Ok(Self {
            source,
            metadata: header.metadata,
            member: header.member,
            variables: header.variables,
            row_len: header.row_len,
            rows_read: 0,
            finished,
        })
    }

    /// Returns the variable names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|v| v.name.as_str())
    }

    /// Returns the full variable descriptor table.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns the library-level file metadata.
    #[must_use]
    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    /// Returns the member dataset metadata.
    #[must_use]
    pub fn member(&self) -> &MemberMetadata {
        &self.member
    }

    /// Returns the lazy observation stream.
    ///
    /// The stream is finite and single-pass: rows already consumed are not
    /// produced again by a later call, and the iterator fuses after the
    /// first error or the end of data.
    pub fn rows(&mut self) -> Rows<'_, R> {
        let block = vec![0u8; self.row_len];
        Rows {
            reader: self,
            block,
        }
    }

    /// Returns the observation stream with each value paired with its
    /// field name.
    pub fn dict_rows(&mut self) -> DictRows<'_, R> {
        let names: Vec<String> = self.variables.iter().map(|v| v.name.clone()).collect();
        DictRows {
            names,
            rows: self.rows(),
        }
    }
}

impl XptReader<BufReader<File>> {
    /// Opens an XPT file from a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its headers fail
    /// validation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::new(BufReader::new(file))
    }
}

impl<'b> XptReader<Cursor<&'b [u8]>> {
    /// Creates a reader over an in-memory XPT document.
    ///
    /// # Errors
    ///
    /// Returns an error if the headers fail validation.
    pub fn from_bytes(bytes: &'b [u8]) -> Result<Self> {
        Self::new(Cursor::new(bytes))
    }
}

/// Lazy iterator over observation rows. See [`XptReader::rows`].
pub struct Rows<'r, R: Read> {
    reader: &'r mut XptReader<R>,
    block: Vec<u8>,
}

impl<R: Read> Iterator for Rows<'_, R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = &mut *self.reader;
        if reader.finished {
            return None;
        }
        match read_block(&mut reader.source, &mut self.block, reader.rows_read) {
            Ok(BlockOutcome::Row) => match decode_row(&self.block, &reader.variables) {
                Ok(row) => {
                    reader.rows_read += 1;
                    Some(Ok(row))
                }
                Err(e) => {
                    reader.finished = true;
                    Some(Err(e))
                }
            },
            Ok(BlockOutcome::End) => {
                reader.finished = true;
                #[cfg(feature = "tracing")]
                tracing::debug!(rows = reader.rows_read, "observation stream ended");
                None
            }
            Err(e) => {
                reader.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Lazy iterator pairing each value with its field name. See
/// [`XptReader::dict_rows`].
pub struct DictRows<'r, R: Read> {
    names: Vec<String>,
    rows: Rows<'r, R>,
}

impl<R: Read> Iterator for DictRows<'_, R> {
    type Item = Result<Vec<(String, Value)>>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(row.map(|values| self.names.iter().cloned().zip(values).collect()))
    }
}
