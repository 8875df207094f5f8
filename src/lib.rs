//! # xptread
//!
//! Streaming reader for SAS XPORT (XPT v5) transport files.
//!
//! XPT is a fixed-record binary tabular format originating on IBM
//! mainframes: a sequence of 80-byte header records, a variable descriptor
//! table, and fixed-width observation rows terminated by space padding.
//! Numeric data is stored as IBM hexadecimal floating point; this crate
//! ships the bidirectional codec between that representation and IEEE 754
//! binary64.
//!
//! ## Quick Start
//!
//! ```no_run
//! use xptread::XptReader;
//!
//! let mut reader = XptReader::open("example.xpt")?;
//! println!("{:?}", reader.fields().collect::<Vec<_>>());
//! for row in reader.rows() {
//!     let row = row?;
//!     println!("{row:?}");
//! }
//! # Ok::<(), xptread::XptError>(())
//! ```
//!
//! Rows are produced lazily in file order; the reader owns the byte source
//! for its lifetime and the stream is single-pass. Header parsing happens
//! eagerly in [`XptReader::new`], so any structural problem with the file
//! surfaces before the first row.
//!
//! ## The numeric codec
//!
//! ```
//! use xptread::codec::{decode_ibm, encode_ibm};
//!
//! assert_eq!(encode_ibm(1.0)?, [0x41, 0x10, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(decode_ibm(&[0x41, 0x10, 0, 0, 0, 0, 0, 0])?, 1.0);
//! # Ok::<(), xptread::XptError>(())
//! ```
//!
//! SAS "missing values" are one-byte markers (`.`, `_`, `A`-`Z`) overloaded
//! onto the numeric space. They decode to NaN; [`codec::missing_code`]
//! recovers the marker when `.A` must be told apart from `.B`.
//!
//! ## Scope
//!
//! Reading is limited to v5 files with a single member dataset. Writing
//! full XPT files is out of scope; only the numeric codec's encode
//! direction is provided. Character data is decoded as ISO-8859-1.
//!
//! ## Feature Flags
//!
//! | Feature   | Description                                  |
//! |-----------|----------------------------------------------|
//! | `serde`   | Serialization support for the public types   |
//! | `tracing` | Structured logging with the `tracing` crate  |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

mod error;
pub mod xpt;

pub use error::{Result, XptError};
pub use xpt::v5::namestr::Variable;
pub use xpt::v5::read::{DictRows, FileMetadata, MemberMetadata, Row, Rows, Value, XptReader};

/// The IBM floating-point codec and missing-value classification.
///
/// These functions convert between IBM hexadecimal floating point (as
/// stored in XPT numeric fields) and IEEE 754 binary64.
pub mod codec {
    pub use crate::xpt::v5::encoding::{MissingValue, decode_ibm, encode_ibm, missing_code};
}
