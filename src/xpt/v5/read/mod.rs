//! XPT v5 reading functionality.
//!
//! This module provides the streaming reader implementation: header
//! parsing, the observation stream, and the public reader handle.

mod obs;
mod parse;
mod reader;

pub use reader::{DictRows, FileMetadata, MemberMetadata, Row, Rows, Value, XptReader};
