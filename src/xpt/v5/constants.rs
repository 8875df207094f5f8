//! XPT v5 constants and marker records.
//!
//! This module defines the record geometry and the magic header prefixes
//! used in XPT v5 files.

/// The length of a single record in bytes.
pub const RECORD_LEN: usize = 80;

/// Pad character (ASCII space).
pub const PAD_CHAR: u8 = 0x20;

/// Library header prefix (first 48 bytes of the first record).
pub const LIBRARY_HEADER_PREFIX: &[u8; 48] =
    b"HEADER RECORD*******LIBRARY HEADER RECORD!!!!!!!";

/// Member header prefix.
pub const MEMBER_HEADER_PREFIX: &[u8; 48] =
    b"HEADER RECORD*******MEMBER  HEADER RECORD!!!!!!!";

/// Member descriptor header prefix.
pub const DSCRPTR_HEADER_PREFIX: &[u8; 48] =
    b"HEADER RECORD*******DSCRPTR HEADER RECORD!!!!!!!";

/// NAMESTR header prefix.
pub const NAMESTR_HEADER_PREFIX: &[u8; 48] =
    b"HEADER RECORD*******NAMESTR HEADER RECORD!!!!!!!";

/// Observation header prefix.
pub const OBS_HEADER_PREFIX: &[u8; 48] =
    b"HEADER RECORD*******OBS     HEADER RECORD!!!!!!!";

/// Standard NAMESTR record length in bytes.
pub const NAMESTR_LEN: usize = 140;

/// Short NAMESTR record length used by some VMS-origin files.
pub const NAMESTR_LEN_SHORT: usize = 136;
