//! XPT v5 header parsing.
//!
//! An XPT v5 file opens with three fixed header sections, each built from
//! 80-byte records: the library header (3 records), the member header
//! (4 records), and the NAMESTR section (1 header record, then the packed
//! variable descriptors padded to the next record boundary). A final OBS
//! header record marks the start of observation data.

use std::io::Read;

use crate::error::{Result, XptError};
use crate::xpt::v5::constants::{
    DSCRPTR_HEADER_PREFIX, LIBRARY_HEADER_PREFIX, MEMBER_HEADER_PREFIX, NAMESTR_HEADER_PREFIX,
    NAMESTR_LEN, NAMESTR_LEN_SHORT, OBS_HEADER_PREFIX, RECORD_LEN,
};
use crate::xpt::v5::encoding::{decode_field, trim_trailing_spaces};
use crate::xpt::v5::namestr::{Variable, unpack_namestr};
use crate::xpt::v5::timestamp::parse_header_date;

use super::reader::{FileMetadata, MemberMetadata};

/// Everything extracted from the header sections, up to and including the
/// OBS header record. The source is left positioned at the first
/// observation byte.
pub(crate) struct ParsedHeader {
    pub metadata: FileMetadata,
    pub member: MemberMetadata,
    pub variables: Vec<Variable>,
    pub row_len: usize,
}

/// Parses all header sections from the start of the stream.
pub(crate) fn parse_header<R: Read>(source: &mut R) -> Result<ParsedHeader> {
    let metadata = parse_library_header(source)?;
    let (member, namestr_len) = parse_member_header(source)?;
    let variables = parse_namestr_section(source, namestr_len)?;

    let record = read_record(source)?;
    expect_prefix(&record, OBS_HEADER_PREFIX, "OBS header record")?;

    let row_len: usize = variables.iter().map(|v| v.size).sum();
    for var in &variables {
        if var.position + var.size > row_len {
            return Err(XptError::InvalidHeader {
                expected: "NAMESTR field positions within the observation row",
            });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        member = %member.name,
        variables = variables.len(),
        row_len,
        "parsed XPT headers"
    );

    Ok(ParsedHeader {
        metadata,
        member,
        variables,
        row_len,
    })
}

/// Library header: 3 records.
///
/// | Record | Layout |
/// |---|---|
/// | 1 | 48-byte LIBRARY prefix, thirty `0` characters, 2 spaces |
/// | 2 | `SAS`, `SAS`, `SASLIB` (8 bytes each), version, OS, 24 reserved, created |
/// | 3 | modified (16 bytes), 64 reserved |
fn parse_library_header<R: Read>(source: &mut R) -> Result<FileMetadata> {
    let record = read_record(source)?;
    expect_prefix(&record, LIBRARY_HEADER_PREFIX, "LIBRARY header record")?;
    if trim_trailing_spaces(&record[48..]) != [b'0'; 30] {
        return Err(XptError::InvalidHeader {
            expected: "thirty zeros after the LIBRARY prefix",
        });
    }

    let record = read_record(source)?;
    expect_tag(&record[0..8], b"SAS", "SAS tag")?;
    expect_tag(&record[8..16], b"SAS", "SAS tag")?;
    expect_tag(&record[16..24], b"SASLIB", "SASLIB tag")?;
    let version = parse_version(&record[24..32]).ok_or(XptError::InvalidHeader {
        expected: "dotted ASCII version string",
    })?;
    let os = decode_field(&record[32..40]);
    let created = parse_header_date(&record[64..80])?;

    let record = read_record(source)?;
    let modified = parse_header_date(&record[0..16])?;

    Ok(FileMetadata {
        version,
        os,
        created,
        modified,
    })
}

/// Member header: 4 records.
///
/// | Record | Layout |
/// |---|---|
/// | 1 | 48-byte MEMBER prefix, 26 reserved, 4-byte ASCII NAMESTR size, 2 reserved |
/// | 2 | 48-byte DSCRPTR prefix, 32 reserved |
/// | 3 | `SAS`, dataset name, `SASDATA`, version, OS, 24 reserved, created |
/// | 4 | modified (16 bytes), 16 reserved, 40-byte label, 8-byte type |
fn parse_member_header<R: Read>(source: &mut R) -> Result<(MemberMetadata, usize)> {
    let record = read_record(source)?;
    expect_prefix(&record, MEMBER_HEADER_PREFIX, "MEMBER header record")?;
    let namestr_len = ascii_int(&record[74..78]).ok_or(XptError::InvalidHeader {
        expected: "ASCII NAMESTR record size",
    })?;
    if namestr_len != NAMESTR_LEN && namestr_len != NAMESTR_LEN_SHORT {
        return Err(XptError::InvalidHeader {
            expected: "NAMESTR record size of 140 or 136",
        });
    }

    let record = read_record(source)?;
    expect_prefix(&record, DSCRPTR_HEADER_PREFIX, "DSCRPTR header record")?;

    let record = read_record(source)?;
    expect_tag(&record[0..8], b"SAS", "SAS tag")?;
    let name = decode_field(&record[8..16]);
    expect_tag(&record[16..24], b"SASDATA", "SASDATA literal")?;
    let created = parse_header_date(&record[64..80])?;

    let record = read_record(source)?;
    let modified = parse_header_date(&record[0..16])?;
    let label = decode_field(&record[32..72]);
    let dataset_type = decode_field(&record[72..80]);

    Ok((
        MemberMetadata {
            name,
            label,
            dataset_type,
            created,
            modified,
        },
        namestr_len,
    ))
}

/// NAMESTR section: one header record carrying the variable count, then
/// the packed descriptor records, then zero padding up to the next 80-byte
/// boundary.
fn parse_namestr_section<R: Read>(source: &mut R, namestr_len: usize) -> Result<Vec<Variable>> {
    let record = read_record(source)?;
    expect_prefix(&record, NAMESTR_HEADER_PREFIX, "NAMESTR header record")?;
    let nvars = ascii_int(&record[54..58]).ok_or(XptError::InvalidHeader {
        expected: "ASCII variable count",
    })?;

    let mut variables = Vec::with_capacity(nvars);
    let mut buf = vec![0u8; namestr_len];
    for _ in 0..nvars {
        source.read_exact(&mut buf)?;
        variables.push(unpack_namestr(&buf)?);
    }

    let spillover = nvars * namestr_len % RECORD_LEN;
    if spillover != 0 {
        let mut padding = vec![0u8; RECORD_LEN - spillover];
        source.read_exact(&mut padding)?;
    }

    Ok(variables)
}

fn read_record<R: Read>(source: &mut R) -> Result<[u8; RECORD_LEN]> {
    let mut record = [0u8; RECORD_LEN];
    source.read_exact(&mut record)?;
    Ok(record)
}

fn expect_prefix(
    record: &[u8; RECORD_LEN],
    prefix: &[u8; 48],
    expected: &'static str,
) -> Result<()> {
    if &record[..48] == prefix {
        Ok(())
    } else {
        Err(XptError::InvalidHeader { expected })
    }
}

fn expect_tag(field: &[u8], tag: &[u8], expected: &'static str) -> Result<()> {
    if trim_trailing_spaces(field) == tag {
        Ok(())
    } else {
        Err(XptError::InvalidHeader { expected })
    }
}

/// Parses a space-padded ASCII decimal field, e.g. the NAMESTR record size
/// or the variable count.
fn ascii_int(field: &[u8]) -> Option<usize> {
    std::str::from_utf8(field).ok()?.trim().parse().ok()
}

/// Parses a dotted version field like `5.0`; a missing minor part is 0.
fn parse_version(field: &[u8]) -> Option<(u8, u8)> {
    let text = std::str::from_utf8(field).ok()?.trim();
    let mut parts = text.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = match parts.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    Some((major, minor))
}
