//! Metadata Locator (§4.1)
//!
//! The metadata map sits at the very end of the file, announced by a
//! fixed marker rather than a length-prefixed header, so it has to be
//! found by scanning backward from EOF. Once found, only the handful of
//! keys the tree walker needs are pulled out — the rest of the metadata
//! map (database_type, languages, description, ...) is left for callers
//! who want it via [`Metadata::raw`].

use crate::decoder::{Decoder, Value};
use crate::error::{MmdbError, Result};
use crate::path::parse as parse_path;

/// "\xAB\xCD\xEFMaxMind.com"
const METADATA_MARKER: &[u8] = b"\xAB\xCD\xEFMaxMind.com";

/// The marker is only searched for within this many trailing bytes of the
/// file — metadata maps are small, so a marker further back than this
/// would mean the file isn't an MMDB at all.
const MARKER_SEARCH_WINDOW: usize = 128 * 1024;

/// IP address family a database was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    V4,
    /// May also answer IPv4 queries, via the `::ffff:0:0/96` subtree (§4.3).
    V6,
}

/// Search tree record width, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSize {
    Bits24,
    Bits28,
    Bits32,
}

impl RecordSize {
    fn from_bits(bits: u64) -> Result<Self> {
        match bits {
            24 => Ok(RecordSize::Bits24),
            28 => Ok(RecordSize::Bits28),
            32 => Ok(RecordSize::Bits32),
            other => Err(MmdbError::MetadataInvalid(format!(
                "record_size {other} is not 24, 28, or 32"
            ))),
        }
    }

    /// Bytes occupied by one full node (both records).
    pub fn node_bytes(self) -> usize {
        match self {
            RecordSize::Bits24 => 6,
            RecordSize::Bits28 => 7,
            RecordSize::Bits32 => 8,
        }
    }
}

/// The handful of metadata fields the tree walker and decoder need to
/// operate. Everything else in the metadata map (database_type,
/// languages, description, build_epoch, ...) is reachable through
/// [`Metadata::raw`] if a caller wants it, but isn't parsed eagerly.
#[derive(Debug, Clone, Copy)]
pub struct Metadata {
    pub node_count: u32,
    pub record_size: RecordSize,
    pub ip_version: IpVersion,
    /// Byte offset (from the start of the file) where the metadata map's
    /// encoded bytes begin — i.e. just past the marker.
    pub(crate) raw_offset: usize,
}

impl Metadata {
    /// Locate the metadata marker in `data`, then decode `node_count`,
    /// `record_size`, and `ip_version` out of the map that follows it.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let marker_offset = find_metadata_marker(data)?;
        let raw_offset = marker_offset + METADATA_MARKER.len();
        let metadata_bytes = &data[raw_offset..];

        let node_count = required_uint(metadata_bytes, "node_count")?;
        if node_count > u32::MAX as u64 {
            return Err(MmdbError::MetadataInvalid(format!(
                "node_count {node_count} exceeds u32::MAX"
            )));
        }

        let record_size = RecordSize::from_bits(required_uint(metadata_bytes, "record_size")?)?;

        let ip_version = match required_uint(metadata_bytes, "ip_version")? {
            4 => IpVersion::V4,
            6 => IpVersion::V6,
            other => {
                return Err(MmdbError::MetadataInvalid(format!(
                    "ip_version {other} is not 4 or 6"
                )))
            }
        };

        Ok(Metadata {
            node_count: node_count as u32,
            record_size,
            ip_version,
            raw_offset,
        })
    }

    /// Search tree size in bytes: `node_count * node_bytes`.
    pub fn tree_size(&self) -> usize {
        self.node_count as usize * self.record_size.node_bytes()
    }

    /// Decode an arbitrary dotted path out of the full metadata map, for
    /// callers interested in fields beyond the three pulled out by
    /// `parse` (e.g. `database_type`, `description.en`).
    pub fn raw<'a>(&self, data: &'a [u8], path: &str) -> Result<Option<Value>> {
        let segments = parse_path(path)?;
        let decoder = Decoder::new(&data[self.raw_offset..]);
        let mut cursor = 0;
        decoder.find(&mut cursor, &segments, path)
    }
}

fn required_uint(metadata_bytes: &[u8], key: &str) -> Result<u64> {
    let segments = parse_path(key).expect("key is a single non-empty path segment");
    let decoder = Decoder::new(metadata_bytes);
    let mut cursor = 0;
    match decoder.find(&mut cursor, &segments, key)? {
        Some(Value::UInt(n)) => Ok(n),
        Some(other) => Err(MmdbError::MetadataInvalid(format!(
            "metadata key '{key}' has unexpected value {other:?}"
        ))),
        None => Err(MmdbError::MetadataInvalid(format!(
            "metadata is missing required key '{key}'"
        ))),
    }
}

/// Find the metadata marker, searching backward from EOF but only within
/// the last [`MARKER_SEARCH_WINDOW`] bytes. If the marker appears more
/// than once in that window, the last occurrence wins — matches
/// `libmaxminddb`'s behavior for files that happen to contain the marker
/// bytes inside string data earlier in the file.
fn find_metadata_marker(data: &[u8]) -> Result<usize> {
    if data.len() < METADATA_MARKER.len() {
        return Err(MmdbError::MetadataMissing);
    }

    let search_start = data.len().saturating_sub(MARKER_SEARCH_WINDOW);
    let haystack = &data[search_start..];

    memchr::memmem::Finder::new(METADATA_MARKER)
        .rfind(haystack)
        .map(|pos| search_start + pos)
        .ok_or(MmdbError::MetadataMissing)
}
