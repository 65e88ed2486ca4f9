//! Reader façade (§4.4)
//!
//! `Reader` owns the database bytes and the parsed [`Metadata`], and is
//! the crate's one public entry point for lookups. It never stores a
//! borrowed `Decoder`/`SearchTree` — those are built fresh, borrowing
//! `self.storage.as_slice()` for the duration of a single call, which
//! sidesteps the self-referential-struct problem a `Reader<'a>` storing
//! its own borrowed view would run into.

use crate::decoder::{Decoder, Value};
use crate::metadata::Metadata;
use crate::mmap::MmapFile;
use crate::path::parse as parse_path;
use crate::error::{MmdbError, Result};
use crate::tree::SearchTree;
use std::net::IpAddr;
use std::path::Path;

enum Storage {
    Owned(Vec<u8>),
    Mapped(MmapFile),
}

impl Storage {
    fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Owned(bytes) => bytes,
            Storage::Mapped(mmap) => mmap.as_slice(),
        }
    }
}

/// Outcome of a multi-path lookup (§4.4, §7).
#[derive(Debug, Default)]
pub struct LookupOutcome {
    /// Whether the IP address matched any network in the database at all.
    /// `false` means every requested path was left unset; it says nothing
    /// about whether individual paths matched within a found record.
    pub found: bool,
    /// Network prefix length the IP matched, `None` if `found` is `false`.
    pub prefix_len: Option<u8>,
    /// Per-path failures (`PathTypeMismatch`, `InvalidPath`) collected
    /// while still processing every other requested path. Fatal errors
    /// (`MalformedValue`, `PointerRecursionExceeded`) are not collected
    /// here — they abort the whole call via `Err`.
    pub path_errors: Vec<(String, MmdbError)>,
}

/// A parsed, queryable MMDB database.
pub struct Reader {
    storage: Storage,
    metadata: Metadata,
}

impl Reader {
    /// Build a reader over an in-memory buffer, parsing its metadata
    /// immediately so lookups never fail on a metadata problem partway
    /// through.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let metadata = Metadata::parse(&data)?;
        Ok(Reader {
            storage: Storage::Owned(data),
            metadata,
        })
    }

    /// Memory-map `path` and parse its metadata. Convenience wrapper
    /// around [`MmapFile::open`] + [`Metadata::parse`] for the common
    /// case of a database living on disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mapped = MmapFile::open(path).map_err(|e| MmdbError::Io(e.to_string()))?;
        let metadata = Metadata::parse(mapped.as_slice())?;
        Ok(Reader {
            storage: Storage::Mapped(mapped),
            metadata,
        })
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Look up `ip`, then for every entry in `paths` decode the value at
    /// that dotted path out of the matched record and hand it to `sink`.
    ///
    /// `sink` is called once per path that resolves to a scalar leaf,
    /// with the original path string and its decoded `Value` — never for
    /// a path that is absent or that resolves to a Map/Array node (§8
    /// scenario 9). An empty `paths` slice is valid: the IP is looked up,
    /// but `sink` is never called (§6, empty-paths invariant).
    pub fn lookup(
        &self,
        ip: IpAddr,
        paths: &[&str],
        mut sink: impl FnMut(&str, Value),
    ) -> Result<LookupOutcome> {
        let data = self.storage.as_slice();
        let tree = SearchTree::new(data, &self.metadata);

        let Some(result) = tree.lookup(ip)? else {
            return Ok(LookupOutcome::default());
        };

        let tree_size = self.metadata.tree_size();
        let data_section_start = tree_size + 16;
        if data_section_start > data.len() {
            return Err(MmdbError::MalformedValue(
                "data section start is past the end of the buffer".to_string(),
            ));
        }
        let decoder = Decoder::new(&data[data_section_start..]);

        let mut outcome = LookupOutcome {
            found: true,
            prefix_len: Some(result.prefix_len),
            path_errors: Vec::new(),
        };

        for &path in paths {
            let segments = match parse_path(path) {
                Ok(segments) => segments,
                Err(e) => {
                    outcome.path_errors.push((path.to_string(), e));
                    continue;
                }
            };

            let mut cursor = result.data_offset as usize;
            match decoder.find(&mut cursor, &segments, path) {
                Ok(Some(value)) => sink(path, value),
                Ok(None) => {}
                Err(e @ MmdbError::PathTypeMismatch { .. }) | Err(e @ MmdbError::InvalidPath(_)) => {
                    outcome.path_errors.push((path.to_string(), e));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(outcome)
    }
}
