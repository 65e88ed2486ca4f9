//! Memory-mapped file support for opening an MMDB file directly off disk.
//!
//! This is a thin convenience layer: the core decoder/tree/reader logic
//! never touches a file or a path, only `&[u8]` (§1). `MmapFile` just gets
//! bytes from disk into memory without copying them, the same idiom the
//! rest of this codebase uses for its own binary formats.
//!
//! # Safety
//!
//! Memory-mapped files are inherently unsafe — the contents can change out
//! from under us if another process writes to the file. We don't defend
//! against that; callers who need that guarantee should copy the bytes
//! into a `Vec<u8>` instead of using `MmapFile`.

use memmap2::Mmap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

/// Errors specific to opening a memory-mapped file. Callers of
/// [`crate::reader::Reader::open`] see these wrapped in `MmdbError::Io`.
#[derive(Debug)]
pub enum MmapError {
    Io(io::Error),
    Empty,
}

impl fmt::Display for MmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmapError::Io(e) => write!(f, "I/O error: {e}"),
            MmapError::Empty => write!(f, "file is empty"),
        }
    }
}

impl std::error::Error for MmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MmapError::Io(e) => Some(e),
            MmapError::Empty => None,
        }
    }
}

impl From<io::Error> for MmapError {
    fn from(err: io::Error) -> Self {
        MmapError::Io(err)
    }
}

/// A memory-mapped file, unmapped automatically on drop.
///
/// `MmapFile` is `Send` but not `Sync`: multiple threads can each own
/// their own `MmapFile`, but a single instance should not be shared
/// across threads without synchronization.
pub struct MmapFile {
    mmap: Mmap,
}

impl MmapFile {
    /// Open and memory-map `path`. Fails if the file cannot be opened or
    /// is empty — an empty file can never contain a metadata marker, so
    /// rejecting it here gives a clearer error than letting metadata
    /// parsing fail on a zero-length slice.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MmapError> {
        let file = File::open(path.as_ref())?;
        let mmap = unsafe { Mmap::map(&file)? };
        if mmap.is_empty() {
            return Err(MmapError::Empty);
        }
        Ok(MmapFile { mmap })
    }

    pub fn size(&self) -> usize {
        self.mmap.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.mmap[..]
    }
}

impl fmt::Debug for MmapFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MmapFile").field("size", &self.size()).finish()
    }
}
