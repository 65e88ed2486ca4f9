//! Error types for the mmdb-query library
use std::fmt;

/// Result type alias for mmdb-query operations
pub type Result<T> = std::result::Result<T, MmdbError>;

/// Main error type for mmdb-query operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MmdbError {
    /// No metadata marker found in the buffer
    MetadataMissing,

    /// Metadata map is missing a required key, or a key has the wrong type
    MetadataInvalid(String),

    /// Unknown type tag, out-of-bounds pointer, or a size that drives the
    /// cursor past the end of the buffer
    MalformedValue(String),

    /// An array index was used against a map, or a map key against an array
    PathTypeMismatch {
        /// The original dotted path string that triggered the mismatch
        path: String,
        /// What the path segment required
        expected: &'static str,
        /// What was actually found at that position
        found: &'static str,
    },

    /// A pointer chain exceeded the recursion cap
    PointerRecursionExceeded,

    /// A path string was empty, or contained an empty segment
    InvalidPath(String),

    /// I/O error opening or memory-mapping a file
    Io(String),
}

impl fmt::Display for MmdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmdbError::MetadataMissing => write!(f, "MMDB metadata marker not found"),
            MmdbError::MetadataInvalid(msg) => write!(f, "invalid MMDB metadata: {}", msg),
            MmdbError::MalformedValue(msg) => write!(f, "malformed MMDB data value: {}", msg),
            MmdbError::PathTypeMismatch {
                path,
                expected,
                found,
            } => write!(
                f,
                "path '{}' expected {} but found {}",
                path, expected, found
            ),
            MmdbError::PointerRecursionExceeded => {
                write!(f, "pointer chain exceeded the recursion cap")
            }
            MmdbError::InvalidPath(msg) => write!(f, "invalid path: {}", msg),
            MmdbError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for MmdbError {}

impl From<std::io::Error> for MmdbError {
    fn from(err: std::io::Error) -> Self {
        MmdbError::Io(err.to_string())
    }
}
