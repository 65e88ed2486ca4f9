//! Dotted-path parsing
//!
//! A path like `subdivisions.0.names.en` is a sequence of segments
//! separated by `.`. A segment that is all ASCII decimal digits addresses
//! an array element; anything else addresses a map key. There is no
//! escape syntax, so a map key containing `.` cannot be addressed (§6.1).

use crate::error::{MmdbError, Result};

/// One segment of a dotted path, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// A pure-decimal segment, addressing an array element
    Index(usize),
    /// Any other segment, addressing a map key
    Key(&'a str),
}

/// Split `path` on `.` and classify each segment.
///
/// Returns `InvalidPath` if the path is empty or any segment is empty
/// (e.g. a leading, trailing, or doubled `.`).
pub fn parse(path: &str) -> Result<Vec<PathSegment<'_>>> {
    if path.is_empty() {
        return Err(MmdbError::InvalidPath("path is empty".to_string()));
    }

    let mut segments = Vec::new();
    for part in path.split('.') {
        if part.is_empty() {
            return Err(MmdbError::InvalidPath(format!(
                "path '{}' has an empty segment",
                path
            )));
        }
        segments.push(classify(part));
    }
    Ok(segments)
}

fn classify(segment: &str) -> PathSegment<'_> {
    if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
        // An all-digit segment longer than usize::MAX digits can't parse;
        // such an index can never match a real array, so fall back to a
        // sentinel that simply never matches rather than panicking.
        let index = segment.parse().unwrap_or(usize::MAX);
        PathSegment::Index(index)
    } else {
        PathSegment::Key(segment)
    }
}
