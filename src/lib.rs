//! mmdb-query — a read-only query engine for the MaxMind DB (MMDB) binary
//! format used by GeoIP2/GeoLite2 and similar IP intelligence databases.
//!
//! # Quick start
//!
//! ```no_run
//! use mmdb_query::Reader;
//! use std::net::IpAddr;
//!
//! let reader = Reader::open("GeoLite2-Country.mmdb")?;
//! let mut country = None;
//! reader.lookup("1.1.1.1".parse::<IpAddr>()?, &["country.iso_code"], |_path, value| {
//!     country = Some(value);
//! })?;
//! println!("{:?}", country);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Scope
//!
//! This crate only reads. Writing or updating MMDB files, streaming
//! decode of values too large to hold in memory, and coordinating
//! multiple writers are all out of scope — a `Reader` expects the whole
//! database as a shared-immutable byte buffer, owned or memory-mapped.

pub mod decoder;
pub mod error;
pub mod metadata;
pub mod mmap;
pub mod path;
pub mod reader;
pub mod tree;

pub use crate::decoder::Value;
pub use crate::error::{MmdbError, Result};
pub use crate::metadata::{IpVersion, Metadata, RecordSize};
pub use crate::reader::{LookupOutcome, Reader};

/// Crate version, exposed for `mmdb-dump --version` and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
