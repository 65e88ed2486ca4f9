//! Synthetic MMDB buffer builder shared by the integration tests.
//!
//! There's no real `.mmdb` fixture in this workspace to `include_bytes!`,
//! so tests build small buffers by hand instead, the same way the unit
//! tests in `src/tree.rs` and `src/metadata.rs` already do for the
//! pieces they own. This module just generalizes that into reusable
//! encoders so the integration tests can describe whole files instead of
//! repeating byte-layout arithmetic per test.
//!
//! This lives under `tests/` on purpose: it knows how to *write* MMDB
//! bytes, which the library itself deliberately does not (writing
//! databases is out of scope for `mmdb-query`).

#![allow(dead_code)]

pub const MARKER: &[u8] = b"\xAB\xCD\xEFMaxMind.com";

pub fn encode_string(s: &str) -> Vec<u8> {
    encode_sized(2, s.len(), s.as_bytes())
}

pub fn encode_bytes(bytes: &[u8]) -> Vec<u8> {
    encode_sized(4, bytes.len(), bytes)
}

pub fn encode_uint16(n: u16) -> Vec<u8> {
    encode_sized(5, 2, &n.to_be_bytes())
}

pub fn encode_uint32(n: u32) -> Vec<u8> {
    encode_sized(6, 4, &n.to_be_bytes())
}

pub fn encode_uint64(n: u64) -> Vec<u8> {
    encode_sized(9, 8, &n.to_be_bytes())
}

pub fn encode_int32(n: i32) -> Vec<u8> {
    encode_sized(8, 4, &n.to_be_bytes())
}

pub fn encode_double(n: f64) -> Vec<u8> {
    encode_sized(3, 8, &n.to_be_bytes())
}

pub fn encode_float(n: f32) -> Vec<u8> {
    encode_sized(15, 4, &n.to_be_bytes())
}

pub fn encode_bool(b: bool) -> Vec<u8> {
    // Boolean's size field IS the value (0 or 1); no payload bytes follow.
    encode_control(14, if b { 1 } else { 0 })
}

/// `entries` are already-encoded `(key, value)` pairs in iteration order.
pub fn encode_map(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut buf = encode_control(7, entries.len());
    for (key, value) in entries {
        buf.extend_from_slice(&encode_string(key));
        buf.extend_from_slice(value);
    }
    buf
}

/// `elements` are already-encoded values in order.
pub fn encode_array(elements: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = encode_control(11, elements.len());
    for element in elements {
        buf.extend_from_slice(element);
    }
    buf
}

/// A 2-byte-header (kind 0) pointer to `target` (an offset into the data
/// section).
pub fn encode_pointer(target: usize) -> Vec<u8> {
    assert!(target < 2048, "kind-0 pointer only addresses the first 2048 bytes");
    let low = ((target >> 8) & 0x07) as u8;
    vec![0x20 | low, (target & 0xFF) as u8]
}

fn encode_control(tag: u8, size: usize) -> Vec<u8> {
    // Only tags 0..=15 with sizes small enough for a single-byte field are
    // needed by these tests; the library's own control-byte decoding is
    // exercised far more thoroughly by `src/decoder.rs`'s unit tests.
    assert!(size < 29, "test helper only supports small literal sizes");
    let (raw_tag, extra) = if tag < 8 { (tag, None) } else { (0u8, Some(tag - 7)) };
    let mut buf = vec![(raw_tag << 5) | size as u8];
    if let Some(ext) = extra {
        buf.push(ext);
    }
    buf
}

fn encode_sized(tag: u8, size: usize, payload: &[u8]) -> Vec<u8> {
    let mut buf = encode_control(tag, size);
    buf.extend_from_slice(payload);
    buf
}

/// Packs `records` (one `(left, right)` pair per node) into a 24-bit-record
/// search tree, returning the tree bytes followed by the 16-byte separator.
pub fn build_tree_24(records: &[(u32, u32)]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(records.len() * 6 + 16);
    for &(left, right) in records {
        buf.extend_from_slice(&left.to_be_bytes()[1..]);
        buf.extend_from_slice(&right.to_be_bytes()[1..]);
    }
    buf.extend_from_slice(&[0u8; 16]);
    buf
}

/// Assembles a complete MMDB buffer: `tree_and_separator` + `data_section`
/// + marker + metadata map (`node_count`/`record_size`/`ip_version` plus
/// any extra keys).
pub fn build_file(
    tree_and_separator: &[u8],
    data_section: &[u8],
    node_count: u32,
    record_size_bits: u32,
    ip_version: u32,
    extra_metadata: &[(&str, Vec<u8>)],
) -> Vec<u8> {
    let mut file = Vec::new();
    file.extend_from_slice(tree_and_separator);
    file.extend_from_slice(data_section);
    file.extend_from_slice(MARKER);

    let mut entries = vec![
        ("node_count", encode_uint32(node_count)),
        ("record_size", encode_uint32(record_size_bits)),
        ("ip_version", encode_uint32(ip_version)),
    ];
    entries.extend_from_slice(extra_metadata);
    file.extend_from_slice(&encode_map(&entries));

    file
}

/// A minimal single-node, 24-bit-record, IPv4 database where both tree
/// records point straight at `data_section`'s first value — so every IPv4
/// address matches with a /1 prefix.
pub fn single_node_v4_database(data_section: &[u8]) -> Vec<u8> {
    let node_count = 1u32;
    let data_pointer = node_count + 16; // record value for data_offset 0
    let tree = build_tree_24(&[(data_pointer, data_pointer)]);
    build_file(&tree, data_section, node_count, 24, 4, &[])
}
