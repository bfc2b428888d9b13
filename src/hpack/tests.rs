//! Tests for both header-block encoding modes.

use fluke_hpack::Decoder;
use rstest::{fixture, rstest};

use super::*;
use crate::header::{Header, to_headers};

#[fixture]
fn request_headers() -> Vec<Header<'static>> {
    to_headers([
        (":method", "GET"),
        (":scheme", "https"),
        (":path", "/index.html"),
        ("x-trace", "abc123"),
    ])
}

fn decode(block: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
    Decoder::new()
        .decode(block)
        .expect("block should decode with a fresh decoder")
}

fn as_pairs(headers: &[Header<'_>]) -> Vec<(Vec<u8>, Vec<u8>)> {
    headers
        .iter()
        .map(|(n, v)| (n.as_bytes().to_vec(), v.as_bytes().to_vec()))
        .collect()
}

#[rstest]
#[case(HeaderCompression::Enabled)]
#[case(HeaderCompression::Disabled)]
fn blocks_decode_to_the_input_list(
    request_headers: Vec<Header<'static>>,
    #[case] compression: HeaderCompression,
) {
    let mut encoder = HpackEncoder::new(compression);
    assert_eq!(encoder.compression(), compression);

    let block = encoder.encode(&request_headers);
    assert_eq!(decode(&block), as_pairs(&request_headers));
}

#[rstest]
fn disabled_mode_ignores_previous_blocks(request_headers: Vec<Header<'static>>) {
    let mut encoder = HpackEncoder::new(HeaderCompression::Disabled);
    let first = encoder.encode(&request_headers);
    let second = encoder.encode(&request_headers);

    assert_eq!(first, second);
    assert_eq!(first, encode_uncompressed(&request_headers));
}

#[rstest]
fn enabled_mode_reuses_its_dynamic_table(request_headers: Vec<Header<'static>>) {
    let mut encoder = HpackEncoder::new(HeaderCompression::Enabled);
    let first = encoder.encode(&request_headers);
    let second = encoder.encode(&request_headers);

    assert!(
        second.len() < first.len(),
        "second block ({} bytes) should index entries added by the first ({} bytes)",
        second.len(),
        first.len()
    );
}

#[rstest]
fn compressed_blocks_are_smaller_than_literal_ones(request_headers: Vec<Header<'static>>) {
    let compressed = HpackEncoder::default().encode(&request_headers);
    let literal = encode_uncompressed(&request_headers);
    assert!(compressed.len() < literal.len());
}

#[test]
fn empty_list_encodes_to_empty_block() {
    assert!(encode_uncompressed(&[]).is_empty());
    assert!(HpackEncoder::default().encode(&[]).is_empty());
}

#[test]
fn encode_into_appends_without_clearing() {
    let mut dst = BytesMut::from(&b"xy"[..]);
    HpackEncoder::new(HeaderCompression::Disabled).encode_into(&to_headers([("a", "b")]), &mut dst);
    assert_eq!(&dst[..], &[b'x', b'y', 0x00, 0x01, b'a', 0x01, b'b']);
}
