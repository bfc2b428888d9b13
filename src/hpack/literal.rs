//! HPACK primitives for the compression-disabled representation
//! (RFC 7541 §5 and §6.2.2).

use bytes::{BufMut, BytesMut};

/// First octet of a "literal header field without indexing, new name".
const LITERAL_WITHOUT_INDEXING_NEW_NAME: u8 = 0x00;

/// Prefix width of a string length; the eighth bit is the Huffman flag.
const STRING_LENGTH_PREFIX_BITS: u8 = 7;

/// Append `value` as an HPACK integer with an `prefix_bits`-bit prefix.
///
/// `first_byte_flags` supplies the bits above the prefix in the first octet.
pub(crate) fn encode_integer(value: usize, prefix_bits: u8, first_byte_flags: u8, dst: &mut BytesMut) {
    debug_assert!((1..=8).contains(&prefix_bits), "invalid HPACK prefix width");
    let max_prefix = (1usize << prefix_bits) - 1;
    if value < max_prefix {
        dst.put_u8(first_byte_flags | low_octet(value));
        return;
    }

    dst.put_u8(first_byte_flags | low_octet(max_prefix));
    let mut rest = value - max_prefix;
    while rest >= 0x80 {
        dst.put_u8(0x80 | low_octet(rest & 0x7f));
        rest >>= 7;
    }
    dst.put_u8(low_octet(rest));
}

/// Append a raw (non-Huffman) string literal.
pub(crate) fn encode_string(bytes: &[u8], dst: &mut BytesMut) {
    encode_integer(bytes.len(), STRING_LENGTH_PREFIX_BITS, 0x00, dst);
    dst.extend_from_slice(bytes);
}

/// Append one header as a literal field that never touches the dynamic table.
pub(crate) fn encode_literal_field(name: &[u8], value: &[u8], dst: &mut BytesMut) {
    dst.put_u8(LITERAL_WITHOUT_INDEXING_NEW_NAME);
    encode_string(name, dst);
    encode_string(value, dst);
}

fn low_octet(value: usize) -> u8 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "callers mask or bound the value below 256"
    )]
    let octet = value as u8;
    octet
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // Vectors from RFC 7541 Appendix C.1.
    #[rstest]
    #[case(10, 5, vec![0x0a])]
    #[case(1337, 5, vec![0x1f, 0x9a, 0x0a])]
    #[case(42, 8, vec![0x2a])]
    #[case(127, 7, vec![0x7f, 0x00])]
    #[case(126, 7, vec![0x7e])]
    fn integers_match_reference_vectors(
        #[case] value: usize,
        #[case] prefix: u8,
        #[case] expected: Vec<u8>,
    ) {
        let mut dst = BytesMut::new();
        encode_integer(value, prefix, 0, &mut dst);
        assert_eq!(&dst[..], expected.as_slice());
    }

    #[test]
    fn flag_bits_are_preserved_above_the_prefix() {
        let mut dst = BytesMut::new();
        encode_integer(3, 6, 0x40, &mut dst);
        assert_eq!(&dst[..], &[0x43]);
    }

    // RFC 7541 Appendix C.2.1 strings behind the without-indexing opcode.
    #[test]
    fn literal_field_matches_rfc_layout() {
        let mut dst = BytesMut::new();
        encode_literal_field(b"custom-key", b"custom-header", &mut dst);

        let mut expected = vec![0x00, 0x0a];
        expected.extend_from_slice(b"custom-key");
        expected.push(0x0d);
        expected.extend_from_slice(b"custom-header");
        assert_eq!(&dst[..], expected.as_slice());
    }

    #[test]
    fn long_strings_use_multi_octet_lengths() {
        let value = vec![b'v'; 300];
        let mut dst = BytesMut::new();
        encode_string(&value, &mut dst);
        assert_eq!(&dst[..3], &[0x7f, 0xad, 0x01]);
        assert_eq!(dst.len(), 3 + 300);
    }
}
