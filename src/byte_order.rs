//! Helpers for explicit network byte-order conversions.
//!
//! HTTP/2 writes every multi-octet field big-endian. Keeping the conversions
//! here scopes the Clippy expectations to one place.

/// Largest value representable in the 24-bit frame length field.
pub const MAX_U24: u32 = 0x00ff_ffff;

/// Serialise a `u16` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use h2seq::byte_order::write_network_u16;
///
/// assert_eq!(write_network_u16(0x1234), [0x12, 0x34]);
/// ```
#[must_use]
pub fn write_network_u16(value: u16) -> [u8; 2] {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    value.to_be_bytes()
}

/// Serialise the low 24 bits of `value` in network byte order.
///
/// Bits above the 24th are discarded; callers check against [`MAX_U24`]
/// first.
///
/// # Examples
///
/// ```
/// use h2seq::byte_order::write_network_u24;
///
/// assert_eq!(write_network_u24(0x12_3456), [0x12, 0x34, 0x56]);
/// ```
#[must_use]
pub fn write_network_u24(value: u32) -> [u8; 3] {
    let [_, hi, mid, lo] = write_network_u32(value);
    [hi, mid, lo]
}

/// Parse a network-order 24-bit integer.
///
/// # Examples
///
/// ```
/// use h2seq::byte_order::read_network_u24;
///
/// assert_eq!(read_network_u24([0x12, 0x34, 0x56]), 0x12_3456);
/// ```
#[must_use]
pub fn read_network_u24(bytes: [u8; 3]) -> u32 {
    let [hi, mid, lo] = bytes;
    read_network_u32([0, hi, mid, lo])
}

/// Serialise a `u32` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use h2seq::byte_order::write_network_u32;
///
/// assert_eq!(write_network_u32(0x1234_5678), [0x12, 0x34, 0x56, 0x78]);
/// ```
#[must_use]
pub fn write_network_u32(value: u32) -> [u8; 4] {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    value.to_be_bytes()
}

/// Parse a network-order `u32` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use h2seq::byte_order::read_network_u32;
///
/// assert_eq!(read_network_u32([0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
/// ```
#[must_use]
pub fn read_network_u32(bytes: [u8; 4]) -> u32 {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    u32::from_be_bytes(bytes)
}

/// Serialise a `u64` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use h2seq::byte_order::write_network_u64;
///
/// assert_eq!(write_network_u64(1), [0, 0, 0, 0, 0, 0, 0, 1]);
/// ```
#[must_use]
pub fn write_network_u64(value: u64) -> [u8; 8] {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    value.to_be_bytes()
}

/// Reinterpret a signed 32-bit value as its two's complement bit pattern in
/// network byte order.
///
/// # Examples
///
/// ```
/// use h2seq::byte_order::write_network_i32;
///
/// assert_eq!(write_network_i32(-1), [0xff, 0xff, 0xff, 0xff]);
/// ```
#[must_use]
pub fn write_network_i32(value: i32) -> [u8; 4] {
    #[expect(
        clippy::big_endian_bytes,
        reason = "Network byte order requires big-endian bytes."
    )]
    value.to_be_bytes()
}
