//! Minimal CBOR (RFC 8949) writer for the leaf items of a message.
//!
//! Only the three item kinds the message uses are supported: unsigned
//! integers (major type 0), negative integers (major type 1) and byte
//! strings (major type 2). Headers always use the shortest form:
//!
//! ```text
//! argument < 24        -> 1 byte   (major << 5 | argument)
//! argument <= u8::MAX  -> 2 bytes  (major << 5 | 24, u8)
//! argument <= u16::MAX -> 3 bytes  (major << 5 | 25, u16 BE)
//! argument <= u32::MAX -> 5 bytes  (major << 5 | 26, u32 BE)
//! otherwise            -> 9 bytes  (major << 5 | 27, u64 BE)
//! ```

const MAJOR_UNSIGNED: u8 = 0;
const MAJOR_NEGATIVE: u8 = 1;
const MAJOR_BYTES: u8 = 2;

fn write_header(buf: &mut Vec<u8>, major: u8, argument: u64) {
    let major = major << 5;
    if argument < 24 {
        buf.push(major | argument as u8);
    } else if let Ok(v) = u8::try_from(argument) {
        buf.push(major | 24);
        buf.push(v);
    } else if let Ok(v) = u16::try_from(argument) {
        buf.push(major | 25);
        buf.extend_from_slice(&v.to_be_bytes());
    } else if let Ok(v) = u32::try_from(argument) {
        buf.push(major | 26);
        buf.extend_from_slice(&v.to_be_bytes());
    } else {
        buf.push(major | 27);
        buf.extend_from_slice(&argument.to_be_bytes());
    }
}

/// Appends an unsigned integer item.
pub fn write_uint(buf: &mut Vec<u8>, value: u64) {
    write_header(buf, MAJOR_UNSIGNED, value);
}

/// Appends a signed integer item. Negative values use major type 1 with
/// argument `-1 - value`.
pub fn write_int(buf: &mut Vec<u8>, value: i64) {
    if value >= 0 {
        write_header(buf, MAJOR_UNSIGNED, value as u64);
    } else {
        // -1 - value never overflows for negative i64: it lies in 0..=i64::MAX.
        write_header(buf, MAJOR_NEGATIVE, (-1 - value) as u64);
    }
}

/// Appends a definite-length byte string item.
pub fn write_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    write_header(buf, MAJOR_BYTES, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}
