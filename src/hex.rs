//! Hex helpers for the ASCII representation of binary payloads.

use core::fmt::Write;

use heapless::Vec;

use crate::error::Error;

/// Write `data` as upper-case hex, two digits per byte.
pub(crate) fn write_hex<W: Write>(out: &mut W, data: &[u8]) -> core::fmt::Result {
    data.iter().try_for_each(|b| write!(out, "{:02X}", b))
}

/// Is `s` a non-empty, even length string of hex digits?
pub(crate) fn is_hex_bytes(s: &str) -> bool {
    !s.is_empty() && s.len() % 2 == 0 && s.bytes().all(|c| c.is_ascii_hexdigit())
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode a hex string into a bounded byte buffer.
pub(crate) fn decode<const N: usize>(s: &str) -> Result<Vec<u8, N>, Error> {
    if s.len() % 2 != 0 {
        return Err(Error::MalformedPayload);
    }

    let mut out = Vec::new();
    for pair in s.as_bytes().chunks(2) {
        let hi = nibble(pair[0]).ok_or(Error::MalformedPayload)?;
        let lo = nibble(pair[1]).ok_or(Error::MalformedPayload)?;
        out.push((hi << 4) | lo).map_err(|_| Error::Overflow)?;
    }
    Ok(out)
}
