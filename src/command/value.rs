//! Typed value parsers for the payload of an `OK=<payload>` answer.

use crate::error::Error;

/// Hex encoded unsigned 32-bit value, e.g. the module identifier or a LAN
/// address. At most eight digits, nothing but hex digits.
pub fn parse_hex(payload: &str) -> Result<u32, Error> {
    if payload.is_empty()
        || payload.len() > 8
        || !payload.bytes().all(|c| c.is_ascii_hexdigit())
    {
        return Err(Error::MalformedPayload);
    }
    u32::from_str_radix(payload, 16).map_err(|_| Error::MalformedPayload)
}

fn decimal_digits(payload: &str) -> Result<&str, Error> {
    if payload.is_empty() || !payload.bytes().all(|c| c.is_ascii_digit()) {
        return Err(Error::MalformedPayload);
    }
    Ok(payload)
}

/// Unsigned decimal value in `[0, 255]`.
pub fn parse_u8(payload: &str) -> Result<u8, Error> {
    decimal_digits(payload)?
        .parse()
        .map_err(|_| Error::MalformedPayload)
}

/// Unsigned decimal 32-bit value.
pub fn parse_u32(payload: &str) -> Result<u32, Error> {
    decimal_digits(payload)?
        .parse()
        .map_err(|_| Error::MalformedPayload)
}

/// Signed decimal 32-bit value, used by the downlink frequency offset.
pub fn parse_i32(payload: &str) -> Result<i32, Error> {
    let digits = payload.strip_prefix('-').unwrap_or(payload);
    decimal_digits(digits)?;
    payload.parse().map_err(|_| Error::MalformedPayload)
}
