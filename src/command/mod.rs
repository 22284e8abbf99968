//! AT Commands for Sigfox radio modules
//!
//! Every command line has one of four shapes:
//!
//! | Type      | Line                                |
//! |-----------|-------------------------------------|
//! | Attention | `AT`                                |
//! | Set       | `AT$<code>=<arg>,<arg>,...`         |
//! | Read      | `AT$<code>?`                        |
//! | Display   | `AT/<code>?`                        |
//!
//! all terminated by `\r\n`. Answers are single lines, `OK`, `OK=<payload>`
//! or `ERROR`.

pub mod digest;
pub mod fcc;
pub mod general;
pub mod lan;
pub mod response;
pub mod sigfox;
pub mod value;

use core::fmt::Write;

use heapless::String;

use crate::error::Error;

/// Capacity of the command buffer, terminator included.
pub const MAX_CMD_LEN: usize = 100;

pub const AT_HEADER: &str = "AT$";
pub const AT_HEADER_SLASH: &str = "AT/";
pub const AT_EOL: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandType {
    /// `AT`
    Attention,
    /// `AT$<cmd>=<value>`
    Set,
    /// `AT$<cmd>?`
    Read,
    /// `AT/<cmd>?`
    Display,
}

/// One positional argument of a SET command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arg<'a> {
    /// Written verbatim.
    Str(&'a str),
    /// Decimal.
    Int(i64),
    /// Eight upper-case hex digits.
    Hex(u32),
    /// Binary payload, two upper-case hex digits per byte.
    Bytes(&'a [u8]),
}

impl<'a> Arg<'a> {
    fn write_to<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        match self {
            Arg::Str(s) => out.write_str(s),
            Arg::Int(i) => write!(out, "{}", i),
            Arg::Hex(h) => write!(out, "{:08X}", h),
            Arg::Bytes(data) => crate::hex::write_hex(out, data),
        }
    }
}

/// Build one command line, terminator included.
///
/// Fails with [`Error::Overflow`] if the line does not fit in
/// [`MAX_CMD_LEN`] bytes.
pub fn encode<'a>(
    command_type: CommandType,
    code: &str,
    args: impl IntoIterator<Item = Arg<'a>>,
) -> Result<String<MAX_CMD_LEN>, Error> {
    let mut line = String::new();
    write_line(&mut line, command_type, code, args).map_err(|_| Error::Overflow)?;
    Ok(line)
}

fn write_line<'a, W: Write>(
    out: &mut W,
    command_type: CommandType,
    code: &str,
    args: impl IntoIterator<Item = Arg<'a>>,
) -> core::fmt::Result {
    match command_type {
        CommandType::Attention => out.write_str("AT")?,
        CommandType::Set => {
            out.write_str(AT_HEADER)?;
            out.write_str(code)?;
            for (i, arg) in args.into_iter().enumerate() {
                out.write_char(if i == 0 { '=' } else { ',' })?;
                arg.write_to(out)?;
            }
        }
        CommandType::Read => write!(out, "{}{}?", AT_HEADER, code)?,
        CommandType::Display => write!(out, "{}{}?", AT_HEADER_SLASH, code)?,
    }
    out.write_str(AT_EOL)
}

/// Shape of a module command: its type, its code and its ordered arguments.
pub trait SigfoxRequest {
    const TYPE: CommandType;
    const CODE: &'static str;

    fn args(&self) -> impl Iterator<Item = Arg<'_>>;

    fn encode(&self) -> Result<String<MAX_CMD_LEN>, Error> {
        encode(Self::TYPE, Self::CODE, self.args())
    }
}

/// Typed value carried in the payload of an `OK` answer.
pub trait FromPayload: Sized {
    fn from_payload(payload: &str) -> Result<Self, Error>;
}

/// Parse step shared by every command: `ERROR` stays an error, an `OK`
/// payload is handed to the typed parser.
pub fn parse_response<R: FromPayload>(
    resp: Result<&[u8], atat::InternalError>,
) -> Result<R, atat::Error> {
    let payload = resp.map_err(|_| atat::Error::Error)?;
    let payload = core::str::from_utf8(payload).map_err(|_| atat::Error::Parse)?;
    R::from_payload(payload).map_err(|_| atat::Error::Parse)
}

/// Implements [`atat::AtatCmd`] for a [`SigfoxRequest`].
///
/// `write` returns 0 when the line does not fit in the buffer.
macro_rules! sigfox_cmd {
    ($cmd:ty, $resp:ty, timeout_ms = $timeout:expr) => {
        impl atat::AtatCmd for $cmd {
            type Response = $resp;

            const MAX_LEN: usize = $crate::command::MAX_CMD_LEN;

            const MAX_TIMEOUT_MS: u32 = $timeout;

            fn write(&self, buf: &mut [u8]) -> usize {
                match $crate::command::SigfoxRequest::encode(self) {
                    Ok(line) if line.len() <= buf.len() => {
                        buf[..line.len()].copy_from_slice(line.as_bytes());
                        line.len()
                    }
                    _ => 0,
                }
            }

            fn parse(
                &self,
                resp: Result<&[u8], atat::InternalError>,
            ) -> core::result::Result<Self::Response, atat::Error> {
                $crate::command::parse_response(resp)
            }
        }
    };
}
pub(crate) use sigfox_cmd;

/// Answer without a payload, or one the caller does not need.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoResponse;

impl atat::AtatResp for NoResponse {}

impl FromPayload for NoResponse {
    fn from_payload(_payload: &str) -> Result<Self, Error> {
        Ok(NoResponse)
    }
}
