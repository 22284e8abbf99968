/// Outcome of a failed device operation.
///
/// Every variant is recoverable: the driver stays usable for the next call,
/// and callers decide whether to retry, skip or ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The module answered `ERROR`.
    ModuleError,
    /// No final answer was received before the command timed out.
    NoResponse,
    /// The module answered `OK`, but the payload did not parse as the
    /// expected type.
    MalformedPayload,
    /// The serial port has not been opened with `on`.
    TransportUnavailable,
    /// A command line or a response line did not fit its buffer.
    Overflow,
    /// A LAN payload is longer than 17 bytes.
    PayloadTooLong,
    /// An argument can not be expressed in the command grammar.
    InvalidArgument,
    /// Reading from or writing to the serial port failed.
    Io,
    /// The power pin could not be driven.
    Pin,
}

impl From<atat::Error> for Error {
    fn from(e: atat::Error) -> Self {
        match e {
            atat::Error::Error => Error::ModuleError,
            atat::Error::Timeout => Error::NoResponse,
            atat::Error::Parse | atat::Error::InvalidResponse => Error::MalformedPayload,
            _ => Error::Io,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ModuleError => f.write_str("module answered ERROR"),
            Error::NoResponse => f.write_str("no answer from module"),
            Error::MalformedPayload => f.write_str("malformed response payload"),
            Error::TransportUnavailable => f.write_str("serial transport not open"),
            Error::Overflow => f.write_str("buffer capacity exceeded"),
            Error::PayloadTooLong => f.write_str("payload too long"),
            Error::InvalidArgument => f.write_str("invalid command argument"),
            Error::Io => f.write_str("serial I/O failed"),
            Error::Pin => f.write_str("power pin failure"),
        }
    }
}
