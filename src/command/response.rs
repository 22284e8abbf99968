//! Classification of answer lines read back from the module.

pub const AT_OK: &str = "OK";
pub const AT_ERROR: &str = "ERROR";

/// Separates `OK` from the payload in `OK=<payload>`.
pub const PAYLOAD_SEPARATOR: char = '=';

/// Final answer to one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Answer<'a> {
    /// `OK`, with the (possibly empty) payload that followed the separator.
    Ok(&'a str),
    /// `ERROR`
    Error,
    /// Nothing final arrived before the deadline.
    NoAnswer,
}

impl<'a> Answer<'a> {
    /// Payload of an `OK` answer.
    pub fn payload(&self) -> Option<&'a str> {
        match self {
            Answer::Ok(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Classify a single line, without its terminator.
///
/// Returns `None` for lines that are not a final answer (blank lines, the
/// command echo, informational text); the reader keeps waiting after those.
pub fn classify(line: &str) -> Option<Answer<'_>> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line == AT_ERROR {
        return Some(Answer::Error);
    }

    let rest = line.strip_prefix(AT_OK)?;
    if rest.is_empty() {
        return Some(Answer::Ok(""));
    }

    rest.strip_prefix(PAYLOAD_SEPARATOR)
        .map(|payload| Answer::Ok(payload.trim()))
}
