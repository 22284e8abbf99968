use atat::{DigestResult, Digester, InternalError};

use super::response::{classify, Answer};

/// Digester for the single line `OK[=payload]` / `ERROR` answers.
///
/// Lines that are not a final answer (blank lines, the command echo,
/// banners) are swallowed. A buffer filled up without any line terminator is
/// dropped as a whole, so the reader can make progress again.
#[derive(Debug)]
pub struct SigfoxDigester {
    capacity: usize,
}

impl SigfoxDigester {
    /// `capacity` is the size of the ingress buffer handed to the digester.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Digester for SigfoxDigester {
    fn digest<'a>(&mut self, buf: &'a [u8]) -> (DigestResult<'a>, usize) {
        let mut start = 0;

        while let Some(len) = buf[start..].iter().position(|&b| b == b'\n') {
            let line = &buf[start..start + len];
            let end = start + len + 1;

            match core::str::from_utf8(line).ok().and_then(classify) {
                Some(Answer::Ok(payload)) => {
                    debug!("Answer: OK {:?}", payload);
                    return (DigestResult::Response(Ok(payload.as_bytes())), end);
                }
                Some(Answer::Error) => {
                    debug!("Answer: ERROR");
                    return (DigestResult::Response(Err(InternalError::Error)), end);
                }
                _ => {
                    if line.iter().any(|b| !b.is_ascii_whitespace()) {
                        trace!("Ignoring line: {:?}", atat::helpers::LossyStr(line));
                    }
                }
            }

            start = end;
        }

        if start == 0 && buf.len() >= self.capacity {
            warn!("Ingress buffer full without a line terminator, dropping it");
            return (DigestResult::None, buf.len());
        }

        (DigestResult::None, start)
    }
}
