//! Scripted stand-ins for the serial port and the power pin.
use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::config::{SigfoxConfig, Transport};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct Inner {
    /// One answer per written command line, in order.
    script: VecDeque<String>,
    /// Emulated module registers, `None` unless enabled.
    registers: Option<HashMap<String, String>>,
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    written: Vec<String>,
    baudrate: Option<u32>,
    closed: bool,
}

impl Inner {
    fn on_line(&mut self, line: String) {
        let answer = match self.script.pop_front() {
            Some(answer) => Some(answer),
            None => self
                .registers
                .as_mut()
                .map(|registers| register_answer(registers, &line)),
        };
        self.written.push(line);

        if let Some(answer) = answer {
            self.rx.extend(answer.bytes());
        }
    }
}

/// A module that keeps whatever is SET and hands it back on READ.
fn register_answer(registers: &mut HashMap<String, String>, line: &str) -> String {
    let line = line.trim_end();
    if line == "AT" {
        return "OK\r\n".into();
    }

    if let Some(code) = line
        .strip_prefix("AT$")
        .or_else(|| line.strip_prefix("AT/"))
        .and_then(|l| l.strip_suffix('?'))
    {
        return match registers.get(code) {
            Some(value) => format!("OK={}\r\n", value),
            None => "ERROR\r\n".into(),
        };
    }

    match line.strip_prefix("AT$").map(|l| l.split_once('=')) {
        Some(Some((code, value))) => {
            registers.insert(code.into(), value.into());
            "OK\r\n".into()
        }
        Some(None) => "OK\r\n".into(),
        None => "ERROR\r\n".into(),
    }
}

/// In-memory serial port.
///
/// Clones share the same state, so a test keeps one handle while the
/// driver owns the other. Reads pend forever once the answer is drained.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every command line from emulated registers once the script is
    /// exhausted.
    pub fn with_registers() -> Self {
        let mock = Self::new();
        mock.inner.borrow_mut().registers = Some(HashMap::new());
        mock
    }

    /// Preset a register, e.g. `("ID", "0001A2B3")`.
    pub fn set_register(&self, code: &str, value: &str) {
        if let Some(registers) = self.inner.borrow_mut().registers.as_mut() {
            registers.insert(code.into(), value.into());
        }
    }

    /// Queue the raw answer to the next command line.
    pub fn reply(&self, answer: &str) {
        self.inner.borrow_mut().script.push_back(answer.into());
    }

    /// Bytes showing up on the port unrequested, e.g. an answer arriving
    /// after its command timed out.
    pub fn inject(&self, data: &str) {
        self.inner.borrow_mut().rx.extend(data.bytes());
    }

    /// Swallow the next command line without answering it.
    pub fn silence(&self) {
        self.reply("");
    }

    pub fn written(&self) -> Vec<String> {
        self.inner.borrow().written.clone()
    }

    pub fn baudrate(&self) -> Option<u32> {
        self.inner.borrow().baudrate
    }

    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }
}

impl embedded_io_async::ErrorType for MockTransport {
    type Error = Infallible;
}

impl embedded_io_async::Read for MockTransport {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = {
            let mut inner = self.inner.borrow_mut();
            let n = buf.len().min(inner.rx.len());
            for (dst, src) in buf.iter_mut().zip(inner.rx.drain(..n)) {
                *dst = src;
            }
            n
        };

        if n == 0 {
            core::future::pending::<()>().await;
        }
        Ok(n)
    }
}

impl embedded_io_async::ReadReady for MockTransport {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.inner.borrow().rx.is_empty())
    }
}

impl embedded_io_async::Write for MockTransport {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let mut inner = self.inner.borrow_mut();
        inner.tx.extend_from_slice(buf);

        while let Some(pos) = inner.tx.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = inner.tx.drain(..=pos).collect();
            inner.on_line(String::from_utf8_lossy(&line).into_owned());
        }
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Transport for MockTransport {
    fn set_baudrate(&mut self, baudrate: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.baudrate = Some(baudrate);
        inner.closed = false;
    }

    fn close(&mut self) {
        self.inner.borrow_mut().closed = true;
    }
}

/// Output pin remembering its level.
#[derive(Clone, Default)]
pub struct MockPin {
    high: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn is_high(&self) -> bool {
        self.high.get()
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}

/// Board with the module's power line on a [`MockPin`].
#[derive(Clone, Default)]
pub struct MockBoard {
    pub pin: MockPin,
}

impl SigfoxConfig for MockBoard {
    type PowerPin = MockPin;

    const POWER_ON_DELAY: embassy_time::Duration = embassy_time::Duration::from_millis(1);

    fn power_pin(&mut self) -> Option<&mut Self::PowerPin> {
        Some(&mut self.pin)
    }
}
