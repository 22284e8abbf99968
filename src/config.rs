use embassy_time::Duration;
use embedded_hal::digital::OutputPin;
use embedded_io_async::{Read, ReadReady, Write};

/// Baud rate of the module's serial interface.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Board wiring of one Sigfox module.
///
/// Which UART and which power line the module hangs off is decided by the
/// [`Transport`] and the pin handed out here.
pub trait SigfoxConfig {
    type PowerPin: OutputPin;

    // Transport settings
    const BAUD_RATE: u32 = DEFAULT_BAUD_RATE;

    /// Time the module needs after being powered before it accepts commands.
    const POWER_ON_DELAY: Duration = Duration::from_millis(100);

    fn power_pin(&mut self) -> Option<&mut Self::PowerPin> {
        None
    }
}

/// Serial port of the module.
///
/// `ReadReady` lets the client drop answers that arrive after their
/// command timed out.
pub trait Transport: Write + Read + ReadReady {
    fn set_baudrate(&mut self, baudrate: u32);

    /// Release the serial port, e.g. before the board goes to sleep.
    fn close(&mut self) {}
}
