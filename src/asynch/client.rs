use atat::asynch::{AtatClient, SimpleClient};
use atat::AtatCmd;
use embassy_time::{with_timeout, Duration};
use embedded_io_async::{Read, ReadReady};

use crate::command::digest::SigfoxDigester;
use crate::command::MAX_CMD_LEN;
use crate::config::Transport;

/// Default capacity of the buffer shared by the outgoing line and the answer.
pub const INGRESS_BUF_SIZE: usize = 128;

/// [`AtatClient`] for a Sigfox module on a serial [`Transport`].
///
/// Every transaction runs through an [`atat::asynch::SimpleClient`] with the
/// [`SigfoxDigester`]. Anything the module sent after an earlier command
/// gave up waiting is drained first, so it can not be taken as the answer to
/// the next one.
///
/// `INGRESS` must hold at least [`MAX_CMD_LEN`] bytes.
pub struct SigfoxClient<T: Transport, const INGRESS: usize = INGRESS_BUF_SIZE> {
    transport: T,
    buf: [u8; INGRESS],
}

impl<T: Transport, const INGRESS: usize> SigfoxClient<T, INGRESS> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            buf: [0; INGRESS],
        }
    }

    pub fn set_baudrate(&mut self, baudrate: u32) {
        self.transport.set_baudrate(baudrate);
    }

    pub fn close(&mut self) {
        self.transport.close();
    }

    /// Run one transaction, waiting at most `timeout` instead of the
    /// command's own deadline.
    pub async fn send_with_timeout<Cmd: AtatCmd>(
        &mut self,
        cmd: &Cmd,
        timeout: Duration,
    ) -> Result<Cmd::Response, atat::Error> {
        with_timeout(timeout, self.send(cmd))
            .await
            .map_err(|_| atat::Error::Timeout)?
    }

    async fn drain(&mut self) -> Result<(), atat::Error> {
        while self.transport.read_ready().map_err(|_| atat::Error::Read)? {
            let n = self
                .transport
                .read(&mut self.buf)
                .await
                .map_err(|_| atat::Error::Read)?;
            if n == 0 {
                break;
            }
            debug!(
                "Dropping late input: {:?}",
                atat::helpers::LossyStr(&self.buf[..n])
            );
        }
        Ok(())
    }
}

impl<T: Transport, const INGRESS: usize> AtatClient for SigfoxClient<T, INGRESS> {
    async fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        debug_assert!(INGRESS >= MAX_CMD_LEN);
        self.drain().await?;

        let mut client = SimpleClient::new(
            &mut self.transport,
            SigfoxDigester::new(INGRESS),
            &mut self.buf,
            atat::Config::default(),
        );
        client.send(cmd).await
    }
}
