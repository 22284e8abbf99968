//! ### LAN Commands
//! Local point-to-point radio mode: addressing, masking, frequency, power
//! and the packet exchange itself.
//!
//! A LAN frame matches when `(frame_address & mask) == (own_address & mask)`.
pub mod responses;

use responses::*;

use super::{sigfox_cmd, Arg, CommandType, NoResponse, SigfoxRequest};

/// Maximum LAN payload, in bytes.
pub const LAN_MAX_PAYLOAD: usize = 17;

/// LAN address `AT$LA=<hex>`
#[derive(Debug, Clone)]
pub struct SetAddress {
    pub address: u32,
}

impl SigfoxRequest for SetAddress {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "LA";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Hex(self.address)].into_iter()
    }
}
sigfox_cmd!(SetAddress, NoResponse, timeout_ms = 1000);

/// LAN address `AT$LA?`
#[derive(Debug, Clone)]
pub struct GetAddress;

impl SigfoxRequest for GetAddress {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "LA";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetAddress, AddressResponse, timeout_ms = 1000);

/// LAN address mask `AT$LM=<hex>`
#[derive(Debug, Clone)]
pub struct SetMask {
    pub mask: u32,
}

impl SigfoxRequest for SetMask {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "LM";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Hex(self.mask)].into_iter()
    }
}
sigfox_cmd!(SetMask, NoResponse, timeout_ms = 1000);

/// LAN address mask `AT$LM?`
#[derive(Debug, Clone)]
pub struct GetMask;

impl SigfoxRequest for GetMask {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "LM";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetMask, MaskResponse, timeout_ms = 1000);

/// LAN frequency in Hz `AT$LF=<frequency>`
#[derive(Debug, Clone)]
pub struct SetFrequency {
    pub frequency: u32,
}

impl SigfoxRequest for SetFrequency {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "LF";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.frequency.into())].into_iter()
    }
}
sigfox_cmd!(SetFrequency, NoResponse, timeout_ms = 1000);

/// LAN frequency in Hz `AT$LF?`
#[derive(Debug, Clone)]
pub struct GetFrequency;

impl SigfoxRequest for GetFrequency {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "LF";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetFrequency, FrequencyResponse, timeout_ms = 1000);

/// LAN transmit power in dBm `AT$LP=<power>`
#[derive(Debug, Clone)]
pub struct SetPowerLan {
    pub power: u8,
}

impl SigfoxRequest for SetPowerLan {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "LP";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.power.into())].into_iter()
    }
}
sigfox_cmd!(SetPowerLan, NoResponse, timeout_ms = 1000);

/// LAN transmit power in dBm `AT$LP?`
#[derive(Debug, Clone)]
pub struct GetPowerLan;

impl SigfoxRequest for GetPowerLan {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "LP";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetPowerLan, LanPowerResponse, timeout_ms = 1000);

/// Send a LAN frame `AT$SL=<hex>`
///
/// Callers check the [`LAN_MAX_PAYLOAD`] bound before encoding.
#[derive(Debug, Clone)]
pub struct SendLan<'a> {
    pub data: &'a [u8],
}

impl SigfoxRequest for SendLan<'_> {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "SL";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Bytes(self.data)].into_iter()
    }
}
sigfox_cmd!(SendLan<'_>, NoResponse, timeout_ms = 5000);

/// Send a LAN frame already encoded as hex `AT$SL=<hex>`
#[derive(Debug, Clone)]
pub struct SendLanHex<'a> {
    pub hex: &'a str,
}

impl SigfoxRequest for SendLanHex<'_> {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "SL";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Str(self.hex)].into_iter()
    }
}
sigfox_cmd!(SendLanHex<'_>, NoResponse, timeout_ms = 5000);

/// Listen for a single LAN frame `AT$RL=<seconds>`
///
/// The module answers with the received packet, or `ERROR` when nothing
/// arrived within `wait_secs`. The command itself carries no deadline, the
/// caller bounds the wait with [`Receive::timeout_ms`].
#[derive(Debug, Clone)]
pub struct Receive {
    pub wait_secs: u16,
}

impl Receive {
    /// Listening window plus one second for the answer itself.
    pub fn timeout_ms(&self) -> u32 {
        (u32::from(self.wait_secs) + 1) * 1000
    }
}

impl SigfoxRequest for Receive {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "RL";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.wait_secs.into())].into_iter()
    }
}
sigfox_cmd!(Receive, PacketResponse, timeout_ms = u32::MAX);

/// LAN receive mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxMode {
    Disabled = 0,
    /// Keep listening and buffer every matching frame.
    MultiPacket = 2,
}

/// LAN receive mode `AT$RX=<mode>`
#[derive(Debug, Clone)]
pub struct SetRxMode {
    pub mode: RxMode,
}

impl SigfoxRequest for SetRxMode {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "RX";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.mode as i64)].into_iter()
    }
}
sigfox_cmd!(SetRxMode, NoResponse, timeout_ms = 1000);

/// Next buffered frame in multi-packet mode `AT$RX?`
///
/// Blocks in the module until a frame arrives, the caller bounds the wait.
#[derive(Debug, Clone)]
pub struct GetPacket;

impl SigfoxRequest for GetPacket {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "RX";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetPacket, PacketResponse, timeout_ms = u32::MAX);
