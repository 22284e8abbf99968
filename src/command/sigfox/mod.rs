//! ### Sigfox Network Commands
//! Uplink transmission over the Sigfox network, radio power and the
//! radio test modes.
//!
//! Binary payloads travel as upper-case hex, two digits per byte.
pub mod responses;

use responses::*;

use super::{sigfox_cmd, Arg, CommandType, NoResponse, SigfoxRequest};

/// Module identifier `AT$ID?`
#[derive(Debug, Clone)]
pub struct GetId;

impl SigfoxRequest for GetId {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "ID";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetId, IdResponse, timeout_ms = 1000);

/// Radio transmit power in dBm `AT$PW=<power>`
#[derive(Debug, Clone)]
pub struct SetPower {
    pub power: u8,
}

impl SigfoxRequest for SetPower {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "PW";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.power.into())].into_iter()
    }
}
sigfox_cmd!(SetPower, NoResponse, timeout_ms = 1000);

/// Radio transmit power in dBm `AT$PW?`
#[derive(Debug, Clone)]
pub struct GetPower;

impl SigfoxRequest for GetPower {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "PW";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetPower, PowerResponse, timeout_ms = 1000);

/// Send an uplink frame `AT$SF=<hex>`
///
/// Best effort, the answer only tells that the module transmitted the frame.
#[derive(Debug, Clone)]
pub struct SendFrame<'a> {
    pub data: &'a [u8],
}

impl SigfoxRequest for SendFrame<'_> {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "SF";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Bytes(self.data)].into_iter()
    }
}
sigfox_cmd!(SendFrame<'_>, NoResponse, timeout_ms = 20_000);

/// Send an uplink frame and wait for the downlink acknowledgment
/// `AT$SF=<hex>,1`
#[derive(Debug, Clone)]
pub struct SendFrameAck<'a> {
    pub data: &'a [u8],
}

impl SigfoxRequest for SendFrameAck<'_> {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "SF";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Bytes(self.data), Arg::Int(1)].into_iter()
    }
}
sigfox_cmd!(SendFrameAck<'_>, NoResponse, timeout_ms = 60_000);

/// Send an uplink frame already encoded as hex `AT$SF=<hex>`
#[derive(Debug, Clone)]
pub struct SendHexFrame<'a> {
    pub hex: &'a str,
}

impl SigfoxRequest for SendHexFrame<'_> {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "SF";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Str(self.hex)].into_iter()
    }
}
sigfox_cmd!(SendHexFrame<'_>, NoResponse, timeout_ms = 20_000);

/// Send an uplink frame already encoded as hex and wait for the downlink
/// acknowledgment `AT$SF=<hex>,1`
#[derive(Debug, Clone)]
pub struct SendHexFrameAck<'a> {
    pub hex: &'a str,
}

impl SigfoxRequest for SendHexFrameAck<'_> {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "SF";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Str(self.hex), Arg::Int(1)].into_iter()
    }
}
sigfox_cmd!(SendHexFrameAck<'_>, NoResponse, timeout_ms = 60_000);

/// Send a keep-alive bit `AT$SB=1`
#[derive(Debug, Clone)]
pub struct SendKeepAlive;

impl SigfoxRequest for SendKeepAlive {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "SB";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(1)].into_iter()
    }
}
sigfox_cmd!(SendKeepAlive, NoResponse, timeout_ms = 20_000);

/// Periodic keep-alive `AT$KA=<period>`
///
/// The module sends a keep-alive frame on its own every `period` hours,
/// 0 disables it.
#[derive(Debug, Clone)]
pub struct SetKeepAlivePeriod {
    pub period: u8,
}

impl SigfoxRequest for SetKeepAlivePeriod {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "KA";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.period.into())].into_iter()
    }
}
sigfox_cmd!(SetKeepAlivePeriod, NoResponse, timeout_ms = 1000);

/// Radio test transmission `AT$ST=<count>,<period>,<channel>`
///
/// Sends `count` test frames, `period` seconds apart. A negative channel
/// lets the module pick a random one.
#[derive(Debug, Clone)]
pub struct TestTransmit {
    pub count: u16,
    pub period: u16,
    pub channel: i32,
}

impl SigfoxRequest for TestTransmit {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "ST";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [
            Arg::Int(self.count.into()),
            Arg::Int(self.period.into()),
            Arg::Int(self.channel.into()),
        ]
        .into_iter()
    }
}
sigfox_cmd!(TestTransmit, NoResponse, timeout_ms = 1000);

/// Continuous wave test mode `AT$CW=<frequency>,<enable>`
#[derive(Debug, Clone)]
pub struct ContinuousWave {
    /// Carrier frequency in Hz
    pub frequency: u32,
    pub enable: bool,
}

impl SigfoxRequest for ContinuousWave {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "CW";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.frequency.into()), Arg::Int(self.enable.into())].into_iter()
    }
}
sigfox_cmd!(ContinuousWave, NoResponse, timeout_ms = 1000);
