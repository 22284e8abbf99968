//! ### FCC Commands
//! Macro-channel configuration and downlink frequency offset, only
//! meaningful for modules certified for the FCC region.
pub mod responses;

use responses::*;

use super::{sigfox_cmd, Arg, CommandType, NoResponse, SigfoxRequest};

/// Length of the macro-channel bitmask, in hex characters (96 bits).
pub const MACRO_CHANNEL_BITMASK_LEN: usize = 24;

/// Macro channel bitmask `AT$MCB=<bitmask>`
///
/// `bitmask` must be exactly [`MACRO_CHANNEL_BITMASK_LEN`] hex characters.
#[derive(Debug, Clone)]
pub struct SetMacroChannelBitmask<'a> {
    pub bitmask: &'a str,
}

impl SigfoxRequest for SetMacroChannelBitmask<'_> {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "MCB";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Str(self.bitmask)].into_iter()
    }
}
sigfox_cmd!(SetMacroChannelBitmask<'_>, NoResponse, timeout_ms = 1000);

/// Macro channel bitmask `AT$MCB?`
#[derive(Debug, Clone)]
pub struct GetMacroChannelBitmask;

impl SigfoxRequest for GetMacroChannelBitmask {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "MCB";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetMacroChannelBitmask, MacroChannelBitmaskResponse, timeout_ms = 1000);

/// Macro channel `AT$MC=<channel>`
#[derive(Debug, Clone)]
pub struct SetMacroChannel {
    pub channel: u8,
}

impl SigfoxRequest for SetMacroChannel {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "MC";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.channel.into())].into_iter()
    }
}
sigfox_cmd!(SetMacroChannel, NoResponse, timeout_ms = 1000);

/// Macro channel `AT$MC?`
#[derive(Debug, Clone)]
pub struct GetMacroChannel;

impl SigfoxRequest for GetMacroChannel {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "MC";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetMacroChannel, MacroChannelResponse, timeout_ms = 1000);

/// Downlink frequency offset in Hz `AT$DFO=<offset>`
#[derive(Debug, Clone)]
pub struct SetDownFreqOffset {
    pub offset: i32,
}

impl SigfoxRequest for SetDownFreqOffset {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "DFO";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        [Arg::Int(self.offset.into())].into_iter()
    }
}
sigfox_cmd!(SetDownFreqOffset, NoResponse, timeout_ms = 1000);

/// Downlink frequency offset in Hz `AT$DFO?`
#[derive(Debug, Clone)]
pub struct GetDownFreqOffset;

impl SigfoxRequest for GetDownFreqOffset {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "DFO";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetDownFreqOffset, DownFreqOffsetResponse, timeout_ms = 1000);
