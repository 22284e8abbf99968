//! Responses for FCC Commands
use heapless::String;

use super::MACRO_CHANNEL_BITMASK_LEN;
use crate::command::{value, FromPayload};
use crate::error::Error;

/// Is `bitmask` a well-formed macro-channel bitmask?
pub fn is_macro_channel_bitmask(bitmask: &str) -> bool {
    bitmask.len() == MACRO_CHANNEL_BITMASK_LEN && bitmask.bytes().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroChannelBitmaskResponse {
    pub bitmask: String<MACRO_CHANNEL_BITMASK_LEN>,
}

impl atat::AtatResp for MacroChannelBitmaskResponse {}

impl FromPayload for MacroChannelBitmaskResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        if !is_macro_channel_bitmask(payload) {
            return Err(Error::MalformedPayload);
        }
        Ok(Self {
            bitmask: String::try_from(payload).map_err(|_| Error::MalformedPayload)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroChannelResponse {
    pub channel: u8,
}

impl atat::AtatResp for MacroChannelResponse {}

impl FromPayload for MacroChannelResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            channel: value::parse_u8(payload)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DownFreqOffsetResponse {
    pub offset: i32,
}

impl atat::AtatResp for DownFreqOffsetResponse {}

impl FromPayload for DownFreqOffsetResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            offset: value::parse_i32(payload)?,
        })
    }
}
