//! Responses for General Commands
use heapless::String;

use super::types::Region;
use crate::command::{value, FromPayload};
use crate::error::Error;

/// Longest firmware version string the module reports.
pub const FIRMWARE_VERSION_LEN: usize = 16;

/// Firmware version `AT/VER?`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareVersionResponse {
    pub version: String<FIRMWARE_VERSION_LEN>,
}

impl atat::AtatResp for FirmwareVersionResponse {}

impl FromPayload for FirmwareVersionResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        let version = String::try_from(payload).map_err(|_| Error::MalformedPayload)?;
        Ok(Self { version })
    }
}

/// Regulatory region `AT$RG?`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionResponse {
    pub region: Region,
}

impl atat::AtatResp for RegionResponse {}

impl FromPayload for RegionResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            region: value::parse_u8(payload)?.into(),
        })
    }
}
