//! Responses for LAN Commands
use heapless::Vec;

use super::LAN_MAX_PAYLOAD;
use crate::command::{value, FromPayload};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressResponse {
    pub address: u32,
}

impl atat::AtatResp for AddressResponse {}

impl FromPayload for AddressResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            address: value::parse_hex(payload)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MaskResponse {
    pub mask: u32,
}

impl atat::AtatResp for MaskResponse {}

impl FromPayload for MaskResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            mask: value::parse_hex(payload)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrequencyResponse {
    pub frequency: u32,
}

impl atat::AtatResp for FrequencyResponse {}

impl FromPayload for FrequencyResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            frequency: value::parse_u32(payload)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LanPowerResponse {
    pub power: u8,
}

impl atat::AtatResp for LanPowerResponse {}

impl FromPayload for LanPowerResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            power: value::parse_u8(payload)?,
        })
    }
}

/// One received LAN frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketResponse {
    pub packet: Vec<u8, LAN_MAX_PAYLOAD>,
}

impl atat::AtatResp for PacketResponse {}

impl FromPayload for PacketResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            packet: crate::hex::decode(payload)?,
        })
    }
}
