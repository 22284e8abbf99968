//! Responses for Sigfox Network Commands
use crate::command::{value, FromPayload};
use crate::error::Error;

/// Module identifier `AT$ID?`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdResponse {
    pub id: u32,
}

impl atat::AtatResp for IdResponse {}

impl FromPayload for IdResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            id: value::parse_hex(payload)?,
        })
    }
}

/// Radio transmit power `AT$PW?`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerResponse {
    pub power: u8,
}

impl atat::AtatResp for PowerResponse {}

impl FromPayload for PowerResponse {
    fn from_payload(payload: &str) -> Result<Self, Error> {
        Ok(Self {
            power: value::parse_u8(payload)?,
        })
    }
}
