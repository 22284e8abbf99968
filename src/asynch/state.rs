use heapless::{String, Vec};

use crate::command::fcc::MACRO_CHANNEL_BITMASK_LEN;
use crate::command::general::responses::FIRMWARE_VERSION_LEN;
use crate::command::general::types::Region;
use crate::command::lan::LAN_MAX_PAYLOAD;

/// Last known configuration of the module.
///
/// Everything starts zeroed and is filled in by the operations that query
/// or set the matching value. A field only changes when the module
/// accepted the transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    pub region: Region,
    /// Radio transmit power, dBm
    pub power: u8,
    /// LAN transmit power, dBm
    pub power_lan: u8,
    pub firmware: String<FIRMWARE_VERSION_LEN>,
    /// Last LAN packet received
    pub packet: Vec<u8, LAN_MAX_PAYLOAD>,
    pub macro_channel_bitmask: String<MACRO_CHANNEL_BITMASK_LEN>,
    pub macro_channel: u8,
    pub id: u32,
    pub address: u32,
    pub mask: u32,
    /// LAN frequency, Hz
    pub frequency: u32,
    /// Downlink frequency offset, Hz
    pub down_freq_offset: i32,
}
