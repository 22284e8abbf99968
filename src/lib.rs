//! Async driver for AT command Sigfox radio modules, and a temperature
//! telemetry loop built on top of it.
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

mod fmt;

pub mod asynch;
pub mod command;
pub mod config;
pub mod error;
mod hex;
pub mod telemetry;

#[cfg(test)]
mod test_helpers;

pub use atat;

pub use asynch::{DeviceState, Sigfox, SigfoxClient};
pub use command::general::types::Region;
pub use config::{SigfoxConfig, Transport, DEFAULT_BAUD_RATE};
pub use error::Error;
