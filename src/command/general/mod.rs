//! ### General Commands
//! Module presence, identification of the firmware, regulatory region and
//! persistence of the on-module configuration.
pub mod responses;
pub mod types;

use responses::*;

use super::{sigfox_cmd, Arg, CommandType, NoResponse, SigfoxRequest};

/// Attention `AT`
///
/// Answers `OK` when the module is powered and listening.
#[derive(Debug, Clone)]
pub struct Attention;

impl SigfoxRequest for Attention {
    const TYPE: CommandType = CommandType::Attention;
    const CODE: &'static str = "";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(Attention, NoResponse, timeout_ms = 500);

/// Firmware version `AT/VER?`
#[derive(Debug, Clone)]
pub struct FirmwareVersion;

impl SigfoxRequest for FirmwareVersion {
    const TYPE: CommandType = CommandType::Display;
    const CODE: &'static str = "VER";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(FirmwareVersion, FirmwareVersionResponse, timeout_ms = 1000);

/// Regulatory region `AT$RG?`
///
/// The region is fixed by the module hardware (ETSI, FCC or ARIB).
#[derive(Debug, Clone)]
pub struct GetRegion;

impl SigfoxRequest for GetRegion {
    const TYPE: CommandType = CommandType::Read;
    const CODE: &'static str = "RG";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(GetRegion, RegionResponse, timeout_ms = 1000);

/// Store the current configuration `AT$SAVE`
#[derive(Debug, Clone)]
pub struct SaveSettings;

impl SigfoxRequest for SaveSettings {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "SAVE";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(SaveSettings, NoResponse, timeout_ms = 2000);

/// Restore the factory configuration `AT$FACTORY`
///
/// Erases everything previously stored with [`SaveSettings`].
#[derive(Debug, Clone)]
pub struct FactorySettings;

impl SigfoxRequest for FactorySettings {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "FACTORY";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(FactorySettings, NoResponse, timeout_ms = 2000);

/// Load the default configuration `AT$DEFAULT`
///
/// The stored configuration is left untouched until the next [`SaveSettings`].
#[derive(Debug, Clone)]
pub struct DefaultConfiguration;

impl SigfoxRequest for DefaultConfiguration {
    const TYPE: CommandType = CommandType::Set;
    const CODE: &'static str = "DEFAULT";

    fn args(&self) -> impl Iterator<Item = Arg<'_>> {
        core::iter::empty()
    }
}
sigfox_cmd!(DefaultConfiguration, NoResponse, timeout_ms = 2000);
