//! Argument and parameter types used by General Commands and Responses

/// Regulatory region of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Region {
    #[default]
    Unknown = 0,
    /// Europe
    Etsi = 1,
    /// North America, macro channels apply
    Fcc = 2,
    /// Japan
    Arib = 3,
}

impl From<u8> for Region {
    fn from(code: u8) -> Self {
        match code {
            1 => Region::Etsi,
            2 => Region::Fcc,
            3 => Region::Arib,
            _ => Region::Unknown,
        }
    }
}
