/*!
personality.rs - 65C02 variant and undefined-opcode policy.

The source material represents these as raw validated integers. Here they
are plain enums so a native caller cannot construct an invalid value at
all; `TryFrom<u8>` is kept only as the seam a host reading a raw integer
(config file, FFI boundary) would use, reproducing the original
validating-constructor behavior without requiring `Cpu::new` itself to
perform a runtime check that can never fail.
*/

use crate::error::{InvalidEmulationMode, InvalidPersonality};

/// Which 65C02 variant is being emulated. Gates opcode validity (the
/// `(zp)` addressing mode) and the decimal-mode cycle penalty on ADC/SBC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Personality {
    Mos = 1,
    Rockwell = 2,
    Wdc = 3,
}

impl Personality {
    /// True for the two variants that charge an extra cycle for decimal-mode
    /// ADC/SBC and that implement the `(zero-page)` addressing mode.
    pub(crate) fn is_rockwell_or_wdc(self) -> bool {
        matches!(self, Personality::Rockwell | Personality::Wdc)
    }
}

impl TryFrom<u8> for Personality {
    type Error = InvalidPersonality;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Personality::Mos),
            2 => Ok(Personality::Rockwell),
            3 => Ok(Personality::Wdc),
            other => Err(InvalidPersonality(other)),
        }
    }
}

/// Policy for opcodes with no defined executor (or personality-excluded
/// opcodes on the current personality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmulationMode {
    /// Undefined opcodes crash the CPU.
    Strict = 1,
    /// Undefined opcodes execute as a two-cycle NOP.
    NopMap = 2,
}

impl TryFrom<u8> for EmulationMode {
    type Error = InvalidEmulationMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EmulationMode::Strict),
            2 => Ok(EmulationMode::NopMap),
            other => Err(InvalidEmulationMode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personality_round_trip() {
        assert_eq!(Personality::try_from(1u8), Ok(Personality::Mos));
        assert_eq!(Personality::try_from(2u8), Ok(Personality::Rockwell));
        assert_eq!(Personality::try_from(3u8), Ok(Personality::Wdc));
        assert!(Personality::try_from(0u8).is_err());
        assert!(Personality::try_from(4u8).is_err());
    }

    #[test]
    fn emulation_mode_round_trip() {
        assert_eq!(EmulationMode::try_from(1u8), Ok(EmulationMode::Strict));
        assert_eq!(EmulationMode::try_from(2u8), Ok(EmulationMode::NopMap));
        assert!(EmulationMode::try_from(3u8).is_err());
    }

    #[test]
    fn gate_flag() {
        assert!(!Personality::Mos.is_rockwell_or_wdc());
        assert!(Personality::Rockwell.is_rockwell_or_wdc());
        assert!(Personality::Wdc.is_rockwell_or_wdc());
    }
}
