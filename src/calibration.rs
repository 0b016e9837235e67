//! Raw-code to millivolt conversion using per-device characteristics.
//!
//! Parts with factory-programmed reference data get an exact curve; parts
//! without it degrade to the nominal-vref curve rather than failing.

use crate::adc::{Attenuation, BitWidth};
use crate::units::V_PER_MV;

/// Nominal internal reference used when the device carries no factory data.
pub const DEFAULT_VREF_MV: u16 = 1100;

/// The device has no factory calibration for the requested configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoFactoryCalibration;

/// Per-device curve mapping raw codes to millivolts. Read-only once built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Characteristics {
    vref_mv: u16,
    attenuation: Attenuation,
    width: BitWidth,
}

impl Characteristics {
    pub const fn from_vref(vref_mv: u16, attenuation: Attenuation, width: BitWidth) -> Self {
        Characteristics {
            vref_mv,
            attenuation,
            width,
        }
    }

    /// Best-effort curve for parts without factory characterization.
    pub const fn default_curve(attenuation: Attenuation, width: BitWidth) -> Self {
        Self::from_vref(DEFAULT_VREF_MV, attenuation, width)
    }

    pub fn full_scale_mv(&self) -> f32 {
        self.vref_mv as f32 * self.attenuation.vref_scale()
    }

    pub fn raw_to_mv(&self, code: u16) -> u16 {
        (code as f32 * self.full_scale_mv() / self.width.max_code() as f32) as u16
    }

    pub fn raw_to_v(&self, code: u16) -> f32 {
        self.raw_to_mv(code) as f32 * V_PER_MV
    }
}

/// Source of factory calibration data, typically the chip's eFuse block.
pub trait CalibrationSource {
    /// Factory-programmed reference voltage for this configuration, if the
    /// part was characterized in production.
    fn factory_vref_mv(
        &self,
        attenuation: Attenuation,
        width: BitWidth,
    ) -> Result<u16, NoFactoryCalibration>;
}

/// Builds the conversion curve for a channel configuration, falling back to
/// `default_vref_mv` when the part has no factory data.
pub fn characterize<C: CalibrationSource>(
    source: &C,
    attenuation: Attenuation,
    width: BitWidth,
    default_vref_mv: u16,
) -> Characteristics {
    match source.factory_vref_mv(attenuation, width) {
        Ok(vref_mv) => Characteristics::from_vref(vref_mv, attenuation, width),
        Err(NoFactoryCalibration) => {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "no factory adc calibration, using nominal {}mV vref curve",
                default_vref_mv
            );

            Characteristics::from_vref(default_vref_mv, attenuation, width)
        }
    }
}
