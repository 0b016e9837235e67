//! Platform seam for the ADC peripheral.
//!
//! The sampler only needs per-channel configuration and synchronous raw
//! reads; board crates implement [`AdcInterface`] over their HAL.

/// Logical channel index on the sensing ADC unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannelId(pub u8);

/// Conversion bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitWidth {
    Bits9,
    Bits10,
    Bits11,
    Bits12,
}

impl BitWidth {
    /// Largest raw code the converter can produce at this width.
    pub const fn max_code(self) -> u16 {
        match self {
            BitWidth::Bits9 => (1 << 9) - 1,
            BitWidth::Bits10 => (1 << 10) - 1,
            BitWidth::Bits11 => (1 << 11) - 1,
            BitWidth::Bits12 => (1 << 12) - 1,
        }
    }
}

/// Input attenuation, selecting the usable voltage range of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Attenuation {
    Db0,
    Db2_5,
    Db6,
    Db11,
}

impl Attenuation {
    /// Full-scale input voltage as a multiple of the reference voltage.
    pub const fn vref_scale(self) -> f32 {
        match self {
            Attenuation::Db0 => 1.0,
            Attenuation::Db2_5 => 1.334,
            Attenuation::Db6 => 2.0,
            Attenuation::Db11 => 3.55,
        }
    }
}

/// Hardware access needed by the sampler.
pub trait AdcInterface {
    /// Set a channel's conversion width and input attenuation. Called once
    /// per channel during sampler construction.
    fn configure(&mut self, channel: AdcChannelId, width: BitWidth, attenuation: Attenuation);

    /// Trigger a conversion and return the raw code. Synchronous and
    /// bounded-latency; a failed conversion is a HAL-boundary panic, not an
    /// error at this layer.
    fn read_raw(&self, channel: AdcChannelId) -> u16;
}
