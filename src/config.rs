//! Board tuning constants for the traction controller's analog sense lines.

use embassy_time::Duration;

use crate::adc::{AdcChannelId, Attenuation, BitWidth};
use crate::sampler::ChannelBindings;

/// Sense line assignments on the sensing ADC unit.
pub const SENSE_CHANNELS: ChannelBindings = ChannelBindings {
    voltage: AdcChannelId(1),
    current: AdcChannelId(0),
    throttle: AdcChannelId(3),
};

/// All three sense lines run at the same width and attenuation. 11dB keeps
/// the throttle's 3.33V ceiling inside the usable range.
pub const ADC_BIT_WIDTH: BitWidth = BitWidth::Bits12;
pub const ADC_ATTENUATION: Attenuation = Attenuation::Db11;

/// Period of the current channel sampling loop.
pub const CURRENT_SAMPLE_PERIOD: Duration = Duration::from_millis(2);

/// Throttle position sensor output at 0% and 100% travel.
pub const THROTTLE_MIN_VOLTAGE: f32 = 0.83;
pub const THROTTLE_MAX_VOLTAGE: f32 = 3.33;

/// Hall current sensor transfer function: zero-current output level and
/// sensitivity, per the board's sensor datasheet.
pub const CURRENT_SENSE_OFFSET_MV: f32 = 1650.0;
pub const CURRENT_SENSE_MV_PER_AMP: f32 = 26.4;
