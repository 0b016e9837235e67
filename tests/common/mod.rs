//! Host-side stand-ins for the board HAL: an atomically-backed ADC plus
//! calibration sources with and without factory data.
#![allow(dead_code)]

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

use traction_analog::adc::{AdcChannelId, AdcInterface, Attenuation, BitWidth};
use traction_analog::calibration::{CalibrationSource, NoFactoryCalibration, DEFAULT_VREF_MV};
use traction_analog::config::{ADC_ATTENUATION, ADC_BIT_WIDTH};

pub const SIM_CHANNEL_COUNT: usize = 8;

/// Simulated ADC unit. Reads return whatever the paired stimulus last
/// stored for the channel.
pub struct SimAdc {
    values: Arc<[AtomicU16; SIM_CHANNEL_COUNT]>,
}

/// Test-side handle driving the values a [`SimAdc`] reads back.
pub struct SimAdcStimulus {
    values: Arc<[AtomicU16; SIM_CHANNEL_COUNT]>,
}

impl SimAdc {
    pub fn new() -> (Self, SimAdcStimulus) {
        let values: Arc<[AtomicU16; SIM_CHANNEL_COUNT]> =
            Arc::new(std::array::from_fn(|_| AtomicU16::new(0)));

        (
            SimAdc {
                values: Arc::clone(&values),
            },
            SimAdcStimulus { values },
        )
    }
}

impl AdcInterface for SimAdc {
    fn configure(&mut self, _channel: AdcChannelId, _width: BitWidth, _attenuation: Attenuation) {}

    fn read_raw(&self, channel: AdcChannelId) -> u16 {
        self.values[channel.0 as usize].load(Ordering::SeqCst)
    }
}

impl SimAdcStimulus {
    pub fn set_raw(&self, channel: AdcChannelId, raw: u16) {
        self.values[channel.0 as usize].store(raw, Ordering::SeqCst);
    }

    pub fn set_mv(&self, channel: AdcChannelId, mv: f32) {
        self.set_raw(channel, raw_code_for_mv(mv));
    }
}

/// Calibration source with a factory-programmed reference.
pub struct FactoryCalibration(pub u16);

impl CalibrationSource for FactoryCalibration {
    fn factory_vref_mv(
        &self,
        _attenuation: Attenuation,
        _width: BitWidth,
    ) -> Result<u16, NoFactoryCalibration> {
        Ok(self.0)
    }
}

/// Calibration source for a part that was never characterized.
pub struct Uncalibrated;

impl CalibrationSource for Uncalibrated {
    fn factory_vref_mv(
        &self,
        _attenuation: Attenuation,
        _width: BitWidth,
    ) -> Result<u16, NoFactoryCalibration> {
        Err(NoFactoryCalibration)
    }
}

/// Raw code that converts back to roughly `mv` under the nominal-vref curve
/// at the board's fixed width/attenuation.
pub fn raw_code_for_mv(mv: f32) -> u16 {
    let full_scale_mv = DEFAULT_VREF_MV as f32 * ADC_ATTENUATION.vref_scale();

    (mv * ADC_BIT_WIDTH.max_code() as f32 / full_scale_mv).round() as u16
}
