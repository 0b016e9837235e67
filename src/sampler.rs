//! Calibrated sampling of the bus voltage, motor current, and throttle
//! position sense lines.
//!
//! The current channel is sampled on a fixed period by
//! [`CalibratedSampler::run_current_sampling`] and averaged between queries;
//! voltage and throttle are converted on demand. The accumulator behind the
//! averaging is the only shared mutable state and sits behind a mutex, so
//! the sampling loop and callers may run on different executors or
//! priorities.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Ticker;

use crate::adc::{AdcChannelId, AdcInterface};
use crate::calibration::{characterize, CalibrationSource, Characteristics, DEFAULT_VREF_MV};
use crate::config::{
    ADC_ATTENUATION, ADC_BIT_WIDTH, CURRENT_SAMPLE_PERIOD, CURRENT_SENSE_MV_PER_AMP,
    CURRENT_SENSE_OFFSET_MV, THROTTLE_MAX_VOLTAGE, THROTTLE_MIN_VOLTAGE,
};
use crate::math::{linear_map::LinearMap, range::Range};

/// ADC channel assignment for the three sense lines. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelBindings {
    pub voltage: AdcChannelId,
    pub current: AdcChannelId,
    pub throttle: AdcChannelId,
}

/// Everything the sampling loop accumulated since the last drain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleBatch {
    pub sum_amps: f32,
    pub count: u32,
}

impl SampleBatch {
    pub fn average(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }

        self.sum_amps / self.count as f32
    }
}

/// Running sum/count of converted current samples, plus the raw code of the
/// most recent conversion. Sum and count only ever move together.
pub struct CurrentAccumulator {
    sum_amps: f32,
    count: u32,
    last_raw: u16,
}

impl CurrentAccumulator {
    pub const fn new() -> Self {
        CurrentAccumulator {
            sum_amps: 0.0,
            count: 0,
            last_raw: 0,
        }
    }

    pub fn record(&mut self, amps: f32, raw: u16) {
        self.sum_amps += amps;
        self.count += 1;
        self.last_raw = raw;
    }

    /// Hands back the accumulated batch and restarts it. The raw code is
    /// left in place for debug readout.
    pub fn take_batch(&mut self) -> SampleBatch {
        let batch = SampleBatch {
            sum_amps: self.sum_amps,
            count: self.count,
        };

        self.sum_amps = 0.0;
        self.count = 0;

        batch
    }

    pub fn last_raw(&self) -> u16 {
        self.last_raw
    }
}

impl Default for CurrentAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CalibratedSampler<M: RawMutex, A: AdcInterface> {
    adc: A,
    channels: ChannelBindings,
    characteristics: Characteristics,
    current_acc: Mutex<M, CurrentAccumulator>,
}

impl<M: RawMutex, A: AdcInterface> CalibratedSampler<M, A> {
    /// Configures the sense channels and characterizes the converter.
    /// Missing factory calibration degrades to the nominal-vref curve;
    /// construction itself cannot fail.
    pub fn new<C: CalibrationSource>(
        mut adc: A,
        calibration: &C,
        channels: ChannelBindings,
    ) -> Self {
        for channel in [channels.voltage, channels.current, channels.throttle] {
            adc.configure(channel, ADC_BIT_WIDTH, ADC_ATTENUATION);
        }

        let characteristics =
            characterize(calibration, ADC_ATTENUATION, ADC_BIT_WIDTH, DEFAULT_VREF_MV);

        CalibratedSampler {
            adc,
            channels,
            characteristics,
            current_acc: Mutex::new(CurrentAccumulator::new()),
        }
    }

    pub fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }

    /// Instantaneous conversion of a raw current-channel code to amps.
    pub fn current_amps_from_raw(&self, raw: u16) -> f32 {
        let sense_mv = self.characteristics.raw_to_mv(raw) as f32;

        (sense_mv - CURRENT_SENSE_OFFSET_MV) / CURRENT_SENSE_MV_PER_AMP
    }

    /// One iteration of the periodic current loop. A noisy sample is not
    /// retried; it washes out in the average.
    pub async fn sample_current_once(&self) {
        let raw = self.adc.read_raw(self.channels.current);
        let amps = self.current_amps_from_raw(raw);

        self.current_acc.lock().await.record(amps, raw);
    }

    /// Fixed-period current sampling. Spawn this on the board executor; it
    /// runs for the lifetime of the sampler.
    pub async fn run_current_sampling(&self) {
        let mut ticker = Ticker::every(CURRENT_SAMPLE_PERIOD);

        loop {
            self.sample_current_once().await;
            ticker.next().await;
        }
    }

    /// Bus voltage (direct, unaveraged) and motor current averaged over the
    /// samples accumulated since the previous call. Reports 0A when no
    /// samples have landed yet; each call consumes the batch, so an
    /// immediate second call also reports 0A.
    pub async fn read_voltage_and_current(&self) -> (f32, f32) {
        let raw = self.adc.read_raw(self.channels.voltage);
        let voltage = self.characteristics.raw_to_v(raw);

        let current = self.current_acc.lock().await.take_batch().average();

        (voltage, current)
    }

    /// Raw code of the most recent periodic current conversion, for
    /// bring-up and debug readout.
    pub async fn last_current_raw(&self) -> u16 {
        self.current_acc.lock().await.last_raw()
    }

    /// Throttle position in percent of travel. Voltages outside the
    /// sensor's calibrated range clamp to exactly 0 or 100, so a
    /// disconnected throttle reads as a boundary position rather than a
    /// fault.
    pub fn read_throttle_pct(&self) -> f32 {
        let raw = self.adc.read_raw(self.channels.throttle);
        let volts = self.characteristics.raw_to_v(raw);

        LinearMap::<f32>::map_ranges_bounded(
            volts,
            Range::new(THROTTLE_MIN_VOLTAGE, THROTTLE_MAX_VOLTAGE),
            Range::new(0.0, 100.0),
        )
    }
}
