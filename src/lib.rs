#![cfg_attr(not(test), no_std)]

pub mod adc;
pub mod calibration;
pub mod config;
pub mod math;
pub mod sampler;
pub mod units;
