//! Polls an ADS1115 across AIN0 - AIN1 and reports the input as gauge pressure.
//!
//! Runs on an nRF52 board, or on a host against a simulated converter.

#![cfg_attr(target_os = "none", no_std)]

pub mod error;
pub mod platform;
pub mod pressure;
pub mod report;
pub mod sampler;
pub mod scan;
pub mod settings;
