//! Board-agnostic core logic for Hypnos sleep management
//!
//! This crate contains the sleep/wake sequencing that does not depend on
//! specific hardware implementations:
//!
//! - The [`SleepController`](controller::SleepController) driving the
//!   register-wake-source / hook / halt sequence through the HAL traits
//! - The two-state power state machine
//!
//! Everything here runs (and is tested) on the host against simulated
//! register models; the chip-specific register work lives in the HAL
//! implementation crates.

#![no_std]
#![deny(unsafe_code)]

pub mod controller;
pub mod state;

pub use controller::{Hook, SleepController};
pub use state::{Event, PowerState};
