//! ATmega328P-specific HAL for Hypnos sleep management
//!
//! This crate provides ATmega328P implementations of the shared
//! `hypnos-hal` traits on top of the `avr-device` peripheral access
//! crate:
//!
//! - Arduino Uno pin-number to pin-change register mapping
//! - Wake-interrupt registers (PCMSK0/1/2, PCIFR, PCICR) behind
//!   [`wake::ExintWakeInterrupts`]
//! - Sleep-control register (SMCR) and the sleep instruction behind
//!   [`sleep::SmcrSleepControl`]
//! - The placeholder pin-change interrupt vectors

#![no_std]

pub mod pins;
pub mod sleep;
pub mod wake;

pub use sleep::SmcrSleepControl;
pub use wake::ExintWakeInterrupts;

/// Placeholder pin-change interrupt vectors
///
/// The hardware refuses to deliver a pin-change wake unless a vector
/// for the group exists, so all three groups get one. The bodies are
/// deliberately empty: the wake event itself resumes execution after
/// the sleep instruction; the handler has no application work to do.
#[cfg(target_arch = "avr")]
mod vectors {
    /// Pin change interrupt for PCINT7:0 (digital pins 8-13)
    #[avr_device::interrupt(atmega328p)]
    fn PCINT0() {}

    /// Pin change interrupt for PCINT14:8 (analog pins A0-A5)
    #[avr_device::interrupt(atmega328p)]
    fn PCINT1() {}

    /// Pin change interrupt for PCINT23:16 (digital pins 0-7)
    #[avr_device::interrupt(atmega328p)]
    fn PCINT2() {}
}
