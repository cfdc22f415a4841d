//! Sleep-control register and the sleep instruction
//!
//! Implements `hypnos_hal::SleepControl` against the ATmega328P SMCR
//! register: SM2:0 select the depth, SE gates whether the sleep
//! instruction halts at all.

use avr_device::atmega328p::CPU;
use hypnos_hal::{SleepControl, SleepMode};

/// SMCR sleep-enable bit
const SE: u8 = 1 << 0;
/// SMCR sleep-mode field mask (SM2:0, bits 3:1)
const SM_MASK: u8 = 0b111 << 1;

/// SM2:0 encoding for each depth, per the ATmega328P datasheet
fn sm_bits(mode: SleepMode) -> u8 {
    match mode {
        SleepMode::Idle => 0b000,
        SleepMode::AdcNoiseReduction => 0b001,
        SleepMode::PowerDown => 0b010,
        SleepMode::PowerSave => 0b011,
        SleepMode::Standby => 0b110,
        SleepMode::ExtendedStandby => 0b111,
    }
}

/// Sleep-control register driver
///
/// Owns the CPU peripheral; one per device, alive for the whole uptime.
pub struct SmcrSleepControl {
    cpu: CPU,
}

impl SmcrSleepControl {
    /// Create from the CPU peripheral singleton
    pub fn new(cpu: CPU) -> Self {
        Self { cpu }
    }

    /// Release the underlying peripheral
    pub fn free(self) -> CPU {
        self.cpu
    }
}

impl SleepControl for SmcrSleepControl {
    fn set_mode(&mut self, mode: SleepMode) {
        self.cpu
            .smcr
            .modify(|r, w| unsafe { w.bits((r.bits() & !SM_MASK) | (sm_bits(mode) << 1)) });
    }

    fn arm(&mut self) {
        self.cpu
            .smcr
            .modify(|r, w| unsafe { w.bits(r.bits() | SE) });
    }

    fn halt(&mut self) {
        // Halts until any enabled interrupt fires; execution continues
        // on the next line once the handler returns
        avr_device::asm::sleep();
    }

    fn disarm(&mut self) {
        self.cpu
            .smcr
            .modify(|r, w| unsafe { w.bits(r.bits() & !SE) });
    }
}
