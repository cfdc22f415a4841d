//! Pin-change wake-interrupt registers
//!
//! Implements `hypnos_hal::WakeInterrupts` against the ATmega328P
//! external-interrupt register block (PCMSK0/1/2, PCIFR, PCICR).

use avr_device::atmega328p::EXINT;
use hypnos_hal::WakeInterrupts;

use crate::pins::{pcint_lookup, PcintGroup};

/// Pin-change wake source registers
///
/// Owns the EXINT peripheral; there is exactly one of these per device,
/// alive for the whole uptime. The register bits are the only record of
/// which pins are registered as wake sources.
pub struct ExintWakeInterrupts {
    exint: EXINT,
}

impl ExintWakeInterrupts {
    /// Create from the EXINT peripheral singleton
    pub fn new(exint: EXINT) -> Self {
        Self { exint }
    }

    /// Release the underlying peripheral
    pub fn free(self) -> EXINT {
        self.exint
    }
}

impl WakeInterrupts for ExintWakeInterrupts {
    fn unmask(&mut self, pin: u8) {
        // Unsupported pins are a caller contract violation; the hardware
        // offers no feedback channel, so they are ignored
        let (group, bit) = match pcint_lookup(pin) {
            Some(entry) => entry,
            None => return,
        };
        match group {
            PcintGroup::Group0 => self
                .exint
                .pcmsk0
                .modify(|r, w| unsafe { w.bits(r.bits() | (1 << bit)) }),
            PcintGroup::Group1 => self
                .exint
                .pcmsk1
                .modify(|r, w| unsafe { w.bits(r.bits() | (1 << bit)) }),
            PcintGroup::Group2 => self
                .exint
                .pcmsk2
                .modify(|r, w| unsafe { w.bits(r.bits() | (1 << bit)) }),
        }
    }

    fn clear_pending(&mut self, pin: u8) {
        let (group, _) = match pcint_lookup(pin) {
            Some(entry) => entry,
            None => return,
        };
        // PCIFR flags clear by writing a one; zeros leave other groups'
        // flags untouched
        self.exint
            .pcifr
            .write(|w| unsafe { w.bits(1 << group.control_bit()) });
    }

    fn enable_group(&mut self, pin: u8) {
        let (group, _) = match pcint_lookup(pin) {
            Some(entry) => entry,
            None => return,
        };
        self.exint
            .pcicr
            .modify(|r, w| unsafe { w.bits(r.bits() | (1 << group.control_bit())) });
    }
}
