//! Wake-source interrupt abstractions
//!
//! Registering a pin as a wake source is three register mutations on AVR
//! parts: set the pin's bit in the group mask register, clear any stale
//! pending flag for the group, and enable the group interrupt line. This
//! trait exposes each mutation separately so the sequencing (and the
//! ordering guarantees that come with it) live in `hypnos-core` where
//! they can be tested against a simulated register model.

/// Pin-change wake source registers
///
/// Implementations handle the pin-number to register/bit mapping for the
/// specific chip. Hardware register state is the only record of which
/// pins are registered; no in-memory pin list exists anywhere.
///
/// All three operations are idempotent. A pin with no change-interrupt
/// capability on the target chip is silently ignored - the underlying
/// platform provides no validation feedback, so none is invented here.
pub trait WakeInterrupts {
    /// Set the change-interrupt enable bit for this pin in its group
    /// mask register.
    fn unmask(&mut self, pin: u8);

    /// Clear a stale pending-interrupt flag for this pin's group.
    ///
    /// Without this, a change that happened before registration would
    /// wake the processor the moment sleep is entered.
    fn clear_pending(&mut self, pin: u8);

    /// Enable the group-level interrupt line for this pin's group.
    fn enable_group(&mut self, pin: u8);
}
