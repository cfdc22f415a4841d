//! Sleep controller
//!
//! Drives the one place where timing, register side effects, and hook
//! ordering interact: the interrupt-driven sleep/wake transition.
//! Everything hardware-specific is behind the `hypnos-hal` traits.

use hypnos_hal::{SleepControl, SleepMode, WakeInterrupts};

use crate::state::{Event, PowerState};

/// Zero-argument, no-return callback hook
///
/// A plain function pointer: ownership-free and `'static`, so a stored
/// hook can never dangle. Hooks must not block indefinitely and must not
/// re-enter [`SleepController::sleep`].
pub type Hook = fn();

/// Sleep/wake cycle controller
///
/// Registers wake-source pins, stores the optional pre-sleep and
/// post-wake hooks, and executes the sleep/wake transition. Constructed
/// once at startup; the HAL halves it owns are process-wide singleton
/// state with lifecycle equal to device uptime.
pub struct SleepController<W, S> {
    wake: W,
    power: S,
    mode: SleepMode,
    on_sleep: Option<Hook>,
    on_wake: Option<Hook>,
    state: PowerState,
}

impl<W: WakeInterrupts, S: SleepControl> SleepController<W, S> {
    /// Create a new controller with both hooks unset
    ///
    /// Sleeps in `Standby` depth: wake latency of six clock cycles
    /// (the main oscillator keeps running) at most of the power saving
    /// of a full power-down.
    pub fn new(wake: W, power: S) -> Self {
        Self::with_mode(wake, power, SleepMode::Standby)
    }

    /// Create a new controller with an explicit sleep depth
    ///
    /// The depth is fixed for the lifetime of the controller; there is
    /// no power-mode negotiation between cycles.
    pub fn with_mode(wake: W, power: S, mode: SleepMode) -> Self {
        Self {
            wake,
            power,
            mode,
            on_sleep: None,
            on_wake: None,
            state: PowerState::Awake,
        }
    }

    /// Register a pin as a wake source
    ///
    /// Enables the change-interrupt mask bit for the pin, clears any
    /// stale pending flag for the pin's group, then enables the group
    /// interrupt line. Idempotent; the hardware registers are the only
    /// record of which pins are registered.
    ///
    /// A pin without change-interrupt capability is silently ignored -
    /// the platform gives no validation feedback, and none is added
    /// here. Registering no wake source at all means a later
    /// [`sleep`](Self::sleep) may never return.
    pub fn register_wake_source(&mut self, pin: u8) {
        self.wake.unmask(pin);
        self.wake.clear_pending(pin);
        self.wake.enable_group(pin);
    }

    /// Replace the pre-sleep hook; `None` clears it
    ///
    /// Storage only, no side effects. Must not be called while a sleep
    /// transition is in progress (i.e. from within a hook).
    pub fn set_on_sleep(&mut self, hook: Option<Hook>) {
        self.on_sleep = hook;
    }

    /// Replace the post-wake hook; `None` clears it
    ///
    /// Storage only, no side effects. Must not be called while a sleep
    /// transition is in progress (i.e. from within a hook).
    pub fn set_on_wake(&mut self, hook: Option<Hook>) {
        self.on_wake = hook;
    }

    /// Execute one sleep/wake cycle
    ///
    /// In strict order: pre-sleep hook (if set), sleep depth selection,
    /// arm, halt, disarm, post-wake hook (if set). The halt blocks for
    /// an unbounded, hardware-determined duration until an enabled
    /// interrupt fires; that suspension is the point of the call, not a
    /// bug. Returns only after the post-wake hook completes.
    ///
    /// There is no retry or recovery path and no timeout. A panicking
    /// hook corrupts the remaining sequence and is a contract violation.
    pub fn sleep(&mut self) {
        if let Some(hook) = self.on_sleep {
            hook();
        }
        self.state = self.state.transition(Event::SleepRequested);

        self.power.set_mode(self.mode);
        self.power.arm();
        self.power.halt();
        // Execution resumes here once a wake interrupt handler returned
        self.power.disarm();

        self.state = self.state.transition(Event::WakeInterrupt);
        if let Some(hook) = self.on_wake {
            hook();
        }
    }

    /// The configured sleep depth
    pub fn mode(&self) -> SleepMode {
        self.mode
    }

    /// Current power state
    ///
    /// Always reads [`PowerState::Awake`] from non-hook code: the only
    /// code that runs while the state is `Asleep` is the wake interrupt
    /// handler itself.
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Get access to the underlying wake-interrupt registers
    pub fn wake_interrupts(&self) -> &W {
        &self.wake
    }

    /// Get access to the underlying sleep control
    pub fn sleep_control(&self) -> &S {
        &self.power
    }
}
