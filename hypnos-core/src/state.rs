//! Power state machine
//!
//! Two states only: the processor is either executing instructions or
//! halted waiting for a wake interrupt. Each `sleep()` call walks
//! Awake -> Asleep -> Awake; Awake is both the initial and terminal
//! state of every cycle.

/// Processor power states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Executing instructions normally
    Awake,
    /// Halted; only an enabled interrupt resumes execution
    Asleep,
}

/// Events that drive power state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A sleep cycle is entering the halt, pre-sleep work done
    SleepRequested,
    /// An enabled wake interrupt fired and its handler returned
    WakeInterrupt,
}

impl PowerState {
    /// Check if the processor is halted
    pub fn is_asleep(&self) -> bool {
        matches!(self, PowerState::Asleep)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use PowerState::*;

        match (self, event) {
            (Awake, SleepRequested) => Asleep,
            (Asleep, WakeInterrupt) => Awake,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_cycle() {
        let state = PowerState::Awake;

        let asleep = state.transition(Event::SleepRequested);
        assert_eq!(asleep, PowerState::Asleep);
        assert!(asleep.is_asleep());

        let awake = asleep.transition(Event::WakeInterrupt);
        assert_eq!(awake, PowerState::Awake);
        assert!(!awake.is_asleep());
    }

    #[test]
    fn test_irrelevant_events_keep_state() {
        // A wake interrupt while awake is an unrelated interrupt, not
        // a transition
        let awake = PowerState::Awake.transition(Event::WakeInterrupt);
        assert_eq!(awake, PowerState::Awake);

        // There is no queuing of sleep requests while asleep
        let asleep = PowerState::Asleep.transition(Event::SleepRequested);
        assert_eq!(asleep, PowerState::Asleep);
    }
}
