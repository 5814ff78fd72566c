//! LED state machine
//!
//! Two states, two events. The LED is `Off` until the first cycle drives it
//! high; there is no terminal state.

use blink_hal::Level;

/// LED states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    /// Pin low (or configured but not yet driven)
    #[default]
    Off,
    /// Pin high
    On,
}

/// Events driving the LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start of the on phase
    DriveHigh,
    /// Start of the off phase
    DriveLow,
}

impl Event {
    /// Level written to the pin for this event
    pub const fn level(self) -> Level {
        match self {
            Event::DriveHigh => Level::High,
            Event::DriveLow => Level::Low,
        }
    }
}

impl LedState {
    /// Level the pin is at in this state
    pub const fn level(self) -> Level {
        match self {
            LedState::Off => Level::Low,
            LedState::On => Level::High,
        }
    }

    /// Check if the LED is lit
    pub const fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }

    /// Process an event and return the next state
    pub const fn transition(self, event: Event) -> Self {
        match (self, event) {
            (LedState::Off, Event::DriveHigh) => LedState::On,
            (LedState::On, Event::DriveLow) => LedState::Off,
            // Re-driving the current level keeps the state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_off() {
        assert_eq!(LedState::default(), LedState::Off);
        assert_eq!(LedState::default().level(), Level::Low);
    }

    #[test]
    fn test_full_cycle() {
        let state = LedState::Off.transition(Event::DriveHigh);
        assert_eq!(state, LedState::On);
        assert!(state.is_on());

        let state = state.transition(Event::DriveLow);
        assert_eq!(state, LedState::Off);
    }

    #[test]
    fn test_redrive_keeps_state() {
        assert_eq!(LedState::On.transition(Event::DriveHigh), LedState::On);
        assert_eq!(LedState::Off.transition(Event::DriveLow), LedState::Off);
    }

    #[test]
    fn test_state_level_matches_event_level() {
        for event in [Event::DriveHigh, Event::DriveLow] {
            for state in [LedState::Off, LedState::On] {
                assert_eq!(state.transition(event).level(), event.level());
            }
        }
    }
}
