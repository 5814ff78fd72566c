//! Blink configuration
//!
//! All values are fixed at build time. The module never changes its
//! configuration once running.

use core::fmt;

use blink_hal::PinId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin driving the status LED unless the host is asked
pub const DEFAULT_LED_PIN: PinId = PinId(19);

/// Time the LED stays on per cycle (ms)
pub const DEFAULT_ON_MS: u32 = 100;

/// Time the LED stays off per cycle (ms)
pub const DEFAULT_OFF_MS: u32 = 900;

/// Where the LED pin number comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LedPinSource {
    /// Use this pin and never query the host
    Fixed(PinId),
    /// Ask the host once (`getPinLED`) during setup
    HostReported,
}

impl Default for LedPinSource {
    fn default() -> Self {
        LedPinSource::Fixed(DEFAULT_LED_PIN)
    }
}

/// Blink pattern configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlinkConfig {
    /// LED pin source
    pub led: LedPinSource,
    /// Time the LED is driven high per cycle (ms)
    pub on_ms: u32,
    /// Time the LED is driven low per cycle (ms)
    pub off_ms: u32,
}

impl BlinkConfig {
    /// Pin 19, 100 ms on, 900 ms off
    pub const DEFAULT: Self = Self {
        led: LedPinSource::Fixed(DEFAULT_LED_PIN),
        on_ms: DEFAULT_ON_MS,
        off_ms: DEFAULT_OFF_MS,
    };

    /// Create a configuration with explicit values
    pub const fn new(led: LedPinSource, on_ms: u32, off_ms: u32) -> Self {
        Self { led, on_ms, off_ms }
    }

    /// Same timing, LED on a fixed pin
    pub const fn with_led_pin(self, pin: PinId) -> Self {
        Self {
            led: LedPinSource::Fixed(pin),
            ..self
        }
    }

    /// Same timing, LED pin reported by the host
    pub const fn with_host_led(self) -> Self {
        Self {
            led: LedPinSource::HostReported,
            ..self
        }
    }

    /// Same LED, different timing
    pub const fn with_timing(self, on_ms: u32, off_ms: u32) -> Self {
        Self {
            on_ms,
            off_ms,
            ..self
        }
    }

    /// Length of one full cycle (ms)
    ///
    /// Widened so that two `u32::MAX` phases do not overflow.
    pub const fn period_ms(&self) -> u64 {
        self.on_ms as u64 + self.off_ms as u64
    }

    /// Check the configuration describes a blink pattern
    ///
    /// A single zero-length phase is allowed (the host may treat a zero delay
    /// as a no-op). Both phases zero is not a pattern.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.period_ms() == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// On and off times are both zero
    ZeroPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPeriod => write!(f, "on_ms and off_ms are both zero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlinkConfig::default();
        assert_eq!(config, BlinkConfig::DEFAULT);
        assert_eq!(config.led, LedPinSource::Fixed(PinId(19)));
        assert_eq!(config.on_ms, 100);
        assert_eq!(config.off_ms, 900);
        assert_eq!(config.period_ms(), 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = BlinkConfig::DEFAULT.with_led_pin(PinId(2)).with_timing(50, 50);
        assert_eq!(config.led, LedPinSource::Fixed(PinId(2)));

        let config = config.with_host_led();
        assert_eq!(config.led, LedPinSource::HostReported);
        assert_eq!(config.on_ms, 50);
    }

    #[test]
    fn test_zero_phase_allowed() {
        assert!(BlinkConfig::DEFAULT.with_timing(0, 900).validate().is_ok());
        assert!(BlinkConfig::DEFAULT.with_timing(100, 0).validate().is_ok());
        assert_eq!(
            BlinkConfig::DEFAULT.with_timing(0, 0).validate(),
            Err(ConfigError::ZeroPeriod)
        );
    }

    #[test]
    fn test_period_does_not_overflow() {
        let config = BlinkConfig::DEFAULT.with_timing(u32::MAX, u32::MAX);
        assert_eq!(config.period_ms(), 2 * u32::MAX as u64);
    }
}
