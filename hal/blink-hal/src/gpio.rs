//! GPIO pin abstractions
//!
//! Value types for the pin encodings shared with the host, and traits for
//! configuring and driving digital pins.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin index on the host
///
/// The host decides which indices exist. Nothing is validated on this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PinId(pub u32);

impl PinId {
    /// Get the raw index passed across the host boundary
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for PinId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logic level driven onto a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Level {
    /// Logic 0
    #[default]
    Low = 0,
    /// Logic 1
    High = 1,
}

impl Level {
    /// Get the raw encoding passed across the host boundary
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl TryFrom<u32> for Level {
    type Error = GpioError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Low),
            1 => Ok(Level::High),
            other => Err(GpioError::InvalidLevel(other)),
        }
    }
}

/// Configuration mode of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum PinMode {
    /// High-impedance input
    Input = 0,
    /// Push-pull output
    Output = 1,
    /// Input with the internal pull-up enabled
    InputPullup = 2,
}

impl PinMode {
    /// Get the raw encoding passed across the host boundary
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for PinMode {
    type Error = GpioError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PinMode::Input),
            1 => Ok(PinMode::Output),
            2 => Ok(PinMode::InputPullup),
            other => Err(GpioError::InvalidMode(other)),
        }
    }
}

/// Errors decoding raw pin encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Value is neither LOW (0) nor HIGH (1)
    InvalidLevel(u32),
    /// Value is not INPUT (0), OUTPUT (1) or INPUT_PULLUP (2)
    InvalidMode(u32),
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::InvalidLevel(v) => write!(f, "invalid logic level {}", v),
            GpioError::InvalidMode(v) => write!(f, "invalid pin mode {}", v),
        }
    }
}

/// Pin direction configuration
///
/// Behavior for pins or modes the host does not support is host-defined.
pub trait PinConfig {
    /// Configure `pin` for `mode`
    fn pin_mode(&mut self, pin: PinId, mode: PinMode);
}

/// Digital output
pub trait DigitalWrite {
    /// Drive `pin` to `level`
    fn digital_write(&mut self, pin: PinId, level: Level);
}

impl<T: PinConfig + ?Sized> PinConfig for &mut T {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) {
        T::pin_mode(self, pin, mode)
    }
}

impl<T: DigitalWrite + ?Sized> DigitalWrite for &mut T {
    fn digital_write(&mut self, pin: PinId, level: Level) {
        T::digital_write(self, pin, level)
    }
}
