//! Full host binding surface
//!
//! The Arduino-emulation host exports four primitives plus a convenience
//! accessor for the board's status LED. Implementations forward each call to
//! the host; they add no logic of their own.

use crate::gpio::{DigitalWrite, PinConfig, PinId};
use crate::time::{Clock, Delay};

/// Everything the application imports from the host
///
/// All failure behavior (unknown pin, unsupported mode, host gone) is
/// defined by the host. None of these calls report errors.
pub trait ArduinoHost: Clock + Delay + PinConfig + DigitalWrite {
    /// Pin wired to the status LED, as reported by the host
    fn led_pin(&self) -> PinId;
}

impl<T: ArduinoHost + ?Sized> ArduinoHost for &mut T {
    fn led_pin(&self) -> PinId {
        T::led_pin(self)
    }
}
