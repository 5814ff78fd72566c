//! Host imports
//!
//! The five functions the host links into the `arduino` import module. All
//! arguments and results are `u32` on the wire; [`Arduino`] converts the
//! typed values from `blink-hal` to those encodings.

use blink_hal::{ArduinoHost, Clock, Delay, DigitalWrite, Level, PinConfig, PinId, PinMode};

#[link(wasm_import_module = "arduino")]
extern "C" {
    #[link_name = "millis"]
    fn arduino_millis() -> u32;

    #[link_name = "delay"]
    fn arduino_delay(ms: u32);

    #[link_name = "pinMode"]
    fn arduino_pin_mode(pin: u32, mode: u32);

    #[link_name = "digitalWrite"]
    fn arduino_digital_write(pin: u32, value: u32);

    #[link_name = "getPinLED"]
    fn arduino_get_pin_led() -> u32;
}

/// The host's Arduino API
///
/// Zero-sized; every method is a direct import call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arduino;

impl Clock for Arduino {
    fn millis(&self) -> u32 {
        // SAFETY: host import with no preconditions
        unsafe { arduino_millis() }
    }
}

impl Delay for Arduino {
    fn delay_ms(&mut self, ms: u32) {
        // SAFETY: host import, any duration is accepted
        unsafe { arduino_delay(ms) }
    }
}

impl PinConfig for Arduino {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) {
        // SAFETY: host import; unknown pins are handled by the host
        unsafe { arduino_pin_mode(pin.index(), mode.as_u32()) }
    }
}

impl DigitalWrite for Arduino {
    fn digital_write(&mut self, pin: PinId, level: Level) {
        // SAFETY: host import; unknown pins are handled by the host
        unsafe { arduino_digital_write(pin.index(), level.as_u32()) }
    }
}

impl ArduinoHost for Arduino {
    fn led_pin(&self) -> PinId {
        // SAFETY: host import with no preconditions
        PinId(unsafe { arduino_get_pin_led() })
    }
}
