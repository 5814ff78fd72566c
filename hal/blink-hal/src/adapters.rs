//! `embedded-hal` adapters over the host binding
//!
//! Lets drivers written against `embedded-hal` 1.0 run on the host's
//! pin and delay primitives. The host calls cannot fail, so every adapter
//! uses [`Infallible`] as its error type.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::gpio::{DigitalWrite, Level, PinConfig, PinId, PinMode};
use crate::time::Delay;

/// A single host pin configured as an output
///
/// The host cannot be read back, so the pin tracks the last level it drove.
/// The level starts [`Level::Low`] until the first write.
pub struct HostPin<'a, H> {
    host: &'a mut H,
    pin: PinId,
    level: Level,
}

impl<'a, H: PinConfig + DigitalWrite> HostPin<'a, H> {
    /// Configure `pin` as an output and wrap it
    pub fn new_output(host: &'a mut H, pin: PinId) -> Self {
        host.pin_mode(pin, PinMode::Output);
        Self {
            host,
            pin,
            level: Level::Low,
        }
    }

    /// The wrapped pin
    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Last level driven onto the pin
    pub fn level(&self) -> Level {
        self.level
    }

    fn drive(&mut self, level: Level) {
        self.host.digital_write(self.pin, level);
        self.level = level;
    }
}

impl<H> ErrorType for HostPin<'_, H> {
    type Error = Infallible;
}

impl<H: PinConfig + DigitalWrite> OutputPin for HostPin<'_, H> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(Level::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(Level::High);
        Ok(())
    }
}

impl<H: PinConfig + DigitalWrite> StatefulOutputPin for HostPin<'_, H> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.is_high())
    }
}

/// Host delay as an [`DelayNs`] provider
///
/// The host only counts milliseconds. Shorter requests round up to the next
/// whole millisecond, so a driver never waits less than it asked for.
pub struct HostDelay<'a, H> {
    host: &'a mut H,
}

impl<'a, H: Delay> HostDelay<'a, H> {
    /// Wrap the host delay
    pub fn new(host: &'a mut H) -> Self {
        Self { host }
    }
}

impl<H: Delay> DelayNs for HostDelay<'_, H> {
    fn delay_ns(&mut self, ns: u32) {
        self.host.delay_ms(ns.div_ceil(1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.host.delay_ms(us.div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.host.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Mode(u32, u32),
        Write(u32, u32),
        Delay(u32),
    }

    #[derive(Default)]
    struct FakeHost {
        calls: Vec<Call>,
    }

    impl PinConfig for FakeHost {
        fn pin_mode(&mut self, pin: PinId, mode: PinMode) {
            self.calls.push(Call::Mode(pin.index(), mode.as_u32()));
        }
    }

    impl DigitalWrite for FakeHost {
        fn digital_write(&mut self, pin: PinId, level: Level) {
            self.calls.push(Call::Write(pin.index(), level.as_u32()));
        }
    }

    impl Delay for FakeHost {
        fn delay_ms(&mut self, ms: u32) {
            self.calls.push(Call::Delay(ms));
        }
    }

    #[test]
    fn test_output_pin_configures_and_drives() {
        let mut host = FakeHost::default();
        {
            let mut pin = HostPin::new_output(&mut host, PinId(19));
            assert_eq!(pin.pin(), PinId(19));
            assert_eq!(pin.level(), Level::Low);
            pin.set_high().unwrap();
            assert!(pin.is_set_high().unwrap());
            pin.set_low().unwrap();
            assert!(pin.is_set_low().unwrap());
        }

        assert_eq!(
            host.calls,
            [Call::Mode(19, 1), Call::Write(19, 1), Call::Write(19, 0)]
        );
    }

    #[test]
    fn test_toggle_uses_tracked_level() {
        let mut host = FakeHost::default();
        {
            let mut pin = HostPin::new_output(&mut host, PinId(4));
            pin.toggle().unwrap();
            pin.toggle().unwrap();
        }

        assert_eq!(
            host.calls,
            [Call::Mode(4, 1), Call::Write(4, 1), Call::Write(4, 0)]
        );
    }

    #[test]
    fn test_delay_rounds_up_to_millis() {
        let mut host = FakeHost::default();
        {
            let mut delay = HostDelay::new(&mut host);
            delay.delay_ms(100);
            delay.delay_us(1);
            delay.delay_us(2_000);
            delay.delay_ns(1_500_000);
            delay.delay_ns(0);
        }

        assert_eq!(
            host.calls,
            [
                Call::Delay(100),
                Call::Delay(1),
                Call::Delay(2),
                Call::Delay(2),
                Call::Delay(0),
            ]
        );
    }
}
