//! Application loop
//!
//! [`Blinker`] configures the LED pin once, then drives it through a fixed
//! duty cycle forever:
//!
//! ```text
//!   setup:  pinMode(led, OUTPUT)
//!   loop:   digitalWrite(led, HIGH) → delay(on_ms)
//!           digitalWrite(led, LOW)  → delay(off_ms)
//! ```
//!
//! Every side effect goes through the host. The blinker itself makes no
//! decisions at run time and reports no errors.

use blink_hal::{ArduinoHost, PinId, PinMode};

use crate::config::{BlinkConfig, LedPinSource};
use crate::state::{Event, LedState};

/// Blink application bound to a host
pub struct Blinker<H> {
    host: H,
    config: BlinkConfig,
    /// Resolved LED pin; `None` until a host-reported pin has been queried
    led: Option<PinId>,
    state: LedState,
    configured: bool,
    /// Completed loop iterations (wrapping)
    cycles: u32,
}

impl<H: ArduinoHost> Blinker<H> {
    /// Create a blinker; no host calls are made until [`setup`](Self::setup)
    pub fn new(host: H, config: BlinkConfig) -> Self {
        let led = match config.led {
            LedPinSource::Fixed(pin) => Some(pin),
            LedPinSource::HostReported => None,
        };

        Self {
            host,
            config,
            led,
            state: LedState::Off,
            configured: false,
            cycles: 0,
        }
    }

    /// Configure the LED pin as an output
    ///
    /// With a host-reported LED this first asks the host for the pin.
    /// Meant to run exactly once, before the first loop iteration.
    pub fn setup(&mut self) {
        let led = self.led_pin();
        self.host.pin_mode(led, PinMode::Output);
        self.configured = true;

        info!("LED on pin {} configured as output", led.index());
    }

    /// Run one blink cycle and return
    ///
    /// Issues exactly `write(HIGH)`, `delay(on)`, `write(LOW)`, `delay(off)`.
    /// Called before [`setup`](Self::setup) it still drives the pin; what an
    /// unconfigured pin does is up to the host.
    pub fn run_once(&mut self) {
        if !self.configured {
            warn!("blink cycle started before setup");
        }

        let led = self.led_pin();

        self.drive(led, Event::DriveHigh);
        self.host.delay_ms(self.config.on_ms);

        self.drive(led, Event::DriveLow);
        self.host.delay_ms(self.config.off_ms);

        self.cycles = self.cycles.wrapping_add(1);
        trace!("blink cycle {} complete", self.cycles);
    }

    /// Set up, then blink forever
    ///
    /// Never returns. The blink loop has no exit condition; it ends only when
    /// the host stops executing the module (teardown, reset, process kill).
    pub fn run(mut self) -> ! {
        self.setup();
        loop {
            self.run_once();
        }
    }

    /// LED pin, asking the host on first use if it is host-reported
    pub fn led_pin(&mut self) -> PinId {
        match self.led {
            Some(pin) => pin,
            None => {
                let pin = self.host.led_pin();
                debug!("host reports LED on pin {}", pin.index());
                self.led = Some(pin);
                pin
            }
        }
    }

    fn drive(&mut self, led: PinId, event: Event) {
        self.host.digital_write(led, event.level());
        self.state = self.state.transition(event);
    }
}

impl<H> Blinker<H> {
    /// Current LED state
    pub fn state(&self) -> LedState {
        self.state
    }

    /// Whether [`setup`](Blinker::setup) has run
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Completed blink cycles, wrapping at `u32::MAX`
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Release the host
    pub fn into_host(self) -> H {
        self.host
    }
}
