//! Recording host
//!
//! Implements the full host binding surface by logging every call, so the
//! blink logic can be checked off-target. Time is virtual: `delay` advances
//! the clock instead of blocking.

use core::cell::{Cell, RefCell};
use core::fmt;

use blink_hal::{ArduinoHost, Clock, Delay, DigitalWrite, Level, PinConfig, PinId, PinMode};
use heapless::Vec;

use crate::config::DEFAULT_LED_PIN;

/// Maximum calls kept in the log
pub const LOG_CAPACITY: usize = 64;

/// One call across the host boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCall {
    /// `millis()`
    Millis,
    /// `delay(ms)`
    Delay(u32),
    /// `pinMode(pin, mode)`
    PinMode(PinId, PinMode),
    /// `digitalWrite(pin, value)`
    DigitalWrite(PinId, Level),
    /// `getPinLED()`
    GetPinLed,
}

/// Renders the call the way the host names it, with raw encodings
impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostCall::Millis => write!(f, "millis()"),
            HostCall::Delay(ms) => write!(f, "delay({})", ms),
            HostCall::PinMode(pin, mode) => write!(f, "pinMode({},{})", pin, mode.as_u32()),
            HostCall::DigitalWrite(pin, level) => {
                write!(f, "digitalWrite({},{})", pin, level.as_u32())
            }
            HostCall::GetPinLed => write!(f, "getPinLED()"),
        }
    }
}

/// Snapshot of the call log, displayed as `call; call; ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallLog {
    calls: Vec<HostCall, LOG_CAPACITY>,
}

impl CallLog {
    /// Logged calls in order
    pub fn as_slice(&self) -> &[HostCall] {
        &self.calls
    }
}

impl fmt::Display for CallLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, call) in self.calls.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", call)?;
        }
        Ok(())
    }
}

/// Host stub that logs calls and keeps a virtual millisecond clock
#[derive(Debug)]
pub struct RecordingHost {
    calls: RefCell<Vec<HostCall, LOG_CAPACITY>>,
    /// Calls made after the log filled up
    dropped: Cell<usize>,
    /// Calls made in total, logged or not
    total: Cell<usize>,
    /// Panic once this many calls have been made
    call_limit: Option<usize>,
    now_ms: Cell<u32>,
    /// If true, `delay` does not advance the clock
    frozen: bool,
    led: PinId,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// Host reporting pin 19 as the LED, clock at zero
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            dropped: Cell::new(0),
            total: Cell::new(0),
            call_limit: None,
            now_ms: Cell::new(0),
            frozen: false,
            led: DEFAULT_LED_PIN,
        }
    }

    /// Report `pin` from `getPinLED`
    pub fn with_led_pin(mut self, pin: PinId) -> Self {
        self.led = pin;
        self
    }

    /// Start the clock at `ms`
    pub fn with_start_millis(self, ms: u32) -> Self {
        self.now_ms.set(ms);
        self
    }

    /// Make `delay` return without advancing the clock
    pub fn with_frozen_clock(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Panic on the call after `limit` calls
    ///
    /// Stands in for the host tearing the module down, which is the only way
    /// a running blink loop ends.
    pub fn with_call_limit(mut self, limit: usize) -> Self {
        self.call_limit = Some(limit);
        self
    }

    /// Snapshot of the logged calls
    pub fn log(&self) -> CallLog {
        CallLog {
            calls: self.calls.borrow().clone(),
        }
    }

    /// Number of calls made, including any not kept in the log
    pub fn total_calls(&self) -> usize {
        self.total.get()
    }

    /// Number of calls not kept because the log was full
    pub fn dropped_calls(&self) -> usize {
        self.dropped.get()
    }

    /// Current virtual time without logging a `millis()` call
    pub fn now(&self) -> u32 {
        self.now_ms.get()
    }

    /// Forget all logged calls; the clock keeps running
    pub fn clear(&mut self) {
        self.calls.get_mut().clear();
        self.dropped.set(0);
        self.total.set(0);
    }

    fn record(&self, call: HostCall) {
        let total = self.total.get();
        if let Some(limit) = self.call_limit {
            if total >= limit {
                panic!("call limit reached after {} host calls", limit);
            }
        }
        self.total.set(total + 1);

        if self.calls.borrow_mut().push(call).is_err() {
            self.dropped.set(self.dropped.get() + 1);
        }
    }
}

impl Clock for RecordingHost {
    fn millis(&self) -> u32 {
        self.record(HostCall::Millis);
        self.now_ms.get()
    }
}

impl Delay for RecordingHost {
    fn delay_ms(&mut self, ms: u32) {
        self.record(HostCall::Delay(ms));
        if !self.frozen {
            self.now_ms.set(self.now_ms.get().wrapping_add(ms));
        }
    }
}

impl PinConfig for RecordingHost {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) {
        self.record(HostCall::PinMode(pin, mode));
    }
}

impl DigitalWrite for RecordingHost {
    fn digital_write(&mut self, pin: PinId, level: Level) {
        self.record(HostCall::DigitalWrite(pin, level));
    }
}

impl ArduinoHost for RecordingHost {
    fn led_pin(&self) -> PinId {
        self.record(HostCall::GetPinLed);
        self.led
    }
}
