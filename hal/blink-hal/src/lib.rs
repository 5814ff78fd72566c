//! Blink Hardware Abstraction Layer
//!
//! This crate defines the host binding surface of the Arduino-emulation
//! WebAssembly host as traits. The module running inside the host implements
//! them over its raw imports; tests implement them with a recording mock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (blink-core Blinker)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  blink-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  blink-wasm   │       │ RecordingHost │
//! │  (imports)    │       │    (tests)    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`time::Clock`], [`time::Delay`] - Elapsed time and blocking waits
//! - [`gpio::PinConfig`], [`gpio::DigitalWrite`] - Digital output
//! - [`host::ArduinoHost`] - The full surface, plus the LED pin accessor

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod gpio;
pub mod host;
pub mod time;

// Re-export key types at crate root for convenience
pub use gpio::{DigitalWrite, GpioError, Level, PinConfig, PinId, PinMode};
pub use host::ArduinoHost;
pub use time::{Clock, Delay};
