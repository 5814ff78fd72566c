//! Board-agnostic blink logic
//!
//! This crate contains everything the WebAssembly module does that does not
//! depend on the raw host imports:
//!
//! - Blink configuration (LED pin source, on/off timing)
//! - LED state machine
//! - The application loop ([`app::Blinker`])
//! - A recording host for off-target testing (feature `mock`)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod state;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use app::Blinker;
pub use config::{BlinkConfig, ConfigError, LedPinSource};
pub use state::{Event, LedState};
