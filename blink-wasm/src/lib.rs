//! Arduino Blink - WebAssembly module
//!
//! Blinks the status LED of the Arduino-emulation host: configure the pin
//! once, then 100 ms on / 900 ms off forever. Pin and timing come from
//! `blink.toml` at build time.
//!
//! The host instantiates the module, links the `arduino` imports and calls
//! the exported `_start`, which never returns. The module stops only when the
//! host tears it down.

#![cfg_attr(not(test), no_std)]

// The host imports only link inside the wasm host
#[cfg(not(test))]
mod arduino;

#[cfg(test)]
#[path = "../build/settings.rs"]
mod settings;

/// Configuration generated by build.rs from blink.toml
mod config {
    include!(concat!(env!("OUT_DIR"), "/blink_config.rs"));
}

// Reject a zero-length blink period at compile time
const _: () = assert!(config::CONFIG.validate().is_ok());

/// Module entry point
#[cfg(not(test))]
#[no_mangle]
pub extern "C" fn _start() -> ! {
    blink_core::Blinker::new(arduino::Arduino, config::CONFIG).run()
}

// A panic cannot be reported to the host; trap so it stops the module
#[cfg(not(test))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    #[cfg(target_arch = "wasm32")]
    core::arch::wasm32::unreachable();

    #[cfg(not(target_arch = "wasm32"))]
    loop {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use blink_core::BlinkConfig;

    #[test]
    fn test_compiled_config_matches_blink_toml() {
        let settings = settings::parse_settings(include_str!("../blink.toml")).unwrap();
        assert_eq!(
            settings::render_config(&settings),
            settings::render_config(&settings::BlinkSettings::default())
        );
        assert_eq!(config::CONFIG, BlinkConfig::DEFAULT);
        assert!(config::CONFIG.validate().is_ok());
    }
}
