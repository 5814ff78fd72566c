//! Build script for blink-wasm
//!
//! - Validates blink.toml at compile time
//! - Generates the compiled-in blink configuration

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[path = "build/settings.rs"]
mod settings;

use settings::{BlinkSettings, SettingsError};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/settings.rs");

    let settings = load_config();
    write_config(&settings);
}

/// Load and validate blink.toml, falling back to defaults if it is absent
fn load_config() -> BlinkSettings {
    // Re-run if blink.toml changes
    println!("cargo:rerun-if-changed=blink.toml");

    let config_path = Path::new("blink.toml");

    if !config_path.exists() {
        println!("cargo:warning=blink.toml not found, using built-in defaults");
        return BlinkSettings::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read blink.toml", &[&e.to_string()]),
    };

    let settings = match settings::parse_settings(&config_content) {
        Ok(settings) => settings,
        Err(SettingsError::Syntax(error_msg)) => {
            let lines: Vec<&str> = error_msg.lines().collect();
            fail("Invalid TOML syntax in blink.toml", &lines)
        }
        Err(SettingsError::Invalid(errors)) => {
            let lines: Vec<String> = errors.iter().map(|e| format!("• {}", e)).collect();
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            fail("Invalid settings in blink.toml", &lines)
        }
    };

    println!("cargo:warning=blink.toml validated successfully");
    settings
}

/// Write `$OUT_DIR/blink_config.rs` defining `CONFIG`
fn write_config(settings: &BlinkSettings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let source = settings::render_config(settings);

    if let Err(e) = fs::write(out_dir.join("blink_config.rs"), source) {
        fail("Failed to write generated config", &[&e.to_string()]);
    }
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
