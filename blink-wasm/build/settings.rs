//! blink.toml parsing
//!
//! Shared by build.rs and the crate's unit tests. Nothing in here touches the
//! filesystem or cargo.

pub const DEFAULT_LED_PIN: u32 = 19;
pub const DEFAULT_ON_MS: u32 = 100;
pub const DEFAULT_OFF_MS: u32 = 900;

/// LED pin setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedSetting {
    Fixed(u32),
    Host,
}

/// Validated blink.toml contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkSettings {
    pub led: LedSetting,
    pub on_ms: u32,
    pub off_ms: u32,
}

impl Default for BlinkSettings {
    fn default() -> Self {
        Self {
            led: LedSetting::Fixed(DEFAULT_LED_PIN),
            on_ms: DEFAULT_ON_MS,
            off_ms: DEFAULT_OFF_MS,
        }
    }
}

/// Why blink.toml was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Not valid TOML
    Syntax(String),
    /// Valid TOML, invalid settings (one entry per problem)
    Invalid(Vec<String>),
}

/// Parse and validate the contents of blink.toml
///
/// Missing sections or keys keep their defaults.
pub fn parse_settings(content: &str) -> Result<BlinkSettings, SettingsError> {
    let config: toml::Value =
        toml::from_str(content).map_err(|e| SettingsError::Syntax(e.to_string()))?;

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);

    let mut settings = BlinkSettings::default();
    if let Some(led) = config.get("led") {
        if let Some(pin) = led.get("pin") {
            match parse_led_pin(pin) {
                Ok(setting) => settings.led = setting,
                Err(e) => errors.push(format!("[led] pin: {}", e)),
            }
        }
    }
    if let Some(timing) = config.get("timing") {
        if let Some(value) = timing.get("on_ms") {
            match parse_u32(value) {
                Ok(ms) => settings.on_ms = ms,
                Err(e) => errors.push(format!("[timing] on_ms: {}", e)),
            }
        }
        if let Some(value) = timing.get("off_ms") {
            match parse_u32(value) {
                Ok(ms) => settings.off_ms = ms,
                Err(e) => errors.push(format!("[timing] off_ms: {}", e)),
            }
        }
    }

    if errors.is_empty() && settings.on_ms == 0 && settings.off_ms == 0 {
        errors.push("[timing] on_ms and off_ms cannot both be 0".to_string());
    }

    if errors.is_empty() {
        Ok(settings)
    } else {
        Err(SettingsError::Invalid(errors))
    }
}

/// Reject unknown sections and keys so typos do not silently fall back
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return;
    };

    for (section, value) in table {
        let allowed: &[&str] = match section.as_str() {
            "led" => &["pin"],
            "timing" => &["on_ms", "off_ms"],
            other => {
                errors.push(format!("unknown section [{}]", other));
                continue;
            }
        };

        let Some(keys) = value.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };

        for key in keys.keys() {
            if !allowed.contains(&key.as_str()) {
                errors.push(format!("unknown key '{}' in [{}]", key, section));
            }
        }
    }
}

fn parse_led_pin(value: &toml::Value) -> Result<LedSetting, String> {
    match value {
        toml::Value::String(s) if s == "host" => Ok(LedSetting::Host),
        toml::Value::String(s) => Err(format!("expected a pin number or \"host\", got \"{}\"", s)),
        other => parse_u32(other).map(LedSetting::Fixed),
    }
}

fn parse_u32(value: &toml::Value) -> Result<u32, String> {
    let Some(n) = value.as_integer() else {
        return Err(format!("expected an integer, got {}", value.type_str()));
    };
    u32::try_from(n).map_err(|_| format!("{} is outside 0..={}", n, u32::MAX))
}

/// Render the generated `blink_config.rs` defining `CONFIG`
pub fn render_config(settings: &BlinkSettings) -> String {
    let led = match settings.led {
        LedSetting::Fixed(pin) => format!(
            "::blink_core::LedPinSource::Fixed(::blink_hal::PinId({}))",
            pin
        ),
        LedSetting::Host => "::blink_core::LedPinSource::HostReported".to_string(),
    };

    format!(
        "// Generated by build.rs from blink.toml\n\
         \n\
         /// Blink configuration compiled into the module\n\
         pub const CONFIG: ::blink_core::BlinkConfig =\n    \
         ::blink_core::BlinkConfig::new({}, {}, {});\n",
        led, settings.on_ms, settings.off_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(content: &str) -> Vec<String> {
        match parse_settings(content) {
            Err(SettingsError::Invalid(errors)) => errors,
            other => panic!("expected invalid settings, got {:?}", other),
        }
    }

    #[test]
    fn test_shipped_file_matches_defaults() {
        let settings = parse_settings(include_str!("../blink.toml")).unwrap();
        assert_eq!(settings, BlinkSettings::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse_settings("").unwrap(), BlinkSettings::default());
        assert_eq!(
            parse_settings("[timing]\non_ms = 250\n").unwrap(),
            BlinkSettings {
                on_ms: 250,
                ..BlinkSettings::default()
            }
        );
    }

    #[test]
    fn test_host_pin() {
        let settings = parse_settings("[led]\npin = \"host\"\n").unwrap();
        assert_eq!(settings.led, LedSetting::Host);

        let source = render_config(&settings);
        assert!(source.contains("::blink_core::LedPinSource::HostReported, 100, 900"));
    }

    #[test]
    fn test_fixed_pin_renders() {
        let settings = parse_settings("[led]\npin = 13\n").unwrap();
        assert_eq!(settings.led, LedSetting::Fixed(13));
        assert!(render_config(&settings)
            .contains("::blink_core::LedPinSource::Fixed(::blink_hal::PinId(13)), 100, 900"));
    }

    #[test]
    fn test_bad_pin_string() {
        let errors = errors("[led]\npin = \"led\"\n");
        assert_eq!(
            errors,
            vec!["[led] pin: expected a pin number or \"host\", got \"led\"".to_string()]
        );
    }

    #[test]
    fn test_unknown_key_and_section() {
        let errors = errors("[led]\npin = 19\ncolour = 1\n\n[blink]\nrate = 2\n");
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&"unknown key 'colour' in [led]".to_string()));
        assert!(errors.contains(&"unknown section [blink]".to_string()));
    }

    #[test]
    fn test_section_must_be_table() {
        let errors = errors("led = 19\n");
        assert_eq!(errors, vec!["[led] must be a table".to_string()]);
    }

    #[test]
    fn test_out_of_range() {
        let errors = errors("[timing]\non_ms = -1\noff_ms = 4294967296\n");
        assert_eq!(
            errors,
            vec![
                "[timing] on_ms: -1 is outside 0..=4294967295".to_string(),
                "[timing] off_ms: 4294967296 is outside 0..=4294967295".to_string(),
            ]
        );

        let settings = parse_settings("[timing]\non_ms = 4294967295\n").unwrap();
        assert_eq!(settings.on_ms, u32::MAX);
    }

    #[test]
    fn test_wrong_type() {
        let errors = errors("[timing]\noff_ms = 1.5\n");
        assert_eq!(
            errors,
            vec!["[timing] off_ms: expected an integer, got float".to_string()]
        );
    }

    #[test]
    fn test_both_zero_rejected() {
        let errors = errors("[timing]\non_ms = 0\noff_ms = 0\n");
        assert_eq!(
            errors,
            vec!["[timing] on_ms and off_ms cannot both be 0".to_string()]
        );

        assert!(parse_settings("[timing]\non_ms = 0\n").is_ok());
        assert!(parse_settings("[timing]\noff_ms = 0\n").is_ok());
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            parse_settings("[timing\n"),
            Err(SettingsError::Syntax(_))
        ));
    }
}
