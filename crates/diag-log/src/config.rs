//! Startup configuration for the diagnostic log.
//!
//! The initial enabled state comes from `DEBUGG_MODE`, which defaults to on.
//! Setting `NO_COLOR` to any non-empty value switches the output to plain text.

pub const DEBUG_MODE_ENV: &str = "DEBUGG_MODE";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub enabled: bool,
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: true,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        let enabled = std::env::var(DEBUG_MODE_ENV)
            .map(|value| parse_flag(&value))
            .unwrap_or(true);
        let color = std::env::var_os(NO_COLOR_ENV).map_or(true, |value| value.is_empty());

        Self { enabled, color }
    }
}

/// Truthiness of an environment toggle.
///
/// Empty, `0`, `false`, `no` and `off` (case-insensitive, surrounding
/// whitespace ignored) are false; everything else is true.
pub fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_flag_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "Off"] {
            assert!(!parse_flag(value), "{value:?} should be false");
        }
    }

    #[test]
    fn test_parse_flag_truthy_values() {
        for value in ["1", "true", "yes", "on", "debug"] {
            assert!(parse_flag(value), "{value:?} should be true");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_to_enabled() {
        std::env::remove_var(DEBUG_MODE_ENV);
        std::env::remove_var(NO_COLOR_ENV);

        assert_eq!(LogConfig::from_env(), LogConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_toggles() {
        std::env::set_var(DEBUG_MODE_ENV, "false");
        std::env::set_var(NO_COLOR_ENV, "1");

        let config = LogConfig::from_env();

        std::env::remove_var(DEBUG_MODE_ENV);
        std::env::remove_var(NO_COLOR_ENV);

        assert!(!config.enabled);
        assert!(!config.color);
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_empty_no_color() {
        std::env::remove_var(DEBUG_MODE_ENV);
        std::env::set_var(NO_COLOR_ENV, "");

        let config = LogConfig::from_env();

        std::env::remove_var(NO_COLOR_ENV);

        assert!(config.color);
    }
}
