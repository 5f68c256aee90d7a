use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{LogError, LogFormat, LogLevel, LogTimeZone};

/// Environment variable overriding [`LogConfig::level`].
pub const LOG_ENV: &str = "AGR_LOG";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
    /// Filter expression, e.g. `"info"` or `"agr_core=debug,info"`.
    pub level: LogLevel,
    /// Timezone of timestamps.
    pub tz: LogTimeZone,
    /// Include event targets (module paths).
    pub with_targets: bool,
    /// Colored text output; only honored when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::default(),
            tz: LogTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LogConfig {
    /// Color is used only if enabled in config and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }

    /// Replace the level with the value of [`LOG_ENV`], if set.
    pub fn with_env_override(self) -> Result<Self, LogError> {
        self.with_level_override(std::env::var(LOG_ENV).ok().as_deref())
    }

    fn with_level_override(mut self, level: Option<&str>) -> Result<Self, LogError> {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level.parse()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = LogConfig::default();

        assert_eq!(cfg.format, LogFormat::Text);
        assert_eq!(cfg.tz, LogTimeZone::Utc);
        assert_eq!(cfg.level.as_str(), "info");
        assert!(cfg.with_targets);
        assert!(cfg.use_color);
    }

    #[test]
    fn partial_deserialization_keeps_defaults() {
        let cfg: LogConfig =
            serde_json::from_str(r#"{"format": "json", "level": "agr_core=debug,info"}"#).unwrap();

        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.level.as_str(), "agr_core=debug,info");
        assert!(cfg.with_targets);
        assert_eq!(cfg.tz, LogTimeZone::Utc);
    }

    #[test]
    fn rejects_invalid_level_in_config() {
        assert!(serde_json::from_str::<LogConfig>(r#"{"level": "agr_core=loud"}"#).is_err());
    }

    #[test]
    fn level_override_applies_only_when_set() {
        let cfg = LogConfig::default().with_level_override(None).unwrap();
        assert_eq!(cfg.level.as_str(), "info");

        let cfg = LogConfig::default().with_level_override(Some("  ")).unwrap();
        assert_eq!(cfg.level.as_str(), "info");

        let cfg = LogConfig::default().with_level_override(Some("debug")).unwrap();
        assert_eq!(cfg.level.as_str(), "debug");

        assert!(LogConfig::default().with_level_override(Some("x=wat")).is_err());
    }
}
