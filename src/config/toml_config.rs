use crate::core::square::DEFAULT_DELAY;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_DELAY_MS: u64 = 60_000;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub square: SquareConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SquareConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UtilsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UtilsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(delay_ms) = self.square.delay_ms {
            crate::utils::validation::validate_range("square.delay_ms", delay_ms, 0, MAX_DELAY_MS)?;
        }

        if let Some(level) = self.log_level() {
            crate::utils::validation::validate_non_empty_string("logging.level", level)?;
            if !VALID_LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(UtilsError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", VALID_LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for AppConfig {
    fn square_delay(&self) -> Duration {
        self.square
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_empty() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.square_delay(), DEFAULT_DELAY);
        assert_eq!(config.log_level(), None);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[square]
delay_ms = 250

[logging]
level = "debug"
json = true
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.square_delay(), Duration::from_millis(250));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_UTILS_TEST_DELAY", "42");

        let config = AppConfig::from_toml_str(
            r#"
[square]
delay_ms = ${SMALL_UTILS_TEST_DELAY}
"#,
        )
        .unwrap();
        assert_eq!(config.square_delay(), Duration::from_millis(42));

        std::env::remove_var("SMALL_UTILS_TEST_DELAY");
    }

    #[test]
    fn test_config_validation() {
        let too_slow = AppConfig::from_toml_str("[square]\ndelay_ms = 600000\n").unwrap();
        assert!(too_slow.validate().is_err());

        let bad_level = AppConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml_str("[square\n").unwrap_err();
        assert!(matches!(err, UtilsError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[square]\ndelay_ms = 10\n").unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.square_delay(), Duration::from_millis(10));
    }
}
