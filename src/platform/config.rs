// cursorrules - platform/config.rs
//
// This tool's own config.toml: location and loading with startup
// validation. Only logging is configurable; the Cursor target path is
// always derived from the OS.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Directory holding this tool's config.toml.
///
/// Falls back to the current directory if platform dirs cannot be
/// determined.
pub fn config_dir() -> PathBuf {
    match ProjectDirs::from("", "", constants::APP_ID) {
        // config.toml lives one level above config/ on Windows so the
        // user-visible path is %APPDATA%\cursorrules\config.toml.
        Some(proj_dirs) => {
            let dir = proj_dirs.config_dir();
            if cfg!(target_os = "windows") {
                dir.parent().unwrap_or(dir).to_path_buf()
            } else {
                dir.to_path_buf()
            }
        }
        None => PathBuf::from("."),
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging level string, applied when neither RUST_LOG nor --debug is set.
    pub log_level: Option<String>,
}

/// Load and validate `config.toml` from `config_dir`.
///
/// Returns the validated config and a list of non-fatal warnings.
/// A missing file yields defaults and no warnings. An unreadable or
/// unparseable file yields defaults and a warning. Loading happens before
/// logging is up, so warnings are returned for the caller to report.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    if let Some(ref level) = raw.logging.level {
        let normalised = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&normalised.as_str()) {
            config.log_level = Some(normalised);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) {
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_level_is_applied() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[logging]\nlevel = \"DEBUG\"\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn test_invalid_level_warns() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[logging]\nlevel = \"loud\"\n");
        let (config, warnings) = load_config(dir.path());
        assert!(config.log_level.is_none());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("loud"));
    }

    #[test]
    fn test_malformed_toml_warns() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[logging\nlevel = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to parse"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[future]\nflag = true\n\n[logging]\nlevel = \"info\"\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(warnings.is_empty());
    }
}
