// cursorrules - platform/paths.rs
//
// Cursor global configuration directory resolution.
//
// Cursor does not follow the `directories` crate's per-app layout on every
// platform, so only the home directory comes from `directories`; the
// suffix under it is fixed per platform.

use crate::util::constants::CURSOR_DIR_NAME;
use crate::util::error::{Result, SetupError};
use directories::BaseDirs;
use std::fmt;
use std::path::{Path, PathBuf};

/// Operating system families with distinct Cursor config locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and every other Unix-like target.
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os_id(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform.
    ///
    /// Accepts both Rust `target_os` names (`windows`, `macos`) and the
    /// Node-style names (`win32`, `darwin`). Anything unrecognised is
    /// treated as Linux.
    pub fn from_os_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "windows" | "win32" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            _ => Self::Linux,
        }
    }

    /// Path components under the home directory, ending in the Cursor dir.
    fn home_suffix(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["AppData", "Roaming", CURSOR_DIR_NAME],
            Self::MacOs => &["Library", "Application Support", CURSOR_DIR_NAME],
            Self::Linux => &[".config", CURSOR_DIR_NAME],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        };
        f.write_str(name)
    }
}

/// Cursor's global configuration directory for `platform` under `home`.
pub fn cursor_config_dir(platform: Platform, home: &Path) -> PathBuf {
    platform
        .home_suffix()
        .iter()
        .fold(home.to_path_buf(), |dir, part| dir.join(part))
}

/// The current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or(SetupError::HomeDirUnavailable)?;
    let home = base.home_dir().to_path_buf();
    tracing::debug!(home = %home.display(), "Home directory resolved");
    Ok(home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_dir() {
        let home = PathBuf::from("home-u");
        assert_eq!(
            cursor_config_dir(Platform::Windows, &home),
            home.join("AppData").join("Roaming").join("Cursor")
        );
    }

    #[test]
    fn test_macos_dir() {
        let home = PathBuf::from("home-u");
        assert_eq!(
            cursor_config_dir(Platform::MacOs, &home),
            home.join("Library")
                .join("Application Support")
                .join("Cursor")
        );
    }

    #[test]
    fn test_linux_dir() {
        let home = PathBuf::from("/home/u");
        assert_eq!(
            cursor_config_dir(Platform::Linux, &home),
            PathBuf::from("/home/u/.config/Cursor")
        );
    }

    #[test]
    fn test_os_id_mapping() {
        assert_eq!(Platform::from_os_id("win32"), Platform::Windows);
        assert_eq!(Platform::from_os_id("Windows"), Platform::Windows);
        assert_eq!(Platform::from_os_id("darwin"), Platform::MacOs);
        assert_eq!(Platform::from_os_id("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_id("linux"), Platform::Linux);
    }

    /// Unknown identifiers fall through to the Linux layout.
    #[test]
    fn test_unknown_os_id_falls_back_to_linux() {
        for id in ["freebsd", "openbsd", "aix", ""] {
            assert_eq!(Platform::from_os_id(id), Platform::Linux, "id = {id:?}");
        }
    }

    #[test]
    fn test_current_matches_target_os() {
        let expected = if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        };
        assert_eq!(Platform::current(), expected);
    }

    #[test]
    fn test_display_round_trips_through_os_id() {
        for p in [Platform::Windows, Platform::MacOs, Platform::Linux] {
            assert_eq!(Platform::from_os_id(&p.to_string()), p);
        }
    }
}
