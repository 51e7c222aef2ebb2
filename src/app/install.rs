// cursorrules - app/install.rs
//
// Installs the commit rules into Cursor's global config directory.
// One linear sequence: resolve -> ensure dir -> write -> outcome.
// Any failure aborts the sequence; nothing is retried.

use crate::core::rules::{COMMIT_RULES, RULES_FILE_NAME};
use crate::platform::fs::{ensure_dir, write_atomic};
use crate::platform::paths::{cursor_config_dir, home_dir, Platform};
use crate::util::error::Result;
use std::path::{Path, PathBuf};

/// Where the rules file is going to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    /// Cursor's global configuration directory.
    pub cursor_dir: PathBuf,
    /// `cursor_dir/.cursorrules`.
    pub rules_path: PathBuf,
}

impl InstallTarget {
    /// Target for the running platform and the current user's home.
    pub fn resolve() -> Result<Self> {
        let home = home_dir()?;
        Ok(Self::for_platform(Platform::current(), &home))
    }

    /// Target for an explicit platform and home directory.
    pub fn for_platform(platform: Platform, home: &Path) -> Self {
        let target = Self::in_dir(cursor_config_dir(platform, home));
        tracing::debug!(
            platform = %platform,
            dir = %target.cursor_dir.display(),
            "Cursor config directory resolved"
        );
        target
    }

    /// Target inside an already-known Cursor directory.
    pub fn in_dir(cursor_dir: PathBuf) -> Self {
        let rules_path = cursor_dir.join(RULES_FILE_NAME);
        Self {
            cursor_dir,
            rules_path,
        }
    }
}

/// What a successful install did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Path of the written rules file.
    pub rules_path: PathBuf,
    /// True when the Cursor directory did not exist and was created.
    pub created_dir: bool,
    /// Bytes written to the rules file.
    pub bytes_written: usize,
    /// True when the file already held exactly the rules before this run.
    pub unchanged: bool,
}

/// True when the rules file already holds exactly the commit rules.
pub fn is_up_to_date(target: &InstallTarget) -> bool {
    std::fs::read(&target.rules_path)
        .map(|existing| existing == COMMIT_RULES.as_bytes())
        .unwrap_or(false)
}

/// Write the commit rules to `target`, creating its directory if needed.
///
/// The file is always rewritten, even when already current, so a run
/// leaves the file equal to the rules regardless of its prior state.
pub fn install(target: &InstallTarget) -> Result<InstallOutcome> {
    let created_dir = ensure_dir(&target.cursor_dir)?;

    let unchanged = !created_dir && is_up_to_date(target);

    let bytes_written = write_atomic(&target.rules_path, COMMIT_RULES.as_bytes())?;

    tracing::info!(
        path = %target.rules_path.display(),
        bytes = bytes_written,
        created_dir,
        unchanged,
        "Commit rules installed"
    );

    Ok(InstallOutcome {
        rules_path: target.rules_path.clone(),
        created_dir,
        bytes_written,
        unchanged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_linux_target_under_home() {
        let target = InstallTarget::for_platform(Platform::Linux, Path::new("/home/u"));
        assert_eq!(
            target.rules_path,
            PathBuf::from("/home/u/.config/Cursor/.cursorrules")
        );
        assert_eq!(target.cursor_dir, PathBuf::from("/home/u/.config/Cursor"));
    }

    #[test]
    fn test_install_into_fresh_home() {
        let home = TempDir::new().unwrap();
        let target = InstallTarget::for_platform(Platform::MacOs, home.path());

        let outcome = install(&target).unwrap();
        assert!(outcome.created_dir);
        assert!(!outcome.unchanged);
        assert_eq!(outcome.bytes_written, COMMIT_RULES.len());
        assert_eq!(std::fs::read_to_string(&target.rules_path).unwrap(), COMMIT_RULES);
    }

    #[test]
    fn test_up_to_date_detection() {
        let dir = TempDir::new().unwrap();
        let target = InstallTarget::in_dir(dir.path().to_path_buf());
        assert!(!is_up_to_date(&target));

        std::fs::write(&target.rules_path, "stale").unwrap();
        assert!(!is_up_to_date(&target));

        assert!(!install(&target).unwrap().unchanged);
        assert!(is_up_to_date(&target));
        assert!(install(&target).unwrap().unchanged);
    }
}
