// cursorrules - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every filesystem failure keeps the path it happened on and the
// underlying io::Error as its source.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while installing the commit rules.
#[derive(Debug)]
pub enum SetupError {
    /// The operating system reported no home directory for this user.
    HomeDirUnavailable,

    /// The Cursor configuration directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// The rules content could not be written to its temp file.
    Write { path: PathBuf, source: io::Error },

    /// The fully written temp file could not replace the rules file.
    Finalise { path: PathBuf, source: io::Error },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeDirUnavailable => {
                write!(f, "Could not determine the current user's home directory")
            }
            Self::CreateDir { path, source } => write!(
                f,
                "Failed to create Cursor config directory '{}': {source}",
                path.display()
            ),
            Self::Write { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
            Self::Finalise { path, source } => write!(
                f,
                "Failed to replace rules file '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HomeDirUnavailable => None,
            Self::CreateDir { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Finalise { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for cursorrules results.
pub type Result<T> = std::result::Result<T, SetupError>;
