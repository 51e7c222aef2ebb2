// cursorrules - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "cursorrules";

/// Application identifier used for this tool's own config directory.
pub const APP_ID: &str = "cursorrules";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Cursor editor layout
// =============================================================================

/// Name of the Cursor directory under each platform's config root.
pub const CURSOR_DIR_NAME: &str = "Cursor";

/// Suffix appended to the rules file name while it is being written.
/// The temp file is renamed over the target once fully written.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

// =============================================================================
// Logging / config
// =============================================================================

/// Default log level when neither RUST_LOG, --debug nor config.toml set one.
///
/// Status lines go to stdout, so routine `info` events stay hidden unless
/// asked for.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted by `[logging] level` in config.toml.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Config file name, looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
