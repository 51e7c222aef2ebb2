// cursorrules - core/rules.rs
//
// The commit convention text installed into Cursor's global config.
// Embedded at compile time so the binary has no runtime asset lookup.

/// File name Cursor reads global rules from.
pub const RULES_FILE_NAME: &str = ".cursorrules";

/// The commit-message convention, written to disk byte-for-byte.
pub const COMMIT_RULES: &str = include_str!("../../rules/commit_rules.md");
