use serde::Deserialize;

// =============================================================================
// Column-width constants
// =============================================================================

/// Width of the prefix column (VARCHAR(16))
pub const MAX_PREFIX_LENGTH: usize = 16;

/// Greatest word under byte ordering, used when a version has no prerelease
pub const MAX_PRERELEASE_WORD: &str = "zzzzzzzzz";

/// Width of the prerelease word column (VARCHAR(60)): 64 minus the X.Y.Z part
pub const MAX_PRERELEASE_WORD_LENGTH: usize = 60;

/// Largest prerelease number, enough to pack 999.999.999
pub const MAX_PRERELEASE_NUMBER: u32 = 999_999_999;

/// Digits kept from a prerelease number so it fits a signed 32-bit column
pub const MAX_PRERELEASE_NUMBER_LENGTH: usize = 9;

/// Weight between the slots of a packed dotted-numeric prerelease
pub const PRERELEASE_INT_FACTOR: u64 = 1000;

/// Build value used when a version carries no build metadata
pub const MAX_BUILD_WORD: &str = "zzzzzzzzz";

/// Width of the build column (VARCHAR(60))
pub const MAX_BUILD_WORD_LENGTH: usize = 60;

// =============================================================================
// Logging
// =============================================================================

/// Environment variable that overrides the CLI log filter
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Filter used by `--verbose`
pub const VERBOSE_LOG_DIRECTIVE: &str = "semver_order=debug";

/// Names of the table and columns the encoded fields are stored in
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnConfig {
    pub table: String,
    pub version: String,
    pub prefix: String,
    pub prerelease_word: String,
    pub prerelease_number: String,
    pub build: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            table: "module_versions".to_string(),
            version: "version".to_string(),
            prefix: "version_prefix".to_string(),
            prerelease_word: "prerelease_word".to_string(),
            prerelease_number: "prerelease_number".to_string(),
            build: "version_build".to_string(),
        }
    }
}

/// Returns the log filter directive for the CLI.
/// `RUST_LOG` wins when set and non-empty, otherwise `--verbose` enables
/// debug output for this crate and everything else stays off.
pub fn log_directive(verbose: bool) -> String {
    log_directive_with_env(std::env::var(LOG_ENV_VAR).ok(), verbose)
}

fn log_directive_with_env(rust_log: Option<String>, verbose: bool) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => VERBOSE_LOG_DIRECTIVE.to_string(),
        _ => "off".to_string(),
    }
}
