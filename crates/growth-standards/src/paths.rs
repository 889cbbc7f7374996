//! Standards directory path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "GROWTH_STANDARDS_DIR";

/// WHO release directory used when none is specified.
pub const DEFAULT_WHO_VERSION: &str = "2006";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `GROWTH_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// WHO reference data directory for a specific release.
pub fn who_path(version_dir: &str) -> PathBuf {
    standards_root().join("who").join(version_dir)
}

/// WHO reference data directory for the default release.
pub fn default_who_path() -> PathBuf {
    who_path(DEFAULT_WHO_VERSION)
}
