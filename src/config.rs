//! # Runtime Settings
//!
//! Host-specific knobs of a reconciliation. The CLI fills these from flags
//! and environment variables (`EXTREPO_SOURCES_DIR`, `EXTREPO_BIN`); library
//! users can start from [`Settings::default`], which matches a stock Debian
//! host.

use std::path::PathBuf;

use crate::defaults::{default_sources_dir, EXTREPO_EXECUTABLE};

/// Settings for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding extrepo's `.sources` files.
    pub sources_dir: PathBuf,
    /// Program invoked for `search`, `enable` and `disable`.
    pub extrepo_bin: String,
    /// Report what would change without running mutating commands.
    pub check_mode: bool,
}

impl Settings {
    pub fn with_sources_dir(mut self, sources_dir: impl Into<PathBuf>) -> Self {
        self.sources_dir = sources_dir.into();
        self
    }

    pub fn with_extrepo_bin(mut self, extrepo_bin: impl Into<String>) -> Self {
        self.extrepo_bin = extrepo_bin.into();
        self
    }

    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sources_dir: default_sources_dir(),
            extrepo_bin: EXTREPO_EXECUTABLE.to_string(),
            check_mode: false,
        }
    }
}
