//! Default values for extrepo-repository.
//!
//! This module centralizes the host conventions shared by the resolver, the
//! executor and the CLI so that paths and program names live in one place.

use std::path::PathBuf;

/// Directory where APT (and extrepo) keep deb822 source definitions.
pub const APT_SOURCES_LIST_D: &str = "/etc/apt/sources.list.d";

/// Prefix extrepo puts in front of every source file it writes.
pub const EXTREPO_FILENAME_PREFIX: &str = "extrepo_";

/// Extension of extrepo's deb822 source files.
pub const EXTREPO_FILENAME_EXT: &str = ".sources";

/// Program name of the extrepo tool, looked up on `PATH`.
pub const EXTREPO_EXECUTABLE: &str = "extrepo";

/// Returns the default directory scanned for source definitions.
pub fn default_sources_dir() -> PathBuf {
    PathBuf::from(APT_SOURCES_LIST_D)
}

/// Returns the file name extrepo uses for the given repository.
///
/// ```
/// use extrepo_repository::defaults::sources_filename;
///
/// assert_eq!(sources_filename("vscodium"), "extrepo_vscodium.sources");
/// ```
pub fn sources_filename(repository_name: &str) -> String {
    format!("{EXTREPO_FILENAME_PREFIX}{repository_name}{EXTREPO_FILENAME_EXT}")
}
