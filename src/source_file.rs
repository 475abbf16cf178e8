//! # Source-File Classifier
//!
//! Reads one of extrepo's deb822 `.sources` files and classifies it by its
//! `Enabled:` marker. Nothing else in the file is inspected.
//!
//! | `Enabled:` lines            | Result            |
//! |-----------------------------|-------------------|
//! | none                        | `EnabledImplicit` |
//! | one, value `yes`            | `EnabledExplicit` |
//! | one, value `no`             | `Disabled`        |
//! | one, any other value        | `Broken`          |
//! | more than one               | `Broken`          |
//! | file missing or unreadable  | `NotPresent`      |
//!
//! apt itself treats any value other than `no` as enabled. We are stricter:
//! an unexpected value is reported as `Broken` so that it gets rewritten by
//! `extrepo enable` when the repository should be enabled.

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::state::SourceFileState;

/// Prefix of the only line this module cares about.
pub const ENABLED_PREFIX: &str = "Enabled: ";

/// Classify the source file at `path`.
///
/// A file that cannot be opened or read is `NotPresent`; this is a normal
/// starting state, not an error.
pub fn classify_source_file(path: &Path) -> SourceFileState {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("{} not readable ({}), treating as not present", path.display(), e);
            return SourceFileState::NotPresent;
        }
    };

    let state = classify_source(BufReader::new(file));
    debug!("{} classified as {}", path.display(), state);
    state
}

/// Classify source-file content from any buffered reader.
pub fn classify_source<R: BufRead>(reader: R) -> SourceFileState {
    let mut values = Vec::new();

    for line in reader.split(b'\n') {
        let Ok(line) = line else {
            return SourceFileState::NotPresent;
        };
        let line = String::from_utf8_lossy(&line);
        if let Some(value) = line.strip_prefix(ENABLED_PREFIX) {
            values.push(value.trim_end().to_string());
        }
    }

    match values.as_slice() {
        [] => SourceFileState::EnabledImplicit,
        [value] => match value.as_str() {
            "yes" => SourceFileState::EnabledExplicit,
            "no" => SourceFileState::Disabled,
            _ => SourceFileState::Broken,
        },
        _ => SourceFileState::Broken,
    }
}
