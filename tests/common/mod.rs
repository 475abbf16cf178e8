//! Shared test utilities for CLI end-to-end tests.
//!
//! Every test gets a temporary directory holding a `sources/` directory and
//! a fake `extrepo` shell script. The script logs its arguments, answers
//! `search` from a canned catalog and, like the real tool, rewrites the
//! repository's `.sources` file on `enable` and `disable`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_source_file("jellyfin", Some("yes"));
//!     fixture.command().args(["ensure", "jellyfin"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Repositories the fake catalog knows about.
pub const CATALOG: &[&str] = &["torproject", "zulu-openjdk", "jellyfin", "i2pd", "yarnpkg"];

/// Behavior of one fake extrepo sub-command.
#[derive(Clone)]
struct FakeResponse {
    code: i32,
    stderr: String,
}

impl Default for FakeResponse {
    fn default() -> Self {
        Self {
            code: 0,
            stderr: String::new(),
        }
    }
}

/// A temporary host with a sources directory and a fake extrepo.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    search: FakeResponse,
    enable: FakeResponse,
    disable: FakeResponse,
}

impl TestFixture {
    /// Create a fixture with an empty sources directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("sources")
            .create_dir_all()
            .expect("Failed to create sources directory");

        let search_output: String = CATALOG
            .iter()
            .map(|name| format!("Found {name}:\n---\ndescription: {name} repository\n\n\n"))
            .collect();
        temp_dir
            .child("search.out")
            .write_str(&search_output)
            .expect("Failed to write search output");

        let fixture = Self {
            temp_dir,
            search: FakeResponse::default(),
            enable: FakeResponse::default(),
            disable: FakeResponse::default(),
        };
        fixture.write_script();
        fixture
    }

    /// Write `extrepo_<name>.sources`, optionally with an `Enabled:` line.
    pub fn with_source_file(self, name: &str, enabled: Option<&str>) -> Self {
        let mut content = String::from(
            "Types: deb\nURIs: https://example.org/debian\nSuites: bookworm\nComponents: main\n",
        );
        if let Some(value) = enabled {
            content.push_str(&format!("Enabled: {value}\n"));
        }
        self.with_raw_source_file(name, &content)
    }

    /// Write `extrepo_<name>.sources` with exactly `content`.
    pub fn with_raw_source_file(self, name: &str, content: &str) -> Self {
        fs::write(self.source_path(name), content).expect("Failed to write sources file");
        self
    }

    /// Make `extrepo search` fail with `code` and `stderr`.
    pub fn with_search_failure(mut self, code: i32, stderr: &str) -> Self {
        self.search = FakeResponse {
            code,
            stderr: stderr.to_string(),
        };
        self.write_script();
        self
    }

    /// Make `extrepo enable` fail with `code` and `stderr`.
    pub fn with_enable_failure(mut self, code: i32, stderr: &str) -> Self {
        self.enable = FakeResponse {
            code,
            stderr: stderr.to_string(),
        };
        self.write_script();
        self
    }

    /// Make `extrepo disable` fail with `code` and `stderr`.
    #[allow(dead_code)]
    pub fn with_disable_failure(mut self, code: i32, stderr: &str) -> Self {
        self.disable = FakeResponse {
            code,
            stderr: stderr.to_string(),
        };
        self.write_script();
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory the CLI is pointed at with `EXTREPO_SOURCES_DIR`.
    pub fn sources_dir(&self) -> PathBuf {
        self.path().join("sources")
    }

    /// Path of a repository's `.sources` file.
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.sources_dir().join(format!("extrepo_{name}.sources"))
    }

    /// Content of a repository's `.sources` file, if it exists.
    #[allow(dead_code)]
    pub fn source_content(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.source_path(name)).ok()
    }

    fn script_path(&self) -> PathBuf {
        self.path().join("extrepo")
    }

    fn log_path(&self) -> PathBuf {
        self.path().join("calls.log")
    }

    /// Every invocation of the fake extrepo, as `"<sub-command> <name>"`.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Create a command for the binary, wired to this fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("extrepo-repository");
        cmd.current_dir(self.path())
            .env("EXTREPO_SOURCES_DIR", self.sources_dir())
            .env("EXTREPO_BIN", self.script_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    fn write_script(&self) {
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> '{log}'
case "$1" in
  search)
    {search_fail}
    cat '{search_out}'
    ;;
  enable)
    {enable_fail}
    printf 'Types: deb\nURIs: https://example.org/debian\nEnabled: yes\n' > '{sources}/extrepo_'"$2"'.sources'
    ;;
  disable)
    {disable_fail}
    printf 'Types: deb\nURIs: https://example.org/debian\nEnabled: no\n' > '{sources}/extrepo_'"$2"'.sources'
    ;;
esac
exit 0
"#,
            log = self.log_path().display(),
            search_out = self.path().join("search.out").display(),
            sources = self.sources_dir().display(),
            search_fail = failure_snippet(&self.search),
            enable_fail = failure_snippet(&self.enable),
            disable_fail = failure_snippet(&self.disable),
        );

        let path = self.script_path();
        fs::write(&path, script).expect("Failed to write fake extrepo");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake extrepo executable");
    }
}

fn failure_snippet(response: &FakeResponse) -> String {
    if response.code == 0 {
        ":".to_string()
    } else {
        format!(
            "printf '%s' '{}' >&2; exit {}",
            response.stderr.replace('\'', "'\\''"),
            response.code
        )
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_sources_dir_and_script() {
        let fixture = TestFixture::new();
        assert!(fixture.sources_dir().is_dir());
        assert!(fixture.script_path().exists());
        assert!(fixture.calls().is_empty());
    }

    #[test]
    fn test_fixture_with_source_file() {
        let fixture = TestFixture::new().with_source_file("jellyfin", Some("no"));
        let content = fixture.source_content("jellyfin").unwrap();
        assert!(content.ends_with("Enabled: no\n"));
    }
}
