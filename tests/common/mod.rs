//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("app.properties", props::NESTED);
//!     fixture.command().args(["resolve", "-p", "app.properties", "${a}"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::props;
    pub use super::TestFixture;
}

/// Common property file snippets for testing.
#[allow(dead_code)]
pub mod props {
    /// Values that reference each other without cycles.
    pub const NESTED: &str = "\
app.name=demo
app.version=1.4.0
app.artifact=${app.name}-${app.version}.jar
app.banner=Building ${app.artifact}
";

    /// A two-key cycle alongside a healthy value.
    pub const CIRCULAR: &str = "\
healthy=ok
a=${b}
b=${a}
";

    /// A value referencing a key nobody defines.
    pub const UNRESOLVED: &str = "\
greeting=Hello ${user.name}
";

    /// The same data as `NESTED`, in YAML.
    pub const NESTED_YAML: &str = r#"
app:
  name: demo
  version: "1.4.0"
  artifact: "${app.name}-${app.version}.jar"
"#;
}

/// A temporary directory populated with property files.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command running in the fixture directory.
    ///
    /// The command never sees the invoking user's system properties file or
    /// `RUST_LOG`, and colours are disabled.
    pub fn command(&self) -> assert_cmd::Command {
        let system_file = self.temp_dir.child("system.properties");
        if !system_file.path().exists() {
            system_file
                .touch()
                .expect("Failed to create system properties file");
        }

        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("prop-expand");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .env("PROP_EXPAND_SYSTEM_FILE", system_file.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
