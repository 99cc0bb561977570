//! [`TestHome`] temporary directory for load/save scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// A temporary directory standing in for a user's home.
///
/// # Example
///
/// ```rust,no_run
/// use netrc_test_utils::TestHome;
///
/// let home = TestHome::new();
/// let path = home.write_fixture("good", ".netrc");
/// home.assert_contents(".netrc", &netrc_test_utils::fixtures::read("good"));
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name` and return its path.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Copy the fixture `fixture` to `name` and return its path.
    pub fn write_fixture(&self, fixture: &str, name: &str) -> PathBuf {
        self.write(name, fixtures::read(fixture))
    }

    /// Read `name` back as bytes.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.path(name)).unwrap()
    }

    /// Assert that `name` holds exactly `expected`.
    pub fn assert_contents(&self, name: &str, expected: &str) {
        let actual = String::from_utf8(self.read(name)).unwrap();
        assert_eq!(actual, expected, "unexpected contents in {name}");
    }

    /// Permission bits of `name`.
    #[cfg(unix)]
    pub fn mode(&self, name: &str) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(self.path(name)).unwrap().permissions().mode() & 0o777
    }
}
