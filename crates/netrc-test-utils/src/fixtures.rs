//! Sample netrc files shared by the test suites.

use std::fs;
use std::path::PathBuf;

/// Every fixture file name, without the `.netrc` extension.
pub const ALL: &[&str] = &[
    "bad_default_order",
    "default_only",
    "good",
    "login",
    "newlineless",
    "password",
    "permissive",
    "sample_multi",
    "sample_multi_with_default",
];

/// Directory holding the fixture files.
pub fn dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/netrc")
}

/// Path of the fixture `name` (without extension).
pub fn path(name: &str) -> PathBuf {
    dir().join(format!("{name}.netrc"))
}

/// Contents of the fixture `name`.
///
/// Panics if the fixture does not exist.
pub fn read(name: &str) -> String {
    let path = path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixtures::read: cannot read {}: {e}", path.display()))
}
