use netrc_store::io;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".netrc");

    io::write_atomic(&path, b"machine m\n", 0o600).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "machine m\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".netrc");
    fs::write(&path, "original").unwrap();

    io::write_atomic(&path, b"updated", 0o600).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "updated");
}

#[test]
fn test_write_atomic_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/.netrc");

    io::write_atomic(&path, b"default\n", 0o600).unwrap();

    assert!(path.exists());
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".netrc");

    io::write_atomic(&path, b"one", 0o600).unwrap();
    io::write_atomic(&path, b"two", 0o600).unwrap();

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from(".netrc")]);
}

#[test]
fn test_read_bytes_nonexistent_file() {
    let result = io::read_bytes(std::path::Path::new("/nonexistent/.netrc"));
    assert!(matches!(result, Err(netrc_store::Error::Io { .. })));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_write_atomic_applies_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".netrc");
        fs::write(&path, "world readable").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();

        io::write_atomic(&path, b"secret", 0o600).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_write_atomic_honours_configured_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".netrc");

        io::write_atomic(&path, b"shared", 0o640).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }
}
