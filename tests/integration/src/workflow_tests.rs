//! Load, edit and save cycles against real files.

use netrc_store::{Error, NetrcFile, StoreConfig};
use netrc_test_utils::{FailingCipher, ReversingCipher, TestHome, fixtures};
use pretty_assertions::assert_eq;

#[test]
fn test_rotate_password_touches_only_that_value() {
    let home = TestHome::new();
    let path = home.write_fixture("login", ".netrc");

    let mut file = NetrcFile::load(&path).unwrap();
    file.machine_mut("code.heroku.com")
        .unwrap()
        .set("password", "bar");
    file.save().unwrap();

    let expected = fixtures::read("login").replace(
        "password foo # this is my password",
        "password bar # this is my password",
    );
    home.assert_contents(".netrc", &expected);
}

#[test]
fn test_add_and_remove_machines() {
    let home = TestHome::new();
    let path = home.write_fixture("sample_multi", ".netrc");

    let mut file = NetrcFile::load(&path).unwrap();
    file.add_machine("o", "lo", "po");
    assert_eq!(file.remove_machine("m"), 1);
    file.save().unwrap();

    home.assert_contents(
        ".netrc",
        "# this is my netrc with multiple machines\n\
         machine n\n  login ln\n  password pn\n\
         machine o\n  login lo\n  password po\n",
    );

    let reloaded = NetrcFile::load(&path).unwrap();
    assert_eq!(reloaded.machine("o").unwrap().password(), Some("po"));
    assert!(reloaded.machine("m").is_none());
}

#[test]
fn test_add_machine_to_file_without_final_newline() {
    let home = TestHome::new();
    let path = home.write_fixture("newlineless", ".netrc");

    let mut file = NetrcFile::load(&path).unwrap();
    file.add_machine("x", "lx", "px");
    file.save().unwrap();

    home.assert_contents(
        ".netrc",
        &format!("{}\nmachine x\n  login lx\n  password px\n", fixtures::read("newlineless")),
    );

    let reloaded = NetrcFile::load(&path).unwrap();
    let m = reloaded.machine("m").unwrap();
    assert_eq!(m.login(), Some("l"));
    assert_eq!(m.password(), Some("p"));
    let x = reloaded.machine("x").unwrap();
    assert_eq!(x.login(), Some("lx"));
    assert_eq!(x.password(), Some("px"));
}

#[cfg(unix)]
#[test]
fn test_save_is_owner_only() {
    let home = TestHome::new();
    let path = home.write_fixture("good", ".netrc");

    let file = NetrcFile::load(&path).unwrap();
    file.save().unwrap();

    assert_eq!(home.mode(".netrc"), 0o600);
}

#[test]
fn test_encrypted_store_round_trip() {
    let home = TestHome::new();
    let plain = fixtures::read("sample_multi_with_default");
    let ciphertext: Vec<u8> = plain.bytes().rev().collect();
    let path = home.write(".netrc.gpg", &ciphertext);

    let mut file =
        NetrcFile::load_with(&path, StoreConfig::default(), Box::new(ReversingCipher)).unwrap();
    assert_eq!(file.machine("n").unwrap().login(), Some("ln"));

    file.machine_mut("default").unwrap().set("password", "pd2");
    file.save().unwrap();

    let expected: Vec<u8> = plain.replace("password pd", "password pd2").bytes().rev().collect();
    assert_eq!(home.read(".netrc.gpg"), expected);
}

#[test]
fn test_plain_files_bypass_the_cipher() {
    let home = TestHome::new();
    let path = home.write_fixture("default_only", ".netrc");

    let file = NetrcFile::load_with(&path, StoreConfig::default(), Box::new(FailingCipher)).unwrap();
    assert_eq!(file.machine("default").unwrap().login(), Some("ld"));
    file.save().unwrap();
}

#[test]
fn test_cipher_failure_is_fatal() {
    let home = TestHome::new();
    let path = home.write(".netrc.gpg", b"not really encrypted");

    let err = NetrcFile::load_with(&path, StoreConfig::default(), Box::new(FailingCipher))
        .unwrap_err();
    assert!(matches!(err, Error::CipherPipe { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let home = TestHome::new();
    let err = NetrcFile::load(home.path("absent")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
