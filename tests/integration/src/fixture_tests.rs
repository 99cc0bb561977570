//! Every sample netrc file loads, answers lookups, and renders unchanged.

use netrc_edit::Document;
use netrc_store::NetrcFile;
use netrc_test_utils::fixtures;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_every_fixture_round_trips() {
    for name in fixtures::ALL {
        let file = NetrcFile::load(fixtures::path(name)).unwrap();
        assert_eq!(file.render(), fixtures::read(name), "fixture {name}");
        assert!(!file.is_modified(), "fixture {name}");
    }
}

#[rstest]
#[case::login("login", "api.heroku.com", "jeff@heroku.com", "foo")]
#[case::login_second("login", "code.heroku.com", "jeff@heroku.com", "foo")]
#[case::sample_multi_m("sample_multi", "m", "lm", "pm")]
#[case::sample_multi_n("sample_multi", "n", "ln", "pn")]
#[case::with_default_m("sample_multi_with_default", "m", "lm", "pm")]
#[case::with_default_n("sample_multi_with_default", "n", "ln", "pn")]
#[case::with_default_default("sample_multi_with_default", "default", "ld", "pd")]
#[case::newlineless("newlineless", "m", "l", "p")]
#[case::bad_default_order_mail("bad_default_order", "mail.google.com", "joe@gmail.com", "somethingSecret")]
#[case::bad_default_order_ray("bad_default_order", "ray", "demo", "mypassword")]
#[case::default_only("default_only", "default", "ld", "pd")]
#[case::good("good", "mail.google.com", "joe@gmail.com", "somethingSecret")]
#[case::permissive("permissive", "m", "l", "p")]
fn test_fixture_credentials(
    #[case] fixture: &str,
    #[case] machine: &str,
    #[case] login: &str,
    #[case] password: &str,
) {
    let doc = Document::parse(&fixtures::read(fixture)).unwrap();
    let entry = doc.machine(machine).unwrap();
    assert_eq!(entry.login(), Some(login));
    assert_eq!(entry.password(), Some(password));
}

#[test]
fn test_password_only_entry() {
    let doc = Document::parse(&fixtures::read("password")).unwrap();
    let m = doc.machine("m").unwrap();
    assert_eq!(m.password(), Some("p"));
    assert_eq!(m.login(), None);
}

#[test]
fn test_account_behind_trailing_comment() {
    let doc = Document::parse(&fixtures::read("good")).unwrap();
    let mail = doc.machine("mail.google.com").unwrap();
    assert_eq!(mail.account(), Some("justagmail"));
    assert_eq!(doc.default_entry().and_then(|d| d.login()), Some("anonymous"));
}

#[test]
fn test_default_before_machines() {
    let doc = Document::parse(&fixtures::read("bad_default_order")).unwrap();
    let names: Vec<_> = doc.entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["mail.google.com", "default", "ray"]);
    assert_eq!(doc.machine("default").unwrap().login(), Some("anonymous"));
}

#[test]
fn test_edit_in_crlf_file_keeps_line_endings() {
    let mut doc = Document::parse(&fixtures::read("permissive")).unwrap();
    doc.machine_mut("m").unwrap().set("password", "rotated");
    assert_eq!(
        doc.render(),
        "machine m\r\n\tlogin\tl\r\n\tpassword    rotated\r\n"
    );
}
