//! Basic usage example for netrc-edit

use netrc_edit::{Document, EditKind};

fn main() -> netrc_edit::Result<()> {
    let source = "\
# Personal credentials
machine api.example.com
    login jeff   # work account
    password hunter2

default login anonymous password guest
";

    let mut doc = Document::parse(source)?;
    println!("Entries: {}", doc.len());
    for entry in doc.entries() {
        println!("  - {} (login: {:?})", entry.name(), entry.login());
    }

    // Rotate a password in place; the comment and indentation stay put
    let edit = doc
        .machine_mut("api.example.com")
        .expect("machine present")
        .set("password", "correct-horse");
    if let EditKind::Replaced { old_value } = &edit.kind {
        println!("\nReplaced a {}-character password", old_value.len());
    }

    // A key the entry doesn't have yet is appended on its own line
    doc.machine_mut("api.example.com")
        .expect("machine present")
        .set("account", "billing");

    doc.add_machine("git.example.com", "jeff", "token-123");
    doc.remove_machine("default");

    println!("\nModified: {}", doc.is_modified());
    println!("\n{}", doc.render());

    Ok(())
}
