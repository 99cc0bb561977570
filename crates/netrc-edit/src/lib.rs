//! Format-preserving parsing and editing of netrc credential files
//!
//! The file is split into fragments (whitespace runs, words and whole comment
//! lines) whose concatenation reproduces the input byte for byte. Entries own
//! the fragments from their `machine`/`default` keyword up to the next entry,
//! and edits replace or append fragments in place, so anything that was not
//! edited renders exactly as it was read.
//!
//! ```
//! use netrc_edit::Document;
//!
//! let mut doc = Document::parse("machine m\n  login l\n  password p\n").unwrap();
//! assert_eq!(doc.machine("m").and_then(|m| m.get("login")), Some("l"));
//!
//! doc.machine_mut("m").unwrap().set("password", "p2");
//! assert_eq!(doc.render(), "machine m\n  login l\n  password p2\n");
//! ```

pub mod document;
pub mod entry;
pub mod error;
pub mod fragment;
pub mod lexer;
pub mod parser;

pub use document::Document;
pub use entry::{Edit, EditKind, Entry, EntryKind, Record};
pub use error::{Error, Result};
pub use fragment::{Fragment, FragmentKind, is_token};
pub use lexer::{Lexer, lex, lex_str};
pub use parser::parse;

/// Keyword that opens a named host entry.
pub const MACHINE_KEYWORD: &str = "machine";

/// Keyword that opens the default entry; also the name such entries report.
pub const DEFAULT_KEYWORD: &str = "default";
