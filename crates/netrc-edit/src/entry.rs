//! Entries and positional key/value access
//!
//! After its header (`machine`, separator, name, separator; or `default`,
//! separator) an entry's fragments repeat as 4-fragment records:
//! `key, separator, value, terminator`. Lookups and edits walk that stride and
//! touch nothing but the value fragment they target.

use crate::fragment::{Fragment, FragmentKind, end_line, is_token};
use crate::{DEFAULT_KEYWORD, MACHINE_KEYWORD};

/// Fragments per key/value record.
const RECORD_STRIDE: usize = 4;

/// Whether an entry is a named host or the catch-all default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Machine,
    Default,
}

impl EntryKind {
    /// Fragments before the first record.
    pub fn header_len(self) -> usize {
        match self {
            Self::Machine => 4,
            Self::Default => 2,
        }
    }
}

/// One `machine` or `default` clause and every fragment up to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    kind: EntryKind,
    fragments: Vec<Fragment>,
}

/// Borrowed view of one `key separator value terminator` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: &'a Fragment,
    pub separator: &'a Fragment,
    pub value: &'a Fragment,
    /// Absent only for a final record cut off by end-of-input.
    pub terminator: Option<&'a Fragment>,
}

/// What [`Entry::set`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// An existing value fragment was swapped out.
    Replaced { old_value: String },
    /// A new record was appended to the entry.
    Appended,
}

/// Outcome of a single key update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub key: String,
    pub kind: EditKind,
}

impl Edit {
    pub fn is_append(&self) -> bool {
        matches!(self.kind, EditKind::Appended)
    }
}

impl Entry {
    /// Build an entry from fragments already grouped by the parser.
    pub(crate) fn from_fragments(
        name: impl Into<String>,
        kind: EntryKind,
        fragments: Vec<Fragment>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            fragments,
        }
    }

    /// A fresh named entry rendering as `machine <name>\n`.
    pub fn machine(name: impl Into<String>) -> Self {
        let name = name.into();
        let fragments = vec![
            Fragment::from(MACHINE_KEYWORD),
            Fragment::from(" "),
            Fragment::from(name.as_str()),
            Fragment::from("\n"),
        ];
        Self {
            name,
            kind: EntryKind::Machine,
            fragments,
        }
    }

    /// The machine name, or `default` for the default entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_default(&self) -> bool {
        self.kind == EntryKind::Default
    }

    pub fn header_len(&self) -> usize {
        self.kind.header_len()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Fragments after the header; empty when the header itself is truncated.
    fn body(&self) -> &[Fragment] {
        self.fragments.get(self.header_len()..).unwrap_or(&[])
    }

    /// Every complete record, in file order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.body()
            .chunks(RECORD_STRIDE)
            .filter(|chunk| chunk.len() >= 3)
            .map(|chunk| Record {
                key: &chunk[0],
                separator: &chunk[1],
                value: &chunk[2],
                terminator: chunk.get(3),
            })
    }

    /// Value of the first record whose key is exactly `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.records()
            .find(|record| record.key == key)
            .map(|record| record.value.as_str())
    }

    pub fn login(&self) -> Option<&str> {
        self.get("login")
    }

    pub fn password(&self) -> Option<&str> {
        self.get("password")
    }

    pub fn account(&self) -> Option<&str> {
        self.get("account")
    }

    /// Set `key` to `value`.
    ///
    /// An existing record keeps its separators and only its value fragment is
    /// replaced. A missing key is appended as `"  key value\n"`, on a line of
    /// its own when the entry ends in an unterminated comment.
    ///
    /// The value is stored verbatim. It only reads back after a render and
    /// re-parse if it is a single token (see [`is_token`]); an empty value or
    /// one holding whitespace or `#` is written as given and logged.
    pub fn set(&mut self, key: &str, value: &str) -> Edit {
        if !is_token(value) {
            tracing::warn!(
                machine = %self.name,
                key,
                "value is not a single token and will not survive a re-parse"
            );
        }

        let header = self.header_len().min(self.fragments.len());
        let existing = self.fragments[header..]
            .chunks_mut(RECORD_STRIDE)
            .filter(|chunk| chunk.len() >= 3)
            .find(|chunk| chunk[0] == key);

        if let Some(record) = existing {
            let old = std::mem::replace(&mut record[2], Fragment::from(value));
            return Edit {
                key: key.to_string(),
                kind: EditKind::Replaced {
                    old_value: old.into_string(),
                },
            };
        }

        self.append_record(key, value);
        Edit {
            key: key.to_string(),
            kind: EditKind::Appended,
        }
    }

    /// Append `"  " key " " value "\n"`, keeping the new key on the record
    /// stride when the existing layout allows it.
    fn append_record(&mut self, key: &str, value: &str) {
        const INDENT: &str = "  ";

        if self
            .fragments
            .last()
            .is_some_and(|last| last.kind() == FragmentKind::Comment && !last.ends_line())
        {
            end_line(&mut self.fragments);
        }

        let header = self.header_len();
        let len = self.fragments.len();
        let aligned = len >= header && (len - header) % RECORD_STRIDE == 0;
        let folds_into_last = aligned
            && self
                .fragments
                .last()
                .is_some_and(|last| last.kind() != FragmentKind::Word);

        if folds_into_last {
            if let Some(last) = self.fragments.last_mut() {
                *last = Fragment::new(format!("{last}{INDENT}"));
            }
        } else {
            self.fragments.push(Fragment::from(INDENT));
        }

        self.fragments.extend([
            Fragment::from(key),
            Fragment::from(" "),
            Fragment::from(value),
            Fragment::from("\n"),
        ]);
    }

    /// Drop everything after the header name and start over as a bare
    /// `machine <name>\n` entry.
    pub(crate) fn reset_header(&mut self, name: &str) {
        *self = Self::machine(name);
    }

    /// Terminate the entry's last line so another entry can follow it.
    pub(crate) fn end_line(&mut self) {
        end_line(&mut self.fragments);
    }

    pub fn render(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        for fragment in &self.fragments {
            out.push_str(fragment.as_str());
        }
    }
}

impl Default for Entry {
    /// An empty `default` entry, rendering as `default\n`.
    fn default() -> Self {
        Self {
            name: DEFAULT_KEYWORD.to_string(),
            kind: EntryKind::Default,
            fragments: vec![Fragment::from(DEFAULT_KEYWORD), Fragment::from("\n")],
        }
    }
}
