//! The netrc document: preamble plus ordered entries

use std::fmt;
use std::io::Read;

use crate::entry::Entry;
use crate::error::Result;
use crate::fragment::{Fragment, end_line};
use crate::lexer::{lex, lex_str};
use crate::parser::parse;

/// A parsed netrc file.
///
/// Owns every fragment of the file. Rendering concatenates the preamble and
/// then each entry's fragments in order, so an unedited document renders to
/// exactly the bytes it was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    preamble: Vec<Fragment>,
    entries: Vec<Entry>,
    /// Rendered form at parse time (for is_modified tracking)
    original: String,
}

impl Document {
    pub(crate) fn from_parts(preamble: Vec<Fragment>, entries: Vec<Entry>) -> Self {
        let mut doc = Self {
            preamble,
            entries,
            original: String::new(),
        };
        doc.original = doc.render();
        doc
    }

    /// Parse netrc text.
    pub fn parse(source: &str) -> Result<Self> {
        parse(lex_str(source))
    }

    /// Tokenize and parse everything `reader` produces.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        parse(lex(reader)?)
    }

    /// Fragments before the first entry.
    pub fn preamble(&self) -> &[Fragment] {
        &self.preamble
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry named `name`. The default entry answers to `default`.
    pub fn machine(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn machine_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.name() == name)
    }

    /// First entry named `name` whose `login` is `login`.
    ///
    /// Several entries may share a machine name with different logins. A name
    /// match with any other login is not returned.
    pub fn machine_with_login(&self, name: &str, login: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name && entry.login() == Some(login))
    }

    pub fn machine_with_login_mut(&mut self, name: &str, login: &str) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name() == name && entry.login() == Some(login))
    }

    /// The first `default` entry, if any.
    pub fn default_entry(&self) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.is_default())
    }

    /// Add a machine, or rewrite the first one named `name`, with the given
    /// credentials.
    ///
    /// An existing entry is reset to a bare `machine <name>` header first, so
    /// its previous records and formatting are discarded. A new entry goes at
    /// the end, after terminating the document's last line if needed. Use
    /// [`Entry::set`] through [`Document::machine_mut`] to edit in place.
    pub fn add_machine(&mut self, name: &str, login: &str, password: &str) -> &mut Entry {
        let index = match self.entries.iter().position(|entry| entry.name() == name) {
            Some(index) => {
                self.entries[index].reset_header(name);
                index
            }
            None => {
                match self.entries.last_mut() {
                    Some(last) => last.end_line(),
                    None => end_line(&mut self.preamble),
                }
                self.entries.push(Entry::machine(name));
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[index];
        entry.set("login", login);
        entry.set("password", password);
        entry
    }

    /// Remove every entry named `name`, keeping the rest in order.
    ///
    /// Returns how many entries were removed.
    pub fn remove_machine(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.name() != name);
        before - self.entries.len()
    }

    /// Concatenate every fragment back into netrc text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.original.len());
        for fragment in &self.preamble {
            out.push_str(fragment.as_str());
        }
        for entry in &self.entries {
            entry.write_to(&mut out);
        }
        out
    }

    /// Whether rendering now differs from the parsed input.
    pub fn is_modified(&self) -> bool {
        self.render() != self.original
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::str::FromStr for Document {
    type Err = crate::Error;

    fn from_str(source: &str) -> Result<Self> {
        Self::parse(source)
    }
}
