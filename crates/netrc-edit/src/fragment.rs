//! Fragments: the atomic unit of storage and rendering

use std::fmt;

/// Returns true for the bytes the tokenizer treats as whitespace.
///
/// Only ASCII bytes qualify, so a fragment boundary never lands inside a
/// multi-byte UTF-8 sequence.
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Whether `text` survives a render and re-parse as a single word fragment.
///
/// Empty text, whitespace and `#` all tokenize differently, and the entry
/// keywords would open a new entry.
pub fn is_token(text: &str) -> bool {
    !text.is_empty()
        && !text.bytes().any(|b| is_space(b) || b == b'#')
        && text != crate::MACHINE_KEYWORD
        && text != crate::DEFAULT_KEYWORD
}

/// Terminate the line the last of `fragments` is on.
///
/// A trailing whitespace or comment fragment absorbs the `\n` so the fragment
/// count stays the same; after a word a new `\n` fragment is pushed.
pub(crate) fn end_line(fragments: &mut Vec<Fragment>) {
    let Some(last) = fragments.last_mut() else {
        return;
    };
    if last.ends_line() {
        return;
    }
    if last.is_word() {
        fragments.push(Fragment::from("\n"));
    } else {
        *last = Fragment::new(format!("{last}\n"));
    }
}

/// What a fragment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// A run of whitespace bytes.
    Whitespace,
    /// A run of non-whitespace bytes: keywords, names, keys and values.
    Word,
    /// A comment line plus the whitespace that follows it.
    Comment,
}

/// A slice of the original file, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classify the fragment.
    ///
    /// Words never contain `#` (the tokenizer cuts them before it), so any
    /// fragment holding one is a comment.
    pub fn kind(&self) -> FragmentKind {
        if self.0.contains('#') {
            FragmentKind::Comment
        } else if self.0.bytes().all(is_space) {
            FragmentKind::Whitespace
        } else {
            FragmentKind::Word
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind() == FragmentKind::Word
    }

    /// Whether text placed after this fragment starts on a fresh line.
    ///
    /// A comment only counts once the line holding its `#` is terminated;
    /// newlines folded in before the `#` do not close it.
    pub fn ends_line(&self) -> bool {
        match self.kind() {
            FragmentKind::Word => false,
            FragmentKind::Whitespace => self.0.contains('\n'),
            FragmentKind::Comment => self
                .0
                .find('#')
                .is_some_and(|hash| self.0[hash..].contains('\n')),
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self(text)
    }
}
