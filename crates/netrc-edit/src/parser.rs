//! Grouping fragments into a preamble and entries
//!
//! A single left-to-right pass. Fragments before the first `machine` or
//! `default` keyword form the preamble; each keyword opens a new entry that
//! owns every fragment up to the next keyword.

use crate::document::Document;
use crate::entry::{Entry, EntryKind};
use crate::error::{Error, Result};
use crate::fragment::Fragment;
use crate::{DEFAULT_KEYWORD, MACHINE_KEYWORD};

/// An entry still collecting fragments.
struct Open {
    name: String,
    kind: EntryKind,
    fragments: Vec<Fragment>,
}

impl Open {
    fn finish(self) -> Entry {
        Entry::from_fragments(self.name, self.kind, self.fragments)
    }
}

/// Group a complete fragment sequence into a [`Document`].
///
/// The name of a `machine` entry is the fragment two places after the
/// keyword. If that slot is missing or does not hold a word, the input is
/// rejected with [`Error::MissingMachineName`].
pub fn parse(fragments: Vec<Fragment>) -> Result<Document> {
    let fragment_count = fragments.len();
    let mut preamble = Vec::new();
    let mut entries = Vec::new();
    let mut current: Option<Open> = None;
    let mut offset = 0;

    for (i, fragment) in fragments.iter().enumerate() {
        let kind = if fragment == MACHINE_KEYWORD {
            Some(EntryKind::Machine)
        } else if fragment == DEFAULT_KEYWORD {
            Some(EntryKind::Default)
        } else {
            None
        };

        if let Some(kind) = kind {
            let name = match kind {
                EntryKind::Default => DEFAULT_KEYWORD.to_string(),
                EntryKind::Machine => match fragments.get(i + 2) {
                    Some(name) if name.is_word() => name.to_string(),
                    _ => return Err(Error::MissingMachineName { offset }),
                },
            };
            if let Some(open) = current.take() {
                entries.push(open.finish());
            }
            current = Some(Open {
                name,
                kind,
                fragments: Vec::new(),
            });
        }

        offset += fragment.len();
        match current.as_mut() {
            Some(open) => open.fragments.push(fragment.clone()),
            None => preamble.push(fragment.clone()),
        }
    }

    if let Some(open) = current.take() {
        entries.push(open.finish());
    }

    tracing::debug!(
        fragments = fragment_count,
        preamble = preamble.len(),
        entries = entries.len(),
        "grouped netrc fragments"
    );

    Ok(Document::from_parts(preamble, entries))
}
