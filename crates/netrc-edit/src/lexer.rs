//! Format-preserving tokenizer
//!
//! Splits raw netrc bytes into [`Fragment`]s such that concatenating every
//! fragment in order reproduces the input exactly:
//!
//! - a maximal run of whitespace, or of non-whitespace, is one fragment;
//! - a `#` that starts a comment swallows the whitespace before it (back to the
//!   previous boundary), the rest of its line, and the whitespace after the line
//!   terminator, as one opaque fragment;
//! - a `#` inside a word ends the word and starts a comment.

use std::io::{self, Read};

use crate::error::{Error, Result};
use crate::fragment::{Fragment, is_space};

/// Default size of the streaming buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Length of the next fragment at the start of `data`.
///
/// Returns `None` when `data` does not yet hold a complete fragment and more
/// input is needed. With `eof` set, any non-empty `data` yields a fragment.
pub fn next_boundary(data: &[u8], eof: bool) -> Option<usize> {
    let first = *data.first()?;
    let in_whitespace = is_space(first);

    for (i, &byte) in data.iter().enumerate() {
        if byte == b'#' {
            if !in_whitespace && i > 0 {
                return Some(i);
            }
            return comment_end(data, i, eof);
        }
        if is_space(byte) != in_whitespace {
            return Some(i);
        }
    }

    eof.then_some(data.len())
}

/// End of a comment whose `#` sits at `hash`.
fn comment_end(data: &[u8], hash: usize, eof: bool) -> Option<usize> {
    let mut end = match data[hash..].iter().position(|&b| b == b'\n') {
        Some(newline) => hash + newline,
        None if eof => return Some(data.len()),
        None => return None,
    };
    while end < data.len() && is_space(data[end]) {
        end += 1;
    }
    // Trailing whitespace may continue past the buffer.
    if end == data.len() && !eof {
        return None;
    }
    Some(end)
}

/// Streaming tokenizer over any byte source.
///
/// Works on a bounded buffer that is refilled as fragments are consumed. The
/// buffer only grows when a single fragment does not fit in it.
pub struct Lexer<R> {
    reader: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    /// Absolute offset of `buf[start]` in the input.
    offset: usize,
    eof: bool,
    done: bool,
}

impl<R: Read> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, reader)
    }

    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader,
            buf: vec![0; capacity.max(1)],
            start: 0,
            end: 0,
            offset: 0,
            eof: false,
            done: false,
        }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        if self.end == self.buf.len() {
            let grown = self.buf.len() * 2;
            self.buf.resize(grown, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Fragment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(len) = next_boundary(&self.buf[self.start..self.end], self.eof) {
                let range = self.start..self.start + len;
                let offset = self.offset;
                self.start += len;
                self.offset += len;

                return Some(match std::str::from_utf8(&self.buf[range]) {
                    Ok(text) => Ok(Fragment::new(text)),
                    Err(_) => {
                        self.done = true;
                        Err(Error::InvalidUtf8 { offset })
                    }
                });
            }

            if self.eof {
                self.done = true;
                return None;
            }

            if let Err(e) = self.fill() {
                self.done = true;
                return Some(Err(Error::Io(e)));
            }
        }
    }
}

/// Tokenize everything `reader` produces.
pub fn lex<R: Read>(reader: R) -> Result<Vec<Fragment>> {
    Lexer::new(reader).collect()
}

/// Tokenize an in-memory string.
pub fn lex_str(source: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut rest = source;

    while let Some(len) = next_boundary(rest.as_bytes(), true) {
        let (head, tail) = rest.split_at(len);
        fragments.push(Fragment::from(head));
        rest = tail;
    }

    fragments
}
