//! Word boundary location over the host text buffer.
//!
//! A fragment is the contiguous, delimiter-free token containing the cursor.
//! Offsets are byte offsets into the buffer, always on `char` boundaries, so
//! hosts can slice the buffer directly with them.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// True for the characters that terminate a fragment.
///
/// Exactly space, newline, tab and carriage return. Everything else,
/// punctuation and CJK text included, is part of the word under the cursor.
pub fn is_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\t' | '\r')
}

/// The token under the cursor.
///
/// Invariants: `text == buffer[start..end]`, `start < end <= buffer.len()`,
/// and `text` never contains a delimiter character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// The token text, equal to `buffer[start..end]`
    pub text: String,

    /// Start byte offset into the buffer (inclusive)
    pub start: usize,

    /// End byte offset into the buffer (exclusive)
    pub end: usize,
}

impl Fragment {
    /// Byte length of the fragment.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The fragment's byte range in the buffer.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Locate the delimiter-free token containing `cursor`.
///
/// The cursor is clamped into `[0, buffer.len()]`; a cursor landing inside a
/// multi-byte character snaps back to the previous `char` boundary. Scans
/// left from the character before the cursor and right from the cursor,
/// stopping at delimiters on both sides. Returns `None` when no token can be
/// formed: empty buffer, or a cursor sitting between delimiters. `None` is
/// the normal "nothing under the cursor" signal, not an error.
pub fn locate_fragment(buffer: &str, cursor: usize) -> Option<Fragment> {
    if buffer.is_empty() {
        return None;
    }
    let cursor = clamp_to_boundary(buffer, cursor);

    // Scan left while the preceding character is a non-delimiter.
    let mut start = cursor;
    while start > 0 {
        let prev = prev_boundary(buffer, start);
        match buffer[prev..].chars().next() {
            Some(ch) if !is_delimiter(ch) => start = prev,
            _ => break,
        }
    }

    // Scan right while the current character is a non-delimiter.
    let mut end = cursor;
    for ch in buffer[cursor..].chars() {
        if is_delimiter(ch) {
            break;
        }
        end += ch.len_utf8();
    }

    if start < end {
        Some(Fragment {
            text: buffer[start..end].to_string(),
            start,
            end,
        })
    } else {
        None
    }
}

fn clamp_to_boundary(buffer: &str, cursor: usize) -> usize {
    let mut c = cursor.min(buffer.len());
    while c > 0 && !buffer.is_char_boundary(c) {
        c -= 1;
    }
    c
}

fn prev_boundary(buffer: &str, pos: usize) -> usize {
    let mut prev = pos - 1;
    while prev > 0 && !buffer.is_char_boundary(prev) {
        prev -= 1;
    }
    prev
}
