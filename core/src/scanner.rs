//! Buffer-wide keyword occurrence scanning.
//!
//! Every keyword is scanned independently against the whole buffer on every
//! call; the O(buffer × keywords) rescan is the accepted trade-off over
//! incremental re-indexing. Raw occurrences may overlap across keywords —
//! resolving that is the span merger's job.

use regex::Regex;
use tracing::trace;

use crate::keyword::Keyword;

/// One literal occurrence of a keyword in the buffer. Byte offsets,
/// half-open. Order across keywords is unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub start: usize,
    pub end: usize,
    pub keyword: Keyword,
}

/// True for CJK unified ideographs (base block and extension A).
pub fn is_cjk(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

/// True when any character of `s` is a CJK unified ideograph.
pub fn contains_cjk(s: &str) -> bool {
    s.chars().any(is_cjk)
}

// Word-boundary characters for the whole-word check: the fragment
// delimiters plus punctuation, ASCII and the common full-width blocks.
fn is_boundary(ch: char) -> bool {
    ch.is_whitespace()
        || ch.is_ascii_punctuation()
        || matches!(ch, '\u{3000}'..='\u{303F}' | '\u{FF01}'..='\u{FF0F}' | '\u{FF1A}'..='\u{FF20}' | '\u{FF3B}'..='\u{FF40}' | '\u{FF5B}'..='\u{FF65}')
}

/// Find every occurrence of every keyword in `buffer`.
///
/// Keywords containing CJK ideographs are scanned boundary-free: every
/// literal substring occurrence counts, with no adjacency check
/// (logographic scripts have no reliable inter-word space). All other
/// keywords are searched case-insensitively and accepted only as whole
/// words: the characters adjacent to the match, when present, must be
/// whitespace or punctuation, so "Ann" never matches inside "Annual".
pub fn find_all_occurrences(buffer: &str, keywords: &[Keyword]) -> Vec<Occurrence> {
    let mut out = Vec::new();
    if buffer.is_empty() {
        return out;
    }

    for kw in keywords {
        if kw.name.is_empty() {
            continue;
        }
        if contains_cjk(&kw.name) {
            scan_literal(buffer, kw, &mut out);
        } else {
            scan_whole_word(buffer, kw, &mut out);
        }
    }

    trace!(
        occurrences = out.len(),
        keywords = keywords.len(),
        "buffer scan complete"
    );
    out
}

fn scan_literal(buffer: &str, kw: &Keyword, out: &mut Vec<Occurrence>) {
    for (start, found) in buffer.match_indices(kw.name.as_str()) {
        out.push(Occurrence {
            start,
            end: start + found.len(),
            keyword: kw.clone(),
        });
    }
}

fn scan_whole_word(buffer: &str, kw: &Keyword, out: &mut Vec<Occurrence>) {
    let pattern = format!("(?i){}", regex::escape(&kw.name));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        // escape() output always parses; stay inert rather than propagate
        Err(_) => return,
    };

    for found in re.find_iter(buffer) {
        let before_ok = buffer[..found.start()]
            .chars()
            .next_back()
            .map_or(true, is_boundary);
        let after_ok = buffer[found.end()..].chars().next().map_or(true, is_boundary);
        if before_ok && after_ok {
            out.push(Occurrence {
                start: found.start(),
                end: found.end(),
                keyword: kw.clone(),
            });
        }
    }
}
