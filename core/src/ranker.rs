//! Ranking of matching keywords, ghost suffix computation, accept splice.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::fragment::Fragment;
use crate::keyword::Keyword;
use crate::matcher::MatchKinds;
use crate::romanize::Transliterator;

/// A resolved completion for the fragment under the cursor.
///
/// `matches` is ranked best-first and never empty; the full list is always
/// carried so a selection dropdown can show every candidate even when only
/// one qualifies. `ghost_suffix` is computed once per result, not per
/// render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The fragment the matches were computed against
    pub fragment: Fragment,

    /// Ranked matching keywords, best first
    pub matches: Vec<Keyword>,

    /// Un-typed remainder of the best match, shown as a completion hint
    pub ghost_suffix: String,
}

impl MatchResult {
    /// The top-ranked keyword.
    pub fn best_match(&self) -> &Keyword {
        &self.matches[0]
    }

    /// Splice the best match into `buffer` over the fragment, returning the
    /// new buffer and the cursor offset after the inserted text.
    pub fn apply_to(&self, buffer: &str) -> (String, usize) {
        apply_completion(buffer, &self.fragment, self.best_match())
    }
}

/// Splice `keyword.name` plus a trailing space into `buffer` over
/// `[fragment.start, fragment.end)`.
///
/// Returns the new buffer and the cursor offset just past the inserted
/// space. The keyword may be any entry of the ranked list, not only the
/// best match (dropdown selection).
pub fn apply_completion(buffer: &str, fragment: &Fragment, keyword: &Keyword) -> (String, usize) {
    let mut out = String::with_capacity(buffer.len() + keyword.name.len() + 1);
    out.push_str(&buffer[..fragment.start]);
    out.push_str(&keyword.name);
    out.push(' ');
    out.push_str(&buffer[fragment.end..]);
    let cursor = fragment.start + keyword.name.len() + 1;
    (out, cursor)
}

/// Filter `keywords` down to those matching the fragment, rank them, and
/// compute the ghost suffix for the winner.
///
/// Returns `None` for an empty fragment or when nothing matches; that is
/// the normal "nothing to suggest" signal, not an error.
pub fn find_matches<T: Transliterator>(
    romanizer: &T,
    fragment: &Fragment,
    keywords: &[Keyword],
) -> Option<MatchResult> {
    let trimmed = fragment.text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut ranked: Vec<(MatchKinds, &Keyword)> = keywords
        .iter()
        .filter_map(|kw| {
            let kinds = MatchKinds::evaluate(
                trimmed,
                &kw.name,
                &romanizer.romanize(&kw.name),
                &romanizer.first_char_romanized(&kw.name),
            );
            kinds.any().then_some((kinds, kw))
        })
        .collect();

    if ranked.is_empty() {
        return None;
    }

    // Stable sort: ties fall through the tiers, input order breaks the rest.
    ranked.sort_by(|a, b| compare_ranked(a, b));

    let (best_kinds, best) = ranked[0];
    let ghost_suffix = ghost_suffix(trimmed, &best_kinds, best);

    Some(MatchResult {
        fragment: fragment.clone(),
        matches: ranked.into_iter().map(|(_, kw)| kw.clone()).collect(),
        ghost_suffix,
    })
}

/// Four-tier comparator: exact prefix, then first character, then phonetic
/// prefix, then shorter name; final tie-break is lexicographic on the name.
fn compare_ranked(a: &(MatchKinds, &Keyword), b: &(MatchKinds, &Keyword)) -> Ordering {
    let (ka, kwa) = a;
    let (kb, kwb) = b;
    kb.exact_prefix
        .cmp(&ka.exact_prefix)
        .then(kb.first_char.cmp(&ka.first_char))
        .then(kb.phonetic_prefix.cmp(&ka.phonetic_prefix))
        .then(kwa.char_len().cmp(&kwb.char_len()))
        .then(kwa.name.cmp(&kwb.name))
}

/// Compute the un-typed remainder of `best` to show after the fragment.
///
/// First applicable rule wins:
/// 1. literal prefix match: the name's characters past the fragment length,
///    original case preserved;
/// 2. first characters match: everything past the first character;
/// 3. phonetic-only match: the name's characters past
///    `min(fragment chars, name chars)`. Phonetic length does not map 1:1
///    to characters, so this is a coarse approximation kept as-is.
fn ghost_suffix(fragment: &str, kinds: &MatchKinds, best: &Keyword) -> String {
    let name = &best.name;
    let name_lower = name.to_lowercase();
    let frag_lower = fragment.to_lowercase();

    if name_lower.starts_with(&frag_lower) {
        chars_from(name, fragment.chars().count())
    } else if kinds.first_char {
        chars_from(name, 1)
    } else {
        let frag_chars = fragment.chars().count();
        chars_from(name, frag_chars.min(best.char_len()))
    }
}

fn chars_from(s: &str, n: usize) -> String {
    s.chars().skip(n).collect()
}
