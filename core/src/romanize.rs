//! Transliteration seam between the generic engine and language backends.
//!
//! The matcher compares typed fragments against a tone-free romanization of
//! each keyword name. What "romanization" means is language-specific, so it
//! sits behind a trait: language crates (libmention-pinyin) supply the real
//! phonetic backend, and this crate ships a lowercasing-only fallback.

/// Trait that phonetic backends implement to plug into the matcher.
///
/// Both methods produce a tone-free, lower-cased, whitespace-stripped string
/// usable for prefix comparison. Implementations must be pure, share no
/// mutable state, and never panic: on any transliteration failure they fall
/// back to plain lowercasing so matching degrades instead of erroring.
pub trait Transliterator {
    /// Romanization of the whole of `text`.
    fn romanize(&self, text: &str) -> String;

    /// Romanization of only the first character of `text`.
    fn first_char_romanized(&self, text: &str) -> String;
}

/// Lowercasing-only transliterator for hosts without a phonetic backend.
///
/// Sufficient for Latin keyword sets; CJK names simply never match through
/// the phonetic rules and still match via literal prefix and first-character
/// comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTransliterator;

impl PlainTransliterator {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for PlainTransliterator {
    fn romanize(&self, text: &str) -> String {
        lowercase_fallback(text)
    }

    fn first_char_romanized(&self, text: &str) -> String {
        first_char_lowercase(text)
    }
}

/// Shared fallback: lower-case and strip whitespace.
pub fn lowercase_fallback(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Shared fallback for the first character: lower-case it, skipping leading
/// whitespace. Empty input yields an empty string.
pub fn first_char_lowercase(text: &str) -> String {
    text.chars()
        .find(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_lowercase().collect())
        .unwrap_or_default()
}
