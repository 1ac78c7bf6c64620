//! Hanzi-to-pinyin transliteration.
//!
//! Backed by the Unihan pinyin table from the `pinyin` crate. Output is
//! always tone-free, lower-cased and whitespace-stripped, suitable for
//! prefix comparison against a typed fragment. Transliteration never
//! fails: characters without a reading pass through lower-cased.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use pinyin::ToPinyin;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use libmention_core::romanize::Transliterator;

// Surname readings for common polyphonic characters. The Unihan table
// orders readings by general frequency, which picks the wrong one when the
// character opens a person's name (沈 reads shen as a surname, chen as a
// word). Applied to the first character only.
static SURNAME_READINGS: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert('沈', "shen");
    m.insert('曾', "zeng");
    m.insert('单', "shan");
    m.insert('解', "xie");
    m.insert('仇', "qiu");
    m.insert('查', "zha");
    m.insert('翟', "zhai");
    m.insert('区', "ou");
    m.insert('乐', "yue");
    m.insert('种', "chong");
    m.insert('朴', "piao");
    m.insert('覃', "qin");
    m
});

/// Tone-free pinyin transliterator.
///
/// CJK characters romanize to their tone-free reading (first characters
/// prefer the surname reading when one exists); Latin characters pass
/// through lower-cased with combining tone marks stripped; whitespace is
/// dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinTransliterator;

impl PinyinTransliterator {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for PinyinTransliterator {
    fn romanize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut first = true;
        for ch in text.chars() {
            if ch.is_whitespace() {
                continue;
            }
            push_romanized(&mut out, ch, first);
            first = false;
        }
        out
    }

    fn first_char_romanized(&self, text: &str) -> String {
        let mut out = String::new();
        if let Some(ch) = text.chars().find(|c| !c.is_whitespace()) {
            push_romanized(&mut out, ch, true);
        }
        out
    }
}

fn push_romanized(out: &mut String, ch: char, name_initial: bool) {
    if name_initial {
        if let Some(reading) = SURNAME_READINGS.get(&ch) {
            out.push_str(reading);
            return;
        }
    }
    match ch.to_pinyin() {
        Some(py) => out.push_str(py.plain()),
        None => push_stripped(out, ch),
    }
}

// Decompose, drop combining marks (tone diacritics included), lower-case.
fn push_stripped(out: &mut String, ch: char) {
    for d in std::iter::once(ch).nfd() {
        if is_combining_mark(d) {
            continue;
        }
        out.extend(d.to_lowercase());
    }
}
