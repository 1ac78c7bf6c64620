// core/src/engine.rs
//
// Generic mention engine that works with any transliterator backend.
// Composes the locator, matcher, ranker, scanner and merger behind one
// object and memoizes per-keyword romanizations.

use std::cell::RefCell;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::debug;

use crate::fragment::{locate_fragment, Fragment};
use crate::keyword::Keyword;
use crate::ranker::{self, MatchResult};
use crate::romanize::Transliterator;
use crate::scanner::{self, Occurrence};
use crate::spans::{self, HighlightSpan};
use crate::Config;

/// Mention engine over a phonetic backend.
///
/// Type parameter T is the transliterator (e.g. `PinyinTransliterator` from
/// libmention-pinyin, or `PlainTransliterator` for Latin-only hosts).
///
/// Romanizing a keyword name is the only non-trivial per-keyword cost in
/// the match pipeline, and keyword sets are stable across keystrokes, so
/// the engine keeps an LRU of name -> romanized forms. Matching semantics
/// do not depend on the cache.
pub struct MentionEngine<T> {
    romanizer: T,
    config: Config,
    cache: RefCell<LruCache<String, (String, String)>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl<T: Transliterator> MentionEngine<T> {
    /// Create an engine with the given backend and configuration.
    pub fn new(romanizer: T, config: Config) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_size)
            .unwrap_or(NonZeroUsize::new(1000).unwrap());

        Self {
            romanizer,
            config,
            cache: RefCell::new(LruCache::new(capacity)),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn romanizer(&self) -> &T {
        &self.romanizer
    }

    /// Find the token under the cursor. See `fragment::locate_fragment`.
    pub fn locate_fragment(&self, buffer: &str, cursor: usize) -> Option<Fragment> {
        locate_fragment(buffer, cursor)
    }

    /// Rank `keywords` against an already-located fragment.
    pub fn find_matches(&self, fragment: &Fragment, keywords: &[Keyword]) -> Option<MatchResult> {
        ranker::find_matches(&Cached { engine: self }, fragment, keywords)
    }

    /// Locate the fragment at `cursor` and rank `keywords` against it in
    /// one step. This is what the trigger controller calls on fire.
    pub fn find_matches_at(
        &self,
        buffer: &str,
        cursor: usize,
        keywords: &[Keyword],
    ) -> Option<MatchResult> {
        let fragment = locate_fragment(buffer, cursor)?;
        self.find_matches(&fragment, keywords)
    }

    /// Scan the whole buffer for keyword occurrences. See
    /// `scanner::find_all_occurrences`.
    pub fn find_all_occurrences(&self, buffer: &str, keywords: &[Keyword]) -> Vec<Occurrence> {
        scanner::find_all_occurrences(buffer, keywords)
    }

    /// The synchronous render pipeline: scan the buffer and merge the
    /// resulting spans with the host's transient feedback span, excluding
    /// anything under the in-progress fragment.
    pub fn annotate(
        &self,
        buffer: &str,
        keywords: &[Keyword],
        transient: Option<HighlightSpan>,
        active_fragment: Option<&Fragment>,
    ) -> Vec<HighlightSpan> {
        let occurrences = scanner::find_all_occurrences(buffer, keywords);
        spans::merge_spans(&occurrences, transient, active_fragment)
    }

    fn romanized(&self, name: &str) -> (String, String) {
        if let Some(hit) = self.cache.borrow_mut().get(name) {
            *self.cache_hits.borrow_mut() += 1;
            return hit.clone();
        }
        *self.cache_misses.borrow_mut() += 1;

        let pair = (
            self.romanizer.romanize(name),
            self.romanizer.first_char_romanized(name),
        );
        self.cache.borrow_mut().put(name.to_string(), pair.clone());
        pair
    }

    /// Cache statistics for monitoring. Returns (hits, misses).
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }

    /// Clear the romanization cache (after a keyword rename, or in tests).
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
        *self.cache_hits.borrow_mut() = 0;
        *self.cache_misses.borrow_mut() = 0;
        debug!("romanization cache cleared");
    }
}

// Transliterator view of the engine's cache, handed to the pure ranker.
struct Cached<'a, T> {
    engine: &'a MentionEngine<T>,
}

impl<T: Transliterator> Transliterator for Cached<'_, T> {
    fn romanize(&self, text: &str) -> String {
        self.engine.romanized(text).0
    }

    fn first_char_romanized(&self, text: &str) -> String {
        self.engine.romanized(text).1
    }
}
