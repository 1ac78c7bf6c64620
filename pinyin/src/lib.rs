//! libmention-pinyin crate root
//!
//! This crate provides the pinyin transliteration backend and a high-level
//! `Engine` type that composes it with the shared `libmention-core`
//! pipeline for hosts whose keyword sets mix hanzi and Latin names.
//!
//! Public API exported here:
//! - `PinyinTransliterator` from `transliterator`
//! - `Engine`, a pinyin-specialized `MentionEngine`
//! - the core data model and entry points, re-exported for callers

pub mod transliterator;

// Convenience re-exports for common types used by callers.
pub use libmention_core::{
    apply_completion, find_all_occurrences, find_matches, keywords_from_json, keywords_to_json,
    locate_fragment, matches, merge_spans, Config, Fragment, HighlightSpan, Keyword,
    KeywordCategory, MatchKinds, MatchList, MatchResult, MentionEngine, Occurrence,
    PlainTransliterator, PollOutcome, SpanKind, Transliterator, TriggerController, TriggerState,
};
pub use transliterator::PinyinTransliterator;

/// Mention engine specialized to the pinyin backend.
pub type Engine = MentionEngine<PinyinTransliterator>;

/// Build an engine with the pinyin backend and the given configuration.
pub fn engine_with_config(config: Config) -> Engine {
    MentionEngine::new(PinyinTransliterator::new(), config)
}

/// Build an engine with the pinyin backend and default configuration.
pub fn engine() -> Engine {
    engine_with_config(Config::default())
}
