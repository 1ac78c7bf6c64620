//! libmention-core
//!
//! Mention/autocomplete annotation engine for a plain-text editing surface:
//! word boundary location, keyword matching and ranking, buffer-wide
//! occurrence scanning, highlight span merging, and a debounced trigger
//! protocol. Transliteration is a trait seam so language-specific crates
//! (libmention-pinyin) can plug in a phonetic backend.
//!
//! The engine receives plain data (buffer, cursor offset, keyword snapshot)
//! and returns plain data (match results, highlight spans). It performs no
//! I/O and owns no UI state beyond what is passed in.
//!
//! Public API:
//! - `Keyword` / `KeywordCategory` - entities supplied by the host
//! - `Fragment` / `locate_fragment` - the token under the cursor
//! - `Transliterator` - phonetic backend seam
//! - `MatchResult` / `find_matches` - ranked completions plus ghost suffix
//! - `Occurrence` / `find_all_occurrences` - buffer-wide keyword spans
//! - `HighlightSpan` / `merge_spans` - overlap-resolved annotation spans
//! - `TriggerController` - debounce/cancel state machine
//! - `MentionEngine` - everything composed behind one object
use serde::{Deserialize, Serialize};

// Core modules
pub mod keyword;
pub use keyword::{keywords_from_json, keywords_to_json, Keyword, KeywordCategory};

pub mod fragment;
pub use fragment::{locate_fragment, Fragment};

pub mod romanize;
pub use romanize::{PlainTransliterator, Transliterator};

pub mod matcher;
pub use matcher::{matches, MatchKinds};

pub mod ranker;
pub use ranker::{apply_completion, find_matches, MatchResult};

pub mod match_list;
pub use match_list::MatchList;

pub mod scanner;
pub use scanner::{find_all_occurrences, Occurrence};

pub mod spans;
pub use spans::{merge_spans, HighlightSpan, SpanKind};

pub mod trigger;
pub use trigger::{PollOutcome, TriggerController, TriggerState};

pub mod engine;
pub use engine::MentionEngine;

/// Engine configuration.
///
/// Language-agnostic knobs only; anything phonetic belongs to the
/// transliterator implementation in its own crate.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Debounce window for the trigger controller, in milliseconds
    pub debounce_ms: u64,

    /// Dropdown entries per page
    pub page_size: usize,

    /// Maximum number of entries in the keyword -> romanization cache
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // One keystroke settle at typical typing speed
            debounce_ms: 300,
            page_size: 5,
            // 1000 entries covers any realistic keyword set
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The debounce window as a `Duration`.
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::default();
        config.debounce_ms = 150;
        config.page_size = 9;

        let toml = config.to_toml_string().unwrap();
        let back = Config::from_toml_str(&toml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.debounce(), std::time::Duration::from_millis(300));
    }

    #[test]
    fn test_normalize_trims_and_composes() {
        assert_eq!(utils::normalize("  hello "), "hello");
        // "e" + combining acute composes to a single char
        assert_eq!(utils::normalize("e\u{0301}"), "\u{00e9}");
    }
}
