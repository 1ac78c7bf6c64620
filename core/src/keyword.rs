//! Keyword entities supplied by the host.
//!
//! Keywords are an immutable snapshot passed in per invocation. Identity is
//! the exact `name` string; the engine does not deduplicate the supplied
//! list, and a keyword with an empty name is inert (never matched, never
//! scanned) rather than an error.

use serde::{Deserialize, Serialize};

/// Entity category of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordCategory {
    /// A person
    Character,
    /// A place
    Location,
    /// An object
    Item,
}

/// A single named entity the engine completes against and highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Display name; also the matching and highlighting identity
    pub name: String,

    /// Entity category
    pub category: KeywordCategory,

    /// Optional free-form description for dropdown display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Keyword {
    pub fn new<T: Into<String>>(name: T, category: KeywordCategory) -> Self {
        Keyword {
            name: name.into(),
            category,
            description: None,
        }
    }

    pub fn with_description<T: Into<String>, D: Into<String>>(
        name: T,
        category: KeywordCategory,
        description: D,
    ) -> Self {
        Keyword {
            name: name.into(),
            category,
            description: Some(description.into()),
        }
    }

    /// Name length in characters (not bytes), used for ranking tie-breaks.
    pub fn char_len(&self) -> usize {
        self.name.chars().count()
    }
}

/// Parse a keyword snapshot from a JSON array.
///
/// The host owns keyword persistence; this is the interchange format for
/// handing a snapshot to the engine's callers (and the `annotate` tool):
///
/// ```json
/// [{"name": "林小雨", "category": "Character", "description": "the lead"}]
/// ```
pub fn keywords_from_json(json: &str) -> Result<Vec<Keyword>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a keyword snapshot to a JSON array.
pub fn keywords_to_json(keywords: &[Keyword]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(keywords)
}
