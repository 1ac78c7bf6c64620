//! The four keyword match rules.
//!
//! A keyword matches a typed fragment when any rule holds; which rules hold
//! also feeds the ranker's tie-break tiers, so evaluation records all four
//! outcomes instead of short-circuiting.

use crate::romanize::Transliterator;

/// Which of the four match rules hold for one keyword against one fragment.
///
/// Field order is the ranking priority order. Matching itself is a plain OR
/// over the fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchKinds {
    /// The keyword name starts with the fragment and is longer than it.
    /// A fragment identical to a full keyword is not re-offered as "still
    /// typing".
    pub exact_prefix: bool,

    /// First characters agree case-insensitively. Intentionally permissive:
    /// the rest of the fragment is not consulted, which enables
    /// single-character disambiguation for logographic scripts (and applies
    /// unconditionally to every script).
    pub first_char: bool,

    /// The romanized keyword name starts with the fragment.
    pub phonetic_prefix: bool,

    /// The romanization of the keyword's first character starts with the
    /// fragment.
    pub first_char_phonetic: bool,
}

impl MatchKinds {
    /// True when any rule holds.
    pub fn any(&self) -> bool {
        self.exact_prefix || self.first_char || self.phonetic_prefix || self.first_char_phonetic
    }

    /// Evaluate all four rules.
    ///
    /// `romanized` and `first_char_romanized` are the precomputed
    /// transliterations of `keyword_name` (callers memoize them per
    /// keyword). Comparison is case-insensitive throughout; the fragment is
    /// trimmed first, and an empty fragment or keyword name matches nothing.
    pub fn evaluate(
        fragment: &str,
        keyword_name: &str,
        romanized: &str,
        first_char_romanized: &str,
    ) -> Self {
        let fragment = fragment.trim();
        if fragment.is_empty() || keyword_name.is_empty() {
            return Self::default();
        }

        let frag_lower = fragment.to_lowercase();
        let name_lower = keyword_name.to_lowercase();

        let exact_prefix = name_lower.starts_with(&frag_lower) && name_lower != frag_lower;
        let first_char = name_lower.chars().next() == frag_lower.chars().next();
        let phonetic_prefix = !romanized.is_empty() && romanized.starts_with(&frag_lower);
        let first_char_phonetic =
            !first_char_romanized.is_empty() && first_char_romanized.starts_with(&frag_lower);

        MatchKinds {
            exact_prefix,
            first_char,
            phonetic_prefix,
            first_char_phonetic,
        }
    }
}

/// Convenience predicate: does `keyword_name` match `fragment` under any
/// rule, romanizing on the fly with `romanizer`?
pub fn matches<T: Transliterator>(romanizer: &T, fragment: &str, keyword_name: &str) -> bool {
    MatchKinds::evaluate(
        fragment,
        keyword_name,
        &romanizer.romanize(keyword_name),
        &romanizer.first_char_romanized(keyword_name),
    )
    .any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romanize::PlainTransliterator;

    fn eval_plain(fragment: &str, name: &str) -> MatchKinds {
        let t = PlainTransliterator::new();
        MatchKinds::evaluate(
            fragment,
            name,
            &t.romanize(name),
            &t.first_char_romanized(name),
        )
    }

    #[test]
    fn test_exact_prefix() {
        let kinds = eval_plain("Le", "Leah");
        assert!(kinds.exact_prefix);
        assert!(kinds.any());
    }

    #[test]
    fn test_full_name_is_not_exact_prefix() {
        // Already fully typed: not re-offered through rule 1...
        let kinds = eval_plain("leah", "Leah");
        assert!(!kinds.exact_prefix);
        // ...but still matches via the first-character rule
        assert!(kinds.first_char);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(eval_plain("le", "LEAH").exact_prefix);
        assert!(eval_plain("LE", "leah").exact_prefix);
    }

    #[test]
    fn test_first_char_only() {
        let kinds = eval_plain("Lxyz", "Leah");
        assert!(!kinds.exact_prefix);
        assert!(kinds.first_char);
        assert!(kinds.any());
    }

    #[test]
    fn test_phonetic_prefix_with_stub() {
        // Romanizations come precomputed, so a stub is enough here
        let kinds = MatchKinds::evaluate("shen", "沈知夏", "shenzhixia", "shen");
        assert!(!kinds.exact_prefix);
        assert!(!kinds.first_char);
        assert!(kinds.phonetic_prefix);
        assert!(kinds.first_char_phonetic);
    }

    #[test]
    fn test_first_char_phonetic_outlives_full_phonetic() {
        // "shenz" is past the first syllable: only the whole-name rule holds
        let kinds = MatchKinds::evaluate("shenz", "沈知夏", "shenzhixia", "shen");
        assert!(kinds.phonetic_prefix);
        assert!(!kinds.first_char_phonetic);
    }

    #[test]
    fn test_empty_inputs_never_match() {
        assert!(!eval_plain("", "Leah").any());
        assert!(!eval_plain("   ", "Leah").any());
        assert!(!eval_plain("Le", "").any());
    }

    #[test]
    fn test_fragment_is_trimmed() {
        assert!(eval_plain(" Le ", "Leah").exact_prefix);
    }

    #[test]
    fn test_matches_predicate() {
        let t = PlainTransliterator::new();
        assert!(matches(&t, "Le", "Leah"));
        assert!(!matches(&t, "xy", "Leah"));
    }
}
