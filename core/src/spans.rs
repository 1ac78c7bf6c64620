//! Highlight spans and the overlap-priority merge.
//!
//! The scanner reports raw, possibly overlapping occurrences; the renderer
//! needs a sorted, non-overlapping span set. The merge walks candidates in
//! start order and resolves every overlap with one policy: keyword
//! identification beats transient feedback, and under equal priority the
//! first accepted span wins.

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;
use crate::scanner::Occurrence;

/// What a highlight span marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanKind {
    /// A scanned keyword occurrence
    KeywordMatch,
    /// A short-lived, host-managed marker (e.g. a just-accepted completion);
    /// the host owns its expiry, the engine does not manage time
    TransientFeedback,
}

/// One annotated region of the buffer. Byte offsets, half-open,
/// `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl HighlightSpan {
    pub fn new(start: usize, end: usize, kind: SpanKind) -> Self {
        HighlightSpan { start, end, kind }
    }

    /// Half-open interval intersection: containment, partial overlap and
    /// exact coincidence all count.
    pub fn overlaps(&self, other: &HighlightSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    fn overlaps_range(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

/// Merge raw occurrences and an optional transient feedback span into a
/// sorted, non-overlapping span set.
///
/// Walking the candidates in start order:
/// - no overlap with any accepted span: accept as-is;
/// - overlap with exactly one accepted span, and the candidate is a
///   `KeywordMatch` over an accepted `TransientFeedback`: replace it;
/// - anything else: drop the candidate.
///
/// Spans overlapping `active_fragment` are excluded from the final list —
/// the word currently being typed is never highlighted as a completed
/// keyword occurrence, even if its literal text momentarily matches one.
pub fn merge_spans(
    occurrences: &[Occurrence],
    transient: Option<HighlightSpan>,
    active_fragment: Option<&Fragment>,
) -> Vec<HighlightSpan> {
    let mut candidates: Vec<HighlightSpan> = occurrences
        .iter()
        .map(|o| HighlightSpan::new(o.start, o.end, SpanKind::KeywordMatch))
        .collect();
    if let Some(t) = transient {
        candidates.push(t);
    }
    candidates.sort_by_key(|s| s.start);

    let mut accepted: Vec<HighlightSpan> = Vec::new();
    for cand in candidates {
        let overlapping: Vec<usize> = accepted
            .iter()
            .enumerate()
            .filter(|(_, a)| a.overlaps(&cand))
            .map(|(i, _)| i)
            .collect();

        match overlapping.as_slice() {
            [] => accepted.push(cand),
            [i] => {
                if cand.kind == SpanKind::KeywordMatch
                    && accepted[*i].kind == SpanKind::TransientFeedback
                {
                    accepted[*i] = cand;
                }
            }
            // Multiple accepted spans involved: first accepted wins
            _ => {}
        }
    }

    // Replacement can move a span ahead of its neighbors
    accepted.sort_by_key(|s| s.start);

    if let Some(frag) = active_fragment {
        accepted.retain(|s| !s.overlaps_range(frag.start, frag.end));
    }

    accepted
}
