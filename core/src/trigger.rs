//! Debounced trigger protocol around the match pipeline.
//!
//! One `TriggerController` per editable surface, owned by the host — never
//! a module-level singleton, so multiple fields never interfere. The
//! controller is cooperative: it holds a single deadline instead of a
//! timer thread. The host calls `schedule` on every buffer mutation or
//! cursor move and `poll` from its event loop, passing the clock in, so
//! the whole state machine is deterministic under test.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::engine::MentionEngine;
use crate::keyword::Keyword;
use crate::ranker::MatchResult;
use crate::romanize::Transliterator;
use crate::Config;

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Nothing scheduled, nothing resolved
    Idle,
    /// A debounce deadline is armed
    Pending,
    /// A match result is held (dropdown or ghost text showing)
    Resolved,
}

/// What a `poll` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing scheduled
    Idle,
    /// Deadline armed but not yet due
    Pending,
    /// A result is outstanding (recomputed on this call if the deadline
    /// just fired)
    Resolved,
    /// Deadline fired but nothing matched; any previous result was cleared
    Cleared,
}

/// Debounce/cancel state machine: `Idle -> Pending -> Resolved -> Idle`.
///
/// At most one deadline and one outstanding result exist at any time;
/// scheduling always replaces the previous deadline, so a burst of
/// keystrokes collapses into a single resolution computed against the
/// buffer state passed to the `poll` that fires — not the state at
/// schedule time.
#[derive(Debug)]
pub struct TriggerController {
    delay: Duration,
    enabled: bool,
    deadline: Option<Instant>,
    result: Option<MatchResult>,
    dropdown_open: bool,
}

impl TriggerController {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            enabled: true,
            deadline: None,
            result: None,
            dropdown_open: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.debounce())
    }

    pub fn state(&self) -> TriggerState {
        if self.deadline.is_some() {
            TriggerState::Pending
        } else if self.result.is_some() {
            TriggerState::Resolved
        } else {
            TriggerState::Idle
        }
    }

    /// (Re)arm the debounce deadline. Any prior deadline is replaced.
    /// Ignored while disabled.
    pub fn schedule(&mut self, now: Instant) {
        if !self.enabled {
            return;
        }
        self.deadline = Some(now + self.delay);
        debug!(delay_ms = self.delay.as_millis() as u64, "trigger armed");
    }

    /// Drop any pending deadline and any held result, forcing `Idle`.
    /// Called on focus loss and by the host's dismiss action.
    pub fn cancel(&mut self) {
        if self.deadline.is_some() || self.result.is_some() {
            debug!("trigger cancelled");
        }
        self.deadline = None;
        self.result = None;
        self.dropdown_open = false;
    }

    /// Global autocomplete toggle. Disabling cancels immediately.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.cancel();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Drive the state machine from the host event loop.
    ///
    /// `buffer`, `cursor` and `keywords` must be the *live* values at poll
    /// time: when the deadline fires, the fragment and matches are
    /// recomputed from them, not from anything captured when the deadline
    /// was scheduled (the cursor may well have moved since).
    pub fn poll<T: Transliterator>(
        &mut self,
        now: Instant,
        engine: &MentionEngine<T>,
        buffer: &str,
        cursor: usize,
        keywords: &[Keyword],
    ) -> PollOutcome {
        let Some(deadline) = self.deadline else {
            return if self.result.is_some() {
                PollOutcome::Resolved
            } else {
                PollOutcome::Idle
            };
        };
        if now < deadline {
            return PollOutcome::Pending;
        }

        self.deadline = None;
        match engine.find_matches_at(buffer, cursor, keywords) {
            Some(result) => {
                self.dropdown_open = result.matches.len() > 1;
                debug!(
                    matches = result.matches.len(),
                    dropdown = self.dropdown_open,
                    "trigger resolved"
                );
                self.result = Some(result);
                PollOutcome::Resolved
            }
            None => {
                self.result = None;
                self.dropdown_open = false;
                PollOutcome::Cleared
            }
        }
    }

    /// The outstanding result, if any.
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Take the outstanding result, returning the controller to `Idle`.
    /// The host calls this when accepting a completion.
    pub fn take_result(&mut self) -> Option<MatchResult> {
        self.dropdown_open = false;
        self.result.take()
    }

    /// True when the resolved result offers more than one match.
    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// The ghost suffix to render, shown only while the dropdown is closed
    /// (ghost text never appears while multiple matches are offered).
    pub fn ghost_text(&self) -> Option<&str> {
        if self.dropdown_open {
            return None;
        }
        self.result
            .as_ref()
            .map(|r| r.ghost_suffix.as_str())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::{Keyword, KeywordCategory};
    use crate::romanize::PlainTransliterator;

    fn engine() -> MentionEngine<PlainTransliterator> {
        MentionEngine::new(PlainTransliterator::new(), Config::default())
    }

    fn keywords() -> Vec<Keyword> {
        vec![
            Keyword::new("Leah", KeywordCategory::Character),
            Keyword::new("Leo", KeywordCategory::Character),
            Keyword::new("Mill", KeywordCategory::Location),
        ]
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_idle_until_scheduled() {
        let engine = engine();
        let kws = keywords();
        let mut ctl = TriggerController::new(ms(300));
        let t0 = Instant::now();

        assert_eq!(ctl.state(), TriggerState::Idle);
        assert_eq!(ctl.poll(t0, &engine, "Le", 2, &kws), PollOutcome::Idle);
    }

    #[test]
    fn test_debounce_collapses_bursts() {
        let engine = engine();
        let kws = keywords();
        let mut ctl = TriggerController::new(ms(300));
        let t0 = Instant::now();

        // Three mutations 50ms apart; only the last deadline survives
        ctl.schedule(t0);
        ctl.schedule(t0 + ms(50));
        ctl.schedule(t0 + ms(100));

        // Not due at 300ms (last deadline is t0+400)
        assert_eq!(
            ctl.poll(t0 + ms(300), &engine, "M", 1, &kws),
            PollOutcome::Pending
        );

        // Fires once, against the buffer passed now - not the earlier "M"
        assert_eq!(
            ctl.poll(t0 + ms(401), &engine, "Le", 2, &kws),
            PollOutcome::Resolved
        );
        let result = ctl.result().unwrap();
        assert_eq!(result.fragment.text, "Le");
        assert_eq!(result.best_match().name, "Leo");

        // No re-fire on later polls
        assert_eq!(ctl.state(), TriggerState::Resolved);
        assert_eq!(
            ctl.poll(t0 + ms(500), &engine, "Le", 2, &kws),
            PollOutcome::Resolved
        );
    }

    #[test]
    fn test_fire_with_no_match_clears() {
        let engine = engine();
        let kws = keywords();
        let mut ctl = TriggerController::new(ms(300));
        let t0 = Instant::now();

        ctl.schedule(t0);
        assert_eq!(
            ctl.poll(t0 + ms(301), &engine, "zzz", 3, &kws),
            PollOutcome::Cleared
        );
        assert_eq!(ctl.state(), TriggerState::Idle);
        assert_eq!(ctl.result(), None);
    }

    #[test]
    fn test_dropdown_opens_on_multiple_matches() {
        let engine = engine();
        let kws = keywords();
        let mut ctl = TriggerController::new(ms(300));
        let t0 = Instant::now();

        // "Le" matches both Leah and Leo
        ctl.schedule(t0);
        ctl.poll(t0 + ms(301), &engine, "Le", 2, &kws);
        assert!(ctl.dropdown_open());
        assert_eq!(ctl.ghost_text(), None);

        // "Mi" matches only Mill: ghost text, no dropdown
        ctl.schedule(t0 + ms(400));
        ctl.poll(t0 + ms(701), &engine, "Mi", 2, &kws);
        assert!(!ctl.dropdown_open());
        assert_eq!(ctl.ghost_text(), Some("ll"));
    }

    #[test]
    fn test_cancel_clears_pending_deadline() {
        let engine = engine();
        let kws = keywords();
        let mut ctl = TriggerController::new(ms(300));
        let t0 = Instant::now();

        ctl.schedule(t0);
        ctl.cancel();
        assert_eq!(ctl.state(), TriggerState::Idle);
        assert_eq!(
            ctl.poll(t0 + ms(1000), &engine, "Le", 2, &kws),
            PollOutcome::Idle
        );
    }

    #[test]
    fn test_disable_cancels_and_blocks_scheduling() {
        let engine = engine();
        let kws = keywords();
        let mut ctl = TriggerController::new(ms(300));
        let t0 = Instant::now();

        ctl.schedule(t0);
        ctl.set_enabled(false);
        assert_eq!(ctl.state(), TriggerState::Idle);

        ctl.schedule(t0 + ms(10));
        assert_eq!(
            ctl.poll(t0 + ms(1000), &engine, "Le", 2, &kws),
            PollOutcome::Idle
        );

        ctl.set_enabled(true);
        ctl.schedule(t0 + ms(20));
        assert_eq!(ctl.state(), TriggerState::Pending);
    }

    #[test]
    fn test_take_result_returns_to_idle() {
        let engine = engine();
        let kws = keywords();
        let mut ctl = TriggerController::new(ms(300));
        let t0 = Instant::now();

        ctl.schedule(t0);
        ctl.poll(t0 + ms(301), &engine, "Mi", 2, &kws);
        let result = ctl.take_result().unwrap();
        assert_eq!(result.best_match().name, "Mill");
        assert_eq!(ctl.state(), TriggerState::Idle);
        assert!(!ctl.dropdown_open());
    }

    #[test]
    fn test_rescheduling_after_resolve_replaces_result_on_fire() {
        let engine = engine();
        let kws = keywords();
        let mut ctl = TriggerController::new(ms(300));
        let t0 = Instant::now();

        ctl.schedule(t0);
        ctl.poll(t0 + ms(301), &engine, "Mi", 2, &kws);
        assert_eq!(ctl.result().unwrap().best_match().name, "Mill");

        ctl.schedule(t0 + ms(400));
        assert_eq!(ctl.state(), TriggerState::Pending);
        ctl.poll(t0 + ms(701), &engine, "Leo", 3, &kws);
        // "Leo" fully typed still first-char matches Leah and Leo itself
        assert_eq!(ctl.result().unwrap().fragment.text, "Leo");
    }
}
