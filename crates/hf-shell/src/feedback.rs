//! Copy feedback — the short-lived notice shown after a copy attempt.
//!
//! One notice at a time. A new copy replaces the previous notice outright,
//! so its timer starts over. Notices expire [`DISMISS_AFTER`] after they
//! were shown; expiry is checked against a caller-supplied `Instant` so the
//! shell and the tests share one clock model.

use std::time::{Duration, Instant};

use crate::command::Swatch;

/// How long a copy notice stays visible.
pub const DISMISS_AFTER: Duration = Duration::from_millis(2000);

/// Shown after a successful copy.
pub const COPIED: &str = "Copied!";

/// Shown after a failed copy.
pub const COPY_FAILED: &str = "Copy failed";

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

/// Result of one copy attempt, stamped with when it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotice {
    pub swatch: Swatch,
    pub outcome: CopyOutcome,
    pub shown_at: Instant,
}

impl CopyNotice {
    #[must_use]
    pub fn new(swatch: Swatch, outcome: CopyOutcome, shown_at: Instant) -> Self {
        Self {
            swatch,
            outcome,
            shown_at,
        }
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.outcome, CopyOutcome::Copied)
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self.outcome {
            CopyOutcome::Copied => COPIED,
            CopyOutcome::Failed(_) => COPY_FAILED,
        }
    }

    /// Whether the notice is still showing at `now`.
    #[must_use]
    pub fn visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < DISMISS_AFTER
    }

    /// One-line status text, e.g. `Copied! Triadic 1 (#51e178)`.
    #[must_use]
    pub fn status_line(&self) -> String {
        match &self.outcome {
            CopyOutcome::Copied => format!("{COPIED} {}", self.swatch),
            CopyOutcome::Failed(reason) => format!("{COPY_FAILED}: {reason}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Feedback slot
// ---------------------------------------------------------------------------

/// Holds at most one notice and drops it once expired.
#[derive(Debug, Default, Clone)]
pub struct Feedback {
    notice: Option<CopyNotice>,
}

impl Feedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any current notice.
    pub fn show(&mut self, notice: CopyNotice) {
        self.notice = Some(notice);
    }

    /// Forget the current notice (new palettes invalidate it).
    pub fn clear(&mut self) {
        self.notice = None;
    }

    /// The notice visible at `now`, if any. Expired notices are dropped.
    pub fn current(&mut self, now: Instant) -> Option<&CopyNotice> {
        if self.notice.as_ref().is_some_and(|n| !n.visible_at(now)) {
            self.notice = None;
        }
        self.notice.as_ref()
    }

    /// The swatch to highlight at `now`: only successful copies mark one.
    pub fn highlighted(&mut self, now: Instant) -> Option<Swatch> {
        self.current(now).filter(|n| n.succeeded()).map(|n| n.swatch)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hf_color::Color;
    use hf_palette::PaletteKind;

    fn swatch(index: usize) -> Swatch {
        Swatch {
            kind: PaletteKind::Triadic,
            index,
            color: Color::rgb8(0x51, 0xe1, 0x78),
        }
    }

    #[test]
    fn visible_until_dismiss_deadline() {
        let t0 = Instant::now();
        let notice = CopyNotice::new(swatch(0), CopyOutcome::Copied, t0);
        assert!(notice.visible_at(t0));
        assert!(notice.visible_at(t0 + Duration::from_millis(1999)));
        assert!(!notice.visible_at(t0 + DISMISS_AFTER));
    }

    #[test]
    fn messages() {
        let t0 = Instant::now();
        let ok = CopyNotice::new(swatch(0), CopyOutcome::Copied, t0);
        assert_eq!(ok.message(), "Copied!");
        assert_eq!(ok.status_line(), "Copied! Triadic 1 (#51e178)");

        let failed = CopyNotice::new(swatch(0), CopyOutcome::Failed("no display".into()), t0);
        assert_eq!(failed.message(), "Copy failed");
        assert_eq!(failed.status_line(), "Copy failed: no display");
    }

    #[test]
    fn current_drops_expired_notice() {
        let t0 = Instant::now();
        let mut fb = Feedback::new();
        fb.show(CopyNotice::new(swatch(0), CopyOutcome::Copied, t0));
        assert!(fb.current(t0 + Duration::from_millis(500)).is_some());
        assert!(fb.current(t0 + Duration::from_millis(2500)).is_none());
        // Stays gone even if asked about an earlier time.
        assert!(fb.current(t0).is_none());
    }

    #[test]
    fn new_copy_restarts_timer() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(1500);
        let mut fb = Feedback::new();
        fb.show(CopyNotice::new(swatch(0), CopyOutcome::Copied, t0));
        fb.show(CopyNotice::new(swatch(2), CopyOutcome::Copied, t1));
        let later = t0 + Duration::from_millis(2500);
        assert_eq!(fb.highlighted(later), Some(swatch(2)));
    }

    #[test]
    fn failure_highlights_nothing() {
        let t0 = Instant::now();
        let mut fb = Feedback::new();
        fb.show(CopyNotice::new(swatch(1), CopyOutcome::Failed("x".into()), t0));
        assert!(fb.current(t0).is_some());
        assert_eq!(fb.highlighted(t0), None);
    }
}
