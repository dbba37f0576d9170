//! One-shot visibility triggering for page sections.
//!
//! The terminal analog of a viewport-intersection observer: each frame the
//! tracker compares every still-pending section's visible fraction against
//! the 20% threshold. The first time a section crosses it, the section is
//! recorded as revealed and dropped from the pending set, so a later
//! re-entry can never re-trigger it. Sections fade in through a short dim
//! phase, with cards inside a section staggered by their index.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::page::{visible_fraction, PageLayout, SectionKind};

/// Minimum visible fraction before a section triggers.
pub const VISIBILITY_THRESHOLD: f64 = 0.2;
/// Length of the dim fade-in phase.
pub const FADE_DURATION: Duration = Duration::from_millis(400);
/// Extra delay applied per card index within a section.
pub const CARD_STAGGER: Duration = Duration::from_millis(100);

/// Render phase of a revealed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet triggered (or still inside its stagger delay)
    Hidden,
    /// Triggered, rendering dimmed
    Fading,
    /// Fully revealed
    Visible,
}

/// Phase of a card `card_index` positions into its section, `elapsed` after
/// the section triggered.
pub fn phase_for(elapsed: Duration, card_index: usize) -> RevealPhase {
    let delay = CARD_STAGGER * card_index as u32;
    if elapsed < delay {
        RevealPhase::Hidden
    } else if elapsed < delay + FADE_DURATION {
        RevealPhase::Fading
    } else {
        RevealPhase::Visible
    }
}

#[derive(Debug)]
pub struct RevealTracker {
    pending: Vec<SectionKind>,
    revealed: HashMap<SectionKind, Instant>,
}

impl RevealTracker {
    /// Track every section in `sections`, all pending.
    pub fn new(sections: impl IntoIterator<Item = SectionKind>) -> Self {
        Self {
            pending: sections.into_iter().collect(),
            revealed: HashMap::new(),
        }
    }

    /// Check pending sections against the current viewport and trigger the
    /// ones that crossed the threshold. Returns the newly triggered kinds
    /// so the caller can start their counter animations.
    pub fn update(
        &mut self,
        layout: &PageLayout,
        scroll: u16,
        viewport_height: u16,
    ) -> Vec<SectionKind> {
        if layout.is_empty() {
            return Vec::new();
        }

        let mut triggered = Vec::new();
        self.pending.retain(|kind| {
            let span = layout.spans().iter().find(|s| s.kind == *kind);
            let fraction = span
                .map(|s| visible_fraction(s, scroll, viewport_height))
                .unwrap_or(0.0);
            if fraction >= VISIBILITY_THRESHOLD {
                triggered.push(*kind);
                false
            } else {
                true
            }
        });

        let now = Instant::now();
        for kind in &triggered {
            self.revealed.insert(*kind, now);
        }
        triggered
    }

    pub fn is_triggered(&self, kind: SectionKind) -> bool {
        self.revealed.contains_key(&kind)
    }

    /// Current render phase for a card within a section.
    pub fn phase(&self, kind: SectionKind, card_index: usize) -> RevealPhase {
        match self.revealed.get(&kind) {
            Some(start) => phase_for(start.elapsed(), card_index),
            None => RevealPhase::Hidden,
        }
    }

    /// Whether any reveal is still fading (or waiting out a stagger delay),
    /// given the largest card count of any section.
    pub fn any_fading(&self, max_cards: usize) -> bool {
        let window = FADE_DURATION + CARD_STAGGER * max_cards.saturating_sub(1) as u32;
        self.revealed.values().any(|start| start.elapsed() < window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        let mut layout = PageLayout::new();
        layout.push(SectionKind::Hero, 10);
        layout.push(SectionKind::Stats, 10);
        layout.push(SectionKind::InfoCards, 10);
        layout
    }

    #[test]
    fn test_triggers_at_threshold() {
        let layout = layout();
        let mut tracker = RevealTracker::new([SectionKind::Stats]);

        // One row of Stats visible: 10% < 20%, no trigger
        assert!(tracker.update(&layout, 1, 10).is_empty());
        assert!(!tracker.is_triggered(SectionKind::Stats));

        // Two rows visible: exactly 20%, triggers
        let triggered = tracker.update(&layout, 2, 10);
        assert_eq!(triggered, vec![SectionKind::Stats]);
        assert!(tracker.is_triggered(SectionKind::Stats));
    }

    #[test]
    fn test_one_shot_never_retriggers() {
        let layout = layout();
        let mut tracker = RevealTracker::new([SectionKind::Stats]);

        assert_eq!(tracker.update(&layout, 5, 10).len(), 1);

        // Scroll away and come back: no second trigger
        assert!(tracker.update(&layout, 0, 5).is_empty());
        assert!(tracker.update(&layout, 10, 10).is_empty());
        assert!(tracker.is_triggered(SectionKind::Stats));
    }

    #[test]
    fn test_untracked_section_never_triggers() {
        let layout = layout();
        let mut tracker = RevealTracker::new([SectionKind::Stats]);
        tracker.update(&layout, 0, 30);
        assert!(!tracker.is_triggered(SectionKind::Share));
    }

    #[test]
    fn test_empty_layout_is_noop() {
        let mut tracker = RevealTracker::new(SectionKind::ORDER);
        assert!(tracker.update(&PageLayout::new(), 0, 20).is_empty());
        assert!(!tracker.is_triggered(SectionKind::Hero));
    }

    #[test]
    fn test_phase_progression() {
        // Card 0: fading immediately, visible after the fade
        assert_eq!(phase_for(Duration::ZERO, 0), RevealPhase::Fading);
        assert_eq!(phase_for(FADE_DURATION, 0), RevealPhase::Visible);

        // Card 2 waits out two stagger steps first
        assert_eq!(phase_for(Duration::from_millis(150), 2), RevealPhase::Hidden);
        assert_eq!(phase_for(Duration::from_millis(250), 2), RevealPhase::Fading);
        assert_eq!(
            phase_for(CARD_STAGGER * 2 + FADE_DURATION, 2),
            RevealPhase::Visible
        );
    }

    #[test]
    fn test_phase_hidden_before_trigger() {
        let tracker = RevealTracker::new([SectionKind::Stats]);
        assert_eq!(tracker.phase(SectionKind::Stats, 0), RevealPhase::Hidden);
    }
}
