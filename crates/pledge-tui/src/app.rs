use std::sync::Arc;
use std::time::Duration;

use pledge_core::calc::CampaignMath;
use pledge_core::share::ShareLinks;
use pledge_core::AppConfig;

use crate::anim::{CounterAnimation, ScrollAnimator};
use crate::calculator::CalculatorState;
use crate::content::{PageContent, StatDef};
use crate::live::LiveCounter;
use crate::page::{PageLayout, SectionKind};
use crate::reveal::RevealTracker;
use crate::theme::Theme;

/// Which part of the UI owns key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Scrolling the page
    Page,
    /// Editing the calculator fields
    Calculator,
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Share menu overlay
    Share,
    /// Help overlay
    Help,
}

/// A stat display animated from zero the first time its section scrolls in.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub section: SectionKind,
    pub label: &'static str,
    pub target: u64,
    anim: Option<CounterAnimation>,
}

impl StatCounter {
    fn from_def(def: &StatDef) -> Self {
        Self {
            section: def.section,
            label: def.label,
            target: def.target,
            anim: None,
        }
    }

    /// Value to render this frame: zero before the animation starts.
    pub fn display(&self) -> u64 {
        self.anim.as_ref().map(|a| a.value()).unwrap_or(0)
    }

    pub fn started(&self) -> bool {
        self.anim.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.anim.as_ref().map(|a| !a.is_complete()).unwrap_or(false)
    }

    /// Start counting once; later calls do nothing.
    fn start(&mut self, duration: Duration) {
        if self.anim.is_none() {
            self.anim = Some(CounterAnimation::with_duration(self.target, duration));
        }
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Color palette
    pub theme: Theme,
    /// Static page copy
    pub content: PageContent,
    /// Current input owner
    pub focus: Focus,
    /// Current application mode
    pub mode: Mode,
    /// Smooth scroll state for the page viewport
    pub scroll: ScrollAnimator,
    /// Section geometry recorded by the last render pass
    pub layout: PageLayout,
    /// Page viewport height in rows
    pub viewport_height: u16,
    /// One-shot section reveal tracking
    pub reveal: RevealTracker,
    /// Animated stat counters
    pub counters: Vec<StatCounter>,
    /// Simulated hourly toll in the hero
    pub live: LiveCounter,
    /// Calculator panel state
    pub calculator: CalculatorState,
    /// Pre-built share URLs
    pub share_links: ShareLinks,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, share_links: ShareLinks) -> Self {
        let content = PageContent::standard();
        let counters = content.stats.iter().map(StatCounter::from_def).collect();
        let calculator = CalculatorState::new(
            CampaignMath::from(&config.campaign),
            config.campaign.default_percent,
        );
        let scroll = ScrollAnimator::new(config.ui.scroll.clone());

        Self {
            config,
            theme,
            content,
            focus: Focus::Page,
            mode: Mode::Normal,
            scroll,
            layout: PageLayout::new(),
            viewport_height: 0,
            reveal: RevealTracker::new(SectionKind::ORDER),
            counters,
            live: LiveCounter::new(),
            calculator,
            share_links,
            should_quit: false,
            status_message: None,
            pending_key: None,
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.viewport_height)
    }

    /// Advance scroll and reveal state one frame; newly revealed sections
    /// get their counters started.
    pub fn update_animations(&mut self) {
        let max = self.max_scroll();
        self.scroll.update(max);

        let triggered = self
            .reveal
            .update(&self.layout, self.scroll.position(), self.viewport_height);
        for kind in triggered {
            tracing::debug!(?kind, "section revealed");
            self.start_counters(kind);
        }
    }

    fn start_counters(&mut self, section: SectionKind) {
        let duration = Duration::from_millis(self.config.ui.counter_duration_ms);
        for counter in self.counters.iter_mut().filter(|c| c.section == section) {
            counter.start(duration);
        }
    }

    /// Whether the main loop should poll at the animation frame rate.
    pub fn needs_fast_update(&self) -> bool {
        let max_cards = self
            .content
            .info_cards
            .len()
            .max(self.section_counters(SectionKind::Stats).count())
            .max(1);
        self.scroll.needs_update()
            || self.counters.iter().any(|c| c.is_animating())
            || self.reveal.any_fading(max_cards)
    }

    pub fn section_counters(
        &self,
        section: SectionKind,
    ) -> impl Iterator<Item = &StatCounter> {
        self.counters.iter().filter(move |c| c.section == section)
    }

    // --- scrolling ---

    pub fn scroll_line_down(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_by(1, max);
    }

    pub fn scroll_line_up(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_by(-1, max);
    }

    pub fn scroll_half_page(&mut self, down: bool) {
        let delta = (self.viewport_height / 2).max(1) as i32;
        let max = self.max_scroll();
        self.scroll.scroll_by(if down { delta } else { -delta }, max);
    }

    pub fn scroll_full_page(&mut self, down: bool) {
        let delta = self.viewport_height.max(1) as i32;
        let max = self.max_scroll();
        self.scroll.scroll_by(if down { delta } else { -delta }, max);
    }

    pub fn jump_to_top(&mut self) {
        let max = self.max_scroll();
        self.scroll.jump_to(0, max);
    }

    pub fn jump_to_bottom(&mut self) {
        let max = self.max_scroll();
        self.scroll.jump_to(max, max);
    }

    /// Smooth-scroll to a section by its position in the page order.
    /// Unknown anchors are a no-op.
    pub fn goto_section(&mut self, index: usize) {
        if let Some(kind) = SectionKind::ORDER.get(index) {
            self.scroll_to_section(*kind);
        }
    }

    /// Smooth-scroll to a section's anchor offset, if it has been laid out.
    pub fn scroll_to_section(&mut self, kind: SectionKind) {
        if let Some(offset) = self.layout.offset_of(kind) {
            let max = self.max_scroll();
            self.scroll.scroll_to(offset, max);
        }
    }

    pub fn next_section(&mut self) {
        let current = self.layout.index_at(self.scroll.target());
        self.goto_section((current + 1).min(SectionKind::ORDER.len() - 1));
    }

    pub fn prev_section(&mut self) {
        let current = self.layout.index_at(self.scroll.target());
        self.goto_section(current.saturating_sub(1));
    }

    /// Section at the top of the viewport, for the status bar.
    pub fn current_section(&self) -> SectionKind {
        let index = self.layout.index_at(self.scroll.position());
        SectionKind::ORDER[index.min(SectionKind::ORDER.len() - 1)]
    }

    // --- misc ---

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = Arc::new(AppConfig::default());
        let share_links = ShareLinks::build(&config.campaign).unwrap();
        App::new(config, Theme::default(), share_links)
    }

    fn laid_out_app() -> App {
        let mut app = app();
        app.viewport_height = 20;
        for kind in SectionKind::ORDER {
            app.layout.push(kind, 10);
        }
        app
    }

    #[test]
    fn test_counters_start_only_when_section_reveals() {
        let mut app = laid_out_app();

        // Viewport covers Hero and Stats
        app.update_animations();
        assert!(app.section_counters(SectionKind::Hero).all(|c| c.started()));
        assert!(app.section_counters(SectionKind::Stats).all(|c| c.started()));
    }

    #[test]
    fn test_counter_start_is_one_shot() {
        let mut app = laid_out_app();
        app.update_animations();

        let before: Vec<u64> = app.counters.iter().map(|c| c.target).collect();
        app.update_animations();
        app.update_animations();
        let after: Vec<u64> = app.counters.iter().map(|c| c.target).collect();
        assert_eq!(before, after);
        assert!(app.section_counters(SectionKind::Hero).all(|c| c.started()));
    }

    #[test]
    fn test_goto_unknown_section_is_noop() {
        let mut app = laid_out_app();
        app.goto_section(99);
        assert_eq!(app.scroll.target(), 0);
    }

    #[test]
    fn test_section_navigation_clamps() {
        let mut app = laid_out_app();
        for _ in 0..10 {
            app.next_section();
            app.update_animations();
        }
        assert!(app.scroll.target() <= app.max_scroll());

        for _ in 0..10 {
            app.prev_section();
            app.update_animations();
        }
        assert_eq!(app.scroll.target(), 0);
    }

    #[test]
    fn test_unstarted_counter_displays_zero() {
        let app = app();
        assert!(app.counters.iter().all(|c| c.display() == 0));
    }
}
