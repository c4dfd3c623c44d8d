//! Presentation controller - UI state of the landing page
//!
//! The host view layer sends discrete events (`set_language`,
//! `set_quadrant_filter`, `next_testimonial`, `previous_testimonial`), feeds
//! the clock through [`PresentationController::tick`] and re-reads snapshots
//! after each call. Nothing here is persisted.

use std::time::Duration;

use tracing::{debug, trace};

use crate::i18n::{self, ContentTree, Language, NavItem, Testimonial};
use crate::models::taxonomy::{BADGES_PER_ROW, ROWS_PER_QUADRANT, grid_rows};
use crate::models::{Emphasis, GridCell, MoodQuadrant, MoodTaxonomy, QuadrantFilter};

/// Carousel advance period
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(7000);

/// Autoplay only runs with at least this many testimonials
pub const MIN_AUTOPLAY_ITEMS: usize = 2;

pub use crate::i18n::ContentSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub autoplay_interval: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL }
    }
}

/// Session-scoped UI state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub active_language: Language,
    pub active_quadrant_filter: QuadrantFilter,
    pub active_testimonial_index: usize,
}

/// Repeating carousel timer. The first tick after arming anchors it, then
/// it fires once per elapsed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTask {
    generation: u64,
    interval: Duration,
    next_due: Option<Duration>,
}

impl AutoplayTask {
    fn new(generation: u64, interval: Duration) -> Self {
        Self { generation, interval, next_due: None }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// Number of periods that elapsed up to `now`. Constant time however
    /// far behind the clock is.
    fn poll(&mut self, now: Duration) -> u128 {
        let Some(due) = self.next_due else {
            self.next_due = Some(now + self.interval);
            return 0;
        };
        if self.interval.is_zero() || now < due {
            return 0;
        }

        let late = (now - due).as_nanos();
        let period = self.interval.as_nanos();
        let into_period = Duration::from_nanos(u64::try_from(late % period).unwrap_or(u64::MAX));
        self.next_due = Some(now + self.interval.saturating_sub(into_period));
        late / period + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: QuadrantFilter,
    pub label: &'static str,
    pub active: bool,
}

/// One of the four library panels
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantPanel<'a> {
    pub quadrant: MoodQuadrant,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
    pub highlighted: bool,
    pub emphasis: Emphasis,
    pub rows: Vec<Vec<GridCell<'a>>>,
}

impl QuadrantPanel<'_> {
    /// Entry count as shown in the panel header, two digits
    pub fn count_label(&self) -> String {
        format!("{:02}", self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialView {
    pub item: &'static Testimonial,
    /// 1-based
    pub position: usize,
    pub total: usize,
}

impl TestimonialView {
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

pub struct PresentationController {
    config: ControllerConfig,
    content: ContentSource,
    taxonomy: MoodTaxonomy,
    state: UiState,
    autoplay: Option<AutoplayTask>,
    generation: u64,
    torn_down: bool,
}

impl PresentationController {
    pub fn new(config: ControllerConfig, taxonomy: MoodTaxonomy) -> Self {
        Self::with_content(config, i18n::content, taxonomy)
    }

    pub fn with_content(config: ControllerConfig, content: ContentSource, taxonomy: MoodTaxonomy) -> Self {
        let mut controller = Self {
            config,
            content,
            taxonomy,
            state: UiState::default(),
            autoplay: None,
            generation: 0,
            torn_down: false,
        };
        controller.rearm_autoplay();
        controller
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.state.active_language
    }

    pub fn quadrant_filter(&self) -> QuadrantFilter {
        self.state.active_quadrant_filter
    }

    pub fn testimonial_index(&self) -> usize {
        self.state.active_testimonial_index
    }

    pub fn taxonomy(&self) -> &MoodTaxonomy {
        &self.taxonomy
    }

    pub fn autoplay(&self) -> Option<&AutoplayTask> {
        self.autoplay.as_ref()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Copy for the active language
    pub fn content(&self) -> &'static ContentTree {
        (self.content)(self.state.active_language)
    }

    fn testimonial_count(&self) -> usize {
        self.content().testimonials.items.len()
    }

    // ========== Events ==========

    /// Switch language. The carousel always goes back to the first item and
    /// autoplay is re-armed against the new list.
    pub fn set_language(&mut self, language: Language) {
        debug!(from = self.state.active_language.code(), to = language.code(), "language switched");
        self.state.active_language = language;
        self.state.active_testimonial_index = 0;
        self.rearm_autoplay();
    }

    pub fn set_quadrant_filter(&mut self, key: QuadrantFilter) {
        let next = self.state.active_quadrant_filter.toggle(key);
        debug!(pressed = key.key(), active = next.key(), "quadrant filter");
        self.state.active_quadrant_filter = next;
    }

    pub fn next_testimonial(&mut self) {
        let count = self.testimonial_count();
        if count == 0 {
            return;
        }
        self.state.active_testimonial_index = (self.state.active_testimonial_index + 1) % count;
    }

    pub fn previous_testimonial(&mut self) {
        let count = self.testimonial_count();
        if count == 0 {
            return;
        }
        self.state.active_testimonial_index = (self.state.active_testimonial_index + count - 1) % count;
    }

    // ========== Autoplay ==========

    fn rearm_autoplay(&mut self) {
        if let Some(old) = self.autoplay.take() {
            trace!(generation = old.generation, "autoplay cancelled");
        }
        if self.torn_down || self.testimonial_count() < MIN_AUTOPLAY_ITEMS {
            return;
        }
        self.generation += 1;
        self.autoplay = Some(AutoplayTask::new(self.generation, self.config.autoplay_interval));
        trace!(generation = self.generation, interval_ms = self.config.autoplay_interval.as_millis() as u64, "autoplay armed");
    }

    /// Advance the clock. Returns true when the carousel moved.
    pub fn tick(&mut self, now: Duration) -> bool {
        let fired = match self.autoplay.as_mut() {
            Some(task) => task.poll(now),
            None => return false,
        };
        let count = self.testimonial_count();
        if fired == 0 || count == 0 {
            return false;
        }
        // a full lap lands on the same item, only the remainder moves
        let steps = (fired % count as u128) as usize;
        self.state.active_testimonial_index = (self.state.active_testimonial_index + steps) % count;
        true
    }

    /// Time left until the next autoplay step, for repaint scheduling.
    /// `Some(ZERO)` when the task still needs anchoring.
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        let task = self.autoplay.as_ref()?;
        Some(match task.next_due {
            Some(due) => due.saturating_sub(now),
            None => Duration::ZERO,
        })
    }

    /// Cancel autoplay for good. Later ticks and language switches never
    /// re-arm it.
    pub fn teardown(&mut self) {
        if let Some(old) = self.autoplay.take() {
            debug!(generation = old.generation, "autoplay torn down");
        }
        self.torn_down = true;
    }

    // ========== Snapshots ==========

    pub fn nav_items(&self) -> &'static [NavItem] {
        self.content().nav
    }

    pub fn filter_options(&self) -> Vec<FilterOption> {
        let content = self.content();
        QuadrantFilter::OPTIONS
            .into_iter()
            .map(|filter| FilterOption {
                filter,
                label: content.filter_label(filter),
                active: self.state.active_quadrant_filter == filter,
            })
            .collect()
    }

    /// The four panels in display order, each padded to the same height
    pub fn quadrant_panels(&self) -> Vec<QuadrantPanel<'_>> {
        let by_quadrant = self.taxonomy.by_quadrant();
        let highlights = self.taxonomy.filter_visible(self.state.active_quadrant_filter);

        MoodQuadrant::DISPLAY_ORDER
            .into_iter()
            .map(|quadrant| {
                let entries = by_quadrant.get(&quadrant).map(Vec::as_slice).unwrap_or(&[]);
                let highlighted = highlights.get(&quadrant).copied().unwrap_or(true);
                let meta = quadrant.meta();
                QuadrantPanel {
                    quadrant,
                    label: meta.label(self.state.active_language),
                    color: meta.color,
                    count: entries.len(),
                    highlighted,
                    emphasis: Emphasis::for_highlight(highlighted),
                    rows: grid_rows(entries, BADGES_PER_ROW, ROWS_PER_QUADRANT),
                }
            })
            .collect()
    }

    pub fn testimonial(&self) -> Option<TestimonialView> {
        let items = self.content().testimonials.items;
        let index = self.state.active_testimonial_index;
        items.get(index).map(|item| TestimonialView {
            item,
            position: index + 1,
            total: items.len(),
        })
    }
}

impl Drop for PresentationController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EN_US, TestimonialSection};

    const T: Duration = DEFAULT_AUTOPLAY_INTERVAL;

    static SINGLE_TESTIMONIAL: ContentTree = ContentTree {
        testimonials: TestimonialSection {
            title: "One voice",
            items: &[Testimonial { quote: "Quiet.", name: "Ari", role: "Visitor" }],
        },
        ..EN_US
    };

    static NO_TESTIMONIALS: ContentTree = ContentTree {
        testimonials: TestimonialSection { title: "Nobody yet", items: &[] },
        ..EN_US
    };

    fn single_source(_: Language) -> &'static ContentTree {
        &SINGLE_TESTIMONIAL
    }

    fn empty_source(_: Language) -> &'static ContentTree {
        &NO_TESTIMONIALS
    }

    fn controller() -> PresentationController {
        PresentationController::new(ControllerConfig::default(), MoodTaxonomy::reference())
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.language(), Language::Ko);
        assert_eq!(c.quadrant_filter(), QuadrantFilter::All);
        assert_eq!(c.testimonial_index(), 0);
        assert!(c.autoplay().is_some());
    }

    #[test]
    fn test_carousel_wraparound() {
        let mut c = controller();
        c.previous_testimonial();
        assert_eq!(c.testimonial_index(), 2);
        c.next_testimonial();
        assert_eq!(c.testimonial_index(), 0);
        c.next_testimonial();
        c.next_testimonial();
        assert_eq!(c.testimonial_index(), 2);
        c.next_testimonial();
        assert_eq!(c.testimonial_index(), 0);
    }

    #[test]
    fn test_language_switch_resets_index() {
        let mut c = controller();
        c.next_testimonial();
        c.next_testimonial();
        c.previous_testimonial();
        assert_eq!(c.testimonial_index(), 1);

        c.set_language(Language::En);
        assert_eq!(c.testimonial_index(), 0);
        assert_eq!(c.content().language_short, "EN");

        c.next_testimonial();
        c.set_language(Language::En);
        assert_eq!(c.testimonial_index(), 0);
    }

    #[test]
    fn test_quadrant_toggle() {
        let mut c = controller();
        c.set_quadrant_filter(QuadrantFilter::Only(MoodQuadrant::Yellow));
        assert_eq!(c.quadrant_filter(), QuadrantFilter::Only(MoodQuadrant::Yellow));
        c.set_quadrant_filter(QuadrantFilter::Only(MoodQuadrant::Yellow));
        assert_eq!(c.quadrant_filter(), QuadrantFilter::All);

        c.set_quadrant_filter(QuadrantFilter::Only(MoodQuadrant::Blue));
        c.set_quadrant_filter(QuadrantFilter::All);
        assert_eq!(c.quadrant_filter(), QuadrantFilter::All);
    }

    #[test]
    fn test_language_switch_keeps_filter() {
        let mut c = controller();
        c.set_quadrant_filter(QuadrantFilter::Only(MoodQuadrant::Green));
        c.set_language(Language::En);
        assert_eq!(c.quadrant_filter(), QuadrantFilter::Only(MoodQuadrant::Green));
    }

    #[test]
    fn test_autoplay_advances_per_interval() {
        let mut c = controller();
        assert!(!c.tick(Duration::ZERO));
        assert!(c.tick(T * 2));
        assert_eq!(c.testimonial_index(), 2);
    }

    #[test]
    fn test_autoplay_step_by_step() {
        let mut c = controller();
        c.tick(Duration::from_millis(500));
        assert!(!c.tick(Duration::from_millis(7499)));
        assert_eq!(c.testimonial_index(), 0);
        assert!(c.tick(Duration::from_millis(7500)));
        assert_eq!(c.testimonial_index(), 1);
        assert_eq!(c.time_until_next(Duration::from_millis(7500)), Some(T));
        c.tick(Duration::from_millis(14_500));
        c.tick(Duration::from_millis(21_500));
        assert_eq!(c.testimonial_index(), 0);
    }

    #[test]
    fn test_autoplay_catch_up_is_constant_time() {
        let config = ControllerConfig { autoplay_interval: Duration::from_nanos(1) };
        let mut c = PresentationController::new(config, MoodTaxonomy::reference());
        c.tick(Duration::ZERO);

        // 200_000_000 periods, two past a whole number of laps
        assert!(c.tick(Duration::from_millis(200)));
        assert_eq!(c.testimonial_index(), 2);
        assert_eq!(c.time_until_next(Duration::from_millis(200)), Some(Duration::from_nanos(1)));

        // an hour of 1ns periods is a whole number of laps
        assert!(c.tick(Duration::from_secs(3600) + Duration::from_millis(200)));
        assert_eq!(c.testimonial_index(), 2);
    }

    #[test]
    fn test_late_tick_keeps_phase() {
        let mut c = controller();
        c.tick(Duration::ZERO);
        assert!(c.tick(T * 2 + Duration::from_millis(1500)));
        assert_eq!(c.testimonial_index(), 2);
        assert_eq!(c.time_until_next(T * 2 + Duration::from_millis(1500)), Some(Duration::from_millis(5500)));
        assert!(!c.tick(T * 3 - Duration::from_millis(1)));
        assert!(c.tick(T * 3));
        assert_eq!(c.testimonial_index(), 0);
    }

    #[test]
    fn test_language_switch_rearms_autoplay() {
        let mut c = controller();
        let first = c.autoplay().map(|t| t.generation());
        c.tick(Duration::ZERO);
        c.tick(Duration::from_millis(6000));

        c.set_language(Language::En);
        let second = c.autoplay().map(|t| t.generation());
        assert_ne!(first, second);
        assert_eq!(c.time_until_next(Duration::from_millis(6000)), Some(Duration::ZERO));

        // the old deadline at 7s no longer applies
        c.tick(Duration::from_millis(6000));
        assert!(!c.tick(Duration::from_millis(7000)));
        assert_eq!(c.testimonial_index(), 0);
        assert!(c.tick(Duration::from_millis(13_000)));
        assert_eq!(c.testimonial_index(), 1);
    }

    #[test]
    fn test_no_mutation_after_teardown() {
        let mut c = controller();
        c.tick(Duration::ZERO);
        c.next_testimonial();
        c.teardown();
        assert!(c.autoplay().is_none());
        assert!(!c.tick(T * 10));
        assert_eq!(c.testimonial_index(), 1);

        c.set_language(Language::En);
        assert!(c.autoplay().is_none());
        assert!(!c.tick(T * 20));
        assert_eq!(c.testimonial_index(), 0);
        assert!(c.is_torn_down());
    }

    #[test]
    fn test_single_testimonial_never_autoplays() {
        let mut c = PresentationController::with_content(
            ControllerConfig::default(),
            single_source,
            MoodTaxonomy::reference(),
        );
        assert!(c.autoplay().is_none());
        assert!(!c.tick(T * 5));
        c.next_testimonial();
        assert_eq!(c.testimonial_index(), 0);
        c.previous_testimonial();
        assert_eq!(c.testimonial_index(), 0);
        assert_eq!(c.testimonial().map(|t| t.position_label()), Some("1 / 1".to_string()));
    }

    #[test]
    fn test_empty_testimonials_are_safe() {
        let mut c = PresentationController::with_content(
            ControllerConfig::default(),
            empty_source,
            MoodTaxonomy::reference(),
        );
        c.next_testimonial();
        c.previous_testimonial();
        assert_eq!(c.testimonial_index(), 0);
        assert!(c.testimonial().is_none());
        assert_eq!(c.time_until_next(Duration::ZERO), None);
    }

    #[test]
    fn test_testimonial_snapshot() {
        let mut c = controller();
        c.set_language(Language::En);
        c.previous_testimonial();
        let view = c.testimonial().unwrap();
        assert_eq!(view.item.name, "Elias");
        assert_eq!(view.position, 3);
        assert_eq!(view.total, 3);
        assert_eq!(view.position_label(), "3 / 3");
    }

    #[test]
    fn test_derived_labels_follow_language() {
        let mut c = controller();
        assert_eq!(c.nav_items()[0].label, "왜 Auto Zen Garden인가");
        assert_eq!(c.filter_options()[0].label, "전체 감정");

        c.set_language(Language::En);
        assert_eq!(c.nav_items()[0].label, "Why Auto Zen Garden");
        let options = c.filter_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].label, "All emotions");
        assert!(options[0].active);
        assert_eq!(options[2].filter, QuadrantFilter::Only(MoodQuadrant::Red));
    }

    #[test]
    fn test_quadrant_panels() {
        let mut c = controller();
        c.set_quadrant_filter(QuadrantFilter::Only(MoodQuadrant::Blue));
        let panels = c.quadrant_panels();

        let order: Vec<_> = panels.iter().map(|p| p.quadrant).collect();
        assert_eq!(order, MoodQuadrant::DISPLAY_ORDER.to_vec());

        for panel in &panels {
            assert_eq!(panel.count, 25);
            assert_eq!(panel.count_label(), "25");
            assert_eq!(panel.rows.len(), ROWS_PER_QUADRANT);
            assert!(panel.rows.iter().all(|r| r.len() == BADGES_PER_ROW));
            assert_eq!(panel.highlighted, panel.quadrant == MoodQuadrant::Blue);
        }
        let red = &panels[0];
        assert_eq!(red.emphasis, Emphasis::DIMMED);
        assert_eq!(red.label, "높은 활력 · 불편함");
        assert_eq!(red.color, "#FF9A7A");
    }
}
