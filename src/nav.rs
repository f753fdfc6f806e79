//! Scroll-spy and in-page navigation state.
//!
//! [`NavigationState`] is the only owner of the active section, the small
//! viewport menu flag and the page scroll lock. It knows nothing about the
//! DOM: section geometry is read through [`Layout`], so the browser binding
//! and the tests feed it the same way.

pub mod scroll;

use std::sync::Arc;

use thiserror::Error;

/// Height of the fixed header the activation line sits under.
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;
/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("navigation needs at least one section")]
    NoSections,
}

/// Rendered vertical extent of a section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Live geometry of rendered sections. Sections that are not rendered yet
/// return `None`.
pub trait Layout {
    fn bounds(&self, section: &str) -> Option<SectionBounds>;
}

impl<L: Layout + ?Sized> Layout for &L {
    fn bounds(&self, section: &str) -> Option<SectionBounds> {
        (**self).bounds(section)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    sections: Arc<[String]>,
    active: usize,
    menu_open: bool,
    overlay_open: bool,
    scrolled: bool,
    viewport_wide: bool,
    header_offset: f64,
}

impl NavigationState {
    pub fn new<I, S>(sections: I) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = sections.into_iter().map(Into::into).collect::<Arc<[String]>>();
        if sections.is_empty() {
            return Err(NavError::NoSections);
        }
        Ok(Self {
            sections,
            active: 0,
            menu_open: false,
            overlay_open: false,
            scrolled: false,
            viewport_wide: false,
            header_offset: DEFAULT_HEADER_OFFSET,
        })
    }

    pub fn with_header_offset(mut self, offset: f64) -> Self {
        self.header_offset = offset;
        self
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active_section(&self) -> &str {
        &self.sections[self.active]
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active_section() == section
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Whether the page body should stop scrolling.
    pub fn scroll_locked(&self) -> bool {
        self.menu_open || self.overlay_open
    }

    fn position(&self, section: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == section)
    }

    /// Picks the first section containing the activation line
    /// `scroll_y + header_offset`. Keeps the current section when none does.
    /// Returns whether the active section changed.
    pub fn recompute_active_section(&mut self, scroll_y: f64, layout: &impl Layout) -> bool {
        let threshold = scroll_y + self.header_offset;
        let found = self.sections.iter().position(|section| {
            layout
                .bounds(section)
                .is_some_and(|bounds| bounds.contains(threshold))
        });
        match found {
            Some(i) if i != self.active => {
                self.active = i;
                true
            }
            _ => false,
        }
    }

    /// Scroll event entry point: header style plus active section.
    pub fn observe_scroll(&mut self, scroll_y: f64, layout: &impl Layout) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD;
        let scrolled_changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        let active_changed = self.recompute_active_section(scroll_y, layout);
        scrolled_changed || active_changed
    }

    /// Optimistically activates `section` and closes the menu. Unknown
    /// sections leave the state untouched and return `false`.
    pub fn navigate_to(&mut self, section: &str) -> bool {
        let Some(i) = self.position(section) else {
            return false;
        };
        self.active = i;
        self.menu_open = false;
        true
    }

    /// Document offset that puts the top of `section` just under the header.
    pub fn scroll_target(&self, section: &str, layout: &impl Layout) -> Option<f64> {
        self.position(section)?;
        layout
            .bounds(section)
            .map(|bounds| (bounds.top - self.header_offset).max(0.0))
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Records the breakpoint state; crossing from narrow to wide closes the
    /// menu. Returns whether anything changed.
    pub fn set_viewport_wide(&mut self, wide: bool) -> bool {
        let crossed = wide && !self.viewport_wide;
        let changed = wide != self.viewport_wide;
        self.viewport_wide = wide;
        let closed = crossed && self.close_menu();
        changed || closed
    }

    pub fn set_overlay_open(&mut self, open: bool) -> bool {
        std::mem::replace(&mut self.overlay_open, open) != open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedLayout(HashMap<&'static str, SectionBounds>);

    impl Layout for FixedLayout {
        fn bounds(&self, section: &str) -> Option<SectionBounds> {
            self.0.get(section).copied()
        }
    }

    fn layout(entries: &[(&'static str, f64, f64)]) -> FixedLayout {
        FixedLayout(
            entries
                .iter()
                .map(|&(id, top, height)| (id, SectionBounds { top, height }))
                .collect(),
        )
    }

    fn three_sections() -> (NavigationState, FixedLayout) {
        let state = NavigationState::new(["home", "about", "contact"]).unwrap();
        let layout = layout(&[
            ("home", 0.0, 500.0),
            ("about", 500.0, 700.0),
            ("contact", 1200.0, 800.0),
        ]);
        (state, layout)
    }

    #[test]
    fn test_new_rejects_empty_sections() {
        let empty: [&str; 0] = [];
        assert_eq!(NavigationState::new(empty), Err(NavError::NoSections));
    }

    #[test]
    fn test_defaults() {
        let (state, _) = three_sections();
        assert_eq!(state.active_section(), "home");
        assert!(!state.is_menu_open());
        assert!(!state.is_scrolled());
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_scenario_from_header_offset() {
        let (mut state, layout) = three_sections();

        // 450 + 80 = 530 lands in about
        assert!(state.recompute_active_section(450.0, &layout));
        assert_eq!(state.active_section(), "about");

        // -50 + 80 = 30 is still inside home
        assert!(state.recompute_active_section(-50.0, &layout));
        assert_eq!(state.active_section(), "home");
    }

    #[test]
    fn test_offset_above_first_section_keeps_active() {
        let mut state = NavigationState::new(["home", "about", "contact"]).unwrap();
        // home sits below the fixed header padding
        let layout = layout(&[
            ("home", 100.0, 400.0),
            ("about", 500.0, 700.0),
            ("contact", 1200.0, 800.0),
        ]);

        assert!(state.recompute_active_section(450.0, &layout));
        assert_eq!(state.active_section(), "about");

        // overscroll bounce: 30 is above every section
        assert!(!state.recompute_active_section(-50.0, &layout));
        assert_eq!(state.active_section(), "about");
    }

    #[test]
    fn test_offsets_within_bounds_select_section() {
        let (mut state, layout) = three_sections();
        for (section, from, to) in [("home", 0.0, 500.0), ("about", 500.0, 1200.0), ("contact", 1200.0, 2000.0)] {
            let mut y = from;
            while y < to {
                state.recompute_active_section(y - DEFAULT_HEADER_OFFSET, &layout);
                assert_eq!(state.active_section(), section, "threshold {}", y);
                y += 25.0;
            }
        }
    }

    #[test]
    fn test_past_document_end_keeps_active() {
        let (mut state, layout) = three_sections();
        state.recompute_active_section(1500.0, &layout);
        assert_eq!(state.active_section(), "contact");
        assert!(!state.recompute_active_section(5000.0, &layout));
        assert_eq!(state.active_section(), "contact");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let (mut state, layout) = three_sections();
        assert!(state.recompute_active_section(700.0, &layout));
        let snapshot = state.clone();
        assert!(!state.recompute_active_section(700.0, &layout));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_unrendered_sections_are_skipped() {
        let mut state = NavigationState::new(["home", "about", "contact"]).unwrap();
        let layout = layout(&[("home", 0.0, 500.0), ("contact", 500.0, 500.0)]);
        state.recompute_active_section(600.0, &layout);
        assert_eq!(state.active_section(), "contact");
    }

    #[test]
    fn test_first_matching_section_wins_on_overlap() {
        let mut state = NavigationState::new(["home", "about"]).unwrap();
        let layout = layout(&[("home", 0.0, 600.0), ("about", 500.0, 600.0)]);
        state.recompute_active_section(470.0, &layout);
        assert_eq!(state.active_section(), "home");
    }

    #[test]
    fn test_observe_scroll_tracks_header_style() {
        let (mut state, layout) = three_sections();
        assert!(!state.observe_scroll(10.0, &layout));
        assert!(state.observe_scroll(60.0, &layout));
        assert!(state.is_scrolled());
        assert!(!state.observe_scroll(70.0, &layout));
        assert!(state.observe_scroll(0.0, &layout));
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_navigate_to_unknown_is_noop() {
        let (mut state, _) = three_sections();
        state.toggle_menu();
        let before = state.clone();
        assert!(!state.navigate_to("blog"));
        assert_eq!(state, before);
        assert!(state.is_menu_open());
    }

    #[test]
    fn test_navigate_to_activates_and_closes_menu() {
        let (mut state, _) = three_sections();
        state.toggle_menu();
        assert!(state.navigate_to("contact"));
        assert_eq!(state.active_section(), "contact");
        assert!(!state.is_menu_open());

        // closed menu stays closed
        assert!(state.navigate_to("home"));
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_scroll_target() {
        let (state, layout) = three_sections();
        assert_eq!(state.scroll_target("about", &layout), Some(420.0));
        assert_eq!(state.scroll_target("home", &layout), Some(0.0));
        assert_eq!(state.scroll_target("blog", &layout), None);

        let custom = state.with_header_offset(64.0);
        assert_eq!(custom.scroll_target("contact", &layout), Some(1136.0));
    }

    #[test]
    fn test_navigation_target_activates_same_section() {
        let (mut state, layout) = three_sections();
        for section in ["home", "about", "contact"] {
            let target = state.scroll_target(section, &layout).unwrap();
            state.navigate_to("home");
            state.recompute_active_section(target, &layout);
            assert_eq!(state.active_section(), section);
        }
    }

    #[test]
    fn test_menu_closes_when_viewport_widens() {
        let (mut state, _) = three_sections();
        state.set_viewport_wide(false);
        state.toggle_menu();
        assert!(state.is_menu_open());

        assert!(state.set_viewport_wide(true));
        assert!(!state.is_menu_open());

        // staying wide is not a crossing
        assert!(!state.set_viewport_wide(true));

        state.set_viewport_wide(false);
        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_scroll_lock_follows_menu_and_overlay() {
        let (mut state, _) = three_sections();
        state.toggle_menu();
        assert!(state.scroll_locked());
        state.navigate_to("about");
        assert!(!state.scroll_locked());

        assert!(state.set_overlay_open(true));
        assert!(!state.set_overlay_open(true));
        assert!(state.scroll_locked());
        assert!(state.set_overlay_open(false));
        assert!(!state.scroll_locked());
    }
}
