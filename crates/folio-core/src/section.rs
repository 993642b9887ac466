//! The section registry and scroll-synchronized navigation state.
//!
//! The page is a fixed, ordered list of anchorable sections. The tracker
//! turns a raw scroll offset into two derived values: whether the nav bar
//! has left its transparent "top of page" style, and which section should
//! be highlighted as active.

/// Scroll offset beyond which the nav bar switches to its solid style.
pub const NAV_SOLID_THRESHOLD: f32 = 50.0;

/// Added to the scroll offset before resolving the active section, so a
/// section lights up while its heading approaches rather than once it has
/// fully reached the top edge.
pub const ACTIVE_LOOKAHEAD: f32 = 100.0;

/// Fraction of the scrollable height consumed: 0 at the top, 1 at the
/// bottom, clamped to `[0, 1]`. A page with nothing to scroll reports 0.
pub fn scroll_progress(offset: f32, max_scroll: f32) -> f32 {
    if max_scroll > 0.0 {
        (offset / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Identifier for a named, anchorable region of the single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

/// A registered page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

/// The registry, in display and scroll order.
pub const SECTIONS: [Section; 6] = [
    Section { id: SectionId::Home, label: "Home" },
    Section { id: SectionId::About, label: "About" },
    Section { id: SectionId::Experience, label: "Experience" },
    Section { id: SectionId::Skills, label: "Skills" },
    Section { id: SectionId::Projects, label: "Projects" },
    Section { id: SectionId::Contact, label: "Contact" },
];

/// Resolves scroll offsets against the registered sections' top offsets.
///
/// Re-run on every raw scroll event. The scan is linear, but over at most
/// six entries, so there is no debouncing; the original behaved the same
/// way.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    /// `(section, top offset)` pairs in document order.
    offsets: Vec<(SectionId, f32)>,
}

impl ScrollTracker {
    /// Builds a tracker from `(section, top offset)` pairs in document
    /// order. Offsets must be non-decreasing.
    pub fn new(offsets: Vec<(SectionId, f32)>) -> Self {
        debug_assert!(
            offsets.windows(2).all(|w| w[0].1 <= w[1].1),
            "section offsets must be in document order"
        );
        Self { offsets }
    }

    /// Whether the page has scrolled past the nav style threshold.
    pub fn scrolled_past(&self, offset: f32) -> bool {
        offset > NAV_SOLID_THRESHOLD
    }

    /// The section considered "in view" at the given scroll offset.
    ///
    /// Scans from the bottom of the registry up and returns the last
    /// section whose top offset is at or above the lookahead-adjusted
    /// position; when offsets tie, the later section in document order
    /// wins because the scan returns on first match.
    pub fn active_section(&self, offset: f32) -> SectionId {
        let position = offset + ACTIVE_LOOKAHEAD;
        for &(id, top) in self.offsets.iter().rev() {
            if top <= position {
                return id;
            }
        }
        self.offsets.first().map(|&(id, _)| id).unwrap_or(SectionId::Home)
    }

    /// Top offset of a registered section, if present.
    pub fn offset_of(&self, section: SectionId) -> Option<f32> {
        self.offsets
            .iter()
            .find(|(id, _)| *id == section)
            .map(|&(_, top)| top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(vec![
            (SectionId::Home, 0.0),
            (SectionId::About, 720.0),
            (SectionId::Experience, 1400.0),
            (SectionId::Skills, 2160.0),
            (SectionId::Projects, 2860.0),
            (SectionId::Contact, 3680.0),
        ])
    }

    #[test]
    fn test_top_of_page_is_first_section() {
        assert_eq!(tracker().active_section(0.0), SectionId::Home);
    }

    #[test]
    fn test_offsets_within_a_span_resolve_to_that_section() {
        let t = tracker();
        // Skills spans [2160, 2860); lookahead shifts the window up by 100.
        assert_eq!(t.active_section(2060.0), SectionId::Skills);
        assert_eq!(t.active_section(2500.0), SectionId::Skills);
        assert_eq!(t.active_section(2759.0), SectionId::Skills);
        assert_eq!(t.active_section(2760.0), SectionId::Projects);
    }

    #[test]
    fn test_past_the_last_section_stays_on_it() {
        assert_eq!(tracker().active_section(10_000.0), SectionId::Contact);
    }

    #[test]
    fn test_equal_offsets_resolve_to_the_later_section() {
        let t = ScrollTracker::new(vec![
            (SectionId::Home, 0.0),
            (SectionId::About, 500.0),
            (SectionId::Experience, 500.0),
        ]);
        assert_eq!(t.active_section(450.0), SectionId::Experience);
    }

    #[test]
    fn test_scrolled_past_threshold() {
        let t = tracker();
        assert!(!t.scrolled_past(0.0));
        assert!(!t.scrolled_past(NAV_SOLID_THRESHOLD));
        assert!(t.scrolled_past(NAV_SOLID_THRESHOLD + 0.1));
    }

    #[test]
    fn test_offset_of_known_section() {
        assert_eq!(tracker().offset_of(SectionId::Projects), Some(2860.0));
    }

    #[test]
    fn test_scroll_progress_endpoints_and_clamping() {
        assert_eq!(scroll_progress(0.0, 4000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 4000.0), 0.5);
        assert_eq!(scroll_progress(4000.0, 4000.0), 1.0);
        // Overscroll and rubber-banding stay inside [0, 1].
        assert_eq!(scroll_progress(5000.0, 4000.0), 1.0);
        assert_eq!(scroll_progress(-50.0, 4000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_with_nothing_to_scroll() {
        assert_eq!(scroll_progress(0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(100.0, -10.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_scrolled_past_matches_comparison(offset in 0.0f32..20_000.0) {
            prop_assert_eq!(
                tracker().scrolled_past(offset),
                offset > NAV_SOLID_THRESHOLD
            );
        }

        #[test]
        fn prop_active_section_top_is_within_lookahead(offset in 0.0f32..20_000.0) {
            let t = tracker();
            let active = t.active_section(offset);
            let top = t.offset_of(active).unwrap();
            // The resolved section either starts within the lookahead
            // window, or it is the first section and we are above it.
            prop_assert!(top <= offset + ACTIVE_LOOKAHEAD || active == SectionId::Home);
        }
    }
}
