//! Layout metrics for the page.
//!
//! Every section is laid out at a fixed height, so the section top
//! offsets the scroll tracker resolves against are plain cumulative sums
//! of these constants.

use folio_core::section::{SectionId, SECTIONS};

pub const NAV_HEIGHT: f32 = 64.0;
pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;
pub const SECTION_PADDING: f32 = 48.0;
pub const FOOTER_HEIGHT: f32 = 320.0;
pub const TOAST_SECS: u64 = 4;

/// Fixed height of a section's slot in the page.
pub fn section_height(id: SectionId) -> f32 {
    match id {
        SectionId::Home => 720.0,
        SectionId::About => 680.0,
        SectionId::Experience => 760.0,
        SectionId::Skills => 700.0,
        SectionId::Projects => 820.0,
        SectionId::Contact => 760.0,
    }
}

/// `(section, top offset)` pairs in document order, for the tracker and
/// for scroll-to-section jumps.
pub fn section_offsets() -> Vec<(SectionId, f32)> {
    let mut top = 0.0;
    SECTIONS
        .iter()
        .map(|s| {
            let entry = (s.id, top);
            top += section_height(s.id);
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_cumulative_and_start_at_zero() {
        let offsets = section_offsets();
        assert_eq!(offsets.len(), SECTIONS.len());
        assert_eq!(offsets[0], (SectionId::Home, 0.0));
        for pair in offsets.windows(2) {
            let (prev, prev_top) = pair[0];
            let (_, top) = pair[1];
            assert_eq!(top, prev_top + section_height(prev));
        }
    }
}
