//! Active-section tracking for the navigation bar.
//!
//! The page is a fixed sequence of sections. On every scroll event the shell
//! measures each section and feeds a [`ScrollSample`] to a [`ScrollTracker`],
//! which decides which navigation entry is highlighted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Look-ahead added to the scroll offset to account for the fixed header
pub const HEADER_OFFSET: f64 = 100.0;

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections, top to bottom
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Sections listed in the navigation menu (the hero is reached via the logo)
    pub const MENU: [SectionId; 4] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Anchor id of the section element
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Localization key of the menu label
    pub fn nav_key(&self) -> &'static str {
        match self {
            SectionId::Hero => "nav.home",
            SectionId::About => "nav.about",
            SectionId::Skills => "nav.skills",
            SectionId::Projects => "nav.projects",
            SectionId::Contact => "nav.contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PortfolioError::Content(format!("unknown section '{}'", s)))
    }
}

/// Measured vertical extent of one rendered section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Whether `position` lies in `[top, top + height)`
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// One measurement of the page, as sent by the scroll listener
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub sections: Vec<SectionBounds>,
}

/// First section in display order containing `position`.
///
/// Sections missing from `bounds` (not rendered) are skipped. When ranges
/// overlap the earlier section wins.
pub fn section_at(position: f64, bounds: &[SectionBounds]) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|id| {
        bounds
            .iter()
            .find(|b| b.id == *id)
            .is_some_and(|b| b.contains(position))
    })
}

/// Tracks the highlighted navigation section across scroll events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    active: SectionId,
    offset: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    /// Tracker starting at the first section with the standard header offset
    pub fn new() -> Self {
        Self::with_offset(HEADER_OFFSET)
    }

    /// Tracker with a custom look-ahead offset
    pub fn with_offset(offset: f64) -> Self {
        Self {
            active: SectionId::ALL[0],
            offset,
        }
    }

    /// Currently active section
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Force the active section, e.g. after a menu click
    pub fn set_active(&mut self, id: SectionId) {
        self.active = id;
    }

    /// Recompute the active section for a scroll offset.
    ///
    /// If no section contains the adjusted position the previous section
    /// stays active.
    pub fn update(&mut self, scroll_y: f64, bounds: &[SectionBounds]) -> SectionId {
        if let Some(id) = section_at(scroll_y + self.offset, bounds) {
            self.active = id;
        }
        self.active
    }

    /// Recompute from a full sample
    pub fn apply(&mut self, sample: &ScrollSample) -> SectionId {
        self.update(sample.scroll_y, &sample.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Hero, 0.0, 800.0),
            SectionBounds::new(SectionId::About, 800.0, 600.0),
            SectionBounds::new(SectionId::Skills, 1400.0, 900.0),
            SectionBounds::new(SectionId::Projects, 2300.0, 400.0),
            SectionBounds::new(SectionId::Contact, 2700.0, 700.0),
        ]
    }

    #[test]
    fn starts_at_hero() {
        assert_eq!(ScrollTracker::new().active(), SectionId::Hero);
    }

    #[test]
    fn adjusted_position_moves_into_about() {
        let mut tracker = ScrollTracker::new();
        // 700 + 100 = 800, the first pixel of `about`
        assert_eq!(tracker.update(700.0, &page()), SectionId::About);
    }

    #[test]
    fn range_end_is_exclusive() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.update(699.0, &page()), SectionId::Hero);
        assert_eq!(tracker.update(1299.0, &page()), SectionId::About);
        assert_eq!(tracker.update(1300.0, &page()), SectionId::Skills);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut tracker = ScrollTracker::new();
        tracker.update(2000.0, &page());
        assert_eq!(tracker.active(), SectionId::Projects);

        // Past the end of the page
        assert_eq!(tracker.update(10_000.0, &page()), SectionId::Projects);

        // Above a page whose first section starts lower down
        let shifted: Vec<_> = page()
            .into_iter()
            .map(|b| SectionBounds::new(b.id, b.top + 500.0, b.height))
            .collect();
        assert_eq!(tracker.update(0.0, &shifted), SectionId::Projects);
    }

    #[test]
    fn overlap_prefers_earlier_section() {
        let overlapping = vec![
            SectionBounds::new(SectionId::About, 500.0, 600.0),
            SectionBounds::new(SectionId::Hero, 0.0, 1000.0),
        ];
        let mut tracker = ScrollTracker::with_offset(0.0);
        tracker.set_active(SectionId::Contact);
        assert_eq!(tracker.update(700.0, &overlapping), SectionId::Hero);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let partial = vec![SectionBounds::new(SectionId::Contact, 0.0, 100.0)];
        assert_eq!(section_at(50.0, &partial), Some(SectionId::Contact));
        assert_eq!(section_at(50.0, &[]), None);
    }

    #[test]
    fn sample_deserializes_from_listener_json() {
        let json = r#"{"scroll_y": 700, "sections": [{"id": "about", "top": 800, "height": 600}]}"#;
        let sample: ScrollSample = serde_json::from_str(json).unwrap();
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.apply(&sample), SectionId::About);
    }

    #[test]
    fn section_ids_parse() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>().unwrap(), id);
        }
        assert!("footer".parse::<SectionId>().is_err());
    }
}
