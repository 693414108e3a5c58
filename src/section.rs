//! The four navigable regions of the page and the scan that decides which
//! one is currently in view.

/// Offset from the top of the viewport a section must straddle to count as
/// the active one.
pub const ACTIVATION_LINE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    About,
    Projects,
    Gallery,
    Contact,
}

impl Section {
    /// Scan and menu order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Gallery,
        Section::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    /// Element id of the section's anchor.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::About => "about-section",
            Self::Projects => "projects-section",
            Self::Gallery => "gallery-section",
            Self::Contact => "contact-section",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Gallery => "Gallery",
            Self::Contact => "Contact",
        }
    }
}

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles_activation_line(&self) -> bool {
        self.top <= ACTIVATION_LINE && self.bottom >= ACTIVATION_LINE
    }
}

/// First section, in [`Section::ALL`] order, whose bounds straddle
/// [`ACTIVATION_LINE`]. `bounds` returns `None` for anchors missing from the
/// document, which never match.
pub fn active_section<F>(mut bounds: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    Section::ALL
        .into_iter()
        .find(|&section| bounds(section).is_some_and(|b| b.straddles_activation_line()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        let ids = Section::ALL.map(Section::anchor_id);
        assert_eq!(
            ids,
            [
                "about-section",
                "projects-section",
                "gallery-section",
                "contact-section"
            ]
        );
        for section in Section::ALL {
            assert_eq!(section.anchor_id(), format!("{}-section", section.name()));
            assert_eq!(section.label().to_lowercase(), section.name());
        }
        assert_eq!(Section::default(), Section::About);
    }

    #[test]
    fn test_straddle_edges() {
        assert!(SectionBounds::new(100.0, 100.0).straddles_activation_line());
        assert!(SectionBounds::new(-400.0, 100.0).straddles_activation_line());
        assert!(SectionBounds::new(0.0, 800.0).straddles_activation_line());
        assert!(!SectionBounds::new(100.5, 900.0).straddles_activation_line());
        assert!(!SectionBounds::new(-900.0, 99.9).straddles_activation_line());
    }

    #[test]
    fn test_scan_picks_match() {
        let found = active_section(|s| match s {
            Section::Projects => Some(SectionBounds::new(40.0, 700.0)),
            _ => Some(SectionBounds::new(800.0, 1600.0)),
        });
        assert_eq!(found, Some(Section::Projects));
    }

    #[test]
    fn test_scan_first_match_wins() {
        // overlapping boxes can both match; scan order decides
        let found = active_section(|s| match s {
            Section::Gallery | Section::Contact => Some(SectionBounds::new(0.0, 200.0)),
            _ => None,
        });
        assert_eq!(found, Some(Section::Gallery));
    }

    #[test]
    fn test_scan_skips_missing_anchors() {
        assert_eq!(active_section(|_| None), None);

        let mut visited = Vec::new();
        let found = active_section(|s| {
            visited.push(s);
            (s == Section::Contact).then(|| SectionBounds::new(-10.0, 300.0))
        });
        assert_eq!(found, Some(Section::Contact));
        assert_eq!(visited, Section::ALL.to_vec());
    }
}
