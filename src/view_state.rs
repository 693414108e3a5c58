use thiserror::Error;

use crate::section::{active_section, Section, SectionBounds};

/// Vertical scroll offset past which the navigation bar switches style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    #[error("no element with id `{0}`")]
    MissingAnchor(String),
}

/// Layout queries the page state needs from its host document.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;
    fn anchor_bounds(&self, anchor_id: &str) -> Result<SectionBounds, ViewportError>;
    /// Smooth-scroll the anchor into view.
    fn scroll_into_view(&self, anchor_id: &str) -> Result<(), ViewportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub menu_open: bool,
    pub active_section: Section,
    pub scrolled: bool,
    pub pointer: Pointer,
}

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

impl ViewState {
    pub fn on_scroll<V: Viewport + ?Sized>(&mut self, viewport: &V) {
        self.scrolled = is_scrolled(viewport.scroll_offset());
        let current = active_section(|s| viewport.anchor_bounds(s.anchor_id()).ok());
        if let Some(section) = current {
            self.active_section = section;
        }
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        self.pointer = Pointer { x, y };
    }

    /// Scrolls to `anchor_id` and closes the mobile menu. An unknown anchor
    /// leaves everything untouched.
    pub fn scroll_to<V: Viewport + ?Sized>(&mut self, viewport: &V, anchor_id: &str) {
        if viewport.scroll_into_view(anchor_id).is_ok() {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Inline style for the pointer-following background layer.
    pub fn gradient_style(&self) -> String {
        let Pointer { x, y } = self.pointer;
        format!(
            "background: radial-gradient(600px circle at {x}px {y}px, rgba(16, 185, 129, 0.15), transparent 40%)"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeViewport {
        offset: f64,
        boxes: HashMap<&'static str, SectionBounds>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn with_all_sections() -> Self {
            let mut vp = Self::default();
            for (i, section) in Section::ALL.into_iter().enumerate() {
                let top = 1000.0 + 1000.0 * i as f64;
                vp.boxes
                    .insert(section.anchor_id(), SectionBounds::new(top, top + 900.0));
            }
            vp
        }

        fn set_bounds(&mut self, section: Section, top: f64, bottom: f64) {
            self.boxes
                .insert(section.anchor_id(), SectionBounds::new(top, bottom));
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn anchor_bounds(&self, anchor_id: &str) -> Result<SectionBounds, ViewportError> {
            self.boxes
                .get(anchor_id)
                .copied()
                .ok_or_else(|| ViewportError::MissingAnchor(anchor_id.to_string()))
        }

        fn scroll_into_view(&self, anchor_id: &str) -> Result<(), ViewportError> {
            if !self.boxes.contains_key(anchor_id) {
                return Err(ViewportError::MissingAnchor(anchor_id.to_string()));
            }
            self.scrolled_to.borrow_mut().push(anchor_id.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert!(!state.menu_open);
        assert!(!state.scrolled);
        assert_eq!(state.active_section, Section::About);
        assert_eq!(state.pointer, Pointer { x: 0, y: 0 });
    }

    #[test]
    fn test_scroll_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(50.5));

        let mut vp = FakeViewport::default();
        let mut state = ViewState::default();
        vp.offset = 51.0;
        state.on_scroll(&vp);
        assert!(state.scrolled);
        // no hysteresis on the way back
        vp.offset = 50.0;
        state.on_scroll(&vp);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_active_section_sticks_without_match() {
        let mut vp = FakeViewport::with_all_sections();
        vp.set_bounds(Section::Projects, 20.0, 900.0);
        vp.offset = 1200.0;

        let mut state = ViewState::default();
        state.on_scroll(&vp);
        assert_eq!(state.active_section, Section::Projects);

        // gap between sections: nothing straddles the activation line
        vp.set_bounds(Section::Projects, -900.0, 40.0);
        vp.set_bounds(Section::Gallery, 160.0, 1000.0);
        state.on_scroll(&vp);
        assert_eq!(state.active_section, Section::Projects);

        vp.set_bounds(Section::Gallery, 90.0, 1000.0);
        state.on_scroll(&vp);
        assert_eq!(state.active_section, Section::Gallery);
    }

    #[test]
    fn test_scroll_with_missing_anchors() {
        let mut vp = FakeViewport::default();
        vp.set_bounds(Section::Contact, 0.0, 400.0);
        vp.offset = 4000.0;

        let mut state = ViewState::default();
        state.on_scroll(&vp);
        assert_eq!(state.active_section, Section::Contact);
        assert!(state.scrolled);
    }

    #[test]
    fn test_pointer_recorded_verbatim() {
        let mut state = ViewState::default();
        state.on_pointer_move(-5, 12000);
        assert_eq!(state.pointer, Pointer { x: -5, y: 12000 });
        state.on_pointer_move(320, 48);
        assert_eq!(state.pointer, Pointer { x: 320, y: 48 });
        assert!(!state.menu_open);
        assert!(!state.scrolled);
        assert!(state
            .gradient_style()
            .contains("radial-gradient(600px circle at 320px 48px"));
    }

    #[test]
    fn test_scroll_to_closes_menu() {
        let vp = FakeViewport::with_all_sections();
        for section in Section::ALL {
            for menu_open in [true, false] {
                let mut state = ViewState {
                    menu_open,
                    ..ViewState::default()
                };
                state.scroll_to(&vp, section.anchor_id());
                assert!(!state.menu_open);
            }
        }
        assert_eq!(vp.scrolled_to.borrow().len(), 8);
        assert_eq!(vp.scrolled_to.borrow()[0], "about-section");
    }

    #[test]
    fn test_scroll_to_unknown_anchor_is_noop() {
        let vp = FakeViewport::with_all_sections();
        let before = ViewState {
            menu_open: true,
            active_section: Section::Gallery,
            scrolled: true,
            pointer: Pointer { x: 3, y: 4 },
        };
        let mut state = before;
        state.scroll_to(&vp, "resume-section");
        assert_eq!(state, before);
        assert!(vp.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        for start in [true, false] {
            let mut state = ViewState {
                menu_open: start,
                ..ViewState::default()
            };
            state.toggle_menu();
            assert_eq!(state.menu_open, !start);
            state.toggle_menu();
            assert_eq!(state.menu_open, start);
        }
    }

    #[test]
    fn test_viewport_error_message() {
        let err = ViewportError::MissingAnchor("nope".to_string());
        assert_eq!(err.to_string(), "no element with id `nope`");
    }
}
