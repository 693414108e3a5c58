use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::section::SectionBounds;
use crate::view_state::{ViewState, Viewport, ViewportError};

/// [`Viewport`] backed by the live browser document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentViewport;

fn find_anchor(anchor_id: &str) -> Result<Element, ViewportError> {
    document()
        .get_element_by_id(anchor_id)
        .ok_or_else(|| ViewportError::MissingAnchor(anchor_id.to_string()))
}

impl Viewport for DocumentViewport {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn anchor_bounds(&self, anchor_id: &str) -> Result<SectionBounds, ViewportError> {
        let rect = find_anchor(anchor_id)?.get_bounding_client_rect();
        Ok(SectionBounds::new(rect.top(), rect.bottom()))
    }

    fn scroll_into_view(&self, anchor_id: &str) -> Result<(), ViewportError> {
        let el = find_anchor(anchor_id)?;
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }
}

/// Click handler body shared by every button that jumps to a section.
pub fn navigate_to(state: RwSignal<ViewState>, anchor_id: &str) {
    state.update(|s| s.scroll_to(&DocumentViewport, anchor_id));
}
