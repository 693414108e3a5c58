use std::sync::Arc;

use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};

use super::dom::DocumentViewport;
use crate::view_state::ViewState;

type Release = Arc<dyn Fn() + Send + Sync>;

/// The window `scroll` and `mousemove` subscriptions feeding [`ViewState`].
/// Both are acquired in [`PageListeners::attach`] and dropped together in
/// [`PageListeners::release`].
pub struct PageListeners {
    scroll: Release,
    pointer: Release,
}

impl PageListeners {
    pub fn attach(state: RwSignal<ViewState>) -> Self {
        let scroll = use_event_listener_with_options(
            use_window(),
            ev::scroll,
            move |_| state.update(|s| s.on_scroll(&DocumentViewport)),
            UseEventListenerOptions::default().passive(true),
        );
        let pointer = use_event_listener(
            use_window(),
            ev::mousemove,
            move |e: web_sys::MouseEvent| {
                state.update(|s| s.on_pointer_move(e.client_x(), e.client_y()))
            },
        );
        log::debug!("page listeners attached");
        Self {
            scroll: Arc::new(scroll),
            pointer: Arc::new(pointer),
        }
    }

    /// Removes both listeners. leptos-use stops each one again when its owner
    /// is disposed; a second stop is a no-op.
    pub fn release(self) {
        (self.scroll)();
        (self.pointer)();
        log::debug!("page listeners released");
    }
}

/// Attaches the listener pair for the lifetime of the current reactive owner.
pub fn use_page_listeners(state: RwSignal<ViewState>) {
    let listeners = PageListeners::attach(state);
    on_cleanup(move || listeners.release());
}
