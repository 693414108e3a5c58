use leptos::prelude::*;

use super::dom::navigate_to;
use crate::content::full_name;
use crate::section::Section;
use crate::view_state::ViewState;

const NAV_BASE: &str = "fixed top-0 w-full z-50 transition-all duration-500";
const NAV_SCROLLED: &str = "bg-stone-950/80 backdrop-blur-xl border-b border-emerald-500/10";
const NAV_TOP: &str = "bg-transparent";

const ITEM_BASE: &str = "px-4 py-2 text-sm font-medium rounded-lg transition-all duration-300";
const ITEM_ACTIVE: &str = "text-emerald-400 bg-emerald-500/10";
const ITEM_IDLE: &str = "text-stone-400 hover:text-white hover:bg-white/5";

#[component]
pub fn NavBar(state: RwSignal<ViewState>) -> impl IntoView {
    let scrolled = Memo::new(move |_| state.with(|s| s.scrolled));
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open));
    let active = Memo::new(move |_| state.with(|s| s.active_section));

    view! {
        <nav class=move || {
            format!("{NAV_BASE} {}", if scrolled.get() { NAV_SCROLLED } else { NAV_TOP })
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-6">
                    <div class="text-2xl font-bold bg-gradient-to-r from-white to-emerald-400 bg-clip-text text-transparent">
                        {full_name()}
                    </div>
                    <div class="hidden md:flex items-center space-x-1" data-menu="desktop">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        data-section=section.name()
                                        class=move || {
                                            let look = if active.get() == section {
                                                ITEM_ACTIVE
                                            } else {
                                                ITEM_IDLE
                                            };
                                            format!("{ITEM_BASE} {look}")
                                        }
                                        on:click=move |_| navigate_to(state, section.anchor_id())
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden text-white p-2 hover:bg-white/5 rounded-lg transition-colors"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| state.update(ViewState::toggle_menu)
                    >
                        <i class=move || {
                            if menu_open.get() { "extra-close text-2xl" } else { "extra-menu text-2xl" }
                        } />
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <MobileMenu state />
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn MobileMenu(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div class="md:hidden pb-4 space-y-2" data-menu="mobile">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class="block w-full text-left py-3 px-4 text-stone-400 hover:text-white hover:bg-white/5 rounded-lg transition-colors"
                            on:click=move |_| navigate_to(state, section.anchor_id())
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
