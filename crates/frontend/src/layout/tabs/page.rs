//! TabPage: shows or hides one tab's content depending on the active tab

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content once through the registry; switching tabs only toggles
/// the `tabs__item--hidden` class, so form state survives.
#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        tabs_store
            .active
            .with(|active| active.as_ref() == Some(&tab_key_for_active_check))
    };

    log!("TabPage created: '{}'", tab_key);
    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("TabPage destroyed: '{}'", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
