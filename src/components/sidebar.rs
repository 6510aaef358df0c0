//! Dashboard side navigation.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Sidebar entries as `(label, href)`.
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("Categories", "/dashboard/categories"),
    ("Blog Cards", "/dashboard/cards"),
    ("Users", "/dashboard/users"),
];

/// Href of the entry to highlight for `path`. The dashboard index shows
/// categories, so it highlights that entry.
pub fn active_href(path: &str) -> Option<&'static str> {
    let path = path.trim_end_matches('/');
    if path == "/dashboard" {
        return Some(NAV_ITEMS[0].1);
    }
    NAV_ITEMS.iter().map(|(_, href)| *href).find(|href| path == *href)
}

#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="sidebar" class:sidebar--open=move || open.get()>
            {NAV_ITEMS
                .iter()
                .map(|(label, href)| {
                    let href = *href;
                    let active = move || pathname.with(|p| active_href(p) == Some(href));
                    view! {
                        <a
                            class="sidebar__link"
                            class:sidebar__link--active=active
                            href=href
                            on:click=move |_| open.set(false)
                        >
                            {*label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
