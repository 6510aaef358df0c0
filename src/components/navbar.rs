//! Top bar for the dashboard layout: menu toggle, title, and logout.

use leptos::prelude::*;

/// Dashboard navbar.
///
/// `on_menu` toggles the sidebar on narrow screens; `on_logout` ends the
/// session (the route guard then redirects to `/login`).
#[component]
pub fn Navbar(on_menu: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="navbar">
            <button class="navbar__menu" title="Toggle menu" on:click=move |_| on_menu.run(())>
                "\u{2630}"
            </button>
            <span class="navbar__title">"Admin Dashboard"</span>
            <span class="navbar__spacer"></span>
            <button class="btn navbar__logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </header>
    }
}
