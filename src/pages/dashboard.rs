//! Authenticated dashboard layout: navbar, sidebar, and the routed section.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::config::LOGIN_PATH;
use crate::state::session::SessionStore;

/// Layout shared by every `/dashboard/*` route.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let sidebar_open = RwSignal::new(false);

    let on_menu = Callback::new(move |()| sidebar_open.update(|open| *open = !*open));
    let on_logout = Callback::new(move |()| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! {
        <div class="dashboard">
            <Navbar on_menu=on_menu on_logout=on_logout/>
            <div class="dashboard__body">
                <Sidebar open=sidebar_open/>
                <main class="dashboard__main">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
