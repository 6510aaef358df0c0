//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::config::{ClientConfig, DEFAULT_AUTHENTICATED_PATH, LOGIN_PATH};
use crate::net::api::ApiClient;
use crate::pages::{
    blogs::BlogsPage, categories::CategoriesPage, dashboard::DashboardLayout, login::LoginPage, signup::SignupPage,
    users::UsersPage,
};
use crate::state::session::SessionStore;
use crate::util::auth::{ProtectedRoute, PublicRoute};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store and bridges its broadcasts into a reactive signal
/// that the route guards and layout read.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::browser();
    let auth = RwSignal::new(session.state());
    let subscription = session.subscribe(move |state| auth.set(state.clone()));
    on_cleanup({
        let session = session.clone();
        move || session.unsubscribe(subscription)
    });

    let api = ApiClient::new(&ClientConfig::from_build_env(), session.clone());
    provide_context(session.clone());
    provide_context(auth);
    provide_context(api);

    // Storage is only readable after hydration; SSR keeps the pending state.
    Effect::new(move || {
        session.initialize();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=StaticSegment("login") view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }/>
                <Route path=StaticSegment("signup") view=|| view! { <PublicRoute><SignupPage/></PublicRoute> }/>
                <ParentRoute
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardLayout/></ProtectedRoute> }
                >
                    <Route path=StaticSegment("") view=CategoriesPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("cards") view=BlogsPage/>
                </ParentRoute>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_AUTHENTICATED_PATH/> }/>
            </Routes>
        </Router>
    }
}
