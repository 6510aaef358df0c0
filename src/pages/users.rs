//! Registered users table.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::pager_controls::PagerControls;
use crate::config::USERS_PER_PAGE;
use crate::net::api::ApiClient;
use crate::net::types::{AdminUser, Record};
use crate::state::records::CollectionState;

const FETCH_ERROR_PREFIX: &str = "Error fetching users";

/// Cell text, with "N/A" for missing or blank values.
fn cell(value: Option<&str>) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("N/A").to_owned()
}

/// `(name, email, referral)` columns for one user.
fn user_row(user: &AdminUser) -> (String, String, String) {
    (cell(Some(user.label())), cell(user.email.as_deref()), cell(user.referral.as_deref()))
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let users = RwSignal::new(CollectionState::<AdminUser>::new(USERS_PER_PAGE));

    Effect::new(move || {
        users.update(CollectionState::begin_load);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.list_users().await;
            users.update(|s| s.finish_load(result, Some(FETCH_ERROR_PREFIX)));
        });
    });

    let page = Signal::derive(move || users.with(|s| s.pager.page));
    let page_count = Signal::derive(move || users.with(|s| s.pager.page_count(s.items.len())));

    view! {
        <section class="users-page">
            <header class="section-header">
                <h1>"Users"</h1>
            </header>
            {move || {
                users.with(|s| {
                    if s.loading {
                        view! { <p class="section-status">"Loading users..."</p> }.into_any()
                    } else if let Some(error) = s.error.clone() {
                        view! { <p class="section-status section-status--error">{error}</p> }.into_any()
                    } else if s.items.is_empty() {
                        view! { <p class="section-status">"No users found."</p> }.into_any()
                    } else {
                        let rows = s
                            .page_items()
                            .iter()
                            .map(|user| {
                                let (name, email, referral) = user_row(user);
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td>{email}</td>
                                        <td>{referral}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <table class="users-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Referral"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        }
                            .into_any()
                    }
                })
            }}
            <Show when=move || users.with(CollectionState::show_pager)>
                <PagerControls
                    page=page
                    page_count=page_count
                    on_previous=Callback::new(move |()| users.update(CollectionState::previous_page))
                    on_next=Callback::new(move |()| users.update(CollectionState::next_page))
                />
            </Show>
        </section>
    }
}
