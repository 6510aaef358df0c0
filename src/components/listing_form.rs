//! Create form for a listing under one category.
//!
//! On success the created listing is summarized in place, the parent is told
//! to refetch, and the form closes itself after a short delay.

#[cfg(test)]
#[path = "listing_form_test.rs"]
mod listing_form_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::form::ListingDraft;
use crate::net::types::{Listing, Record};
use crate::util::browser::picked_file;

#[cfg(feature = "hydrate")]
const SUCCESS_CLOSE_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

/// Cancellation flag for the delayed close. Cancelled when the form unmounts
/// so a pending timer cannot close a form opened later.
#[derive(Clone, Debug, Default)]
struct CloseTimer(Arc<AtomicBool>);

impl CloseTimer {
    fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[component]
pub fn ListingForm(category_name: String, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let referral_link = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let created = RwSignal::new(None::<Listing>);
    let image_ref = NodeRef::<leptos::html::Input>::new();
    let heading = format!("Add Listing to {category_name}");
    let close_timer = CloseTimer::default();
    on_cleanup({
        let close_timer = close_timer.clone();
        move || close_timer.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || created.with_untracked(Option::is_some) {
            return;
        }
        let draft = ListingDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            referral_link: referral_link.get_untracked(),
            image: picked_file(image_ref),
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let category_name = category_name.clone();
        let close_timer = close_timer.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_listing(&category_name, draft).await;
            busy.set(false);
            match result {
                Ok(listing) => {
                    created.set(Some(listing));
                    on_saved.run(());
                    #[cfg(feature = "hydrate")]
                    gloo_timers::future::sleep(SUCCESS_CLOSE_DELAY).await;
                    if !close_timer.is_cancelled() {
                        on_close.run(());
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog record-form" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>{heading}</h2>
                {move || {
                    created.get().map(|listing| {
                        let title = listing.label().to_owned();
                        view! {
                            <div class="record-form__success">
                                <p>"Listing created successfully!"</p>
                                <p><strong>{title}</strong></p>
                                {listing.description.map(|d| view! { <p>{d}</p> })}
                                {listing.location.map(|l| view! { <p>"Location: " {l}</p> })}
                                {listing.referral_link.map(|r| view! { <p>"Referral: " {r}</p> })}
                            </div>
                        }
                    })
                }}
                <label class="record-form__label">
                    "Name"
                    <input
                        class="record-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="record-form__label">
                    "Description"
                    <textarea
                        class="record-form__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="record-form__label">
                    "Location"
                    <input
                        class="record-form__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="record-form__label">
                    "Referral Link"
                    <input
                        class="record-form__input"
                        type="url"
                        prop:value=move || referral_link.get()
                        on:input=move |ev| referral_link.set(event_target_value(&ev))
                    />
                </label>
                <label class="record-form__label">
                    "Image"
                    <input class="record-form__input" type="file" accept="image/*" node_ref=image_ref/>
                </label>
                {move || error.get().map(|e| view! { <p class="record-form__error">{e}</p> })}
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Add Listing" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
