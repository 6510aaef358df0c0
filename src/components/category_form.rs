//! Create/edit form for a category.
//!
//! The same form backs the "Add Category" modal and the edit sidebar; an
//! `editing` record switches it to `PUT /admin/edit-category/{id}`.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::form::CategoryDraft;
use crate::net::types::{Category, Record};
use crate::util::browser::picked_file;

#[component]
pub fn CategoryForm(
    #[prop(optional)] editing: Option<Category>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let edit_id = editing.as_ref().and_then(|c| c.key().map(str::to_owned));
    let heading = if editing.is_some() { "Edit Category" } else { "Add Category" };
    let submit_label = if editing.is_some() { "Save Changes" } else { "Create Category" };

    let name = RwSignal::new(editing.as_ref().and_then(|c| c.name.clone()).unwrap_or_default());
    let description = RwSignal::new(editing.as_ref().and_then(|c| c.description.clone()).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let image_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = CategoryDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            image: picked_file(image_ref),
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let edit_id = edit_id.clone();
        leptos::task::spawn_local(async move {
            let result = match edit_id {
                Some(id) => api.update_category(&id, draft).await,
                None => api.create_category(draft).await,
            };
            busy.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <header class="record-form__header">
                <h2>{heading}</h2>
                <button type="button" class="record-form__close" title="Close" on:click=move |_| on_close.run(())>
                    "\u{00d7}"
                </button>
            </header>
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
                "Image"
                <input class="record-form__input" type="file" accept="image/*" node_ref=image_ref/>
            </label>
            {move || error.get().map(|e| view! { <p class="record-form__error">{e}</p> })}
            <div class="record-form__actions">
                <button type="button" class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { submit_label }}
                </button>
            </div>
        </form>
    }
}
