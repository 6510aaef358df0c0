//! Create form for a blog card.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::form::BlogDraft;
use crate::util::browser::picked_file;

#[component]
pub fn BlogForm(on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let tag = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let image_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = BlogDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            tag: tag.get_untracked(),
            date: date.get_untracked(),
            image: picked_file(image_ref),
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_blog(draft).await;
            busy.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog record-form" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Add Blog Card"</h2>
                <label class="record-form__label">
                    "Title"
                    <input
                        class="record-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
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
                    "Tag"
                    <input
                        class="record-form__input"
                        type="text"
                        prop:value=move || tag.get()
                        on:input=move |ev| tag.set(event_target_value(&ev))
                    />
                </label>
                <label class="record-form__label">
                    "Date"
                    <input
                        class="record-form__input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
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
                        {move || if busy.get() { "Saving..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
