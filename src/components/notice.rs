//! Dismissible status banner for delete/save outcomes.

use leptos::prelude::*;

#[component]
pub fn Notice(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="notice" role="status">
                    <span class="notice__text">{text}</span>
                    <button class="notice__close" title="Dismiss" on:click=move |_| message.set(None)>
                        "\u{00d7}"
                    </button>
                </div>
            }
        })
    }
}
