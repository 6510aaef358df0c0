//! Card used by the category, listing, and blog grids.

use leptos::prelude::*;

/// A record card with a delete button and an optional open action on the
/// card body. `subtitle`, `image`, and `badge` render only when present.
#[component]
pub fn RecordCard(
    title: String,
    subtitle: Option<String>,
    image: Option<String>,
    badge: Option<String>,
    #[prop(optional)] selected: Option<Signal<bool>>,
    #[prop(optional)] on_open: Option<Callback<()>>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let is_selected = move || selected.is_some_and(|s| s.get());
    let delete_title = format!("Delete {title}");

    view! {
        <div
            class="record-card"
            class:record-card--selected=is_selected
            class:record-card--clickable=on_open.is_some()
            on:click=move |_| {
                if let Some(open) = on_open {
                    open.run(());
                }
            }
        >
            {image.map(|src| view! { <img class="record-card__image" src=src alt=""/> })}
            <div class="record-card__body">
                <span class="record-card__title">{title}</span>
                {badge.map(|b| view! { <span class="record-card__badge">{b}</span> })}
                {subtitle.map(|s| view! { <p class="record-card__subtitle">{s}</p> })}
            </div>
            <button
                class="btn btn--danger record-card__delete"
                title=delete_title
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(());
                }
            >
                "Delete"
            </button>
        </div>
    }
}
