//! Previous/next controls for client-side pagination.

use leptos::prelude::*;

#[component]
pub fn PagerControls(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button class="btn pager__button" disabled=move || page.get() <= 1 on:click=move |_| on_previous.run(())>
                "Previous"
            </button>
            <span class="pager__status">{move || format!("Page {} of {}", page.get(), page_count.get())}</span>
            <button
                class="btn pager__button"
                disabled=move || page.get() >= page_count.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
