//! Blog cards grid with create and delete.

use leptos::prelude::*;

use crate::components::blog_form::BlogForm;
use crate::components::notice::Notice;
use crate::components::pager_controls::PagerControls;
use crate::components::record_card::RecordCard;
use crate::config::BLOGS_PER_PAGE;
use crate::net::api::ApiClient;
use crate::net::types::{Blog, Record};
use crate::state::records::{CollectionState, RecordKind, confirm_delete_message, delete_notice};
use crate::util::browser::confirm;

#[component]
pub fn BlogsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let blogs = RwSignal::new(CollectionState::<Blog>::new(BLOGS_PER_PAGE));
    let notice = RwSignal::new(None::<String>);
    let show_create = RwSignal::new(false);

    let reload = Callback::new({
        let api = api.clone();
        move |()| {
            blogs.update(CollectionState::begin_load);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.list_blogs().await;
                blogs.update(|s| s.finish_load(result, None));
            });
        }
    });
    Effect::new(move || reload.run(()));

    let on_delete = Callback::new(move |blog: Blog| {
        let Some(key) = blog.key().map(str::to_owned) else {
            return;
        };
        if !confirm(&confirm_delete_message(blog.label())) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_record(&key).await;
            if result.is_ok() {
                blogs.update(|s| {
                    s.remove(&key);
                });
            }
            notice.set(Some(delete_notice(RecordKind::Blog, &result).to_owned()));
        });
    });

    let on_saved = Callback::new(move |()| {
        show_create.set(false);
        reload.run(());
    });
    let page = Signal::derive(move || blogs.with(|s| s.pager.page));
    let page_count = Signal::derive(move || blogs.with(|s| s.pager.page_count(s.items.len())));

    view! {
        <section class="blogs-page">
            <header class="section-header">
                <h1>"Blog Cards"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Add Blog"
                </button>
            </header>
            <Notice message=notice/>
            {move || {
                blogs.with(|s| {
                    if s.loading {
                        view! { <p class="section-status">"Loading blogs..."</p> }.into_any()
                    } else if let Some(error) = s.error.clone() {
                        view! { <p class="section-status section-status--error">{error}</p> }.into_any()
                    } else if s.items.is_empty() {
                        view! { <p class="section-status">"No blog cards yet."</p> }.into_any()
                    } else {
                        let cards = s
                            .page_items()
                            .into_iter()
                            .map(|blog| {
                                let title = blog.label().to_owned();
                                let subtitle = blog.description.clone();
                                let image = blog.image.clone();
                                let badge = blog.tag.clone().or_else(|| blog.date.clone());
                                view! {
                                    <RecordCard
                                        title=title
                                        subtitle=subtitle
                                        image=image
                                        badge=badge
                                        on_delete=Callback::new(move |()| on_delete.run(blog.clone()))
                                    />
                                }
                            })
                            .collect::<Vec<_>>();
                        view! { <div class="record-grid">{cards}</div> }.into_any()
                    }
                })
            }}
            <Show when=move || blogs.with(CollectionState::show_pager)>
                <PagerControls
                    page=page
                    page_count=page_count
                    on_previous=Callback::new(move |()| blogs.update(CollectionState::previous_page))
                    on_next=Callback::new(move |()| blogs.update(CollectionState::next_page))
                />
            </Show>
            <Show when=move || show_create.get()>
                <BlogForm on_saved=on_saved on_close=Callback::new(move |()| show_create.set(false))/>
            </Show>
        </section>
    }
}
