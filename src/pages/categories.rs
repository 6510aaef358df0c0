//! Categories screen: category grid, per-category listings, and the edit
//! sidebar.
//!
//! DESIGN
//! ======
//! The selection is stored as a record key and the selected category is
//! derived from the collection, so a refetch after an edit or a new listing
//! shows fresh data without re-selecting. Listings are paginated separately
//! and the listing pager resets whenever the selection changes.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;

use crate::components::category_form::CategoryForm;
use crate::components::listing_form::ListingForm;
use crate::components::notice::Notice;
use crate::components::pager_controls::PagerControls;
use crate::components::record_card::RecordCard;
use crate::config::{CATEGORIES_PER_PAGE, LISTINGS_PER_PAGE};
use crate::net::api::ApiClient;
use crate::net::types::{Category, Listing, Record};
use crate::state::records::{CollectionState, RecordKind, confirm_delete_message, delete_notice};
use crate::util::browser::confirm;
use crate::util::pagination::Pager;

/// Listing count shown on a category card; the server's `count` wins when present.
fn listing_count(category: &Category) -> usize {
    category.count.and_then(|n| usize::try_from(n).ok()).unwrap_or(category.listings.len())
}

fn listing_badge(category: &Category) -> String {
    match listing_count(category) {
        1 => "1 listing".to_owned(),
        n => format!("{n} listings"),
    }
}

/// Drop a deleted listing from its category. Returns whether anything changed.
fn remove_listing(state: &mut CollectionState<Category>, category_key: &str, listing_key: &str) -> bool {
    let Some(category) = state.items.iter_mut().find(|c| c.key() == Some(category_key)) else {
        return false;
    };
    let before = category.listings.len();
    category.listings.retain(|l| l.key() != Some(listing_key));
    let removed = category.listings.len() != before;
    if removed {
        if let Some(count) = category.count.as_mut() {
            *count = count.saturating_sub(1);
        }
    }
    removed
}

#[derive(Clone, Debug)]
enum DeleteTarget {
    Category(Category),
    Listing { category_key: String, listing: Listing },
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let categories = RwSignal::new(CollectionState::<Category>::new(CATEGORIES_PER_PAGE));
    let selected_key = RwSignal::new(None::<String>);
    let listing_pager = RwSignal::new(Pager::new(LISTINGS_PER_PAGE));
    let show_create_category = RwSignal::new(false);
    let show_create_listing = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let selected = Memo::new(move |_| {
        let key = selected_key.get()?;
        categories.with(|s| s.find(&key).cloned())
    });

    let reload = Callback::new({
        let api = api.clone();
        move |()| {
            categories.update(CollectionState::begin_load);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.list_categories().await;
                categories.update(|s| s.finish_load(result, None));
                if let Some(len) = selected.with_untracked(|c| c.as_ref().map(|c| c.listings.len())) {
                    listing_pager.update(|p| p.clamp(len));
                }
            });
        }
    });
    Effect::new(move || reload.run(()));

    let select = Callback::new(move |key: Option<String>| {
        listing_pager.update(Pager::reset);
        show_create_listing.set(false);
        selected_key.set(key);
    });

    let on_delete = Callback::new(move |target: DeleteTarget| {
        let (key, label, kind) = match &target {
            DeleteTarget::Category(category) => (category.key(), category.label(), RecordKind::Category),
            DeleteTarget::Listing { listing, .. } => (listing.key(), listing.label(), RecordKind::Listing),
        };
        let Some(key) = key.map(str::to_owned) else {
            return;
        };
        if !confirm(&confirm_delete_message(label)) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_record(&key).await;
            if result.is_ok() {
                match target {
                    DeleteTarget::Category(_) => {
                        categories.update(|s| {
                            s.remove(&key);
                        });
                        if selected_key.get_untracked().as_deref() == Some(key.as_str()) {
                            select.run(None);
                        }
                    }
                    DeleteTarget::Listing { category_key, .. } => {
                        categories.update(|s| {
                            remove_listing(s, &category_key, &key);
                        });
                        if let Some(len) = selected.with_untracked(|c| c.as_ref().map(|c| c.listings.len())) {
                            listing_pager.update(|p| p.clamp(len));
                        }
                    }
                }
            }
            notice.set(Some(delete_notice(kind, &result).to_owned()));
        });
    });

    let on_category_created = Callback::new(move |()| {
        show_create_category.set(false);
        reload.run(());
    });

    let category_page = Signal::derive(move || categories.with(|s| s.pager.page));
    let category_page_count = Signal::derive(move || categories.with(|s| s.pager.page_count(s.items.len())));
    let listing_page = Signal::derive(move || listing_pager.with(|p| p.page));
    let listing_page_count = Signal::derive(move || {
        let len = selected.with(|c| c.as_ref().map_or(0, |c| c.listings.len()));
        listing_pager.with(|p| p.page_count(len))
    });

    let category_grid = move || {
        categories.with(|s| {
            if s.loading && s.items.is_empty() {
                view! { <p class="section-status">"Loading categories..."</p> }.into_any()
            } else if let Some(error) = s.error.clone() {
                view! { <p class="section-status section-status--error">{error}</p> }.into_any()
            } else if s.items.is_empty() {
                view! { <p class="section-status">"No categories yet."</p> }.into_any()
            } else {
                let cards = s
                    .page_items()
                    .into_iter()
                    .map(|category| {
                        let key = category.key().map(str::to_owned);
                        let is_selected = {
                            let key = key.clone();
                            Signal::derive(move || key.is_some() && selected_key.get() == key)
                        };
                        let title = category.label().to_owned();
                        let subtitle = category.description.clone();
                        let image = category.image.clone();
                        let badge = listing_badge(&category);
                        view! {
                            <RecordCard
                                title=title
                                subtitle=subtitle
                                image=image
                                badge=Some(badge)
                                selected=is_selected
                                on_open=Callback::new(move |()| select.run(key.clone()))
                                on_delete=Callback::new(move |()| on_delete.run(DeleteTarget::Category(category.clone())))
                            />
                        }
                    })
                    .collect::<Vec<_>>();
                view! { <div class="record-grid">{cards}</div> }.into_any()
            }
        })
    };

    let listings_panel = move |category: Category| {
        let category_key = category.key().unwrap_or_default().to_owned();
        let page_listings = listing_pager.with(|p| p.slice(&category.listings).to_vec());
        let cards = page_listings
            .into_iter()
            .map(|listing| {
                let title = listing.label().to_owned();
                let subtitle = listing.description.clone();
                let image = listing.images.first().cloned();
                let badge = listing.location.clone();
                let category_key = category_key.clone();
                view! {
                    <RecordCard
                        title=title
                        subtitle=subtitle
                        image=image
                        badge=badge
                        on_delete=Callback::new(move |()| {
                            on_delete.run(DeleteTarget::Listing {
                                category_key: category_key.clone(),
                                listing: listing.clone(),
                            })
                        })
                    />
                }
            })
            .collect::<Vec<_>>();
        let is_empty = cards.is_empty();
        let paginated = listing_pager.with(|p| p.is_paginated(category.listings.len()));

        view! {
            <div class="listings-panel">
                <header class="section-header">
                    <button class="btn" on:click=move |_| select.run(None)>
                        "\u{2190} All Categories"
                    </button>
                    <h2>{category.label().to_owned()} " Listings"</h2>
                    <button class="btn btn--primary" on:click=move |_| show_create_listing.set(true)>
                        "+ Add Listing"
                    </button>
                </header>
                {is_empty.then(|| view! { <p class="section-status">"No listings in this category yet."</p> })}
                <div class="record-grid">{cards}</div>
                {paginated
                    .then(|| {
                        view! {
                            <PagerControls
                                page=listing_page
                                page_count=listing_page_count
                                on_previous=Callback::new(move |()| listing_pager.update(Pager::previous))
                                on_next=Callback::new(move |()| {
                                    let len = selected.with_untracked(|c| c.as_ref().map_or(0, |c| c.listings.len()));
                                    listing_pager.update(|p| p.next(len));
                                })
                            />
                        }
                    })}
            </div>
        }
    };

    view! {
        <section class="categories-page">
            <header class="section-header">
                <h1>"Categories"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create_category.set(true)>
                    "+ Add Category"
                </button>
            </header>
            <Notice message=notice/>
            <div class="categories-page__layout">
                <div class="categories-page__content">
                    {move || match selected.get() {
                        Some(category) => listings_panel(category).into_any(),
                        None => {
                            view! {
                                {category_grid}
                                <Show when=move || categories.with(CollectionState::show_pager)>
                                    <PagerControls
                                        page=category_page
                                        page_count=category_page_count
                                        on_previous=Callback::new(move |()| {
                                            categories.update(CollectionState::previous_page)
                                        })
                                        on_next=Callback::new(move |()| categories.update(CollectionState::next_page))
                                    />
                                </Show>
                            }
                                .into_any()
                        }
                    }}
                </div>
                {move || {
                    selected
                        .get()
                        .map(|category| {
                            view! {
                                <aside class="edit-sidebar">
                                    <CategoryForm
                                        editing=category
                                        on_saved=reload
                                        on_close=Callback::new(move |()| select.run(None))
                                    />
                                </aside>
                            }
                        })
                }}
            </div>
            <Show when=move || show_create_category.get()>
                <div class="dialog-backdrop" on:click=move |_| show_create_category.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <CategoryForm
                            on_saved=on_category_created
                            on_close=Callback::new(move |()| show_create_category.set(false))
                        />
                    </div>
                </div>
            </Show>
            {move || {
                let category_name = selected.with_untracked(|c| c.as_ref().and_then(|c| c.name.clone()));
                (show_create_listing.get())
                    .then(|| {
                        view! {
                            <ListingForm
                                category_name=category_name.unwrap_or_default()
                                on_saved=reload
                                on_close=Callback::new(move |()| show_create_listing.set(false))
                            />
                        }
                    })
            }}
        </section>
    }
}
