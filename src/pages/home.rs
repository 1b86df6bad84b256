use std::cell::Cell;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, POSTS_PER_PAGE};
use crate::components::*;
use crate::models::{CommentVisibility, Post, SortOrder, merge_pages, replace_comments};
use crate::storage;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let base_url = use_state(String::new);
    let posts = use_state(Vec::<Post>::new);
    let visibility = use_state(CommentVisibility::default);
    // Next page the feed would fetch; page 1 is always the full reload.
    let next_page = use_state(|| 2usize);
    let sort = use_state(SortOrder::default);
    let search_active = use_state(|| false);
    let inflight_more = use_mut_ref(|| Cell::new(false));

    // Full reload: persists the base URL, replaces the whole list, collapses
    // every comment panel. Deliberately unguarded; when two reloads overlap,
    // the last response rendered wins.
    let load_posts = {
        let base_url = base_url.clone();
        let posts = posts.clone();
        let visibility = visibility.clone();
        let next_page = next_page.clone();
        let sort = sort.clone();
        let search_active = search_active.clone();

        Callback::from(move |url: String| {
            let target = url.trim().to_string();
            if target.is_empty() {
                web_sys::console::error_1(&"No API base URL configured".into());
                return;
            }

            base_url.set(target.clone());
            storage::save_base_url(&target);

            let request_sort = *sort;
            let posts = posts.clone();
            let visibility = visibility.clone();
            let next_page = next_page.clone();
            let search_active = search_active.clone();

            spawn_local(async move {
                match api::fetch_posts(&target, 1, POSTS_PER_PAGE, &request_sort).await {
                    Ok(fetched) => {
                        posts.set(fetched);
                        visibility.set(CommentVisibility::default());
                        next_page.set(2);
                        search_active.set(false);
                    }
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            });
        })
    };

    // Startup: a previously saved base URL repopulates the input and loads
    // immediately; otherwise nothing happens until the user acts.
    {
        let base_url = base_url.clone();
        let load_posts = load_posts.clone();

        use_effect_with((), move |_| {
            if let Some(saved) = storage::load_base_url() {
                if !saved.trim().is_empty() {
                    base_url.set(saved.clone());
                    load_posts.emit(saved);
                }
            }
            || ()
        });
    }

    // Changing the sort order re-issues the listing once a base URL is set.
    {
        let base_url = base_url.clone();
        let load_posts = load_posts.clone();

        use_effect_with(*sort, move |_| {
            let current = (*base_url).clone();
            if !current.trim().is_empty() {
                load_posts.emit(current);
            }
            || ()
        });
    }

    // Paged fetch appending to the feed. Unlike the full reload this one is
    // guarded: a second click while a page is in flight is dropped.
    let load_more = {
        let base_url = base_url.clone();
        let posts = posts.clone();
        let next_page = next_page.clone();
        let sort = sort.clone();
        let inflight = inflight_more.clone();

        Callback::from(move |_| {
            if inflight.borrow().get() {
                return;
            }
            let target = (*base_url).trim().to_string();
            if target.is_empty() {
                return;
            }

            inflight.borrow().set(true);
            let page = *next_page;
            let request_sort = *sort;

            let posts = posts.clone();
            let next_page = next_page.clone();
            let inflight = inflight.clone();

            spawn_local(async move {
                match api::fetch_posts(&target, page, POSTS_PER_PAGE, &request_sort).await {
                    Ok(fetched) => {
                        let (merged, added) = merge_pages((*posts).clone(), fetched);
                        if added > 0 {
                            posts.set(merged);
                            next_page.set(page + 1);
                        }
                    }
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
                inflight.borrow().set(false);
            });
        })
    };

    let on_refresh = {
        let base_url = base_url.clone();
        let load_posts = load_posts.clone();
        Callback::from(move |_| load_posts.emit((*base_url).clone()))
    };

    let on_search_results = {
        let posts = posts.clone();
        let visibility = visibility.clone();
        let search_active = search_active.clone();

        Callback::from(move |results: Vec<Post>| {
            posts.set(results);
            visibility.set(CommentVisibility::default());
            search_active.set(true);
        })
    };

    let on_sort_change = {
        let sort = sort.clone();
        Callback::from(move |order: SortOrder| sort.set(order))
    };

    let on_toggle = {
        let visibility = visibility.clone();
        Callback::from(move |id: i64| {
            let mut updated = (*visibility).clone();
            updated.toggle(id);
            visibility.set(updated);
        })
    };

    let on_comments_updated = {
        let posts = posts.clone();
        Callback::from(move |(id, comments): (i64, Vec<String>)| {
            posts.set(replace_comments(&posts, id, &comments));
        })
    };

    html! {
        <div class="container my-4">
            <div class="row justify-content-center">
                <div class="col-lg-8">
                    <BaseUrlForm
                        base_url={base_url.clone()}
                        on_load={load_posts.clone()}
                    />

                    <NewPostForm
                        base_url={(*base_url).clone()}
                        on_created={on_refresh.clone()}
                    />

                    <SearchBar
                        base_url={(*base_url).clone()}
                        on_results={on_search_results}
                        on_clear={on_refresh.clone()}
                    />

                    <SortSelect
                        sort={*sort}
                        on_change={on_sort_change}
                    />

                    {
                        if *search_active && posts.is_empty() {
                            html! {
                                <p class="text-muted text-center my-4">{"No matching posts."}</p>
                            }
                        } else {
                            html! {}
                        }
                    }

                    {
                        posts.iter().map(|post| {
                            let expanded = visibility.is_expanded(post.id);
                            let toggle_label = visibility.label(post.id);
                            html! {
                                <PostCard
                                    key={post.id}
                                    post={post.clone()}
                                    base_url={(*base_url).clone()}
                                    expanded={expanded}
                                    toggle_label={toggle_label}
                                    on_toggle={on_toggle.clone()}
                                    on_deleted={on_refresh.clone()}
                                    on_updated={on_refresh.clone()}
                                    on_comments_updated={on_comments_updated.clone()}
                                />
                            }
                        }).collect::<Html>()
                    }

                    {
                        if !posts.is_empty() && !*search_active {
                            html! {
                                <div class="d-grid mb-4">
                                    <button
                                        class="btn btn-outline-primary"
                                        type="button"
                                        onclick={load_more}
                                    >
                                        {"Load More"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}
