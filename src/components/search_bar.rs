use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::models::Post;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub base_url: String,
    pub on_results: Callback<Vec<Post>>,
    pub on_clear: Callback<()>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let title_query = use_state(String::new);
    let content_query = use_state(String::new);

    let on_title_input = {
        let title_query = title_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title_query.set(input.value());
        })
    };

    let on_content_input = {
        let content_query = content_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            content_query.set(input.value());
        })
    };

    let on_search = {
        let base_url = props.base_url.clone();
        let title_query = title_query.clone();
        let content_query = content_query.clone();
        let on_results = props.on_results.clone();
        let on_clear = props.on_clear.clone();

        Callback::from(move |_| {
            let Some(url) = api::search_url(&base_url, &title_query, &content_query) else {
                // Blank search falls back to the regular listing.
                on_clear.emit(());
                return;
            };

            let on_results = on_results.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_post_list(&url).await {
                    Ok(posts) => on_results.emit(posts),
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            });
        })
    };

    let on_reset = {
        let title_query = title_query.clone();
        let content_query = content_query.clone();
        let on_clear = props.on_clear.clone();

        Callback::from(move |_| {
            title_query.set(String::new());
            content_query.set(String::new());
            on_clear.emit(());
        })
    };

    html! {
        <div class="mb-3">
            <label class="form-label">{"Search Posts"}</label>
            <div class="input-group">
                <input
                    type="text"
                    class="form-control"
                    value={(*title_query).clone()}
                    oninput={on_title_input}
                    placeholder="Title contains..."
                />
                <input
                    type="text"
                    class="form-control"
                    value={(*content_query).clone()}
                    oninput={on_content_input}
                    placeholder="Content contains..."
                />
                <button class="btn btn-primary" type="button" onclick={on_search}>
                    {"Search"}
                </button>
                <button class="btn btn-outline-secondary" type="button" onclick={on_reset}>
                    {"Clear"}
                </button>
            </div>
        </div>
    }
}
