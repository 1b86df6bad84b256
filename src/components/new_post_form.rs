use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::models::NewPost;

#[derive(Properties, PartialEq)]
pub struct NewPostFormProps {
    pub base_url: String,
    pub on_created: Callback<()>,
}

#[function_component(NewPostForm)]
pub fn new_post_form(props: &NewPostFormProps) -> Html {
    let title = use_state(String::new);
    let content = use_state(String::new);

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_content_change = {
        let content = content.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(input.value());
        })
    };

    let onsubmit = {
        let base_url = props.base_url.clone();
        let title = title.clone();
        let content = content.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Whatever the server accepts is accepted; validation is its job.
            let payload = NewPost {
                title: (*title).clone(),
                content: (*content).clone(),
            };

            let base_url = base_url.clone();
            let title = title.clone();
            let content = content.clone();
            let on_created = on_created.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::create_post(&base_url, &payload).await {
                    Ok(_) => {
                        title.set(String::new());
                        content.set(String::new());
                        on_created.emit(());
                    }
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            });
        })
    };

    html! {
        <div class="card shadow-sm mb-4">
            <div class="card-body">
                <h2 class="card-title h5 mb-3">{"Add a Post"}</h2>
                <form onsubmit={onsubmit}>
                    <div class="mb-3">
                        <label class="form-label">{"Title"}</label>
                        <input
                            type="text"
                            class="form-control"
                            value={(*title).clone()}
                            onchange={on_title_change}
                            placeholder="Post title"
                        />
                    </div>
                    <div class="mb-3">
                        <label class="form-label">{"Content"}</label>
                        <textarea
                            class="form-control"
                            rows="3"
                            value={(*content).clone()}
                            onchange={on_content_change}
                            placeholder="Write something..."
                        />
                    </div>
                    <button class="btn btn-success" type="submit">
                        {"Add Post"}
                    </button>
                </form>
            </div>
        </div>
    }
}
