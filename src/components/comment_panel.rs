use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::models::{CommentPayload, normalize_comment};

#[derive(Properties, PartialEq)]
pub struct CommentPanelProps {
    pub post_id: i64,
    pub comments: Vec<String>,
    pub base_url: String,
    pub visible: bool,
    pub on_comments_updated: Callback<(i64, Vec<String>)>,
}

#[function_component(CommentPanel)]
pub fn comment_panel(props: &CommentPanelProps) -> Html {
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let base_url = props.base_url.clone();
        let post_id = props.post_id;
        let draft = draft.clone();
        let on_comments_updated = props.on_comments_updated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(comment) = normalize_comment(&draft) else {
                web_sys::console::error_1(&"Comment cannot be empty".into());
                return;
            };

            let payload = CommentPayload { comment };
            let base_url = base_url.clone();
            let draft = draft.clone();
            let on_comments_updated = on_comments_updated.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::create_comment(&base_url, post_id, &payload).await {
                    Ok(post) => {
                        draft.set(String::new());
                        on_comments_updated.emit((post_id, post.comments));
                    }
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            });
        })
    };

    let style = if props.visible {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <div class="border-top mt-3 pt-3" style={style}>
            <h3 class="h6">{"Comments"}</h3>
            {
                if props.comments.is_empty() {
                    html! { <p class="text-muted small">{"No comments yet."}</p> }
                } else {
                    props.comments.iter().map(|comment| {
                        html! { <p class="mb-1">{ comment }</p> }
                    }).collect::<Html>()
                }
            }
            <form onsubmit={onsubmit} class="mt-2">
                <div class="input-group">
                    <input
                        type="text"
                        class="form-control"
                        value={(*draft).clone()}
                        oninput={on_input}
                        placeholder="Add a comment"
                    />
                    <button class="btn btn-outline-primary" type="submit">
                        {"Submit Comment"}
                    </button>
                </div>
            </form>
        </div>
    }
}
