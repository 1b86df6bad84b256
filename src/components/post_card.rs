use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::components::CommentPanel;
use crate::models::{Post, PostUpdate};

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
    pub base_url: String,
    pub expanded: bool,
    pub toggle_label: &'static str,
    pub on_toggle: Callback<i64>,
    pub on_deleted: Callback<()>,
    pub on_updated: Callback<()>,
    pub on_comments_updated: Callback<(i64, Vec<String>)>,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;

    let editing = use_state(|| false);
    let edit_title = use_state(String::new);
    let edit_content = use_state(String::new);

    let on_delete = {
        let base_url = props.base_url.clone();
        let id = post.id;
        let on_deleted = props.on_deleted.clone();

        Callback::from(move |_| {
            let base_url = base_url.clone();
            let on_deleted = on_deleted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_post(&base_url, id).await {
                    Ok(()) => on_deleted.emit(()),
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            });
        })
    };

    let on_toggle = {
        let id = post.id;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(id))
    };

    let on_edit = {
        let editing = editing.clone();
        let edit_title = edit_title.clone();
        let edit_content = edit_content.clone();
        let title = post.title.clone();
        let content = post.content.clone();

        Callback::from(move |_| {
            edit_title.set(title.clone());
            edit_content.set(content.clone());
            editing.set(true);
        })
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };

    let on_edit_title = {
        let edit_title = edit_title.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit_title.set(input.value());
        })
    };

    let on_edit_content = {
        let edit_content = edit_content.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            edit_content.set(input.value());
        })
    };

    let on_save = {
        let base_url = props.base_url.clone();
        let id = post.id;
        let editing = editing.clone();
        let edit_title = edit_title.clone();
        let edit_content = edit_content.clone();
        let on_updated = props.on_updated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = PostUpdate {
                title: (*edit_title).clone(),
                content: (*edit_content).clone(),
            };

            let base_url = base_url.clone();
            let editing = editing.clone();
            let on_updated = on_updated.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::update_post(&base_url, id, &payload).await {
                    Ok(_) => {
                        editing.set(false);
                        on_updated.emit(());
                    }
                    Err(e) => web_sys::console::error_1(&e.into()),
                }
            });
        })
    };

    html! {
        <div class="card shadow-sm mb-3">
            <div class="card-body">
                {
                    if *editing {
                        html! {
                            <form onsubmit={on_save}>
                                <div class="mb-2">
                                    <input
                                        type="text"
                                        class="form-control"
                                        value={(*edit_title).clone()}
                                        onchange={on_edit_title}
                                    />
                                </div>
                                <div class="mb-2">
                                    <textarea
                                        class="form-control"
                                        rows="3"
                                        value={(*edit_content).clone()}
                                        onchange={on_edit_content}
                                    />
                                </div>
                                <div class="d-flex gap-2">
                                    <button class="btn btn-sm btn-success" type="submit">
                                        {"Save"}
                                    </button>
                                    <button
                                        class="btn btn-sm btn-outline-secondary"
                                        type="button"
                                        onclick={on_cancel_edit}
                                    >
                                        {"Cancel"}
                                    </button>
                                </div>
                            </form>
                        }
                    } else {
                        html! {
                            <>
                                <h2 class="card-title h4">{ &post.title }</h2>
                                <p class="card-text">{ &post.content }</p>
                                <div class="d-flex gap-2">
                                    <button
                                        class="btn btn-sm btn-danger"
                                        type="button"
                                        onclick={on_delete}
                                    >
                                        {"Delete"}
                                    </button>
                                    <button
                                        class="btn btn-sm btn-outline-primary"
                                        type="button"
                                        onclick={on_toggle}
                                    >
                                        { props.toggle_label }
                                    </button>
                                    <button
                                        class="btn btn-sm btn-outline-secondary"
                                        type="button"
                                        onclick={on_edit}
                                    >
                                        {"Edit"}
                                    </button>
                                </div>
                            </>
                        }
                    }
                }

                <CommentPanel
                    post_id={post.id}
                    comments={post.comments.clone()}
                    base_url={props.base_url.clone()}
                    visible={props.expanded}
                    on_comments_updated={props.on_comments_updated.clone()}
                />
            </div>
        </div>
    }
}
