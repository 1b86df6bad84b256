use web_sys::{HtmlInputElement, InputEvent};
use yew::{
    Callback, Html, Properties, TargetCast, UseStateHandle, function_component, html, use_memo,
};

use crate::models::read_config_from_head;

#[derive(Properties, PartialEq)]
pub struct BaseUrlFormProps {
    pub base_url: UseStateHandle<String>,
    pub on_load: Callback<String>,
}

#[function_component(BaseUrlForm)]
pub fn base_url_form(props: &BaseUrlFormProps) -> Html {
    let placeholder = use_memo((), |_| {
        read_config_from_head()
            .map(|cfg| cfg.default_api_base)
            .unwrap_or_else(|| "http://localhost:5002/api".to_string())
    });

    let on_input = {
        let base_url = props.base_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            base_url.set(input.value());
        })
    };

    let on_click = {
        let base_url = props.base_url.clone();
        let on_load = props.on_load.clone();
        Callback::from(move |_| {
            on_load.emit((*base_url).clone());
        })
    };

    html! {
        <div class="mb-3">
            <label class="form-label">{"API Base URL"}</label>
            <div class="input-group">
                <input
                    type="text"
                    class="form-control"
                    value={(*props.base_url).clone()}
                    oninput={on_input}
                    placeholder={(*placeholder).clone()}
                />
                <button
                    class="btn btn-primary"
                    type="button"
                    onclick={on_click}
                >
                    {"Load Posts"}
                </button>
            </div>
        </div>
    }
}
