use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::{SortDirection, SortField, SortOrder};

#[derive(Properties, PartialEq)]
pub struct SortSelectProps {
    pub sort: SortOrder,
    pub on_change: Callback<SortOrder>,
}

#[function_component(SortSelect)]
pub fn sort_select(props: &SortSelectProps) -> Html {
    let on_field_change = {
        let sort = props.sort;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(SortOrder {
                field: SortField::from_query(&select.value()),
                ..sort
            });
        })
    };

    let on_direction_change = {
        let sort = props.sort;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(SortOrder {
                direction: SortDirection::from_query(&select.value()),
                ..sort
            });
        })
    };

    html! {
        <div class="mb-3">
            <label class="form-label">{"Sort"}</label>
            <div class="input-group">
                <select class="form-select" onchange={on_field_change}>
                    <option value="" selected={props.sort.field.is_none()}>
                        {"-- Unsorted --"}
                    </option>
                    <option value="title" selected={props.sort.field == Some(SortField::Title)}>
                        {"Title"}
                    </option>
                    <option value="content" selected={props.sort.field == Some(SortField::Content)}>
                        {"Content"}
                    </option>
                </select>
                <select
                    class="form-select"
                    onchange={on_direction_change}
                    disabled={props.sort.field.is_none()}
                >
                    <option value="asc" selected={props.sort.direction == SortDirection::Asc}>
                        {"Ascending"}
                    </option>
                    <option value="desc" selected={props.sort.direction == SortDirection::Desc}>
                        {"Descending"}
                    </option>
                </select>
            </div>
        </div>
    }
}
