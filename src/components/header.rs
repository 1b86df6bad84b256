use yew::{Html, function_component, html};

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <nav class="navbar bg-body-tertiary border flex-nowrap">
            <div class="container-fluid d-flex align-items-center gap-3 flex-nowrap">
                <a class="navbar-brand text-nowrap" href="/">
                    {"Masterblog"}
                </a>
                <span class="navbar-text text-muted small ms-auto">
                    {"Posts & comments over the masterblog API"}
                </span>
            </div>
        </nav>
    }
}
