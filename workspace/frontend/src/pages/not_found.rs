use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6">
            <h1 class="text-5xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary rounded-full">
                {"Back to the portfolio"}
            </Link<Route>>
        </div>
    }
}
