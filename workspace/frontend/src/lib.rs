use std::rc::Rc;

use content::SiteContent;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod common;
pub mod hooks;
pub mod router;
pub mod settings;

use common::error::ErrorDisplay;
use common::site_context::SiteProvider;
use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    // Parsed once per mount of the root component, i.e. once per page load.
    let content = use_memo((), |_| SiteContent::embedded().map(Rc::new));

    match &*content {
        Ok(content) => html! {
            <SiteProvider content={content.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </SiteProvider>
        },
        Err(err) => {
            log::error!("Failed to load site content: {}", err);
            html! { <ErrorDisplay title={"Unable to load this page"} message={err.to_string()} /> }
        }
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Portfolio Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);
    log::debug!("Animations enabled: {}", settings.animations_enabled);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
