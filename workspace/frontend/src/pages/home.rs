use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::site_context::use_site_content;
use crate::components::about::AboutSection;
use crate::components::hero::HeroSection;
use crate::components::projects::ProjectsSection;

/// The single-page portfolio: hero, about and projects, in that order.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let Some(content) = use_site_content() else {
        return html! { <ErrorDisplay message={"Site content is not available"} /> };
    };

    html! {
        <main>
            <HeroSection content={content.clone()} />
            <AboutSection content={content.clone()} />
            <ProjectsSection content={content} />
        </main>
    }
}
