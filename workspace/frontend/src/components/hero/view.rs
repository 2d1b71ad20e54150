use std::rc::Rc;

use content::{Motion, SiteContent};
use yew::prelude::*;

use super::floating_shapes::FloatingShapes;
use super::social_links::SocialLinks;
use crate::components::motion::Reveal;
use crate::hooks::use_shown_after_mount;

/// Time the initial pose stays on screen before the hero starts its reveal.
const INITIAL_POSE_DELAY_MS: u32 = 50;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: Rc<SiteContent>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &Props) -> Html {
    log::trace!("HeroSection rendering");
    let profile = &props.content.profile;

    // Hero content animates on mount rather than on viewport entry.
    let shown = use_shown_after_mount(INITIAL_POSE_DELAY_MS);

    html! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            <FloatingShapes shapes={props.content.floating_shapes.clone()} />

            <div class="container mx-auto px-4 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <Reveal visible={shown} motion={Motion::rise()} class="mb-8">
                        <span class="badge badge-lg gap-2 py-4 px-4 bg-base-200 border-none">
                            <span class="relative flex h-2 w-2">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-primary opacity-75"></span>
                                <span class="relative inline-flex rounded-full h-2 w-2 bg-primary"></span>
                            </span>
                            <span class="text-sm text-base-content/70">{&profile.availability}</span>
                        </span>
                    </Reveal>

                    <Reveal visible={shown} motion={Motion::rise().with_delay(0.1)} class="mb-6">
                        <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold tracking-tight">
                            {"Hi, I'm "}
                            <span class="text-primary">{&profile.name}</span>
                            <br />
                            <span class="text-base-content/70">{&profile.headline}</span>
                        </h1>
                    </Reveal>

                    <Reveal visible={shown} motion={Motion::rise().with_delay(0.2)} class="mb-10">
                        <p class="text-lg md:text-xl text-base-content/70 max-w-2xl mx-auto">
                            {&profile.tagline}
                        </p>
                    </Reveal>

                    <Reveal
                        visible={shown}
                        motion={Motion::rise().with_delay(0.3)}
                        class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12"
                    >
                        <a href={profile.contact_href.clone()} class="btn btn-primary btn-lg rounded-full px-8 group">
                            {"Let's Talk"}
                            <span class="ml-2 inline-block transition-transform group-hover:translate-x-1">{"→"}</span>
                        </a>
                        <a href={profile.resume_href.clone()} download="" class="btn btn-outline btn-lg rounded-full px-8 group">
                            <i class="fas fa-download mr-2 group-hover:animate-bounce"></i>
                            {"Download CV"}
                        </a>
                    </Reveal>

                    <Reveal visible={shown} motion={Motion::rise().with_delay(0.4)}>
                        <SocialLinks links={props.content.social_links.clone()} />
                    </Reveal>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <Reveal visible={shown} motion={Motion::fade().with_delay(1.0).with_duration(1.0)}>
                    <div class="flex flex-col items-center gap-2 text-base-content/60 animate-bounce">
                        <span class="text-sm">{"Scroll to explore"}</span>
                        <i class="fas fa-arrow-down"></i>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
