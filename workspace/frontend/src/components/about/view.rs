use std::rc::Rc;

use content::{Motion, ObserveOptions, SiteContent};
use yew::prelude::*;

use super::timeline_item::TimelineItem;
use crate::components::motion::Reveal;
use crate::components::section_header::SectionHeading;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: Rc<SiteContent>,
}

#[function_component(AboutSection)]
pub fn about_section(props: &Props) -> Html {
    log::trace!("AboutSection rendering");
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), ObserveOptions::default());
    let about = &props.content.about;

    html! {
        <section id="about" class="py-24 md:py-32" ref={node}>
            <div class="container mx-auto px-4">
                <SectionHeading header={about.header()} visible={visible} />

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16 items-start mb-20">
                    <Reveal visible={visible} motion={Motion::slide_from_left().with_delay(0.2)} class="space-y-6">
                        <div class="aspect-square max-w-md mx-auto lg:mx-0 rounded-3xl overflow-hidden bg-gradient-to-br from-primary/20 to-primary/5 flex items-center justify-center">
                            <div class="text-8xl" role="img" aria-label={about.heading.clone()}>{&about.avatar}</div>
                        </div>
                    </Reveal>

                    <Reveal visible={visible} motion={Motion::slide_from_right().with_delay(0.3)} class="space-y-6">
                        { for about.paragraphs.iter().map(|paragraph| html! {
                            <p class="text-lg text-base-content/70 leading-relaxed">{paragraph}</p>
                        })}
                        <div class="flex flex-wrap gap-3 pt-4">
                            { for about.traits.iter().map(|trait_name| html! {
                                <span key={trait_name.clone()} class="badge badge-outline badge-lg">{trait_name}</span>
                            })}
                        </div>
                    </Reveal>
                </div>

                <Reveal visible={visible} motion={Motion::rise().with_delay(0.4)}>
                    <h3 class="text-2xl font-bold text-center mb-12">{"Experience & Education"}</h3>
                    <div class="relative">
                        <div class="absolute left-0 md:left-1/2 top-0 bottom-0 w-px bg-base-300 md:-translate-x-1/2"></div>
                        <div class="space-y-12">
                            { for props.content.timeline.iter().enumerate().map(|(index, entry)| html! {
                                <TimelineItem key={index} entry={entry.clone()} index={index} visible={visible} />
                            })}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
