use content::{stagger, Motion, TimelineEntry};
use yew::prelude::*;

use crate::components::motion::Reveal;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entry: TimelineEntry,
    pub index: usize,
    pub visible: bool,
}

/// Even entries sit on the right of the line on wide screens.
fn mirrored(index: usize) -> bool {
    index % 2 == 0
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &Props) -> Html {
    let entry = &props.entry;
    let mirrored = mirrored(props.index);
    let motion = Motion::rise().with_delay(stagger(0.5, props.index, 0.1));

    html! {
        <Reveal
            visible={props.visible}
            motion={motion}
            class={classes!("relative", "flex", "flex-col", "md:flex-row", "gap-8", mirrored.then_some("md:flex-row-reverse"))}
        >
            <div class={classes!("flex-1", mirrored.then_some("md:text-right"))}>
                <div class={classes!("ml-8", "md:ml-0", if mirrored { "md:mr-8" } else { "md:ml-8" })}>
                    <div class="card bg-base-100 shadow border border-base-300">
                        <div class="card-body p-6">
                            <div class={classes!("flex", "items-center", "gap-2", "text-primary", "mb-2", mirrored.then_some("md:justify-end"))}>
                                <i class="fas fa-calendar text-sm"></i>
                                <span class="text-sm font-medium">{&entry.period}</span>
                            </div>
                            <h4 class="text-xl font-bold mb-1">{&entry.role}</h4>
                            <div class={classes!("flex", "items-center", "gap-4", "text-base-content/60", "text-sm", "mb-3", mirrored.then_some("md:justify-end"))}>
                                <span class="flex items-center gap-1">
                                    <i class="fas fa-briefcase text-xs"></i>
                                    {&entry.organization}
                                </span>
                                <span class="flex items-center gap-1">
                                    <i class="fas fa-map-marker-alt text-xs"></i>
                                    {&entry.location}
                                </span>
                            </div>
                            <p class="text-base-content/70">{&entry.description}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute left-0 md:left-1/2 w-4 h-4 rounded-full bg-primary border-4 border-base-100 md:-translate-x-1/2 mt-6"></div>

            <div class="hidden md:block flex-1"></div>
        </Reveal>
    }
}
