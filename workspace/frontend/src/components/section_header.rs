use content::{Motion, SectionHeader};
use yew::prelude::*;

use super::motion::Reveal;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub header: SectionHeader,
    pub visible: bool,
    #[prop_or(AttrValue::from("mb-16"))]
    pub spacing: AttrValue,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &Props) -> Html {
    html! {
        <Reveal
            visible={props.visible}
            motion={Motion::rise()}
            class={classes!("text-center", props.spacing.to_string())}
        >
            <span class="text-primary font-medium mb-4 block">{&props.header.eyebrow}</span>
            <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-6">{&props.header.heading}</h2>
            <p class="text-base-content/70 max-w-2xl mx-auto">{&props.header.intro}</p>
        </Reveal>
    }
}
