use content::Motion;
use yew::prelude::*;

use crate::settings::get_settings;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Latched visibility of the owning section.
    pub visible: bool,
    pub motion: Motion,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a one-shot reveal transition that starts when
/// `visible` becomes true.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let style = if get_settings().animations_enabled {
        props.motion.style(props.visible)
    } else {
        props.motion.settled_style()
    };

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
