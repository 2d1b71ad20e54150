use content::FloatingShape;
use stylist::GlobalStyle;
use yew::prelude::*;

use crate::settings::get_settings;

const FLOAT_KEYFRAMES: &str = r#"
@keyframes hero-float {
    0%, 100% { transform: translateY(0) scale(1); }
    50% { transform: translateY(-30px) scale(1.1); }
}
.hero-float {
    animation: hero-float 8s ease-in-out infinite;
}
"#;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub shapes: Vec<FloatingShape>,
}

fn shape_style(shape: &FloatingShape, animated: bool) -> String {
    let mut style = format!(
        "width:{size}px;height:{size}px;left:{};top:{}",
        shape.x,
        shape.y,
        size = shape.size_px
    );
    if animated {
        style.push_str(&format!(";animation-delay:{}s", shape.delay_s));
    }
    style
}

/// Blurred circles drifting behind the hero content.
#[function_component(FloatingShapes)]
pub fn floating_shapes(props: &Props) -> Html {
    let animated = get_settings().animations_enabled;

    use_effect_with(animated, |animated| {
        let style = if *animated {
            match GlobalStyle::new(FLOAT_KEYFRAMES) {
                Ok(style) => Some(style),
                Err(err) => {
                    log::error!("Failed to register hero animation styles: {}", err);
                    None
                }
            }
        } else {
            None
        };
        move || {
            if let Some(style) = style {
                style.unregister();
            }
        }
    });

    html! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            { for props.shapes.iter().enumerate().map(|(index, shape)| html! {
                <div
                    key={index}
                    class={classes!("absolute", "rounded-full", "bg-primary/5", "blur-3xl", animated.then_some("hero-float"))}
                    style={shape_style(shape, animated)}
                />
            })}
        </div>
    }
}
