use content::SocialLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub links: Vec<SocialLink>,
}

fn icon_class(icon: &str) -> String {
    format!("fab fa-{} text-xl", icon.to_lowercase())
}

#[function_component(SocialLinks)]
pub fn social_links(props: &Props) -> Html {
    html! {
        <div class="flex items-center justify-center gap-4">
            { for props.links.iter().map(|link| html! {
                <a
                    key={link.label.clone()}
                    href={link.href.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-circle btn-ghost bg-base-200 hover:btn-primary transition-transform hover:-translate-y-0.5 hover:scale-110"
                    aria-label={link.label.clone()}
                >
                    <i class={icon_class(&link.icon)}></i>
                </a>
            })}
        </div>
    }
}
