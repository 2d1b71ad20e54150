use std::rc::Rc;

use content::SiteContent;
use yew::prelude::*;

/// Read-only site content shared with every section.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub content: Rc<SiteContent>,
}

#[derive(Properties, PartialEq)]
pub struct SiteProviderProps {
    pub content: Rc<SiteContent>,
    pub children: Children,
}

#[function_component(SiteProvider)]
pub fn site_provider(props: &SiteProviderProps) -> Html {
    let context = SiteContext {
        content: props.content.clone(),
    };

    html! {
        <ContextProvider<SiteContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SiteContext>>
    }
}

/// Site content from the nearest [`SiteProvider`], if any.
#[hook]
pub fn use_site_content() -> Option<Rc<SiteContent>> {
    use_context::<SiteContext>().map(|ctx| ctx.content)
}
