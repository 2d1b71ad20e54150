use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or(AttrValue::from("Something went wrong"))]
    pub title: AttrValue,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen py-12 gap-4">
            <div class="alert alert-error max-w-lg" role="alert">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{&props.title}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
        </div>
    }
}
