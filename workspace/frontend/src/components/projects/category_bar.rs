use content::CategoryFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filters: Vec<CategoryFilter>,
    pub selected: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
}

#[function_component(CategoryBar)]
pub fn category_bar(props: &Props) -> Html {
    html! {
        <div class="flex flex-wrap justify-center gap-3" role="group" aria-label="Filter projects by category">
            { for props.filters.iter().map(|filter| {
                let filter = *filter;
                let active = filter == props.selected;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(filter))
                };

                html! {
                    <button
                        key={filter.label()}
                        type="button"
                        class={classes!("btn", "btn-sm", "rounded-full", "px-4", if active { "btn-primary" } else { "btn-ghost bg-base-200" })}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        {filter.label()}
                    </button>
                }
            })}
        </div>
    }
}
