use std::rc::Rc;

use content::{
    available_filters, filter_projects, stagger, CategoryFilter, Motion, ObserveOptions,
    SiteContent,
};
use yew::prelude::*;

use super::category_bar::CategoryBar;
use super::project_card::ProjectCard;
use crate::components::motion::Reveal;
use crate::components::section_header::SectionHeading;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: Rc<SiteContent>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &Props) -> Html {
    log::trace!("ProjectsSection rendering");
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), ObserveOptions::default());
    let selected = use_state_eq(CategoryFilter::default);

    let projects = &props.content.projects;
    let filters = available_filters(projects);
    let filtered = filter_projects(projects, *selected);

    log::debug!(
        "ProjectsSection state: category={}, showing {} of {} projects",
        selected.label(),
        filtered.len(),
        projects.len()
    );

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |filter: CategoryFilter| {
            log::info!("Project category selected: {}", filter.label());
            selected.set(filter);
        })
    };

    let on_view_all = {
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(CategoryFilter::All))
    };

    html! {
        <section id="projects" class="py-24 md:py-32 bg-base-200/30" ref={node}>
            <div class="container mx-auto px-4">
                <SectionHeading header={props.content.projects_header.clone()} visible={visible} spacing="mb-12" />

                <Reveal visible={visible} motion={Motion::rise().with_delay(0.1)} class="mb-12">
                    <CategoryBar filters={filters} selected={*selected} on_select={on_select} />
                </Reveal>

                if filtered.is_empty() {
                    <div class="text-center py-8">
                        <p class="text-base-content/60">{format!("No {} projects yet.", selected.label())}</p>
                    </div>
                } else {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        { for filtered.iter().enumerate().map(|(index, project)| html! {
                            <Reveal
                                key={project.id}
                                visible={visible}
                                motion={Motion::rise().with_delay(stagger(0.2, index, 0.1))}
                                class={classes!(project.featured.then_some("md:col-span-2 lg:col-span-1"))}
                            >
                                <ProjectCard project={(*project).clone()} />
                            </Reveal>
                        })}
                    </div>
                }

                <Reveal visible={visible} motion={Motion::rise().with_delay(0.6)} class="text-center mt-12">
                    <button type="button" class="btn btn-outline btn-lg rounded-full group" onclick={on_view_all}>
                        {"View All Projects"}
                        <i class="fas fa-arrow-right ml-2 transition-transform group-hover:translate-x-1"></i>
                    </button>
                </Reveal>
            </div>
        </section>
    }
}
