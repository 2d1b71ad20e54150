use content::ProjectRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub project: ProjectRecord,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &Props) -> Html {
    let project = &props.project;

    html! {
        <article class="card bg-base-100 border border-base-300 shadow hover:shadow-lg transition-shadow duration-300 overflow-hidden group h-full">
            <figure class="relative aspect-video overflow-hidden">
                <img
                    src={project.image_url.clone()}
                    alt={project.title.clone()}
                    loading="lazy"
                    class="object-cover w-full h-full transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 flex items-center justify-center gap-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300 bg-base-100/50 backdrop-blur-sm">
                    <a
                        href={project.repository_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-circle bg-base-100 hover:btn-primary"
                        aria-label={format!("{} source code", project.title)}
                    >
                        <i class="fab fa-github text-lg"></i>
                    </a>
                    if project.has_demo() {
                        <a
                            href={project.demo_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-circle bg-base-100 hover:btn-primary"
                            aria-label={format!("{} live demo", project.title)}
                        >
                            <i class="fas fa-external-link-alt text-lg"></i>
                        </a>
                    }
                </div>
            </figure>

            <div class="card-body p-6">
                <span class="text-xs font-medium text-primary uppercase tracking-wider">
                    {project.category.label()}
                </span>
                <h3 class="card-title text-xl group-hover:text-primary transition-colors">{&project.title}</h3>
                <p class="text-base-content/70 text-sm line-clamp-2">{&project.description}</p>
                <div class="flex flex-wrap gap-2 mt-2">
                    { for project.technologies.iter().map(|tech| html! {
                        <span key={tech.clone()} class="badge badge-ghost badge-sm">{tech}</span>
                    })}
                </div>
            </div>
        </article>
    }
}
