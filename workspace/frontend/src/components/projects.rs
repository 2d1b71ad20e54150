mod category_bar;
mod project_card;
mod view;

pub use view::ProjectsSection;
