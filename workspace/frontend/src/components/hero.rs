mod floating_shapes;
mod social_links;
mod view;

pub use view::HeroSection;
