mod timeline_item;
mod view;

pub use view::AboutSection;
