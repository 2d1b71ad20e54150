pub mod about;
pub mod hero;
pub mod motion;
pub mod projects;
pub mod section_header;
