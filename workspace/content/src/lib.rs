//! Static portfolio content and the small amount of logic the sections share.
//!
//! Everything here is browser-independent so the frontend can stay a thin
//! rendering layer and the rules (category filtering, the visibility latch,
//! reveal timing) can be tested on the host.

mod error;
mod filter;
mod latch;
mod model;
mod motion;
mod site;

pub use error::{ContentError, Result};
pub use filter::{CategoryFilter, available_filters, filter_projects};
pub use latch::{ObserveOptions, VisibilityLatch};
pub use model::{
    AboutContent, Category, FloatingShape, Profile, ProjectRecord, SectionHeader, SocialLink,
    TimelineEntry,
};
pub use motion::{Motion, Pose, stagger};
pub use site::SiteContent;
