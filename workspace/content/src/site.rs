use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, error, info, instrument};

use crate::error::{ContentError, Result};
use crate::model::{
    AboutContent, FloatingShape, Profile, ProjectRecord, SectionHeader, SocialLink, TimelineEntry,
};

const EMBEDDED_SITE: &str = include_str!("../content/site.yaml");

/// Everything the page renders, loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub floating_shapes: Vec<FloatingShape>,
    pub about: AboutContent,
    /// Rendered in declaration order.
    pub timeline: Vec<TimelineEntry>,
    pub projects_header: SectionHeader,
    pub projects: Vec<ProjectRecord>,
}

impl SiteContent {
    /// Parses and validates the content bundled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_SITE)
    }

    #[instrument(skip(source), fields(bytes = source.len()))]
    pub fn from_yaml(source: &str) -> Result<Self> {
        let content: SiteContent = serde_yaml::from_str(source).map_err(|err| {
            error!("Failed to parse site content: {}", err);
            ContentError::from(err)
        })?;
        content.validate()?;
        info!(
            "Loaded site content: {} timeline entries, {} projects",
            content.timeline.len(),
            content.projects.len()
        );
        Ok(content)
    }

    /// Checks the invariants the sections rely on.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    entity: format!("project {}", project.id),
                    field: "title",
                });
            }
        }

        for (index, entry) in self.timeline.iter().enumerate() {
            if entry.period.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    entity: format!("timeline entry {}", index),
                    field: "period",
                });
            }
            if entry.role.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    entity: format!("timeline entry {}", index),
                    field: "role",
                });
            }
        }

        debug!("Site content validated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CategoryFilter, available_filters, filter_projects};
    use crate::model::Category;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();

        assert_eq!(content.profile.name, "Alex Chen");
        assert_eq!(content.social_links.len(), 3);
        assert_eq!(content.floating_shapes.len(), 4);
        assert_eq!(content.about.traits.len(), 4);
        assert_eq!(content.projects.len(), 6);
    }

    #[test]
    fn test_timeline_keeps_declaration_order() {
        let content = SiteContent::embedded().unwrap();

        let periods: Vec<&str> = content.timeline.iter().map(|e| e.period.as_str()).collect();

        assert_eq!(
            periods,
            vec!["2023 - Present", "2021 - 2023", "2019 - 2021", "2015 - 2019"]
        );
    }

    #[test]
    fn test_embedded_filters() {
        let content = SiteContent::embedded().unwrap();

        let web_apps: Vec<u32> = filter_projects(&content.projects, Category::WebApp.into())
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(web_apps, vec![1, 2, 6]);

        let labels: Vec<&str> = available_filters(&content.projects)
            .iter()
            .map(CategoryFilter::label)
            .collect();
        assert_eq!(labels, vec!["All", "Web App", "Mobile", "Design", "Open Source"]);
    }

    const MINIMAL: &str = r##"
profile:
  name: Sam
  headline: Engineer
  tagline: Builds things
  availability: Available
  contact_href: "#contact"
  resume_href: /cv.pdf
about:
  eyebrow: About
  heading: Me
  intro: Hello
  avatar: ":)"
  paragraphs: [One]
timeline:
  - { period: "2020", role: Dev, organization: Co, location: Here, description: Work }
projects_header: { eyebrow: Work, heading: Projects, intro: Stuff }
projects:
  - { id: 1, title: A, description: a, image_url: /a.png, category: Mobile, technologies: [], repository_url: /a }
  - { id: 1, title: B, description: b, image_url: /b.png, category: Design, technologies: [], repository_url: /b }
"##;

    #[test]
    fn test_duplicate_project_id_rejected() {
        let result = SiteContent::from_yaml(MINIMAL);

        assert!(matches!(result, Err(ContentError::DuplicateProjectId(1))));
    }

    #[test]
    fn test_empty_timeline_role_rejected() {
        let source = MINIMAL
            .replace("role: Dev", "role: \"\"")
            .replace("id: 1, title: B", "id: 2, title: B");

        let result = SiteContent::from_yaml(&source);

        assert!(matches!(
            result,
            Err(ContentError::EmptyField { field: "role", .. })
        ));
    }

    #[test]
    fn test_optional_sections_default() {
        let source = MINIMAL.replace("id: 1, title: B", "id: 2, title: B");

        let content = SiteContent::from_yaml(&source).unwrap();

        assert!(content.social_links.is_empty());
        assert!(content.floating_shapes.is_empty());
        assert!(content.about.traits.is_empty());
        assert!(!content.projects[0].has_demo());
    }

    #[test]
    fn test_fragment_href_is_kept() {
        let source = MINIMAL.replace("id: 1, title: B", "id: 2, title: B");

        let content = SiteContent::from_yaml(&source).unwrap();

        assert_eq!(content.profile.contact_href, "#contact");
        assert_eq!(content.about.avatar, ":)");
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let result = SiteContent::from_yaml("profile: [unclosed");

        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}
