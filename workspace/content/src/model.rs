use serde::{Deserialize, Serialize};
use std::fmt;

/// Project category. The set is closed; labels are what the filter bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Web App")]
    WebApp,
    #[serde(rename = "Mobile")]
    Mobile,
    #[serde(rename = "Design")]
    Design,
    #[serde(rename = "Open Source")]
    OpenSource,
}

impl Category {
    /// Every category in filter-bar order.
    pub const ALL: [Category; 4] = [
        Category::WebApp,
        Category::Mobile,
        Category::Design,
        Category::OpenSource,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::WebApp => "Web App",
            Category::Mobile => "Mobile",
            Category::Design => "Design",
            Category::OpenSource => "Open Source",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the experience and education timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub organization: String,
    pub location: String,
    pub description: String,
}

/// A project shown in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: Category,
    pub technologies: Vec<String>,
    pub repository_url: String,
    /// Empty when the project has no live demo.
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub featured: bool,
}

impl ProjectRecord {
    pub fn has_demo(&self) -> bool {
        !self.demo_url.trim().is_empty()
    }
}

/// Hero banner text and call-to-action targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub availability: String,
    pub contact_href: String,
    pub resume_href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// Icon key, e.g. `github`
    pub icon: String,
}

/// Decorative blurred circle behind the hero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloatingShape {
    pub size_px: u32,
    /// CSS left offset, e.g. `10%`
    pub x: String,
    /// CSS top offset
    pub y: String,
    pub delay_s: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionHeader {
    pub eyebrow: String,
    pub heading: String,
    pub intro: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AboutContent {
    pub eyebrow: String,
    pub heading: String,
    pub intro: String,
    pub avatar: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl AboutContent {
    pub fn header(&self) -> SectionHeader {
        SectionHeader {
            eyebrow: self.eyebrow.clone(),
            heading: self.heading.clone(),
            intro: self.intro.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_label() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = serde_json::from_str::<Category>("\"Discord Bot\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_project_demo_defaults_to_empty() {
        let json = r#"{
            "id": 9,
            "title": "CLI",
            "description": "A tool",
            "image_url": "/cli.png",
            "category": "Open Source",
            "technologies": ["Rust"],
            "repository_url": "https://github.com"
        }"#;
        let project: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(!project.has_demo());
        assert!(!project.featured);
        assert_eq!(project.category, Category::OpenSource);
    }
}
