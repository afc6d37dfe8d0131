use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::particles::{DEFAULT_PARTICLES, MAX_PARTICLES, MIN_PARTICLES};
use crate::view_state::{LinkGroup, Section};

const PROFILE_FILE: &str = "profile.json";

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::load().unwrap_or_else(|e| {
        log::error!("couldn't load {PROFILE_FILE}, using built-in profile: {e}");
        Profile::fallback()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile content not found: {0}")]
    NotFound(String),
    #[error("couldn't parse profile content: {0}")]
    Parse(String),
}

/// Pictograms a link or project can carry, drawn as inline 24x24 stroke SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Coffee,
    Mail,
    Briefcase,
    Link,
    Globe,
    ExternalLink,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Github,
        Icon::Linkedin,
        Icon::Twitter,
        Icon::Instagram,
        Icon::Coffee,
        Icon::Mail,
        Icon::Briefcase,
        Icon::Link,
        Icon::Globe,
        Icon::ExternalLink,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Instagram => "instagram",
            Icon::Coffee => "coffee",
            Icon::Mail => "mail",
            Icon::Briefcase => "briefcase",
            Icon::Link => "link",
            Icon::Globe => "globe",
            Icon::ExternalLink => "external-link",
        }
    }

    /// Path data for a `0 0 24 24` viewBox.
    pub fn path(self) -> &'static str {
        match self {
            Icon::Github => "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2",
            Icon::Linkedin => "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            Icon::Twitter => "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            Icon::Instagram => "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01",
            Icon::Coffee => "M17 8h1a4 4 0 1 1 0 8h-1M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4zM6 2v2M10 2v2M14 2v2",
            Icon::Mail => "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6",
            Icon::Briefcase => "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            Icon::Link => "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71",
            Icon::Globe => "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            Icon::ExternalLink => "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub icon: Icon,
    pub url: String,
    pub label: String,
    /// Gradient classes painted behind the link.
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: Icon,
}

/// Where following a link lands: the current tab or a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    SameContext,
    NewContext,
}

impl LinkTarget {
    /// Absolute web URLs leave the page in a new tab; `mailto:`, fragments
    /// and site-relative paths stay put.
    pub fn for_url(url: &str) -> Self {
        let lower = url.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
        {
            Self::NewContext
        } else {
            Self::SameContext
        }
    }

    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::NewContext => Some("_blank"),
            Self::SameContext => None,
        }
    }

    pub fn rel(self) -> Option<&'static str> {
        match self {
            Self::NewContext => Some("noopener noreferrer"),
            Self::SameContext => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLabels {
    pub profile: String,
    pub portfolio: String,
    pub contact: String,
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self {
            profile: "Profile".to_string(),
            portfolio: "Portfolio".to_string(),
            contact: "Contact".to_string(),
        }
    }
}

impl SectionLabels {
    pub fn label(&self, section: Section) -> &str {
        match section {
            Section::Profile => &self.profile,
            Section::Portfolio => &self.portfolio,
            Section::Contact => &self.contact,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_particle_count() -> usize {
    DEFAULT_PARTICLES
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub avatar: String,
    #[serde(default)]
    pub avatar_alt: String,
    #[serde(default)]
    pub sections: SectionLabels,
    #[serde(default)]
    pub portfolio_heading: String,
    #[serde(default)]
    pub contact_heading: String,
    pub social_links: Vec<LinkEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub contact_options: Vec<LinkEntry>,
    #[serde(default = "default_true")]
    pub theme_toggle: bool,
    #[serde(default = "default_particle_count")]
    particle_count: usize,
}

/// What the page shows for one section, borrowed from the profile tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionContent<'a> {
    Profile(&'a [LinkEntry]),
    Portfolio(&'a [ProjectEntry]),
    Contact(&'a [LinkEntry]),
}

impl SectionContent<'_> {
    /// The hoverable link group on display, if the section lists links.
    pub fn link_group(&self) -> Option<LinkGroup> {
        match self {
            SectionContent::Profile(_) => Some(LinkGroup::Social),
            SectionContent::Contact(_) => Some(LinkGroup::Contact),
            SectionContent::Portfolio(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SectionContent::Profile(links) | SectionContent::Contact(links) => links.len(),
            SectionContent::Portfolio(projects) => projects.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Profile {
    pub fn load() -> Result<Self, ProfileError> {
        let file = Content::get(PROFILE_FILE)
            .ok_or_else(|| ProfileError::NotFound(PROFILE_FILE.to_string()))?;
        let text =
            std::str::from_utf8(&file.data).map_err(|e| ProfileError::Parse(e.to_string()))?;
        Self::from_json(text)
    }

    pub fn from_json(text: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(text).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    /// Minimal profile shown when the embedded content can't be read.
    pub fn fallback() -> Self {
        Self {
            name: "Profile".to_string(),
            tagline: String::new(),
            avatar: "/profile.png".to_string(),
            avatar_alt: "Profile".to_string(),
            sections: SectionLabels::default(),
            portfolio_heading: String::new(),
            contact_heading: String::new(),
            social_links: Vec::new(),
            projects: Vec::new(),
            contact_options: Vec::new(),
            theme_toggle: true,
            particle_count: DEFAULT_PARTICLES,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count.clamp(MIN_PARTICLES, MAX_PARTICLES)
    }

    pub fn links(&self, group: LinkGroup) -> &[LinkEntry] {
        match group {
            LinkGroup::Social => &self.social_links,
            LinkGroup::Contact => &self.contact_options,
        }
    }

    pub fn content(&self, section: Section) -> SectionContent<'_> {
        match section {
            Section::Profile => SectionContent::Profile(&self.social_links),
            Section::Portfolio => SectionContent::Portfolio(&self.projects),
            Section::Contact => SectionContent::Contact(&self.contact_options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_loads() {
        let profile = Profile::load().expect("embedded profile should parse");
        assert!(!profile.name.is_empty());
        assert_eq!(profile.social_links.len(), 6);
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.contact_options.len(), 1);
        assert!(profile.contact_options[0].url.starts_with("mailto:"));
    }

    #[test]
    fn test_embedded_links_keep_declaration_order() {
        let profile = Profile::load().expect("embedded profile should parse");
        let labels = profile
            .social_links
            .iter()
            .map(|l| l.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "GitHub",
                "LinkedIn",
                "Twitter",
                "Instagram",
                "Buy Me a Coffee",
                "Site Web"
            ]
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let profile = Profile::from_json(
            r#"{
                "name": "Ada",
                "tagline": "Engines",
                "avatar": "/ada.png",
                "social_links": [
                    { "icon": "github", "url": "https://github.com/ada", "label": "GitHub", "accent": "a" }
                ]
            }"#,
        )
        .expect("minimal profile should parse");
        assert_eq!(profile.sections, SectionLabels::default());
        assert!(profile.projects.is_empty());
        assert!(profile.contact_options.is_empty());
        assert!(profile.theme_toggle);
        assert_eq!(profile.particle_count(), DEFAULT_PARTICLES);
    }

    #[test]
    fn test_malformed_profile_is_parse_error() {
        let res = Profile::from_json("{ \"name\": ");
        assert!(matches!(res, Err(ProfileError::Parse(_))));

        let res = Profile::from_json(
            r##"{
                "name": "Ada", "tagline": "", "avatar": "",
                "social_links": [ { "icon": "myspace", "url": "#", "label": "x", "accent": "" } ]
            }"##,
        );
        assert!(matches!(res, Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_particle_count_is_clamped() {
        let mut profile = Profile::fallback();
        profile.particle_count = 3;
        assert_eq!(profile.particle_count(), MIN_PARTICLES);
        profile.particle_count = 5000;
        assert_eq!(profile.particle_count(), MAX_PARTICLES);
        profile.particle_count = 75;
        assert_eq!(profile.particle_count(), 75);
    }

    #[test]
    fn test_every_icon_has_drawable_path() {
        let mut slugs = Icon::ALL.iter().map(|i| i.slug()).collect::<Vec<_>>();
        for icon in Icon::ALL {
            assert!(icon.path().starts_with('M'), "{icon:?} path");
            let quoted = format!("\"{}\"", icon.slug());
            let parsed: Icon = serde_json::from_str(&quoted).expect("slug is the serde name");
            assert_eq!(parsed, icon);
        }
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), Icon::ALL.len());
    }

    #[test]
    fn test_link_target_policy() {
        assert_eq!(
            LinkTarget::for_url("https://github.com/"),
            LinkTarget::NewContext
        );
        assert_eq!(LinkTarget::for_url("HTTP://x.org"), LinkTarget::NewContext);
        assert_eq!(
            LinkTarget::for_url("mailto:me@example.com"),
            LinkTarget::SameContext
        );
        assert_eq!(LinkTarget::for_url("#"), LinkTarget::SameContext);
        assert_eq!(LinkTarget::for_url("/cv"), LinkTarget::SameContext);
        assert_eq!(LinkTarget::NewContext.target(), Some("_blank"));
        assert_eq!(LinkTarget::SameContext.rel(), None);
    }

    #[test]
    fn test_section_content_matches_tables() {
        let profile = Profile::load().expect("embedded profile should parse");
        match profile.content(Section::Profile) {
            SectionContent::Profile(links) => assert_eq!(links, &profile.social_links[..]),
            other => panic!("unexpected content {other:?}"),
        }
        match profile.content(Section::Portfolio) {
            SectionContent::Portfolio(projects) => assert_eq!(projects, &profile.projects[..]),
            other => panic!("unexpected content {other:?}"),
        }
        match profile.content(Section::Contact) {
            SectionContent::Contact(links) => assert_eq!(links, &profile.contact_options[..]),
            other => panic!("unexpected content {other:?}"),
        }
        assert_eq!(profile.content(Section::Portfolio).link_group(), None);
    }
}
