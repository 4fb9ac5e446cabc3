use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{
    ContactMethod, Profile, Project, Qualifications, Service, Skills,
    SocialLink, Stat,
};

const BUNDLED_CATALOG: &str = include_str!("../../content/portfolio.toml");

/// Content loading errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Content is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate project id {0}")]
    DuplicateProject(u32),

    #[error("Skill {name} has percentage {percentage} (max 100)")]
    SkillOutOfRange { name: String, percentage: u8 },

    #[error("Empty title in {0}")]
    EmptyTitle(&'static str),
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub qualifications: Qualifications,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact_methods: Vec<ContactMethod>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw =
            fs::read_to_string(path).map_err(|source| ContentError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let catalog = Self::from_toml_str(&raw)?;
        log::info!(
            "Loaded content from {}: {} projects, {} services",
            path.display(),
            catalog.projects.len(),
            catalog.services.len()
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle("project"));
            }
        }

        for skill in self.skills.frontend.iter().chain(&self.skills.backend) {
            if skill.percentage > 100 {
                return Err(ContentError::SkillOutOfRange {
                    name: skill.name.clone(),
                    percentage: skill.percentage,
                });
            }
        }

        if self.services.iter().any(|s| s.title.trim().is_empty()) {
            return Err(ContentError::EmptyTitle("service"));
        }

        Ok(())
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{QualificationTab, SkillCategory};

    const MINIMAL: &str = r#"
[profile]
name = "Ada"
role = "Engineer"
introduction = "Hi"
about = "About me"
copyright = "(c) Ada"
"#;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::bundled().expect("bundled content is valid");
        assert_eq!(catalog.projects.len(), 7);
        assert!(!catalog.services.is_empty());
        let all = catalog.skills.in_category(SkillCategory::All).count();
        let front =
            catalog.skills.in_category(SkillCategory::Frontend).count();
        let back = catalog.skills.in_category(SkillCategory::Backend).count();
        assert_eq!(all, front + back);
    }

    #[test]
    fn qualification_tabs_select_their_timeline() {
        let catalog = Catalog::bundled().expect("bundled content is valid");
        let quals = &catalog.qualifications;
        assert_eq!(
            quals.entries(QualificationTab::Education),
            quals.education.as_slice()
        );
        assert_eq!(
            quals.entries(QualificationTab::Experience),
            quals.experience.as_slice()
        );
        assert_eq!(QualificationTab::default(), QualificationTab::Education);
    }

    #[test]
    fn minimal_catalog_defaults_sections() {
        let catalog = Catalog::from_toml_str(MINIMAL).expect("valid");
        assert!(catalog.projects.is_empty());
        assert!(catalog.qualifications.education.is_empty());
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let raw = format!(
            "{MINIMAL}
[[projects]]
id = 1
title = \"One\"
description = \"d\"
link = \"https://example.com/1\"

[[projects]]
id = 1
title = \"Again\"
description = \"d\"
link = \"https://example.com/2\"
"
        );
        assert!(matches!(
            Catalog::from_toml_str(&raw),
            Err(ContentError::DuplicateProject(1))
        ));
    }

    #[test]
    fn skill_percentage_is_bounded() {
        let raw = format!(
            "{MINIMAL}
[[skills.frontend]]
name = \"CSS\"
level = \"expert\"
percentage = 120
"
        );
        assert!(matches!(
            Catalog::from_toml_str(&raw),
            Err(ContentError::SkillOutOfRange { percentage: 120, .. })
        ));
    }
}
