use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub introduction: String,
    /// Longer text for the about section
    pub about: String,
    #[serde(default)]
    pub resume_link: Option<String>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub subtitle: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Qualifications {
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
}

/// Timeline shown in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualificationTab {
    #[default]
    Education,
    Experience,
}

impl QualificationTab {
    pub const ALL: [QualificationTab; 2] =
        [QualificationTab::Education, QualificationTab::Experience];

    pub fn label(self) -> &'static str {
        match self {
            QualificationTab::Education => "Education",
            QualificationTab::Experience => "Experience",
        }
    }
}

impl Qualifications {
    pub fn entries(&self, tab: QualificationTab) -> &[TimelineEntry] {
        match tab {
            QualificationTab::Education => &self.education,
            QualificationTab::Experience => &self.experience,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Basic => "Basic",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }

    /// Badge colour as sRGB bytes.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            SkillLevel::Expert => [0x10, 0xb9, 0x81],
            SkillLevel::Advanced => [0x3b, 0x82, 0xf6],
            SkillLevel::Intermediate => [0xf5, 0x9e, 0x0b],
            SkillLevel::Basic => [0x6b, 0x72, 0x80],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    /// 0..=100
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub frontend: Vec<Skill>,
    #[serde(default)]
    pub backend: Vec<Skill>,
}

/// Skill tab filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillCategory {
    #[default]
    All,
    Frontend,
    Backend,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::All,
        SkillCategory::Frontend,
        SkillCategory::Backend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::All => "All Skills",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
        }
    }
}

impl Skills {
    pub fn in_category(
        &self,
        category: SkillCategory,
    ) -> impl Iterator<Item = &Skill> {
        let frontend = matches!(
            category,
            SkillCategory::All | SkillCategory::Frontend
        );
        let backend =
            matches!(category, SkillCategory::All | SkillCategory::Backend);
        self.frontend
            .iter()
            .filter(move |_| frontend)
            .chain(self.backend.iter().filter(move |_| backend))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// One carousel item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Image path or URL
    #[serde(default)]
    pub image: Option<String>,
    pub link: String,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub title: String,
    pub info: String,
    pub link: String,
    pub action: String,
}
