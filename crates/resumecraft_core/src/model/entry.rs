//! Repeatable section entries.
//!
//! # Responsibility
//! - Define one record type per repeatable section kind.
//! - Provide blank constructors with freshly generated ids.
//!
//! # Invariants
//! - `id` is non-empty and never reused for another entry.
//! - String-list fields are always present; an empty list means "unset".

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one entry inside a collection.
///
/// Kept as `String` because persisted snapshots may carry ids produced by
/// older clients that are not UUIDs.
pub type EntryId = String;

/// Generates a fresh entry id.
pub fn new_entry_id() -> EntryId {
    Uuid::new_v4().to_string()
}

/// Common contract for entries stored in a repeatable-section collection.
pub trait Entry: Clone {
    /// Returns the stable id of this entry.
    fn id(&self) -> &str;

    /// Replaces the id. Used by normalization when an id is blank or reused.
    fn set_id(&mut self, id: EntryId);

    /// Creates an entry with a fresh id and blank/default fields.
    fn blank() -> Self;
}

macro_rules! impl_entry {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Entry for $ty {
                fn id(&self) -> &str {
                    self.id.as_str()
                }

                fn set_id(&mut self, id: EntryId) {
                    self.id = id;
                }

                fn blank() -> Self {
                    Self {
                        id: new_entry_id(),
                        ..Self::default()
                    }
                }
            }
        )+
    };
}

impl_entry!(
    TechnicalSummary,
    Experience,
    Education,
    Project,
    Certification,
    Skill,
    Language,
    CareerObjective,
    ProblemSolving,
    Achievement,
    VolunteerWork,
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSummary {
    pub id: EntryId,
    #[serde(default)]
    pub key_skills: Vec<String>,
    #[serde(default)]
    pub backend_focus: Vec<String>,
    #[serde(default)]
    pub dev_tools: Vec<String>,
    #[serde(default)]
    pub deployment: Vec<String>,
    /// Free-form values the user typed in addition to the suggested options.
    #[serde(default)]
    pub custom_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntryId,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// `YYYY-MM`, empty when unset.
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// When set, `end_date` is ignored and rendered as "Present".
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub completion_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<String>,
    #[serde(default)]
    pub relevant_coursework: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub problem_solved: String,
    #[serde(default)]
    pub key_implementation: String,
    #[serde(default)]
    pub outcomes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: EntryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub completion_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Grouping used by the skills block of the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    Programming,
    Frameworks,
    Tools,
    Soft,
    Other,
}

impl SkillCategory {
    /// Display order of skill groups.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Programming,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::Soft,
        SkillCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Programming => "Programming Languages",
            Self::Frameworks => "Frameworks & Libraries",
            Self::Tools => "Tools & Technologies",
            Self::Soft => "Soft Skills",
            Self::Other => "Other Skills",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: EntryId,
    #[serde(default)]
    pub category: SkillCategory,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageProficiency {
    Native,
    Fluent,
    #[default]
    Conversational,
    Basic,
}

impl LanguageProficiency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Native => "Native",
            Self::Fluent => "Fluent",
            Self::Conversational => "Conversational",
            Self::Basic => "Basic",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: EntryId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub proficiency: LanguageProficiency,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveTone {
    Passionate,
    #[default]
    Professional,
    Creative,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerObjective {
    pub id: EntryId,
    #[serde(default)]
    pub role_focus: String,
    #[serde(default)]
    pub vision: String,
    #[serde(default)]
    pub tone: ObjectiveTone,
    /// Final objective text shown in the preview.
    #[serde(default)]
    pub custom_objective: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSolving {
    pub id: EntryId,
    #[serde(default)]
    pub problem_faced: String,
    #[serde(default)]
    pub tools_used: Vec<String>,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: EntryId,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerWork {
    pub id: EntryId,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub contribution: String,
    #[serde(default)]
    pub impact: String,
}
