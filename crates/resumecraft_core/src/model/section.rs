//! Section descriptors: visibility and display order of resume blocks.
//!
//! # Invariants
//! - Exactly one descriptor per `SectionType`.
//! - `order` values form the dense sequence `1..=N` in display order.

use crate::model::validation::ModelValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Closed vocabulary of repeatable section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionType {
    CareerObjective,
    TechnicalSummary,
    Experience,
    Education,
    Projects,
    Skills,
    Certifications,
    Languages,
    ProblemSolving,
    Achievements,
    VolunteerWork,
}

impl SectionType {
    /// All kinds in canonical seed order.
    pub const ALL: [SectionType; 11] = [
        SectionType::CareerObjective,
        SectionType::TechnicalSummary,
        SectionType::Experience,
        SectionType::Education,
        SectionType::Projects,
        SectionType::Skills,
        SectionType::Certifications,
        SectionType::Languages,
        SectionType::ProblemSolving,
        SectionType::Achievements,
        SectionType::VolunteerWork,
    ];

    /// Wire name used in persisted snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CareerObjective => "careerObjective",
            Self::TechnicalSummary => "technicalSummary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Languages => "languages",
            Self::ProblemSolving => "problemSolving",
            Self::Achievements => "achievements",
            Self::VolunteerWork => "volunteerWork",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn default_title(self) -> &'static str {
        match self {
            Self::CareerObjective => "Career Objective",
            Self::TechnicalSummary => "Technical Summary",
            Self::Experience => "Work Experience",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Certifications => "Certifications & Courses",
            Self::Languages => "Languages",
            Self::ProblemSolving => "Problem Solving Highlights",
            Self::Achievements => "Achievements & Recognitions",
            Self::VolunteerWork => "Volunteer Work",
        }
    }

    pub fn enabled_by_default(self) -> bool {
        matches!(
            self,
            Self::CareerObjective
                | Self::TechnicalSummary
                | Self::Experience
                | Self::Education
                | Self::Projects
                | Self::Skills
        )
    }

    /// 1-based position in the seed list.
    pub fn seed_position(self) -> u32 {
        Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .map_or(0, |index| index as u32 + 1)
    }

    /// Descriptor as seeded on a fresh document.
    pub fn seed_descriptor(self) -> SectionDescriptor {
        let position = self.seed_position();
        SectionDescriptor {
            id: position.to_string(),
            kind: self,
            title: self.default_title().to_string(),
            enabled: self.enabled_by_default(),
            order: position,
        }
    }
}

/// Visibility and ordering record for one section kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: String,
    /// Serialized as `type` to match the snapshot schema.
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub title: String,
    pub enabled: bool,
    /// 1-based display position.
    pub order: u32,
}

/// Returns the canonical 11 descriptors.
pub fn default_sections() -> Vec<SectionDescriptor> {
    SectionType::ALL
        .into_iter()
        .map(SectionType::seed_descriptor)
        .collect()
}

/// Checks the descriptor invariants without modifying anything.
pub fn validate_sections(sections: &[SectionDescriptor]) -> Result<(), ModelValidationError> {
    let mut kinds = BTreeSet::new();
    let mut ids = BTreeSet::new();
    for section in sections {
        if !kinds.insert(section.kind) {
            return Err(ModelValidationError::DuplicateSection(section.kind));
        }
        if !ids.insert(section.id.as_str()) {
            return Err(ModelValidationError::DuplicateSectionId(section.id.clone()));
        }
    }

    if let Some(missing) = SectionType::ALL.into_iter().find(|kind| !kinds.contains(kind)) {
        return Err(ModelValidationError::MissingSection(missing));
    }

    let mut orders = sections.iter().map(|section| section.order).collect::<Vec<_>>();
    orders.sort_unstable();
    for (index, found) in orders.into_iter().enumerate() {
        let expected = index as u32 + 1;
        if found != expected {
            return Err(ModelValidationError::NonDenseOrder { expected, found });
        }
    }

    Ok(())
}
