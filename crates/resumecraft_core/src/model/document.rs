//! Resume document aggregate.

use crate::model::entry::{
    Achievement, CareerObjective, Certification, Education, Experience, Language, ProblemSolving,
    Project, Skill, TechnicalSummary, VolunteerWork,
};
use crate::model::personal::PersonalInfo;
use crate::model::section::{default_sections, SectionDescriptor, SectionType};
use serde::{Deserialize, Serialize};

/// Whole resume: personal info, section descriptors and one collection per
/// repeatable section kind.
///
/// Serialized field names match the persisted snapshot schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionDescriptor>,
    #[serde(default)]
    pub technical_summary: Vec<TechnicalSummary>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub career_objective: Vec<CareerObjective>,
    #[serde(default)]
    pub problem_solving: Vec<ProblemSolving>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub volunteer_work: Vec<VolunteerWork>,
}

impl Default for ResumeDocument {
    /// Blank document with the canonical section seed.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            sections: default_sections(),
            technical_summary: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            career_objective: Vec::new(),
            problem_solving: Vec::new(),
            achievements: Vec::new(),
            volunteer_work: Vec::new(),
        }
    }
}

impl ResumeDocument {
    /// Number of entries in the collection backing `kind`.
    pub fn entry_count(&self, kind: SectionType) -> usize {
        match kind {
            SectionType::CareerObjective => self.career_objective.len(),
            SectionType::TechnicalSummary => self.technical_summary.len(),
            SectionType::Experience => self.experience.len(),
            SectionType::Education => self.education.len(),
            SectionType::Projects => self.projects.len(),
            SectionType::Skills => self.skills.len(),
            SectionType::Certifications => self.certifications.len(),
            SectionType::Languages => self.languages.len(),
            SectionType::ProblemSolving => self.problem_solving.len(),
            SectionType::Achievements => self.achievements.len(),
            SectionType::VolunteerWork => self.volunteer_work.len(),
        }
    }

    /// Returns whether the preview has anything to show for `kind`.
    ///
    /// Career objective additionally requires non-blank objective text.
    pub fn has_content(&self, kind: SectionType) -> bool {
        match kind {
            SectionType::CareerObjective => self
                .career_objective
                .iter()
                .any(|objective| !objective.custom_objective.trim().is_empty()),
            other => self.entry_count(other) > 0,
        }
    }

    /// Descriptor for `kind`, if present.
    pub fn section(&self, kind: SectionType) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Total number of entries across all collections.
    pub fn total_entries(&self) -> usize {
        SectionType::ALL
            .into_iter()
            .map(|kind| self.entry_count(kind))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::ResumeDocument;
    use crate::model::entry::{CareerObjective, Entry, Experience};
    use crate::model::section::SectionType;

    #[test]
    fn default_document_is_empty_with_seeded_sections() {
        let doc = ResumeDocument::default();
        assert_eq!(doc.sections.len(), 11);
        assert_eq!(doc.total_entries(), 0);
        assert!(doc.section(SectionType::Skills).is_some());
    }

    #[test]
    fn blank_objective_has_no_content() {
        let mut doc = ResumeDocument::default();
        doc.career_objective.push(CareerObjective::blank());
        assert_eq!(doc.entry_count(SectionType::CareerObjective), 1);
        assert!(!doc.has_content(SectionType::CareerObjective));

        doc.career_objective[0].custom_objective = "Build things".to_string();
        assert!(doc.has_content(SectionType::CareerObjective));
    }

    #[test]
    fn experience_counts_towards_total() {
        let mut doc = ResumeDocument::default();
        doc.experience.push(Experience::blank());
        assert!(doc.has_content(SectionType::Experience));
        assert_eq!(doc.total_entries(), 1);
    }
}
