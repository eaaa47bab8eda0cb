//! Normalization of documents obtained from outside the reducer.
//!
//! # Responsibility
//! - Turn a possibly partial or older-schema JSON snapshot into a fully
//!   populated `ResumeDocument`.
//! - Repair section descriptors and entry ids on typed documents.
//!
//! # Invariants
//! - Never fails: wrong-shaped values are replaced by their empty default
//!   (fail closed) and reported through `normalize_fallback` log events.
//! - Idempotent: normalizing a normalized document yields the same value.
//! - Output satisfies `validate_sections` and has unique non-empty entry ids.

use crate::model::document::ResumeDocument;
use crate::model::entry::{
    new_entry_id, Achievement, CareerObjective, Certification, Education, Entry, Experience,
    Language, ProblemSolving, Project, Skill, TechnicalSummary, VolunteerWork,
};
use crate::model::personal::{non_blank, PersonalInfo};
use crate::model::section::{default_sections, SectionDescriptor, SectionType};
use crate::model::theme::{find_theme_preset, Theme, ThemeLayout};
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Builds a complete document from an external JSON value.
pub fn normalize_value(value: &Value) -> ResumeDocument {
    if !value.is_object() && !value.is_null() {
        report_fallback("document", "<root>");
    }
    let root = Fields::of(value, "document");

    let document = ResumeDocument {
        personal_info: parse_personal_info(root.get("personalInfo")),
        sections: parse_sections(root.get("sections")),
        technical_summary: root.collection("technicalSummary", parse_technical_summary),
        experience: root.collection("experience", parse_experience),
        education: root.collection("education", parse_education),
        projects: root.collection("projects", parse_project),
        certifications: root.collection("certifications", parse_certification),
        skills: root.collection("skills", parse_skill),
        languages: root.collection("languages", parse_language),
        career_objective: root.collection("careerObjective", parse_career_objective),
        problem_solving: root.collection("problemSolving", parse_problem_solving),
        achievements: root.collection("achievements", parse_achievement),
        volunteer_work: root.collection("volunteerWork", parse_volunteer_work),
    };

    normalize_document(document)
}

/// Repairs a typed document: canonical sections, trimmed unique entry ids and
/// no blank optional fields.
pub fn normalize_document(document: ResumeDocument) -> ResumeDocument {
    let ResumeDocument {
        personal_info,
        sections,
        technical_summary,
        experience,
        education,
        projects,
        certifications,
        skills,
        languages,
        career_objective,
        problem_solving,
        achievements,
        volunteer_work,
    } = document;

    ResumeDocument {
        personal_info: normalize_personal_info(personal_info),
        sections: normalize_sections(sections),
        technical_summary: ensure_unique_ids(technical_summary),
        experience: ensure_unique_ids(experience),
        education: ensure_unique_ids(education.into_iter().map(clear_blank_education).collect()),
        projects: ensure_unique_ids(projects.into_iter().map(clear_blank_project).collect()),
        certifications: ensure_unique_ids(
            certifications
                .into_iter()
                .map(clear_blank_certification)
                .collect(),
        ),
        skills: ensure_unique_ids(skills),
        languages: ensure_unique_ids(languages),
        career_objective: ensure_unique_ids(career_objective),
        problem_solving: ensure_unique_ids(problem_solving),
        achievements: ensure_unique_ids(achievements),
        volunteer_work: ensure_unique_ids(volunteer_work),
    }
}

/// Restores the descriptor invariants.
///
/// - Keeps the first descriptor per kind in display order.
/// - Appends seed descriptors for missing kinds.
/// - Fills blank titles, replaces blank or reused ids.
/// - Renumbers `order` densely from 1.
pub fn normalize_sections(sections: Vec<SectionDescriptor>) -> Vec<SectionDescriptor> {
    let mut ordered = sections;
    ordered.sort_by_key(|section| section.order);

    let mut seen_kinds = HashSet::new();
    ordered.retain(|section| seen_kinds.insert(section.kind));

    for kind in SectionType::ALL {
        if !seen_kinds.contains(&kind) {
            ordered.push(kind.seed_descriptor());
        }
    }

    let mut used_ids = HashSet::new();
    let mut normalized = Vec::with_capacity(ordered.len());
    for (index, mut section) in ordered.into_iter().enumerate() {
        section.id = section.id.trim().to_string();
        if section.title.trim().is_empty() {
            section.title = section.kind.default_title().to_string();
        }
        if section.id.trim().is_empty() || used_ids.contains(&section.id) {
            let seed_id = section.kind.seed_position().to_string();
            section.id = if used_ids.contains(&seed_id) {
                new_entry_id()
            } else {
                seed_id
            };
        }
        used_ids.insert(section.id.clone());
        section.order = index as u32 + 1;
        normalized.push(section);
    }
    normalized
}

/// Builds a theme from an external JSON value.
///
/// Known preset ids fill missing fields from the preset; unknown layouts and
/// invalid colors fall back to the base theme's values.
pub fn normalize_theme_value(value: &Value) -> Theme {
    let fields = Fields::of(value, "theme");
    let id = fields.text("id");
    let base = find_theme_preset(&id).unwrap_or_default();

    let layout = match fields.get("layout").and_then(Value::as_str) {
        Some(raw) => ThemeLayout::parse(raw).unwrap_or_else(|| {
            report_fallback("theme", "layout");
            base.layout
        }),
        None => base.layout,
    };

    let candidate = Theme {
        id: non_blank(id).unwrap_or_else(|| base.id.clone()),
        name: non_blank(fields.text("name")).unwrap_or_else(|| base.name.clone()),
        primary_color: non_blank(fields.text("primaryColor"))
            .unwrap_or_else(|| base.primary_color.clone()),
        secondary_color: non_blank(fields.text("secondaryColor"))
            .unwrap_or_else(|| base.secondary_color.clone()),
        font_family: non_blank(fields.text("fontFamily"))
            .unwrap_or_else(|| base.font_family.clone()),
        layout,
    };

    match candidate.validate() {
        Ok(()) => candidate,
        Err(err) => {
            warn!(
                "event=normalize_fallback module=normalize field=theme reason={}",
                err
            );
            Theme {
                primary_color: base.primary_color,
                secondary_color: base.secondary_color,
                ..candidate
            }
        }
    }
}

fn normalize_personal_info(info: PersonalInfo) -> PersonalInfo {
    PersonalInfo {
        website: info.website.and_then(non_blank),
        linkedin: info.linkedin.and_then(non_blank),
        github: info.github.and_then(non_blank),
        profile_image: info.profile_image.and_then(non_blank),
        ..info
    }
}

fn clear_blank_education(entry: Education) -> Education {
    Education {
        percentage: entry.percentage.and_then(non_blank),
        cgpa: entry.cgpa.and_then(non_blank),
        ..entry
    }
}

fn clear_blank_project(entry: Project) -> Project {
    Project {
        github_link: entry.github_link.and_then(non_blank),
        live_url: entry.live_url.and_then(non_blank),
        ..entry
    }
}

fn clear_blank_certification(entry: Certification) -> Certification {
    Certification {
        certificate_url: entry.certificate_url.and_then(non_blank),
        description: entry.description.and_then(non_blank),
        ..entry
    }
}

fn ensure_unique_ids<T: Entry>(entries: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .map(|mut entry| {
            let trimmed = entry.id().trim().to_string();
            if trimmed.len() != entry.id().len() {
                entry.set_id(trimmed);
            }
            if entry.id().is_empty() || seen.contains(entry.id()) {
                entry.set_id(new_entry_id());
            }
            seen.insert(entry.id().to_string());
            entry
        })
        .collect()
}

fn report_fallback(context: &str, key: &str) {
    warn!(
        "event=normalize_fallback module=normalize field={}.{} reason=wrong_type",
        context, key
    );
}

/// Lenient accessor over one JSON object.
struct Fields<'a> {
    object: Option<&'a Map<String, Value>>,
    context: &'static str,
}

impl<'a> Fields<'a> {
    fn of(value: &'a Value, context: &'static str) -> Self {
        Self {
            object: value.as_object(),
            context,
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object
            .and_then(|object| object.get(key))
            .filter(|value| !value.is_null())
    }

    fn text(&self, key: &str) -> String {
        match self.get(key) {
            None => String::new(),
            Some(Value::String(value)) => value.clone(),
            Some(Value::Number(value)) => value.to_string(),
            Some(_) => {
                report_fallback(self.context, key);
                String::new()
            }
        }
    }

    fn opt_text(&self, key: &str) -> Option<String> {
        non_blank(self.text(key))
    }

    fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            None => false,
            Some(Value::Bool(value)) => *value,
            Some(_) => {
                report_fallback(self.context, key);
                false
            }
        }
    }

    fn texts(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(value) => Some(value.clone()),
                    Value::Number(value) => Some(value.to_string()),
                    _ => {
                        report_fallback(self.context, key);
                        None
                    }
                })
                .collect(),
            Some(_) => {
                report_fallback(self.context, key);
                Vec::new()
            }
        }
    }

    fn choice<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key) {
            None => T::default(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|_| {
                report_fallback(self.context, key);
                T::default()
            }),
        }
    }

    fn order(&self) -> u32 {
        self.get("order")
            .and_then(Value::as_u64)
            .map_or(u32::MAX, |value| u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Existing id or empty; `normalize_document` assigns fresh ids.
    fn id(&self) -> String {
        self.text("id").trim().to_string()
    }

    fn collection<T>(&self, key: &str, parse: fn(&Fields<'_>) -> T) -> Vec<T> {
        match self.get(key) {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| {
                    if item.is_object() {
                        Some(parse(&Fields::of(item, "entry")))
                    } else {
                        report_fallback(self.context, key);
                        None
                    }
                })
                .collect(),
            Some(_) => {
                report_fallback(self.context, key);
                Vec::new()
            }
        }
    }
}

fn parse_personal_info(value: Option<&Value>) -> PersonalInfo {
    let Some(value) = value else {
        return PersonalInfo::default();
    };
    let fields = Fields::of(value, "personalInfo");
    PersonalInfo {
        full_name: fields.text("fullName"),
        email: fields.text("email"),
        phone: fields.text("phone"),
        location: fields.text("location"),
        website: fields.opt_text("website"),
        linkedin: fields.opt_text("linkedin"),
        github: fields.opt_text("github"),
        profile_image: fields.opt_text("profileImage"),
    }
}

fn parse_sections(value: Option<&Value>) -> Vec<SectionDescriptor> {
    let items = match value {
        None => return default_sections(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            report_fallback("document", "sections");
            return default_sections();
        }
    };

    items
        .iter()
        .filter_map(|item| {
            let fields = Fields::of(item, "section");
            let raw_kind = fields.text("type");
            let Some(kind) = SectionType::parse(&raw_kind) else {
                warn!(
                    "event=normalize_fallback module=normalize field=section.type reason=unknown_kind"
                );
                return None;
            };
            let enabled = match fields.get("enabled") {
                Some(Value::Bool(value)) => *value,
                _ => kind.enabled_by_default(),
            };
            Some(SectionDescriptor {
                id: fields.id(),
                kind,
                title: fields.text("title"),
                enabled,
                order: fields.order(),
            })
        })
        .collect()
}

fn parse_technical_summary(fields: &Fields<'_>) -> TechnicalSummary {
    TechnicalSummary {
        id: fields.id(),
        key_skills: fields.texts("keySkills"),
        backend_focus: fields.texts("backendFocus"),
        dev_tools: fields.texts("devTools"),
        deployment: fields.texts("deployment"),
        custom_skills: fields.texts("customSkills"),
    }
}

fn parse_experience(fields: &Fields<'_>) -> Experience {
    Experience {
        id: fields.id(),
        job_title: fields.text("jobTitle"),
        company: fields.text("company"),
        location: fields.text("location"),
        start_date: fields.text("startDate"),
        end_date: fields.text("endDate"),
        current: fields.flag("current"),
        responsibilities: fields.texts("responsibilities"),
    }
}

fn parse_education(fields: &Fields<'_>) -> Education {
    Education {
        id: fields.id(),
        degree: fields.text("degree"),
        institution: fields.text("institution"),
        location: fields.text("location"),
        completion_year: fields.text("completionYear"),
        percentage: fields.opt_text("percentage"),
        cgpa: fields.opt_text("cgpa"),
        relevant_coursework: fields.texts("relevantCoursework"),
    }
}

fn parse_project(fields: &Fields<'_>) -> Project {
    Project {
        id: fields.id(),
        title: fields.text("title"),
        role: fields.text("role"),
        tech_stack: fields.texts("techStack"),
        github_link: fields.opt_text("githubLink"),
        live_url: fields.opt_text("liveUrl"),
        summary: fields.text("summary"),
        problem_solved: fields.text("problemSolved"),
        key_implementation: fields.text("keyImplementation"),
        outcomes: fields.text("outcomes"),
    }
}

fn parse_certification(fields: &Fields<'_>) -> Certification {
    Certification {
        id: fields.id(),
        title: fields.text("title"),
        platform: fields.text("platform"),
        completion_date: fields.text("completionDate"),
        certificate_url: fields.opt_text("certificateUrl"),
        description: fields.opt_text("description"),
    }
}

fn parse_skill(fields: &Fields<'_>) -> Skill {
    Skill {
        id: fields.id(),
        category: fields.choice("category"),
        name: fields.text("name"),
        level: fields.choice("level"),
    }
}

fn parse_language(fields: &Fields<'_>) -> Language {
    Language {
        id: fields.id(),
        name: fields.text("name"),
        proficiency: fields.choice("proficiency"),
    }
}

fn parse_career_objective(fields: &Fields<'_>) -> CareerObjective {
    CareerObjective {
        id: fields.id(),
        role_focus: fields.text("roleFocus"),
        vision: fields.text("vision"),
        tone: fields.choice("tone"),
        custom_objective: fields.text("customObjective"),
    }
}

fn parse_problem_solving(fields: &Fields<'_>) -> ProblemSolving {
    ProblemSolving {
        id: fields.id(),
        problem_faced: fields.text("problemFaced"),
        tools_used: fields.texts("toolsUsed"),
        solution: fields.text("solution"),
        impact: fields.text("impact"),
    }
}

fn parse_achievement(fields: &Fields<'_>) -> Achievement {
    Achievement {
        id: fields.id(),
        event_type: fields.text("eventType"),
        issuer: fields.text("issuer"),
        date: fields.text("date"),
        title: fields.text("title"),
        description: fields.text("description"),
    }
}

fn parse_volunteer_work(fields: &Fields<'_>) -> VolunteerWork {
    VolunteerWork {
        id: fields.id(),
        activity_type: fields.text("activityType"),
        organization: fields.text("organization"),
        start_date: fields.text("startDate"),
        end_date: fields.text("endDate"),
        current: fields.flag("current"),
        contribution: fields.text("contribution"),
        impact: fields.text("impact"),
    }
}
