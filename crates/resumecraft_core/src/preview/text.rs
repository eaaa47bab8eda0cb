//! Plain-text rendering of the preview.

use super::preview_sections;
use crate::model::document::ResumeDocument;
use crate::model::entry::SkillCategory;
use crate::model::section::SectionType;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})").expect("valid year-month regex"));

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NAME_PLACEHOLDER: &str = "Your Name";

/// Formats `YYYY-MM` as `Mon YYYY`.
///
/// Empty input yields an empty string; anything else that does not parse
/// is returned trimmed and unchanged.
pub fn format_month(value: &str) -> String {
    let value = value.trim();
    let Some(captures) = YEAR_MONTH_RE.captures(value) else {
        return value.to_string();
    };
    let month = captures[2].parse::<usize>().unwrap_or(0);
    match month.checked_sub(1).and_then(|index| MONTHS.get(index)) {
        Some(name) => format!("{name} {}", &captures[1]),
        None => value.to_string(),
    }
}

/// `start - end`, with `Present` for ongoing entries.
///
/// Returns `None` when there is nothing to show.
pub fn format_date_range(start: &str, end: &str, current: bool) -> Option<String> {
    let start = format_month(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_month(end)
    };
    if start.is_empty() && end.is_empty() {
        return None;
    }
    Some(format!("{start} - {end}"))
}

/// Renders `document` as preview lines.
pub fn render_text(document: &ResumeDocument) -> Vec<String> {
    let mut lines = Vec::new();
    render_header(document, &mut lines);

    for section in preview_sections(document) {
        lines.push(String::new());
        lines.push(section.title.clone());
        lines.push("-".repeat(section.title.chars().count()));
        render_section(document, section.kind, &mut lines);
    }
    lines
}

fn render_header(document: &ResumeDocument, lines: &mut Vec<String>) {
    let info = &document.personal_info;
    let name = info.full_name.trim();
    lines.push(if name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        name.to_string()
    });

    let mut contact: Vec<String> = [&info.email, &info.phone, &info.location]
        .into_iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    if let Some(website) = &info.website {
        contact.push(website.clone());
    }
    if let Some(linkedin) = &info.linkedin {
        contact.push(format!("LinkedIn: {linkedin}"));
    }
    if let Some(github) = &info.github {
        contact.push(format!("GitHub: {github}"));
    }
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
    }
}

fn render_section(document: &ResumeDocument, kind: SectionType, lines: &mut Vec<String>) {
    match kind {
        SectionType::CareerObjective => {
            for objective in &document.career_objective {
                push_nonblank(lines, "", &objective.custom_objective);
            }
        }
        SectionType::TechnicalSummary => {
            for summary in &document.technical_summary {
                push_list(lines, "Key Skills", &summary.key_skills);
                push_list(lines, "Backend Focus", &summary.backend_focus);
                push_list(lines, "Dev Tools", &summary.dev_tools);
                push_list(lines, "Deployment", &summary.deployment);
            }
        }
        SectionType::Experience => {
            for exp in &document.experience {
                lines.push(with_dates(
                    &exp.job_title,
                    format_date_range(&exp.start_date, &exp.end_date, exp.current),
                ));
                push_nonblank(
                    lines,
                    "",
                    &joined_nonblank(&[exp.company.as_str(), exp.location.as_str()]),
                );
                for item in exp.responsibilities.iter().filter(|item| !item.trim().is_empty()) {
                    lines.push(format!("  * {}", item.trim()));
                }
            }
        }
        SectionType::Education => {
            for edu in &document.education {
                let year = edu.completion_year.trim();
                lines.push(with_dates(
                    &edu.degree,
                    (!year.is_empty()).then(|| year.to_string()),
                ));
                push_nonblank(
                    lines,
                    "",
                    &joined_nonblank(&[edu.institution.as_str(), edu.location.as_str()]),
                );
                let scores: Vec<String> = [
                    labeled("Percentage", edu.percentage.as_deref()),
                    labeled("CGPA", edu.cgpa.as_deref()),
                ]
                .into_iter()
                .flatten()
                .collect();
                if !scores.is_empty() {
                    lines.push(format!("  {}", scores.join(" • ")));
                }
                push_list(lines, "Relevant Coursework", &edu.relevant_coursework);
            }
        }
        SectionType::Projects => {
            for project in &document.projects {
                lines.push(project.title.trim().to_string());
                push_nonblank(lines, "", &project.role);
                push_nonblank(lines, "GitHub", project.github_link.as_deref().unwrap_or(""));
                push_nonblank(lines, "Live", project.live_url.as_deref().unwrap_or(""));
                push_nonblank(lines, "", &project.summary);
                push_nonblank(lines, "Problem", &project.problem_solved);
                push_nonblank(lines, "Implementation", &project.key_implementation);
                push_nonblank(lines, "Outcomes", &project.outcomes);
                push_list(lines, "Tech Stack", &project.tech_stack);
            }
        }
        SectionType::Skills => {
            for category in SkillCategory::ALL {
                let names: Vec<String> = document
                    .skills
                    .iter()
                    .filter(|skill| skill.category == category)
                    .map(|skill| format!("{} ({})", skill.name.trim(), skill.level.as_str()))
                    .collect();
                if !names.is_empty() {
                    lines.push(format!("  {}: {}", category.label(), names.join(", ")));
                }
            }
        }
        SectionType::Certifications => {
            for cert in &document.certifications {
                let date = format_month(&cert.completion_date);
                lines.push(with_dates(&cert.title, (!date.is_empty()).then_some(date)));
                push_nonblank(lines, "", &cert.platform);
                if let Some(description) = &cert.description {
                    push_nonblank(lines, "", description);
                }
                push_nonblank(
                    lines,
                    "Certificate",
                    cert.certificate_url.as_deref().unwrap_or(""),
                );
            }
        }
        SectionType::Languages => {
            for language in &document.languages {
                lines.push(format!(
                    "  {} ({})",
                    language.name.trim(),
                    language.proficiency.as_str()
                ));
            }
        }
        SectionType::ProblemSolving => {
            for problem in &document.problem_solving {
                lines.push(problem.problem_faced.trim().to_string());
                push_list(lines, "Tools Used", &problem.tools_used);
                push_nonblank(lines, "Solution", &problem.solution);
                push_nonblank(lines, "Impact", &problem.impact);
            }
        }
        SectionType::Achievements => {
            for achievement in &document.achievements {
                let date = format_month(&achievement.date);
                lines.push(with_dates(
                    &achievement.title,
                    (!date.is_empty()).then_some(date),
                ));
                let source = joined_nonblank(&[
                    achievement.event_type.as_str(),
                    achievement.issuer.as_str(),
                ]);
                push_nonblank(lines, "", &source);
                push_nonblank(lines, "", &achievement.description);
            }
        }
        SectionType::VolunteerWork => {
            for work in &document.volunteer_work {
                lines.push(with_dates(
                    &work.activity_type,
                    format_date_range(&work.start_date, &work.end_date, work.current),
                ));
                push_nonblank(lines, "", &work.organization);
                push_nonblank(lines, "Contribution", &work.contribution);
                push_nonblank(lines, "Impact", &work.impact);
            }
        }
    }
}

fn with_dates(title: &str, dates: Option<String>) -> String {
    match dates {
        Some(dates) => format!("{} ({dates})", title.trim()),
        None => title.trim().to_string(),
    }
}

fn labeled(label: &str, value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| format!("{label}: {value}"))
}

fn push_nonblank(lines: &mut Vec<String>, label: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if label.is_empty() {
        lines.push(format!("  {value}"));
    } else {
        lines.push(format!("  {label}: {value}"));
    }
}

fn push_list(lines: &mut Vec<String>, label: &str, items: &[String]) {
    let items: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();
    if !items.is_empty() {
        lines.push(format!("  {label}: {}", items.join(", ")));
    }
}

fn joined_nonblank(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}
