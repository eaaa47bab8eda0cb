use resumecraft_core::model::entry::{CareerObjective, Entry, Experience, Skill, SkillLevel};
use resumecraft_core::state::sections::{reorder_sections, set_section_enabled};
use resumecraft_core::{
    export_request, find_theme_preset, layout_style, preview_sections, render_text, share_draft,
    theme_presets, ResumeDocument, SectionType, Theme, ThemeLayout,
};
use std::collections::HashSet;

fn filled_document() -> ResumeDocument {
    let mut document = ResumeDocument::default();
    document.personal_info.full_name = "Ada Lovelace".to_string();
    document.personal_info.email = "ada@example.com".to_string();
    document.personal_info.linkedin = Some("https://linkedin.com/in/ada".to_string());
    document.career_objective.push(CareerObjective {
        custom_objective: "Build analytical engines.".to_string(),
        ..CareerObjective::blank()
    });
    document.experience.push(Experience {
        job_title: "Analyst".to_string(),
        company: "Engine Co".to_string(),
        start_date: "1842-09".to_string(),
        current: true,
        responsibilities: vec!["Translated notes".to_string(), "  ".to_string()],
        ..Experience::blank()
    });
    document.skills.push(Skill {
        name: "Mathematics".to_string(),
        level: SkillLevel::Expert,
        ..Skill::blank()
    });
    document
}

#[test]
fn share_draft_matches_template() {
    let draft = share_draft(&filled_document());

    assert_eq!(draft.subject, "My Resume - Ada Lovelace");
    assert!(draft.body.starts_with("Hi,\n\nPlease find my resume attached."));
    assert!(draft
        .body
        .contains("\n\nLinkedIn: https://linkedin.com/in/ada\n\n\n\nBest regards,"));
    assert!(draft.body.ends_with("Best regards,\nAda Lovelace"));
    assert!(draft.mailto_url.starts_with("mailto:?subject="));
    assert!(draft.mailto_url.contains("&body=Hi%2C%0A%0APlease"));
    assert!(!draft.mailto_url.contains(' '));
}

#[test]
fn export_request_carries_normalized_snapshot() {
    let document = filled_document();
    let theme = find_theme_preset("tech-green").unwrap();
    let request = export_request(&document, &theme);

    assert_eq!(request.filename, "Ada Lovelace.pdf");
    assert_eq!(request.page.width_mm, 210.0);
    assert_eq!(request.page.height_mm, 297.0);
    assert_eq!(request.page.margins_mm, [5.0; 4]);
    assert_eq!(request.image.quality, 0.95);
    assert_eq!(request.image.scale, 2);
    assert_eq!(request.document, document);
    assert_eq!(request.theme, theme);
}

#[test]
fn theme_presets_cover_every_layout_once() {
    let presets = theme_presets();
    assert_eq!(presets.len(), 8);

    let layouts: HashSet<ThemeLayout> = presets.iter().map(|theme| theme.layout).collect();
    assert_eq!(layouts.len(), ThemeLayout::ALL.len());
    for theme in &presets {
        theme.validate().unwrap();
        assert_eq!(layout_style(theme).layout, theme.layout);
    }
    assert_eq!(presets[0].id, Theme::default().id);
}

#[test]
fn preview_follows_section_order_and_visibility() {
    let mut document = filled_document();
    let kinds: Vec<_> = preview_sections(&document)
        .into_iter()
        .map(|section| section.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SectionType::CareerObjective,
            SectionType::Experience,
            SectionType::Skills
        ]
    );

    // Move skills (display position 5) to the top and hide the objective.
    document.sections = reorder_sections(&document.sections, 5, 0);
    document.sections =
        set_section_enabled(&document.sections, SectionType::CareerObjective, false);
    let kinds: Vec<_> = preview_sections(&document)
        .into_iter()
        .map(|section| section.kind)
        .collect();
    assert_eq!(kinds, vec![SectionType::Skills, SectionType::Experience]);
}

#[test]
fn text_preview_renders_header_dates_and_skills() {
    let lines = render_text(&filled_document());

    assert_eq!(lines[0], "Ada Lovelace");
    assert_eq!(
        lines[1],
        "ada@example.com | LinkedIn: https://linkedin.com/in/ada"
    );
    assert!(lines.contains(&"Analyst (Sep 1842 - Present)".to_string()));
    assert!(lines.contains(&"  * Translated notes".to_string()));
    assert!(lines.contains(&"  Programming Languages: Mathematics (Expert)".to_string()));
    assert!(lines.contains(&"Work Experience".to_string()));
    assert!(!lines.iter().any(|line| line == "  * "));
}

#[test]
fn blank_document_preview_shows_placeholder_name_only() {
    assert_eq!(render_text(&ResumeDocument::default()), vec!["Your Name"]);
}
