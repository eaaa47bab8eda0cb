use resumecraft_core::model::section::validate_sections;
use resumecraft_core::normalize::normalize_theme_value;
use resumecraft_core::{
    default_sections, normalize_document, normalize_value, ResumeAction, ResumeDocument,
    ResumeStore, SectionType, ThemeLayout,
};
use serde_json::json;
use std::collections::HashSet;

fn sample_snapshot() -> serde_json::Value {
    json!({
        "personalInfo": {
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "",
            "location": "London",
            "github": "https://github.com/ada",
            "website": "   "
        },
        "sections": [
            {"id": "3", "type": "experience", "title": "Work Experience", "enabled": true, "order": 1},
            {"id": "6", "type": "skills", "title": "", "enabled": true, "order": 7},
            {"id": "x", "type": "hobbies", "title": "Hobbies", "enabled": true, "order": 2}
        ],
        "experience": [
            {
                "id": "e1",
                "jobTitle": "Analyst",
                "company": "Engine Co",
                "startDate": "1843-01",
                "current": true,
                "responsibilities": ["Notes", 42]
            },
            {"id": "e1", "jobTitle": "Duplicate id"}
        ],
        "skills": [{"name": "Math", "level": "Expert", "category": "other"}],
        "languages": "English"
    })
}

#[test]
fn normalize_is_idempotent() {
    let once = normalize_value(&sample_snapshot());
    let twice = normalize_document(once.clone());
    assert_eq!(once, twice);

    let via_json = normalize_value(&serde_json::to_value(&once).unwrap());
    assert_eq!(once, via_json);
}

#[test]
fn missing_fields_default_to_empty_collections_and_seed_sections() {
    let document = normalize_value(&json!({}));
    assert_eq!(document, ResumeDocument::default());
    assert_eq!(document.sections, default_sections());

    let document = normalize_value(&json!({"personalInfo": {"fullName": "Only Name"}}));
    assert_eq!(document.personal_info.full_name, "Only Name");
    assert!(document.education.is_empty());
    assert_eq!(document.sections.len(), 11);
}

#[test]
fn wrong_shapes_fail_closed_to_empty_defaults() {
    let document = normalize_value(&json!({
        "experience": {"not": "a list"},
        "projects": [1, "two", {"title": "Kept"}],
        "education": [{"degree": 7, "relevantCoursework": "Algebra"}],
        "sections": "all of them",
        "personalInfo": ["nope"]
    }));

    assert!(document.experience.is_empty());
    assert_eq!(document.projects.len(), 1);
    assert_eq!(document.projects[0].title, "Kept");
    assert_eq!(document.education[0].degree, "7");
    assert!(document.education[0].relevant_coursework.is_empty());
    assert_eq!(document.sections, default_sections());
    assert_eq!(document.personal_info.full_name, "");

    let document = normalize_value(&json!("not an object"));
    assert_eq!(document, ResumeDocument::default());
}

#[test]
fn sections_are_repaired_to_canonical_shape() {
    let document = normalize_value(&sample_snapshot());
    let sections = &document.sections;

    validate_sections(sections).unwrap();
    assert_eq!(sections.len(), 11);
    assert_eq!(sections[0].kind, SectionType::Experience);
    assert_eq!(sections[1].kind, SectionType::Skills);
    assert_eq!(sections[1].title, "Skills");
    assert!(sections.iter().all(|section| section.title != "Hobbies"));

    let orders: Vec<u32> = sections.iter().map(|section| section.order).collect();
    assert_eq!(orders, (1..=11).collect::<Vec<u32>>());
}

#[test]
fn entry_ids_are_unique_after_normalization() {
    let document = normalize_value(&sample_snapshot());
    let ids: HashSet<_> = document.experience.iter().map(|entry| entry.id.as_str()).collect();

    assert_eq!(document.experience.len(), 2);
    assert_eq!(ids.len(), 2);
    assert!(ids.contains("e1"));
    assert!(!document.skills[0].id.is_empty());
    assert_eq!(document.experience[0].responsibilities, vec!["Notes", "42"]);
    assert!(document.experience[0].current);
}

#[test]
fn blank_links_become_absent() {
    let document = normalize_value(&sample_snapshot());
    assert!(document.personal_info.website.is_none());
    assert_eq!(
        document.personal_info.github.as_deref(),
        Some("https://github.com/ada")
    );
}

#[test]
fn load_resume_action_normalizes_payload() {
    let mut raw = ResumeDocument::default();
    raw.sections.truncate(3);

    let mut store = ResumeStore::new();
    store.dispatch(ResumeAction::LoadResume(raw));
    assert_eq!(store.state().document.sections.len(), 11);
}

#[test]
fn unknown_theme_layout_falls_back() {
    let theme = normalize_theme_value(&json!({
        "id": "classic-black",
        "layout": "brutalist",
        "primaryColor": "red"
    }));
    assert_eq!(theme.id, "classic-black");
    assert_eq!(theme.layout, ThemeLayout::Classic);
    assert_eq!(theme.primary_color, "#1f2937");

    let theme = normalize_theme_value(&json!({"id": "custom", "layout": "brutalist"}));
    assert_eq!(theme.layout, ThemeLayout::Modern);
}

#[test]
fn typed_and_json_paths_agree_on_blank_optional_fields() {
    use resumecraft_core::model::entry::{Certification, Education, Entry, Project};

    let mut document = ResumeDocument::default();
    document.education.push(Education {
        id: "  edu-1 ".to_string(),
        degree: "BSc".to_string(),
        percentage: Some(String::new()),
        cgpa: Some("   ".to_string()),
        ..Education::blank()
    });
    document.projects.push(Project {
        title: "Engine".to_string(),
        github_link: Some(String::new()),
        live_url: Some("https://engine.example".to_string()),
        ..Project::blank()
    });
    document.certifications.push(Certification {
        title: "Algebra".to_string(),
        certificate_url: Some(" ".to_string()),
        description: Some(String::new()),
        ..Certification::blank()
    });
    document.sections[0].id = " 1 ".to_string();

    let typed = normalize_document(document);
    let via_json = normalize_value(&serde_json::to_value(&typed).unwrap());
    assert_eq!(typed, via_json);

    assert_eq!(typed.education[0].id, "edu-1");
    assert!(typed.education[0].percentage.is_none());
    assert!(typed.education[0].cgpa.is_none());
    assert!(typed.projects[0].github_link.is_none());
    assert_eq!(
        typed.projects[0].live_url.as_deref(),
        Some("https://engine.example")
    );
    assert!(typed.certifications[0].certificate_url.is_none());
    assert!(typed.certifications[0].description.is_none());
    assert_eq!(typed.sections[0].id, "1");
}
