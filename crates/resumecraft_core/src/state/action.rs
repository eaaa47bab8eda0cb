//! Tagged actions accepted by the resume reducer.

use crate::model::document::ResumeDocument;
use crate::model::entry::{
    Achievement, CareerObjective, Certification, Education, Experience, Language, ProblemSolving,
    Project, Skill, TechnicalSummary, VolunteerWork,
};
use crate::model::personal::PersonalInfoPatch;
use crate::model::section::SectionDescriptor;
use crate::model::theme::Theme;
use crate::normalize::{normalize_theme_value, normalize_value};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One state transition request.
///
/// Collection actions carry the whole next sequence; callers compute it with
/// the helpers in [`crate::state::collections`].
///
/// Wire form is `{"type": "<TAG>", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResumeAction {
    UpdatePersonalInfo(PersonalInfoPatch),
    UpdateTechnicalSummary(Vec<TechnicalSummary>),
    UpdateExperience(Vec<Experience>),
    UpdateEducation(Vec<Education>),
    UpdateProjects(Vec<Project>),
    UpdateCertifications(Vec<Certification>),
    UpdateSkills(Vec<Skill>),
    UpdateLanguages(Vec<Language>),
    UpdateCareerObjective(Vec<CareerObjective>),
    UpdateProblemSolving(Vec<ProblemSolving>),
    UpdateAchievements(Vec<Achievement>),
    UpdateVolunteerWork(Vec<VolunteerWork>),
    UpdateSections(Vec<SectionDescriptor>),
    SetTheme(Theme),
    TogglePreviewMode,
    LoadResume(ResumeDocument),
}

impl ResumeAction {
    /// Wire tag of this action.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::UpdatePersonalInfo(_) => "UPDATE_PERSONAL_INFO",
            Self::UpdateTechnicalSummary(_) => "UPDATE_TECHNICAL_SUMMARY",
            Self::UpdateExperience(_) => "UPDATE_EXPERIENCE",
            Self::UpdateEducation(_) => "UPDATE_EDUCATION",
            Self::UpdateProjects(_) => "UPDATE_PROJECTS",
            Self::UpdateCertifications(_) => "UPDATE_CERTIFICATIONS",
            Self::UpdateSkills(_) => "UPDATE_SKILLS",
            Self::UpdateLanguages(_) => "UPDATE_LANGUAGES",
            Self::UpdateCareerObjective(_) => "UPDATE_CAREER_OBJECTIVE",
            Self::UpdateProblemSolving(_) => "UPDATE_PROBLEM_SOLVING",
            Self::UpdateAchievements(_) => "UPDATE_ACHIEVEMENTS",
            Self::UpdateVolunteerWork(_) => "UPDATE_VOLUNTEER_WORK",
            Self::UpdateSections(_) => "UPDATE_SECTIONS",
            Self::SetTheme(_) => "SET_THEME",
            Self::TogglePreviewMode => "TOGGLE_PREVIEW_MODE",
            Self::LoadResume(_) => "LOAD_RESUME",
        }
    }
}

/// Result of decoding an action received as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedAction {
    Known(ResumeAction),
    /// Tag outside the action set; dispatching it is a no-op.
    Unknown(String),
}

/// Error for JSON actions that cannot be decoded at all.
#[derive(Debug)]
pub enum ActionDecodeError {
    /// Input is not a JSON object with a string `type` field.
    MissingTag,
    /// Known tag with a payload of the wrong shape.
    InvalidPayload {
        tag: String,
        source: serde_json::Error,
    },
}

impl Display for ActionDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTag => write!(f, "action must be an object with a string `type`"),
            Self::InvalidPayload { tag, source } => {
                write!(f, "invalid payload for action `{tag}`: {source}")
            }
        }
    }
}

impl Error for ActionDecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingTag => None,
            Self::InvalidPayload { source, .. } => Some(source),
        }
    }
}

const KNOWN_TAGS: &[&str] = &[
    "UPDATE_PERSONAL_INFO",
    "UPDATE_TECHNICAL_SUMMARY",
    "UPDATE_EXPERIENCE",
    "UPDATE_EDUCATION",
    "UPDATE_PROJECTS",
    "UPDATE_CERTIFICATIONS",
    "UPDATE_SKILLS",
    "UPDATE_LANGUAGES",
    "UPDATE_CAREER_OBJECTIVE",
    "UPDATE_PROBLEM_SOLVING",
    "UPDATE_ACHIEVEMENTS",
    "UPDATE_VOLUNTEER_WORK",
    "UPDATE_SECTIONS",
    "SET_THEME",
    "TOGGLE_PREVIEW_MODE",
    "LOAD_RESUME",
];

/// Decodes a JSON action.
///
/// `LOAD_RESUME` and `SET_THEME` payloads come from outside the reducer and
/// are normalized leniently instead of rejected. Every other known tag must
/// carry a well-shaped payload.
pub fn decode_action(value: &Value) -> Result<DecodedAction, ActionDecodeError> {
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ActionDecodeError::MissingTag)?;

    if !KNOWN_TAGS.contains(&tag) {
        return Ok(DecodedAction::Unknown(tag.to_string()));
    }

    let payload = value.get("payload").unwrap_or(&Value::Null);
    match tag {
        "LOAD_RESUME" => Ok(DecodedAction::Known(ResumeAction::LoadResume(
            normalize_value(payload),
        ))),
        "SET_THEME" => Ok(DecodedAction::Known(ResumeAction::SetTheme(
            normalize_theme_value(payload),
        ))),
        _ => serde_json::from_value::<ResumeAction>(value.clone())
            .map(DecodedAction::Known)
            .map_err(|source| ActionDecodeError::InvalidPayload {
                tag: tag.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_action, ActionDecodeError, DecodedAction, ResumeAction, KNOWN_TAGS};
    use crate::model::theme::ThemeLayout;
    use serde_json::json;

    #[test]
    fn known_tags_match_action_tags() {
        let sample = [
            ResumeAction::TogglePreviewMode,
            ResumeAction::UpdateSkills(Vec::new()),
        ];
        for action in sample {
            assert!(KNOWN_TAGS.contains(&action.tag()));
        }
        assert_eq!(KNOWN_TAGS.len(), 16);
    }

    #[test]
    fn decodes_unit_action_without_payload() {
        let decoded = decode_action(&json!({ "type": "TOGGLE_PREVIEW_MODE" })).unwrap();
        assert_eq!(decoded, DecodedAction::Known(ResumeAction::TogglePreviewMode));
    }

    #[test]
    fn unknown_tag_is_reported_not_rejected() {
        let decoded = decode_action(&json!({ "type": "RESET_EVERYTHING" })).unwrap();
        assert_eq!(decoded, DecodedAction::Unknown("RESET_EVERYTHING".to_string()));
    }

    #[test]
    fn missing_tag_is_an_error() {
        let err = decode_action(&json!({ "payload": [] })).unwrap_err();
        assert!(matches!(err, ActionDecodeError::MissingTag));
    }

    #[test]
    fn malformed_collection_payload_is_an_error() {
        let err = decode_action(&json!({ "type": "UPDATE_SKILLS", "payload": "oops" }))
            .unwrap_err();
        assert!(err.to_string().contains("UPDATE_SKILLS"));
    }

    #[test]
    fn set_theme_with_unknown_layout_falls_back_to_modern() {
        let decoded = decode_action(&json!({
            "type": "SET_THEME",
            "payload": {
                "id": "custom",
                "name": "Custom",
                "primaryColor": "#000000",
                "secondaryColor": "#111111",
                "fontFamily": "Inter",
                "layout": "brutalist"
            }
        }))
        .unwrap();
        match decoded {
            DecodedAction::Known(ResumeAction::SetTheme(theme)) => {
                assert_eq!(theme.id, "custom");
                assert_eq!(theme.layout, ThemeLayout::Modern);
            }
            other => panic!("unexpected decode: {other:?}"),
        }
    }

    #[test]
    fn update_personal_info_accepts_partial_payload() {
        let decoded = decode_action(&json!({
            "type": "UPDATE_PERSONAL_INFO",
            "payload": { "fullName": "Grace Hopper" }
        }))
        .unwrap();
        match decoded {
            DecodedAction::Known(ResumeAction::UpdatePersonalInfo(patch)) => {
                assert_eq!(patch.full_name.as_deref(), Some("Grace Hopper"));
                assert_eq!(patch.email, None);
            }
            other => panic!("unexpected decode: {other:?}"),
        }
    }
}
