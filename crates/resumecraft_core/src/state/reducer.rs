//! Pure reducer over the application state.
//!
//! # Invariants
//! - `reduce` has no side effects other than diagnostic logging.
//! - Every action yields a fully-formed state; nothing is partially applied.
//! - Loaded documents are normalized before they enter the state.

use crate::model::document::ResumeDocument;
use crate::model::theme::Theme;
use crate::normalize::normalize_document;
use crate::state::action::ResumeAction;
use log::debug;
use serde::{Deserialize, Serialize};

/// Reducer contract: the only place where state transitions happen.
pub trait Reducer {
    type State;
    type Action;

    /// Processes an action and returns the next state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// Whole application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeState {
    pub document: ResumeDocument,
    pub theme: Theme,
    /// `true` while the preview is shown instead of the editing forms.
    pub is_preview_mode: bool,
}

impl Default for ResumeState {
    /// Fresh session: empty collections, seeded sections, Modern Blue, edit mode.
    fn default() -> Self {
        Self {
            document: ResumeDocument::default(),
            theme: Theme::default(),
            is_preview_mode: false,
        }
    }
}

/// Reducer for [`ResumeState`].
pub struct ResumeReducer;

impl Reducer for ResumeReducer {
    type State = ResumeState;
    type Action = ResumeAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let ResumeState {
            mut document,
            theme,
            is_preview_mode,
        } = state;

        match action {
            ResumeAction::UpdatePersonalInfo(patch) => {
                document.personal_info = document.personal_info.apply(patch);
            }
            ResumeAction::UpdateTechnicalSummary(items) => document.technical_summary = items,
            ResumeAction::UpdateExperience(items) => document.experience = items,
            ResumeAction::UpdateEducation(items) => document.education = items,
            ResumeAction::UpdateProjects(items) => document.projects = items,
            ResumeAction::UpdateCertifications(items) => document.certifications = items,
            ResumeAction::UpdateSkills(items) => document.skills = items,
            ResumeAction::UpdateLanguages(items) => document.languages = items,
            ResumeAction::UpdateCareerObjective(items) => document.career_objective = items,
            ResumeAction::UpdateProblemSolving(items) => document.problem_solving = items,
            ResumeAction::UpdateAchievements(items) => document.achievements = items,
            ResumeAction::UpdateVolunteerWork(items) => document.volunteer_work = items,
            ResumeAction::UpdateSections(sections) => document.sections = sections,
            ResumeAction::SetTheme(next_theme) => {
                return ResumeState {
                    document,
                    theme: next_theme,
                    is_preview_mode,
                };
            }
            ResumeAction::TogglePreviewMode => {
                return ResumeState {
                    document,
                    theme,
                    is_preview_mode: !is_preview_mode,
                };
            }
            ResumeAction::LoadResume(loaded) => {
                let normalized = normalize_document(loaded);
                debug!(
                    "event=load_normalized module=state status=ok entries={}",
                    normalized.total_entries()
                );
                document = normalized;
            }
        }

        ResumeState {
            document,
            theme,
            is_preview_mode,
        }
    }
}
