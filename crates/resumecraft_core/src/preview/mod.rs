//! Read-only projection of a document for display.
//!
//! # Responsibility
//! - Decide which sections render and in which order.
//! - Resolve the layout style of the active theme.
//! - Render a plain-text preview for the CLI and FFI callers.
//!
//! # Invariants
//! - Projection never mutates the document.
//! - A section renders only when enabled and when it has content.

pub mod style;
pub mod text;

use crate::model::document::ResumeDocument;
use crate::model::section::SectionType;
use crate::state::sections::visible_sections;
use serde::Serialize;

/// One section the preview will render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub title: String,
    pub entry_count: usize,
}

/// Enabled sections with content, in display order.
pub fn preview_sections(document: &ResumeDocument) -> Vec<PreviewSection> {
    visible_sections(&document.sections)
        .into_iter()
        .filter(|section| document.has_content(section.kind))
        .map(|section| PreviewSection {
            entry_count: document.entry_count(section.kind),
            id: section.id,
            kind: section.kind,
            title: section.title,
        })
        .collect()
}
