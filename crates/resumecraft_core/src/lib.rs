//! Core domain logic for ResumeCraft.
//! This crate is the single source of truth for resume document invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod preview;
pub mod repo;
pub mod service;
pub mod state;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::ResumeDocument;
pub use model::personal::{PersonalInfo, PersonalInfoPatch};
pub use model::section::{default_sections, SectionDescriptor, SectionType};
pub use model::theme::{find_theme_preset, theme_presets, Theme, ThemeLayout};
pub use model::validation::ModelValidationError;
pub use normalize::{normalize_document, normalize_value};
pub use preview::style::{layout_style, LayoutStyle};
pub use preview::text::render_text;
pub use preview::{preview_sections, PreviewSection};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, StoredSnapshot,
};
pub use service::export_service::{export_request, ExportRequest};
pub use service::share_service::{share_draft, ShareDraft};
pub use service::snapshot_service::{
    PersistenceNotice, SnapshotError, SnapshotService, RESUME_SNAPSHOT_KEY,
};
pub use state::action::{decode_action, ActionDecodeError, DecodedAction, ResumeAction};
pub use state::reducer::{Reducer, ResumeReducer, ResumeState};
pub use state::store::ResumeStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
