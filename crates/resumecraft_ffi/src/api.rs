//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single editing session (one `ResumeStore` per process).
//! - Keep error semantics simple: every failure becomes an envelope message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The session store is only mutated through `ResumeStore::dispatch*`.
//! - Persistence failures never touch the in-memory session.
//! - Structured payloads cross the boundary as camelCase JSON strings.

use log::warn;
use once_cell::sync::Lazy;
use resumecraft_core::db::open_db;
use resumecraft_core::preview::style::layout_style;
use resumecraft_core::{
    core_version as core_version_inner, decode_action, export_request,
    init_logging as init_logging_inner, ping as ping_inner, render_text, share_draft,
    theme_presets, PersistenceNotice, ResumeAction, ResumeStore, SnapshotError, SnapshotService,
    SqliteSnapshotRepository,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

const SESSION_DB_FILE_NAME: &str = "resumecraft_session.sqlite3";
const DB_PATH_ENV: &str = "RESUMECRAFT_DB_PATH";
static SESSION_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION: Lazy<Mutex<ResumeStore>> = Lazy::new(|| Mutex::new(ResumeStore::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Envelope for calls returning a JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonResponse {
    pub ok: bool,
    /// Serialized payload; empty on failure.
    pub json: String,
    pub message: String,
}

impl JsonResponse {
    fn encode(value: &impl Serialize, label: &str) -> Self {
        match serde_json::to_string(value) {
            Ok(json) => Self {
                ok: true,
                json,
                message: String::new(),
            },
            Err(err) => Self {
                ok: false,
                json: String::new(),
                message: format!("{label} failed: {err}"),
            },
        }
    }
}

/// Result of one dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    /// Input decoded; `false` for malformed JSON or payloads.
    pub ok: bool,
    /// State changed; `false` for unknown action tags.
    pub applied: bool,
    /// Session revision after the call.
    pub revision: u64,
    pub message: String,
}

/// Result of save/load against the snapshot store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceResponse {
    pub ok: bool,
    /// Load only: a stored snapshot was found and applied.
    pub loaded: bool,
    /// Transient notice for the UI.
    pub message: String,
}

impl PersistenceResponse {
    fn from_notice(notice: PersistenceNotice, loaded: bool) -> Self {
        Self {
            ok: !notice.is_error(),
            loaded,
            message: notice.message,
        }
    }
}

/// Prefilled email draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareResponse {
    pub subject: String,
    pub body: String,
    pub mailto_url: String,
}

/// Current session state (`{document, theme, isPreviewMode}`) as JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_state_json() -> JsonResponse {
    let state = lock_session().snapshot();
    JsonResponse::encode(&state, "resume_state_json")
}

/// Applies one JSON action `{"type": TAG, "payload": ...}` to the session.
///
/// # FFI contract
/// - Unknown tags are accepted and ignored (`ok=true`, `applied=false`).
/// - Malformed input returns `ok=false` and leaves the session unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_dispatch(action_json: String) -> DispatchResponse {
    let mut session = lock_session();
    let failure = |revision: u64, message: String| DispatchResponse {
        ok: false,
        applied: false,
        revision,
        message,
    };

    let value = match serde_json::from_str::<serde_json::Value>(&action_json) {
        Ok(value) => value,
        Err(err) => {
            return failure(
                session.revision(),
                format!("resume_dispatch failed: invalid JSON: {err}"),
            )
        }
    };
    let decoded = match decode_action(&value) {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!("event=dispatch module=ffi status=error error={err}");
            return failure(
                session.revision(),
                format!("resume_dispatch failed: {err}"),
            );
        }
    };

    let applied = session.dispatch_decoded(decoded);
    DispatchResponse {
        ok: true,
        applied,
        revision: session.revision(),
        message: if applied {
            "Action applied.".to_string()
        } else {
            "Unknown action ignored.".to_string()
        },
    }
}

/// Saves the session document to the snapshot store.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_save() -> PersistenceResponse {
    let document = lock_session().state().document.clone();
    let notice = match with_snapshot_service(|service| Ok(service.save_with_notice(&document))) {
        Ok(notice) => notice,
        Err(message) => PersistenceNotice::error(message),
    };
    PersistenceResponse::from_notice(notice, false)
}

/// Loads the stored document into the session, if one exists.
///
/// The stored value is normalized before it replaces the session document.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_load() -> PersistenceResponse {
    match with_snapshot_service(|service| {
        service
            .load_document()
            .map_err(|err| PersistenceNotice::from(&err).message)
    }) {
        Ok(Some(document)) => {
            lock_session().dispatch(ResumeAction::LoadResume(document));
            PersistenceResponse {
                ok: true,
                loaded: true,
                message: "Resume loaded.".to_string(),
            }
        }
        Ok(None) => PersistenceResponse {
            ok: true,
            loaded: false,
            message: "No saved resume found.".to_string(),
        },
        Err(message) => PersistenceResponse::from_notice(PersistenceNotice::error(message), false),
    }
}

/// Builds the share-by-email draft for the session document.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_share_draft() -> ShareResponse {
    let draft = share_draft(&lock_session().state().document);
    ShareResponse {
        subject: draft.subject,
        body: draft.body,
        mailto_url: draft.mailto_url,
    }
}

/// PDF export job for the session document and theme, as JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_export_request_json() -> JsonResponse {
    let request = {
        let session = lock_session();
        let state = session.state();
        export_request(&state.document, &state.theme)
    };
    JsonResponse::encode(&request, "resume_export_request_json")
}

/// Plain-text preview of the session document.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_preview_text() -> String {
    render_text(&lock_session().state().document).join("\n")
}

/// Resolved layout style of the active theme, as JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_preview_style_json() -> JsonResponse {
    let style = layout_style(&lock_session().state().theme);
    JsonResponse::encode(&style, "resume_preview_style_json")
}

/// Built-in theme presets, as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_presets_json() -> JsonResponse {
    JsonResponse::encode(&theme_presets(), "theme_presets_json")
}

fn lock_session() -> MutexGuard<'static, ResumeStore> {
    // Poison is recovered: the store always holds a complete state value.
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn resolve_session_db_path() -> PathBuf {
    SESSION_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SESSION_DB_FILE_NAME)
        })
        .clone()
}

fn with_snapshot_service<T>(
    f: impl FnOnce(&SnapshotService<SqliteSnapshotRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_session_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        PersistenceNotice::from(&SnapshotError::Repo(err.into())).message
    })?;
    let repo = SqliteSnapshotRepository::try_new(&conn)
        .map_err(|err| PersistenceNotice::from(&SnapshotError::Repo(err)).message)?;
    let service = SnapshotService::new(repo);
    f(&service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    // Tests share the process-wide session.
    static SESSION_TEST_LOCK: Mutex<()> = Mutex::new(());
    static TEST_DB_DIR: Lazy<tempfile::TempDir> =
        Lazy::new(|| tempfile::tempdir().expect("create test db dir"));

    fn exclusive() -> MutexGuard<'static, ()> {
        SESSION_DB_PATH.get_or_init(|| TEST_DB_DIR.path().join(SESSION_DB_FILE_NAME));
        SESSION_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn state() -> Value {
        let response = resume_state_json();
        assert!(response.ok, "{}", response.message);
        serde_json::from_str(&response.json).unwrap()
    }

    fn set_name(name: &str) {
        let response = resume_dispatch(
            json!({"type": "UPDATE_PERSONAL_INFO", "payload": {"fullName": name}}).to_string(),
        );
        assert!(response.applied, "{}", response.message);
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn dispatch_applies_known_action() {
        let _guard = exclusive();
        set_name("Grace Hopper");
        assert_eq!(state()["document"]["personalInfo"]["fullName"], "Grace Hopper");
    }

    #[test]
    fn dispatch_ignores_unknown_tag() {
        let _guard = exclusive();
        let before = state();
        let response = resume_dispatch(json!({"type": "RESET_EVERYTHING"}).to_string());
        assert!(response.ok);
        assert!(!response.applied);
        assert_eq!(state(), before);
    }

    #[test]
    fn dispatch_rejects_malformed_input() {
        let _guard = exclusive();
        let before = state();

        let response = resume_dispatch("{not json".to_string());
        assert!(!response.ok);

        let response = resume_dispatch(
            json!({"type": "UPDATE_EXPERIENCE", "payload": {"not": "a list"}}).to_string(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("UPDATE_EXPERIENCE"));
        assert_eq!(state(), before);
    }

    #[test]
    fn save_then_load_restores_saved_document() {
        let _guard = exclusive();
        set_name("Saved Name");
        let saved = resume_save();
        assert!(saved.ok, "{}", saved.message);
        assert_eq!(saved.message, "Resume saved successfully!");

        set_name("Unsaved Name");
        let loaded = resume_load();
        assert!(loaded.ok, "{}", loaded.message);
        assert!(loaded.loaded);
        assert_eq!(state()["document"]["personalInfo"]["fullName"], "Saved Name");
    }

    #[test]
    fn session_database_lives_in_test_dir() {
        let _guard = exclusive();
        let path = resolve_session_db_path();
        assert!(path.starts_with(TEST_DB_DIR.path()));
    }

    #[test]
    fn share_draft_uses_session_name() {
        let _guard = exclusive();
        set_name("Share Person");
        let draft = resume_share_draft();
        assert_eq!(draft.subject, "My Resume - Share Person");
        assert!(draft.mailto_url.starts_with("mailto:?subject=My%20Resume%20-%20Share%20Person"));
    }

    #[test]
    fn export_request_names_file_after_person() {
        let _guard = exclusive();
        set_name("Export Person");
        let response = resume_export_request_json();
        assert!(response.ok, "{}", response.message);
        let request: Value = serde_json::from_str(&response.json).unwrap();
        assert_eq!(request["filename"], "Export Person.pdf");
    }

    #[test]
    fn preview_style_includes_layout_description() {
        let _guard = exclusive();
        let response = resume_preview_style_json();
        assert!(response.ok, "{}", response.message);
        let style: Value = serde_json::from_str(&response.json).unwrap();
        assert!(!style["description"].as_str().unwrap_or_default().is_empty());
    }

    #[test]
    fn theme_presets_lists_all_layouts() {
        let response = theme_presets_json();
        let presets: Vec<Value> = serde_json::from_str(&response.json).unwrap();
        assert_eq!(presets.len(), 8);
    }

    #[test]
    fn preview_text_starts_with_name() {
        let _guard = exclusive();
        set_name("Preview Person");
        assert!(resume_preview_text().starts_with("Preview Person"));
    }
}
