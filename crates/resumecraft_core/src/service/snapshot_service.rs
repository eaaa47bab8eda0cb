//! Resume persistence use-case service.
//!
//! # Responsibility
//! - Save the whole document as one JSON snapshot under a fixed key.
//! - Restore a snapshot through the normalization pass.
//! - Translate failures into a transient user notice.
//!
//! # Invariants
//! - A failed save or load never mutates caller state; the service only
//!   reads the document it is given and returns a fresh one on load.
//! - Loaded documents are always normalized.
//! - Log lines carry key, revision and counts, never resume content.

use crate::model::document::ResumeDocument;
use crate::normalize::normalize_value;
use crate::repo::snapshot_repo::{RepoError, SnapshotRepository};
use log::{info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the resume snapshot.
pub const RESUME_SNAPSHOT_KEY: &str = "resumeData";

/// Notice text shown after a successful save.
pub const SAVE_SUCCESS_MESSAGE: &str = "Resume saved successfully!";

/// Errors from snapshot persistence.
#[derive(Debug)]
pub enum SnapshotError {
    /// Repository-level failure.
    Repo(RepoError),
    /// Document could not be serialized.
    Serialize(serde_json::Error),
    /// Stored text is not valid JSON.
    Corrupt(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize resume: {err}"),
            Self::Corrupt(err) => write!(f, "stored resume is not valid JSON: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Serialize(err) | Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<RepoError> for SnapshotError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Severity of a persistence notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient message for the UI after save/load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceNotice {
    pub level: NoticeLevel,
    pub message: String,
}

impl PersistenceNotice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&SnapshotError> for PersistenceNotice {
    fn from(value: &SnapshotError) -> Self {
        match value {
            SnapshotError::Corrupt(_) => Self::error("Failed to load resume data"),
            SnapshotError::Serialize(_) => Self::error("Failed to save resume data"),
            SnapshotError::Repo(err) => Self::error(format!("Storage unavailable: {err}")),
        }
    }
}

/// Use-case service wrapper for resume snapshots.
pub struct SnapshotService<R: SnapshotRepository> {
    repo: R,
}

impl<R: SnapshotRepository> SnapshotService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Writes `document` under [`RESUME_SNAPSHOT_KEY`].
    ///
    /// Returns the stored revision.
    pub fn save_document(&self, document: &ResumeDocument) -> Result<i64, SnapshotError> {
        let payload = serde_json::to_string(document).map_err(SnapshotError::Serialize)?;
        match self.repo.put(RESUME_SNAPSHOT_KEY, &payload) {
            Ok(revision) => {
                info!(
                    "event=snapshot_save module=service status=ok key={RESUME_SNAPSHOT_KEY} revision={revision} bytes={} entries={}",
                    payload.len(),
                    document.total_entries()
                );
                Ok(revision)
            }
            Err(err) => {
                warn!(
                    "event=snapshot_save module=service status=error key={RESUME_SNAPSHOT_KEY} error={err}"
                );
                Err(err.into())
            }
        }
    }

    /// Reads and normalizes the stored document.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    pub fn load_document(&self) -> Result<Option<ResumeDocument>, SnapshotError> {
        let stored = match self.repo.get(RESUME_SNAPSHOT_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(
                    "event=snapshot_load module=service status=error key={RESUME_SNAPSHOT_KEY} error={err}"
                );
                return Err(err.into());
            }
        };

        let Some(stored) = stored else {
            info!("event=snapshot_load module=service status=missing key={RESUME_SNAPSHOT_KEY}");
            return Ok(None);
        };

        let value: Value = match serde_json::from_str(&stored.value) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=snapshot_load module=service status=error key={RESUME_SNAPSHOT_KEY} revision={} reason=invalid_json",
                    stored.revision
                );
                return Err(SnapshotError::Corrupt(err));
            }
        };

        let document = normalize_value(&value);
        info!(
            "event=snapshot_load module=service status=ok key={RESUME_SNAPSHOT_KEY} revision={} entries={}",
            stored.revision,
            document.total_entries()
        );
        Ok(Some(document))
    }

    /// Removes the stored snapshot; returns whether one existed.
    pub fn clear(&self) -> Result<bool, SnapshotError> {
        Ok(self.repo.delete(RESUME_SNAPSHOT_KEY)?)
    }

    /// Saves and maps the outcome to a user notice.
    pub fn save_with_notice(&self, document: &ResumeDocument) -> PersistenceNotice {
        match self.save_document(document) {
            Ok(_) => PersistenceNotice::success(SAVE_SUCCESS_MESSAGE),
            Err(err) => PersistenceNotice::from(&err),
        }
    }
}
