use resumecraft_core::db::{open_db, open_db_in_memory};
use resumecraft_core::model::entry::{Education, Entry, Experience, Project};
use resumecraft_core::service::snapshot_service::SAVE_SUCCESS_MESSAGE;
use resumecraft_core::{
    PersistenceNotice, RepoError, ResumeAction, ResumeDocument, ResumeStore, SnapshotError,
    SnapshotRepository, SnapshotService, SqliteSnapshotRepository, RESUME_SNAPSHOT_KEY,
};
use rusqlite::Connection;

fn sample_document() -> ResumeDocument {
    let mut document = ResumeDocument::default();
    document.personal_info.full_name = "Ada Lovelace".to_string();
    document.personal_info.linkedin = Some("https://linkedin.com/in/ada".to_string());
    document.experience.push(Experience {
        job_title: "Analyst".to_string(),
        responsibilities: vec!["Wrote the first program".to_string()],
        ..Experience::blank()
    });
    document
}

#[test]
fn put_get_roundtrip_and_revision_increments() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();

    assert_eq!(repo.put("resumeData", "{}").unwrap(), 1);
    assert_eq!(repo.put(" resumeData ", "{\"a\":1}").unwrap(), 2);

    let stored = repo.get("resumeData").unwrap().unwrap();
    assert_eq!(stored.key, "resumeData");
    assert_eq!(stored.value, "{\"a\":1}");
    assert_eq!(stored.revision, 2);
    assert!(stored.updated_at > 0);
    assert_eq!(repo.keys().unwrap(), vec!["resumeData".to_string()]);
}

#[test]
fn blank_key_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();

    assert!(matches!(repo.put("  ", "{}"), Err(RepoError::EmptyKey)));
    assert!(matches!(repo.get(""), Err(RepoError::EmptyKey)));
}

#[test]
fn repository_requires_migrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let result = SqliteSnapshotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        })
    ));
}

#[test]
fn missing_snapshot_loads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let service = SnapshotService::new(SqliteSnapshotRepository::try_new(&conn).unwrap());
    assert!(service.load_document().unwrap().is_none());
}

#[test]
fn save_reload_roundtrip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.sqlite3");
    let document = sample_document();

    {
        let conn = open_db(&path).unwrap();
        let service = SnapshotService::new(SqliteSnapshotRepository::try_new(&conn).unwrap());
        let notice = service.save_with_notice(&document);
        assert_eq!(notice, PersistenceNotice::success(SAVE_SUCCESS_MESSAGE));
    }

    let conn = open_db(&path).unwrap();
    let service = SnapshotService::new(SqliteSnapshotRepository::try_new(&conn).unwrap());
    let loaded = service.load_document().unwrap().unwrap();
    assert_eq!(loaded, document);

    // Persist the reloaded value again: the second round-trip is stable.
    service.save_document(&loaded).unwrap();
    assert_eq!(service.load_document().unwrap().unwrap(), document);
}

#[test]
fn partial_snapshot_is_normalized_on_load() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    repo.put(
        RESUME_SNAPSHOT_KEY,
        r#"{"personalInfo":{"fullName":"Old Schema"},"experience":[{"jobTitle":"Clerk"}]}"#,
    )
    .unwrap();

    let service = SnapshotService::new(repo);
    let loaded = service.load_document().unwrap().unwrap();
    assert_eq!(loaded.personal_info.full_name, "Old Schema");
    assert_eq!(loaded.sections.len(), 11);
    assert!(loaded.experience[0].responsibilities.is_empty());
    assert!(!loaded.experience[0].id.is_empty());
}

#[test]
fn corrupt_snapshot_leaves_store_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    repo.put(RESUME_SNAPSHOT_KEY, "{truncated").unwrap();
    let service = SnapshotService::new(repo);

    let mut store = ResumeStore::new();
    store.dispatch(ResumeAction::TogglePreviewMode);
    let before = store.snapshot();

    match service.load_document() {
        Ok(Some(document)) => {
            store.dispatch(ResumeAction::LoadResume(document));
        }
        Ok(None) => panic!("snapshot should exist"),
        Err(err) => {
            assert!(matches!(err, SnapshotError::Corrupt(_)));
            assert!(PersistenceNotice::from(&err).is_error());
        }
    }
    assert_eq!(store.snapshot(), before);
}

#[test]
fn clear_removes_saved_document() {
    let conn = open_db_in_memory().unwrap();
    let service = SnapshotService::new(SqliteSnapshotRepository::try_new(&conn).unwrap());
    service.save_document(&sample_document()).unwrap();

    assert!(service.clear().unwrap());
    assert!(service.load_document().unwrap().is_none());
}

#[test]
fn loaded_document_with_cleared_inputs_survives_save_and_reload() {
    let mut raw = sample_document();
    raw.education.push(Education {
        degree: "BSc".to_string(),
        percentage: Some(String::new()),
        ..Education::blank()
    });
    raw.projects.push(Project {
        title: "Engine".to_string(),
        github_link: Some(String::new()),
        ..Project::blank()
    });

    let mut store = ResumeStore::new();
    store.dispatch(ResumeAction::LoadResume(raw));
    let loaded = store.state().document.clone();
    assert!(loaded.education[0].percentage.is_none());
    assert!(loaded.projects[0].github_link.is_none());

    let conn = open_db_in_memory().unwrap();
    let service = SnapshotService::new(SqliteSnapshotRepository::try_new(&conn).unwrap());
    service.save_document(&loaded).unwrap();
    assert_eq!(service.load_document().unwrap().unwrap(), loaded);
}
