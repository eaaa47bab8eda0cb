//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `resumecraft_core` linkage.
//! - Print a text preview of a saved resume: `resumecraft_cli [db_path]`.

use resumecraft_core::{
    core_version, open_db, ping, render_text, SnapshotService, SqliteSnapshotRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("resumecraft_core ping={}", ping());
    println!("resumecraft_core version={}", core_version());

    let Some(db_path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match preview(&db_path) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("resumecraft_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn preview(db_path: &str) -> Result<Vec<String>, String> {
    let conn = open_db(db_path).map_err(|err| format!("open {db_path} failed: {err}"))?;
    let repo = SqliteSnapshotRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let service = SnapshotService::new(repo);
    match service.load_document().map_err(|err| err.to_string())? {
        Some(document) => Ok(render_text(&document)),
        None => Ok(vec!["(no saved resume)".to_string()]),
    }
}
