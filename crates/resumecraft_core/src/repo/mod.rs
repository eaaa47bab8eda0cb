//! Repository layer for local persistence.
//!
//! # Responsibility
//! - Define the key-value snapshot contract used by the persistence service.
//! - Isolate SQLite query details from services.
//!
//! # Invariants
//! - Repositories only accept migrated connections.
//! - Semantic errors (`EmptyKey`, `InvalidData`) are distinct from transport
//!   errors (`Db`).

pub mod snapshot_repo;
