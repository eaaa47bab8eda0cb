//! Resume document model.
//!
//! # Responsibility
//! - Define the typed shape of one resume: personal info, section
//!   descriptors and one entry collection per repeatable section.
//! - Define themes and the closed vocabularies (section kinds, layouts).
//!
//! # Invariants
//! - Every entry carries a stable, non-empty id unique within its collection.
//! - Exactly one section descriptor exists per `SectionType`.
//! - Collections are always present (possibly empty), never absent.

pub mod document;
pub mod entry;
pub mod personal;
pub mod section;
pub mod theme;
pub mod validation;
