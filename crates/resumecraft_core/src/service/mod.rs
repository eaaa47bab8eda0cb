//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Build outbound artifacts (share draft, export job) from a document.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod export_service;
pub mod share_service;
pub mod snapshot_service;
