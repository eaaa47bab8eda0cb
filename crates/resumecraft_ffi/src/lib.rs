//! Flutter-facing bindings for ResumeCraft.

pub mod api;
