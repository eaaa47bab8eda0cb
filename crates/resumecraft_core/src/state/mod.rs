//! Application state machine.
//!
//! # Responsibility
//! - Define the tagged action set and the pure reducer over `ResumeState`.
//! - Own the current state behind one dispatch entry point.
//! - Provide caller-side helpers that compute next collections/sections.
//!
//! # Invariants
//! - Only the reducer produces new state versions.
//! - Actions are applied synchronously, in dispatch order.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Preview / Persistence / Export
//!    ↑                                │
//!    └──────── collection helpers ────┘
//! ```

pub mod action;
pub mod collections;
pub mod reducer;
pub mod sections;
pub mod store;
