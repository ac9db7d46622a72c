//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical task record and its two closed variants.
//! - Own the per-variant behavior: type label, execution and rendering.
//!
//! # Invariants
//! - Every task is identified by a registry-assigned `TaskId`.
//! - Priority text is stored upper-cased.
//! - `completed` starts `false` and only ever moves to `true`.

pub mod task;
