//! Core use-case services.
//!
//! # Responsibility
//! - Own id assignment and orchestrate repository calls into registry APIs.
//! - Keep the CLI decoupled from storage details.

pub mod task_service;
