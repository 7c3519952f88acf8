//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repositories and reminder collaborators into screen-level
//!   flows.
//! - Keep UI layers decoupled from storage and platform APIs.

pub mod category_service;
pub mod launch_service;
