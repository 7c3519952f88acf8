//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define storage contracts for categories, items and app settings.
//! - Isolate SQL from service orchestration.
//!
//! # Invariants
//! - Category writes validate the model before touching SQL.
//! - Missing rows surface as `RepoError::NotFound`, not silent no-ops.

pub mod category_repo;
pub mod item_repo;
pub mod settings_repo;
