//! Domain model for categories and their to-do items.
//!
//! # Responsibility
//! - Define the data structures shared by storage, cleanup and services.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Items are owned by exactly one category.

pub mod category;
pub mod color;
pub mod item;
