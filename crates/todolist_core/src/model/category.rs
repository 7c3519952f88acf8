//! Category domain model.
//!
//! # Responsibility
//! - Define the named, colored grouping that owns to-do items.
//! - Validate user input before anything reaches storage.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another category.
//! - `name` is never empty. Validation checks the raw string, so
//!   whitespace-only names are accepted.
//! - `items` keeps insertion (display) order.

use crate::model::color::HexColor;
use crate::model::item::Item;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a category.
pub type CategoryId = Uuid;

/// Validation failures for category input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryValidationError {
    /// The submitted name was the empty string.
    EmptyName,
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "category name cannot be empty"),
        }
    }
}

impl Error for CategoryValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub uuid: CategoryId,
    pub name: String,
    pub color: HexColor,
    /// Owned items. Deleting the category deletes all of them.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Category {
    /// Creates a category with a generated ID and a random flat color.
    pub fn new(name: impl Into<String>) -> Result<Self, CategoryValidationError> {
        Self::with_color(name, HexColor::random_flat())
    }

    pub fn with_color(
        name: impl Into<String>,
        color: HexColor,
    ) -> Result<Self, CategoryValidationError> {
        Self::with_id(Uuid::new_v4(), name, color)
    }

    /// Creates a category with a caller-provided stable ID.
    ///
    /// Used by storage read paths where identity already exists.
    pub fn with_id(
        uuid: CategoryId,
        name: impl Into<String>,
        color: HexColor,
    ) -> Result<Self, CategoryValidationError> {
        let category = Self {
            uuid,
            name: name.into(),
            color,
            items: Vec::new(),
        };
        category.validate()?;
        Ok(category)
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(())
    }

    /// Attaches one new item to this category, keeping insertion order.
    pub fn push_item(&mut self, title: impl Into<String>) -> &mut Item {
        let item = Item::new(self.uuid, title);
        self.items.push(item);
        let last = self.items.len() - 1;
        &mut self.items[last]
    }
}
