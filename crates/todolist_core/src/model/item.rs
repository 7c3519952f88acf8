//! Item domain model.
//!
//! # Responsibility
//! - Define one to-do entry and its links to device reminders.
//!
//! # Invariants
//! - `category_uuid` always points at the owning category.
//! - `date_created` set means a local notification was scheduled under
//!   [`notification_identifier`].
//! - `event_id` set means a calendar event was linked.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an item.
pub type ItemId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub uuid: ItemId,
    /// Back-reference only. Ownership runs category -> items.
    pub category_uuid: CategoryId,
    pub title: String,
    /// Unix epoch milliseconds.
    pub date_created: Option<i64>,
    /// External calendar event identifier.
    pub event_id: Option<String>,
}

impl Item {
    pub fn new(category_uuid: CategoryId, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), category_uuid, title)
    }

    pub fn with_id(uuid: ItemId, category_uuid: CategoryId, title: impl Into<String>) -> Self {
        Self {
            uuid,
            category_uuid,
            title: title.into(),
            date_created: None,
            event_id: None,
        }
    }

    /// Returns the pending-notification key for this item, if one was scheduled.
    pub fn notification_identifier(&self) -> Option<String> {
        self.date_created
            .map(|created| notification_identifier(&self.title, created))
    }
}

/// Builds the local notification key `id_<title>-<date_created>`.
///
/// Scheduling and cancellation must both go through this function so the
/// keys always match.
pub fn notification_identifier(title: &str, date_created: i64) -> String {
    format!("id_{title}-{date_created}")
}

#[cfg(test)]
mod tests {
    use super::{notification_identifier, Item};
    use uuid::Uuid;

    #[test]
    fn notification_identifier_concatenates_title_and_timestamp() {
        assert_eq!(
            notification_identifier("Buy milk", 1_700_000_000_000),
            "id_Buy milk-1700000000000"
        );
    }

    #[test]
    fn item_without_date_has_no_notification() {
        let mut item = Item::new(Uuid::new_v4(), "Call mom");
        assert_eq!(item.notification_identifier(), None);

        item.date_created = Some(42);
        assert_eq!(item.notification_identifier().as_deref(), Some("id_Call mom-42"));
    }
}
