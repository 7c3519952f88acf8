//! Per-item reminder cleanup run before an item is deleted.

use super::{CalendarStore, EventSpan, NotificationCenter};
use crate::model::item::{Item, ItemId};
use log::{debug, warn};

/// Outcome of one cleanup step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupStep {
    /// Nothing linked, no call made.
    Skipped,
    /// Collaborator call succeeded.
    Done,
    /// Calendar lookup found no event for the stored id.
    NotFound,
    /// Collaborator call failed; the message was logged.
    Failed(String),
}

impl CleanupStep {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCleanupReport {
    pub item_uuid: ItemId,
    pub notification: CleanupStep,
    pub calendar: CleanupStep,
}

impl ItemCleanupReport {
    pub fn has_failures(&self) -> bool {
        self.notification.is_failure() || self.calendar.is_failure()
    }
}

/// Removes an item's pending notification and linked calendar event.
pub struct ReminderCleanup<N, C> {
    notifications: N,
    calendar: C,
}

impl<N: NotificationCenter, C: CalendarStore> ReminderCleanup<N, C> {
    pub fn new(notifications: N, calendar: C) -> Self {
        Self {
            notifications,
            calendar,
        }
    }

    /// Runs both cleanup steps for one item.
    ///
    /// Never fails: each step logs its own error and the next step still runs.
    pub fn cleanup_item(&self, item: &Item) -> ItemCleanupReport {
        ItemCleanupReport {
            item_uuid: item.uuid,
            notification: self.cancel_notification(item),
            calendar: self.remove_calendar_event(item),
        }
    }

    fn cancel_notification(&self, item: &Item) -> CleanupStep {
        let Some(identifier) = item.notification_identifier() else {
            return CleanupStep::Skipped;
        };

        match self.notifications.cancel_pending(&identifier) {
            Ok(()) => {
                debug!(
                    "event=item_cleanup module=reminder status=ok step=notification item_uuid={}",
                    item.uuid
                );
                CleanupStep::Done
            }
            Err(err) => {
                warn!(
                    "event=item_cleanup module=reminder status=error step=notification item_uuid={} error={}",
                    item.uuid, err
                );
                CleanupStep::Failed(err.to_string())
            }
        }
    }

    fn remove_calendar_event(&self, item: &Item) -> CleanupStep {
        let Some(event_id) = item.event_id.as_deref() else {
            return CleanupStep::Skipped;
        };

        let event = match self.calendar.find_event(event_id) {
            Ok(Some(event)) => event,
            Ok(None) => {
                debug!(
                    "event=item_cleanup module=reminder status=ok step=calendar item_uuid={} result=not_found",
                    item.uuid
                );
                return CleanupStep::NotFound;
            }
            Err(err) => {
                warn!(
                    "event=item_cleanup module=reminder status=error step=calendar_lookup item_uuid={} error={}",
                    item.uuid, err
                );
                return CleanupStep::Failed(err.to_string());
            }
        };

        match self.calendar.remove_event(&event, EventSpan::ThisEvent) {
            Ok(()) => {
                debug!(
                    "event=item_cleanup module=reminder status=ok step=calendar item_uuid={}",
                    item.uuid
                );
                CleanupStep::Done
            }
            Err(err) => {
                warn!(
                    "event=item_cleanup module=reminder status=error step=calendar_remove item_uuid={} error={}",
                    item.uuid, err
                );
                CleanupStep::Failed(err.to_string())
            }
        }
    }
}
