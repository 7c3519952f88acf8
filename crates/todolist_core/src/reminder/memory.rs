//! In-process reminder collaborators.
//!
//! Record every call and can be told to fail, so the cleanup path can be
//! driven without a device. The CLI uses them as stand-ins for the
//! platform services.

use super::{
    CalendarEvent, CalendarLookupError, CalendarRemovalError, CalendarStore, EventSpan,
    NotificationCancelError, NotificationCenter,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct InMemoryNotificationCenter {
    cancelled: RefCell<Vec<String>>,
    failure: RefCell<Option<String>>,
}

impl InMemoryNotificationCenter {
    /// Makes every following cancel call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.borrow_mut() = Some(message.into());
    }

    /// Identifiers passed to successful cancel calls, in call order.
    pub fn cancelled(&self) -> Vec<String> {
        self.cancelled.borrow().clone()
    }
}

impl NotificationCenter for InMemoryNotificationCenter {
    fn cancel_pending(&self, identifier: &str) -> Result<(), NotificationCancelError> {
        if let Some(message) = self.failure.borrow().as_ref() {
            return Err(NotificationCancelError {
                identifier: identifier.to_string(),
                message: message.clone(),
            });
        }
        self.cancelled.borrow_mut().push(identifier.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCalendarStore {
    events: RefCell<BTreeMap<String, CalendarEvent>>,
    removals: RefCell<Vec<(String, EventSpan)>>,
    lookups: Cell<usize>,
    lookup_failure: RefCell<Option<String>>,
    removal_failure: RefCell<Option<String>>,
}

impl InMemoryCalendarStore {
    pub fn insert_event(&self, event_id: impl Into<String>, title: impl Into<String>) {
        let event_id = event_id.into();
        self.events.borrow_mut().insert(
            event_id.clone(),
            CalendarEvent {
                event_id,
                title: title.into(),
            },
        );
    }

    pub fn contains_event(&self, event_id: &str) -> bool {
        self.events.borrow().contains_key(event_id)
    }

    pub fn fail_lookups_with(&self, message: impl Into<String>) {
        *self.lookup_failure.borrow_mut() = Some(message.into());
    }

    pub fn fail_removals_with(&self, message: impl Into<String>) {
        *self.removal_failure.borrow_mut() = Some(message.into());
    }

    /// Number of `find_event` calls, including failed ones.
    pub fn lookup_count(&self) -> usize {
        self.lookups.get()
    }

    /// Successful removals as `(event_id, span)`, in call order.
    pub fn removals(&self) -> Vec<(String, EventSpan)> {
        self.removals.borrow().clone()
    }
}

impl CalendarStore for InMemoryCalendarStore {
    fn find_event(&self, event_id: &str) -> Result<Option<CalendarEvent>, CalendarLookupError> {
        self.lookups.set(self.lookups.get() + 1);
        if let Some(message) = self.lookup_failure.borrow().as_ref() {
            return Err(CalendarLookupError {
                event_id: event_id.to_string(),
                message: message.clone(),
            });
        }
        Ok(self.events.borrow().get(event_id).cloned())
    }

    fn remove_event(
        &self,
        event: &CalendarEvent,
        span: EventSpan,
    ) -> Result<(), CalendarRemovalError> {
        if let Some(message) = self.removal_failure.borrow().as_ref() {
            return Err(CalendarRemovalError {
                event_id: event.event_id.clone(),
                message: message.clone(),
            });
        }
        if self.events.borrow_mut().remove(&event.event_id).is_none() {
            return Err(CalendarRemovalError {
                event_id: event.event_id.clone(),
                message: "event no longer exists".to_string(),
            });
        }
        self.removals
            .borrow_mut()
            .push((event.event_id.clone(), span));
        Ok(())
    }
}
