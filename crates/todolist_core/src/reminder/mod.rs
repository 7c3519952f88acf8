//! Device reminder collaborators: local notifications and calendar events.
//!
//! # Responsibility
//! - Define the seams to platform notification/calendar services.
//! - Clean up an item's reminders before the item leaves storage.
//!
//! # Invariants
//! - All reminder calls are best-effort. Failures are reported through
//!   error values here and swallowed by [`ReminderCleanup`].

use std::error::Error;
use std::fmt::{Display, Formatter};

mod cleanup;
pub mod memory;

pub use cleanup::{CleanupStep, ItemCleanupReport, ReminderCleanup};

/// Pending notification could not be cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCancelError {
    pub identifier: String,
    pub message: String,
}

impl Display for NotificationCancelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to cancel notification: {}", self.message)
    }
}

impl Error for NotificationCancelError {}

/// Calendar event lookup failed (as opposed to "not found").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLookupError {
    pub event_id: String,
    pub message: String,
}

impl Display for CalendarLookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to look up calendar event {}: {}",
            self.event_id, self.message
        )
    }
}

impl Error for CalendarLookupError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRemovalError {
    pub event_id: String,
    pub message: String,
}

impl Display for CalendarRemovalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to remove calendar event {}: {}",
            self.event_id, self.message
        )
    }
}

impl Error for CalendarRemovalError {}

/// Handle to an event found in the device calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub event_id: String,
    pub title: String,
}

/// Which occurrences of a (possibly recurring) event a removal affects.
///
/// Cleanup only ever removes the single linked occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSpan {
    ThisEvent,
}

/// Local notification scheduler seam.
pub trait NotificationCenter {
    /// Cancels any pending notification with `identifier`.
    ///
    /// Cancelling an identifier with nothing pending is not an error.
    fn cancel_pending(&self, identifier: &str) -> Result<(), NotificationCancelError>;
}

/// Device calendar seam.
pub trait CalendarStore {
    fn find_event(&self, event_id: &str) -> Result<Option<CalendarEvent>, CalendarLookupError>;
    fn remove_event(
        &self,
        event: &CalendarEvent,
        span: EventSpan,
    ) -> Result<(), CalendarRemovalError>;
}

impl<T: NotificationCenter + ?Sized> NotificationCenter for &T {
    fn cancel_pending(&self, identifier: &str) -> Result<(), NotificationCancelError> {
        (**self).cancel_pending(identifier)
    }
}

impl<T: CalendarStore + ?Sized> CalendarStore for &T {
    fn find_event(&self, event_id: &str) -> Result<Option<CalendarEvent>, CalendarLookupError> {
        (**self).find_event(event_id)
    }

    fn remove_event(
        &self,
        event: &CalendarEvent,
        span: EventSpan,
    ) -> Result<(), CalendarRemovalError> {
        (**self).remove_event(event, span)
    }
}
