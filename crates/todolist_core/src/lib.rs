//! Core domain logic for the to-do list: categories, items, and the
//! cleanup of device reminders tied to them.

pub mod db;
pub mod logging;
pub mod model;
pub mod reminder;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId, CategoryValidationError};
pub use model::color::{ColorParseError, HexColor};
pub use model::item::{notification_identifier, Item, ItemId};
pub use reminder::{
    CalendarEvent, CalendarLookupError, CalendarRemovalError, CalendarStore, CleanupStep,
    EventSpan, ItemCleanupReport, NotificationCancelError, NotificationCenter, ReminderCleanup,
};
pub use repo::category_repo::{CategoryRepository, RepoError, RepoResult, SqliteCategoryRepository};
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
pub use service::category_service::{
    CategoryPresenter, CategoryService, CategoryServiceError, ColorEditRequest,
    DeleteCategoryReport, DeletePhase,
};
pub use service::launch_service::{LaunchService, LaunchState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
