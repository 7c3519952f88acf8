//! Category list use-case service.
//!
//! # Responsibility
//! - Drive the category list screen: snapshot listing, add, delete,
//!   color edit and row selection.
//! - Run reminder cleanup for every item before a category is deleted.
//!
//! # Invariants
//! - Every mutation is followed by a fresh snapshot read on the caller side;
//!   the service never caches categories.
//! - Reminder cleanup for all items completes before the cascade delete
//!   starts, and cleanup failures never abort the delete.
//! - Storage failures are logged here and returned to the caller.

use crate::model::category::{Category, CategoryId, CategoryValidationError};
use crate::model::color::HexColor;
use crate::reminder::{CalendarStore, ItemCleanupReport, NotificationCenter, ReminderCleanup};
use crate::repo::category_repo::{CategoryRepository, RepoError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for category list use-cases.
#[derive(Debug)]
pub enum CategoryServiceError {
    /// Submitted name was empty; nothing was persisted.
    EmptyName,
    /// Target category does not exist.
    CategoryNotFound(CategoryId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for CategoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "category name cannot be empty"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CategoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CategoryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::CategoryNotFound(id),
            RepoError::Validation(CategoryValidationError::EmptyName) => Self::EmptyName,
            other => Self::Repo(other),
        }
    }
}

impl From<CategoryValidationError> for CategoryServiceError {
    fn from(value: CategoryValidationError) -> Self {
        match value {
            CategoryValidationError::EmptyName => Self::EmptyName,
        }
    }
}

/// Phases of the delete flow. Always ends back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePhase {
    Idle,
    CleaningUpChildren,
    DeletingRecord,
}

impl DeletePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CleaningUpChildren => "cleaning_up_children",
            Self::DeletingRecord => "deleting_record",
        }
    }
}

/// Result of a successful category delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCategoryReport {
    pub category_uuid: CategoryId,
    /// Number of items removed together with the category.
    pub removed_items: usize,
    /// One entry per item, in display order.
    pub cleanup: Vec<ItemCleanupReport>,
}

impl DeleteCategoryReport {
    pub fn cleanup_failures(&self) -> usize {
        self.cleanup
            .iter()
            .filter(|report| report.has_failures())
            .count()
    }
}

/// Color picker request seeded with the row's current color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEditRequest {
    pub category_uuid: CategoryId,
    pub current_color: HexColor,
}

/// Child surface that shows one category's items.
pub trait CategoryPresenter {
    fn present_category(&mut self, category: &Category);
}

/// Category list service over injected storage and reminder collaborators.
pub struct CategoryService<R, N, C> {
    repo: R,
    cleanup: ReminderCleanup<N, C>,
}

impl<R, N, C> CategoryService<R, N, C>
where
    R: CategoryRepository,
    N: NotificationCenter,
    C: CalendarStore,
{
    pub fn new(repo: R, notifications: N, calendar: C) -> Self {
        Self {
            repo,
            cleanup: ReminderCleanup::new(notifications, calendar),
        }
    }

    /// Reads a fresh snapshot of all categories in display order.
    pub fn list_categories(&self) -> Result<Vec<Category>, CategoryServiceError> {
        Ok(self.repo.list_categories()?)
    }

    /// Returns the category shown at `row`, if the row exists.
    pub fn category_at(&self, row: usize) -> Result<Option<Category>, CategoryServiceError> {
        Ok(self.repo.list_categories()?.into_iter().nth(row))
    }

    /// Adds a category named exactly `name` with a random flat color.
    ///
    /// # Contract
    /// - `""` returns `EmptyName` and leaves storage untouched; the caller
    ///   may reopen its input dialog.
    /// - No trimming: whitespace-only names are stored as typed.
    pub fn add_category(&self, name: &str) -> Result<Category, CategoryServiceError> {
        let category = match Category::new(name) {
            Ok(category) => category,
            Err(err) => {
                info!("event=category_add module=service status=rejected reason=empty_name");
                return Err(err.into());
            }
        };

        if let Err(err) = self.repo.save_category(&category) {
            error!(
                "event=category_add module=service status=error category_uuid={} error={}",
                category.uuid, err
            );
            return Err(err.into());
        }

        info!(
            "event=category_add module=service status=ok category_uuid={} color={}",
            category.uuid, category.color
        );
        Ok(category)
    }

    /// Deletes a category, its items and their device reminders.
    ///
    /// Reminder cleanup runs item by item and only logs failures. The store
    /// delete runs afterwards as one transaction; if it fails the error is
    /// logged and returned without retry.
    pub fn delete_category(
        &self,
        id: CategoryId,
    ) -> Result<DeleteCategoryReport, CategoryServiceError> {
        let category = match self.repo.get_category(id) {
            Ok(Some(category)) => category,
            Ok(None) => {
                error!(
                    "event=category_delete module=service status=error category_uuid={} error_code=not_found",
                    id
                );
                return Err(CategoryServiceError::CategoryNotFound(id));
            }
            Err(err) => {
                error!(
                    "event=category_delete module=service status=error category_uuid={} error={}",
                    id, err
                );
                return Err(err.into());
            }
        };

        log_phase(id, DeletePhase::CleaningUpChildren);
        let cleanup = category
            .items
            .iter()
            .map(|item| self.cleanup.cleanup_item(item))
            .collect::<Vec<_>>();

        log_phase(id, DeletePhase::DeletingRecord);
        let outcome = self.repo.delete_category_cascade(id);
        log_phase(id, DeletePhase::Idle);

        if let Err(err) = outcome {
            error!(
                "event=category_delete module=service status=error category_uuid={} error={}",
                id, err
            );
            return Err(err.into());
        }

        let report = DeleteCategoryReport {
            category_uuid: id,
            removed_items: category.items.len(),
            cleanup,
        };
        info!(
            "event=category_delete module=service status=ok category_uuid={} removed_items={} cleanup_failures={}",
            id,
            report.removed_items,
            report.cleanup_failures()
        );
        Ok(report)
    }

    /// Opens the color editor for one row.
    ///
    /// A row that vanished in the meantime seeds the picker with white.
    pub fn begin_color_edit(
        &self,
        id: CategoryId,
    ) -> Result<ColorEditRequest, CategoryServiceError> {
        let current_color = self
            .repo
            .get_category(id)?
            .map(|category| category.color)
            .unwrap_or_else(HexColor::white);
        Ok(ColorEditRequest {
            category_uuid: id,
            current_color,
        })
    }

    /// Applies the color picked in the editor.
    pub fn confirm_color_edit(
        &self,
        request: &ColorEditRequest,
        new_color: HexColor,
    ) -> Result<(), CategoryServiceError> {
        self.update_color(request.category_uuid, &new_color)
    }

    /// Replaces a category color in place. Idempotent.
    pub fn update_color(
        &self,
        id: CategoryId,
        color: &HexColor,
    ) -> Result<(), CategoryServiceError> {
        if let Err(err) = self.repo.update_color(id, color) {
            error!(
                "event=category_color module=service status=error category_uuid={} error={}",
                id, err
            );
            return Err(err.into());
        }
        info!(
            "event=category_color module=service status=ok category_uuid={} color={}",
            id, color
        );
        Ok(())
    }

    /// Hands the selected category to the child surface. No mutation.
    pub fn select_category(
        &self,
        id: CategoryId,
        presenter: &mut impl CategoryPresenter,
    ) -> Result<(), CategoryServiceError> {
        let category = self
            .repo
            .get_category(id)?
            .ok_or(CategoryServiceError::CategoryNotFound(id))?;
        presenter.present_category(&category);
        Ok(())
    }
}

fn log_phase(id: CategoryId, phase: DeletePhase) {
    info!(
        "event=category_delete module=service status=phase category_uuid={} phase={}",
        id,
        phase.as_str()
    );
}
