//! Category repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the store adapter for the category list: snapshot reads,
//!   inserts, color updates and cascading deletes.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every write runs inside one transaction; a failed write leaves the
//!   store unchanged.
//! - A cascade delete removes the items and the category together.
//! - Snapshots are returned in insertion order (`seq ASC`) for categories
//!   and for the items of each category.

use crate::db::DbError;
use crate::model::category::{Category, CategoryId, CategoryValidationError};
use crate::model::color::HexColor;
use crate::repo::item_repo::{insert_item, parse_item_row, ITEM_SELECT_SQL};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CATEGORY_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    color
FROM categories";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for category and item storage.
#[derive(Debug)]
pub enum RepoError {
    Validation(CategoryValidationError),
    Db(DbError),
    NotFound(Uuid),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<CategoryValidationError> for RepoError {
    fn from(value: CategoryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store adapter used by the category list.
pub trait CategoryRepository {
    /// Returns every category with its items, in insertion order.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Inserts the category and any items it already carries.
    fn save_category(&self, category: &Category) -> RepoResult<()>;
    /// Deletes all items of the category, then the category, atomically.
    fn delete_category_cascade(&self, id: CategoryId) -> RepoResult<()>;
    fn update_color(&self, id: CategoryId, color: &HexColor) -> RepoResult<()>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        let mut item_stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut item_rows = item_stmt.query([])?;
        let mut items_by_category = HashMap::new();
        while let Some(row) = item_rows.next()? {
            let item = parse_item_row(row)?;
            items_by_category
                .entry(item.category_uuid)
                .or_insert_with(Vec::new)
                .push(item);
        }

        for category in &mut categories {
            if let Some(items) = items_by_category.remove(&category.uuid) {
                category.items = items;
            }
        }

        Ok(categories)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let mut category = parse_category_row(row)?;

        let mut item_stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL} WHERE category_uuid = ?1 ORDER BY seq ASC;"
        ))?;
        let mut item_rows = item_stmt.query([id.to_string()])?;
        while let Some(row) = item_rows.next()? {
            category.items.push(parse_item_row(row)?);
        }

        Ok(Some(category))
    }

    fn save_category(&self, category: &Category) -> RepoResult<()> {
        category.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO categories (uuid, name, color) VALUES (?1, ?2, ?3);",
            params![
                category.uuid.to_string(),
                category.name.as_str(),
                category.color.as_str(),
            ],
        )?;
        for item in &category.items {
            if item.category_uuid != category.uuid {
                return Err(RepoError::InvalidData(format!(
                    "item {} belongs to {}, not {}",
                    item.uuid, item.category_uuid, category.uuid
                )));
            }
            insert_item(&tx, item)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn delete_category_cascade(&self, id: CategoryId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "DELETE FROM items WHERE category_uuid = ?1;",
            [id.to_string()],
        )?;
        let changed = tx.execute("DELETE FROM categories WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            // Dropping the transaction rolls back the item delete.
            return Err(RepoError::NotFound(id));
        }
        tx.commit()?;
        Ok(())
    }

    fn update_color(&self, id: CategoryId, color: &HexColor) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE categories
             SET
                color = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![id.to_string(), color.as_str()],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        tx.commit()?;
        Ok(())
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{uuid_text}` in categories.uuid"
        ))
    })?;

    let color_text: String = row.get("color")?;
    let color = HexColor::parse(&color_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid color value `{color_text}` in categories.color"
        ))
    })?;

    let name: String = row.get("name")?;
    Ok(Category::with_id(uuid, name, color)?)
}
