//! Item repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist to-do items under an existing category.
//! - Share row mapping with the category snapshot reader.
//!
//! # Invariants
//! - An item can only be inserted under an existing category
//!   (`foreign_keys=ON`, checked up front for a semantic error).
//! - Items of one category are listed in insertion order.

use crate::model::category::CategoryId;
use crate::model::item::{Item, ItemId};
use crate::repo::category_repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

pub(crate) const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    category_uuid,
    title,
    date_created,
    event_id
FROM items";

/// Storage contract for the item screen flows.
pub trait ItemRepository {
    fn create_item(&self, item: &Item) -> RepoResult<ItemId>;
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    fn list_items(&self, category_id: CategoryId) -> RepoResult<Vec<Item>>;
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &Item) -> RepoResult<ItemId> {
        let category_exists = self
            .conn
            .query_row(
                "SELECT 1 FROM categories WHERE uuid = ?1;",
                [item.category_uuid.to_string()],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !category_exists {
            return Err(RepoError::NotFound(item.category_uuid));
        }

        insert_item(self.conn, item)?;
        Ok(item.uuid)
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }
        Ok(None)
    }

    fn list_items(&self, category_id: CategoryId) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL} WHERE category_uuid = ?1 ORDER BY seq ASC;"
        ))?;
        let mut rows = stmt.query([category_id.to_string()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

pub(crate) fn insert_item(conn: &Connection, item: &Item) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO items (
            uuid,
            category_uuid,
            title,
            date_created,
            event_id
        ) VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            item.uuid.to_string(),
            item.category_uuid.to_string(),
            item.title.as_str(),
            item.date_created,
            item.event_id.as_deref(),
        ],
    )?;
    Ok(())
}

pub(crate) fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let uuid = parse_uuid_column(row, "uuid")?;
    let category_uuid = parse_uuid_column(row, "category_uuid")?;

    Ok(Item {
        uuid,
        category_uuid,
        title: row.get("title")?,
        date_created: row.get("date_created")?,
        event_id: row.get("event_id")?,
    })
}

fn parse_uuid_column(row: &Row<'_>, column: &'static str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{text}` in items.{column}"))
    })
}
