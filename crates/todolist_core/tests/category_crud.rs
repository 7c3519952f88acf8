use todolist_core::db::open_db_in_memory;
use todolist_core::{
    Category, CategoryRepository, HexColor, Item, ItemRepository, RepoError,
    SqliteCategoryRepository, SqliteItemRepository,
};
use uuid::Uuid;

fn red() -> HexColor {
    HexColor::parse("#ff0000").unwrap()
}

#[test]
fn save_and_list_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let zeta = Category::with_color("Zeta", red()).unwrap();
    let alpha = Category::with_color("Alpha", red()).unwrap();
    repo.save_category(&zeta).unwrap();
    repo.save_category(&alpha).unwrap();

    let names = repo
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn save_persists_carried_items_in_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let mut category = Category::with_color("Trip", red()).unwrap();
    category.push_item("Passport");
    category.push_item("Tickets").event_id = Some("evt-1".to_string());
    repo.save_category(&category).unwrap();

    let loaded = repo.get_category(category.uuid).unwrap().unwrap();
    assert_eq!(loaded, category);
}

#[test]
fn save_with_foreign_item_rolls_back() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let mut category = Category::with_color("Mixed", red()).unwrap();
    category.items.push(Item::new(Uuid::new_v4(), "stray"));

    let err = repo.save_category(&category).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
    assert!(repo.list_categories().unwrap().is_empty());
}

#[test]
fn duplicate_save_fails_without_changing_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let category = Category::with_color("Once", red()).unwrap();
    repo.save_category(&category).unwrap();
    let err = repo.save_category(&category).unwrap_err();

    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(repo.list_categories().unwrap().len(), 1);
}

#[test]
fn cascade_delete_removes_category_and_items() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    let items = SqliteItemRepository::new(&conn);

    let mut doomed = Category::with_color("Doomed", red()).unwrap();
    let first = doomed.push_item("one").uuid;
    let second = doomed.push_item("two").uuid;
    let keep = Category::with_color("Keep", red()).unwrap();
    repo.save_category(&doomed).unwrap();
    repo.save_category(&keep).unwrap();
    let kept_item = Item::new(keep.uuid, "stays");
    items.create_item(&kept_item).unwrap();

    repo.delete_category_cascade(doomed.uuid).unwrap();

    assert!(repo.get_category(doomed.uuid).unwrap().is_none());
    assert!(items.get_item(first).unwrap().is_none());
    assert!(items.get_item(second).unwrap().is_none());
    assert_eq!(items.list_items(keep.uuid).unwrap(), vec![kept_item]);
}

#[test]
fn cascade_delete_of_missing_category_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let missing = Uuid::new_v4();
    let err = repo.delete_category_cascade(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn failed_cascade_delete_restores_items() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    let items = SqliteItemRepository::new(&conn);

    let mut category = Category::with_color("Locked", red()).unwrap();
    let item_id = category.push_item("survivor").uuid;
    repo.save_category(&category).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER block_category_delete BEFORE DELETE ON categories
         BEGIN
             SELECT RAISE(ABORT, 'category delete blocked');
         END;",
    )
    .unwrap();

    let err = repo.delete_category_cascade(category.uuid).unwrap_err();

    assert!(err.to_string().contains("category delete blocked"));
    assert_eq!(items.get_item(item_id).unwrap().unwrap().title, "survivor");
    assert_eq!(repo.get_category(category.uuid).unwrap(), Some(category));
}

#[test]
fn update_color_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let category = Category::with_color("Paint", red()).unwrap();
    repo.save_category(&category).unwrap();

    let blue = HexColor::parse("#0000ff").unwrap();
    repo.update_color(category.uuid, &blue).unwrap();
    repo.update_color(category.uuid, &blue).unwrap();

    let loaded = repo.get_category(category.uuid).unwrap().unwrap();
    assert_eq!(loaded.color, blue);
}

#[test]
fn update_color_of_missing_category_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let err = repo.update_color(Uuid::new_v4(), &red()).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn invalid_persisted_color_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO categories (uuid, name, color)
         VALUES ('11111111-2222-4333-8444-555555555555', 'Broken', 'blue');",
        [],
    )
    .unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let err = repo.list_categories().unwrap_err();
    assert!(matches!(
        err,
        RepoError::InvalidData(message) if message.contains("categories.color")
    ));
}

#[test]
fn item_requires_existing_category_and_can_be_deleted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    let items = SqliteItemRepository::new(&conn);

    let orphan = Item::new(Uuid::new_v4(), "nowhere");
    let err = items.create_item(&orphan).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == orphan.category_uuid));

    let category = Category::with_color("Errands", red()).unwrap();
    repo.save_category(&category).unwrap();
    let mut item = Item::new(category.uuid, "Bank");
    item.date_created = Some(1_700_000_000_000);
    let item_id = items.create_item(&item).unwrap();

    assert_eq!(items.get_item(item_id).unwrap(), Some(item));
    items.delete_item(item_id).unwrap();
    assert!(items.list_items(category.uuid).unwrap().is_empty());
    assert!(matches!(
        items.delete_item(item_id).unwrap_err(),
        RepoError::NotFound(_)
    ));
}
