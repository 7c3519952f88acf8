use todolist_core::{Category, CategoryValidationError, HexColor, Item};
use uuid::Uuid;

#[test]
fn category_new_sets_defaults() {
    let category = Category::new("Work").unwrap();

    assert!(!category.uuid.is_nil());
    assert_eq!(category.name, "Work");
    assert!(category.items.is_empty());
    assert!(category.color.as_str().starts_with('#'));
    assert_eq!(category.color.as_str().len(), 7);
}

#[test]
fn empty_name_is_rejected_but_whitespace_is_not() {
    assert_eq!(
        Category::new("").unwrap_err(),
        CategoryValidationError::EmptyName
    );
    assert_eq!(Category::new("  ").unwrap().name, "  ");
}

#[test]
fn push_item_links_back_to_category_in_order() {
    let mut category = Category::new("Home").unwrap();
    category.push_item("Dishes");
    category.push_item("Laundry").date_created = Some(5);

    let titles = category
        .items
        .iter()
        .map(|item| item.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Dishes", "Laundry"]);
    assert!(category
        .items
        .iter()
        .all(|item| item.category_uuid == category.uuid));
    assert_eq!(category.items[1].date_created, Some(5));
}

#[test]
fn category_serialization_uses_hex_color_text() {
    let category_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut category =
        Category::with_id(category_id, "Work", HexColor::parse("#FF0000").unwrap()).unwrap();
    let mut item = Item::new(category_id, "Report");
    item.event_id = Some("evt-9".to_string());
    category.items.push(item);

    let json = serde_json::to_value(&category).unwrap();
    assert_eq!(json["uuid"], category_id.to_string());
    assert_eq!(json["name"], "Work");
    assert_eq!(json["color"], "#ff0000");
    assert_eq!(json["items"][0]["event_id"], "evt-9");
    assert_eq!(json["items"][0]["date_created"], serde_json::Value::Null);

    let decoded: Category = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, category);
}

#[test]
fn invalid_color_text_fails_deserialization() {
    let json = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": "Work",
        "color": "not-a-color"
    });

    assert!(serde_json::from_value::<Category>(json).is_err());
}
