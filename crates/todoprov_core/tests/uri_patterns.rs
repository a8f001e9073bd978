use todoprov_core::{Authority, TodoContract, WildcardStyle};

fn contract() -> TodoContract {
    TodoContract::new(Authority::new("content://x.y/todo").unwrap())
}

#[test]
fn patterns_render_both_wildcard_spellings() {
    let contract = contract();
    assert_eq!(
        contract.list_items_pattern().render(WildcardStyle::Star),
        "content://x.y/todo/lists/*/items"
    );
    assert_eq!(
        contract.list_items_pattern().render(WildcardStyle::Equals),
        "content://x.y/todo/lists/=/items"
    );
    assert_eq!(
        contract.list_item_pattern().render(WildcardStyle::Star),
        "content://x.y/todo/lists/*/items/*"
    );
    assert_eq!(
        contract.list_item_pattern().render(WildcardStyle::Equals),
        "content://x.y/todo/lists/=/items/="
    );
}

#[test]
fn display_uses_the_star_spelling() {
    let pattern = contract().list_items_pattern();
    assert_eq!(pattern.to_string(), pattern.render(WildcardStyle::Star));
}

#[test]
fn items_pattern_matches_every_built_item_collection_uri() {
    let contract = contract();
    let pattern = contract.list_items_pattern();
    for list_id in [0, 1, 42, -7, i64::MAX] {
        let uri = contract.list_items_uri(list_id).to_string();
        assert!(pattern.matches(&uri), "pattern should match `{uri}`");
    }
}

#[test]
fn item_pattern_matches_every_built_item_uri() {
    let contract = contract();
    let pattern = contract.list_item_pattern();
    for (list_id, item_id) in [(0, 0), (5, 12), (-7, 3), (i64::MAX, i64::MIN)] {
        let uri = contract.list_item_uri(list_id, item_id).to_string();
        assert!(pattern.matches(&uri), "pattern should match `{uri}`");
    }
}

#[test]
fn patterns_distinguish_collection_from_row_shapes() {
    let contract = contract();
    let collection_uri = contract.list_items_uri(5).to_string();
    let row_uri = contract.list_item_uri(5, 12).to_string();

    assert!(!contract.list_items_pattern().matches(&row_uri));
    assert!(!contract.list_item_pattern().matches(&collection_uri));
    assert!(!contract.list_items_pattern().matches(&contract.list_uri(5).to_string()));
}

#[test]
fn patterns_reject_foreign_authorities() {
    let pattern = contract().list_items_pattern();
    assert!(!pattern.matches("content://other.provider/lists/5/items"));
    assert!(!pattern.matches("content://x.y/todo-v2/lists/5/items"));
}
