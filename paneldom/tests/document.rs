use paneldom::{Document, Element, ElementKind, Event};

fn sample() -> Document {
    Document::from_elements([
        Element::checkbox().id("users_select"),
        Element::row().id("users_row_0").value("u1"),
        Element::checkbox().id("users_select_0").value("u1"),
        Element::button("Delete").id("users_delete_1").disabled(true),
    ])
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_get_by_id() {
    let doc = sample();

    let row = doc.get("users_row_0").unwrap();
    assert_eq!(row.kind, ElementKind::Row);
    assert_eq!(row.value.as_deref(), Some("u1"));
    assert!(doc.get("users_row_1").is_none());
}

#[test]
fn test_lookups_are_counted() {
    let doc = sample();
    assert_eq!(doc.lookups(), 0);

    doc.get("users_row_0");
    doc.contains("missing");
    assert!(!doc.is_checked("users_select_0"));

    assert_eq!(doc.lookups(), 3);
}

#[test]
fn test_append_replaces_same_id_in_place() {
    let mut doc = sample();

    let old = doc.append(Element::row().id("users_row_0").value("u9"));

    assert_eq!(old.unwrap().value.as_deref(), Some("u1"));
    assert_eq!(doc.len(), 4);
    let ids: Vec<_> = doc.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids[1], "users_row_0");
    assert_eq!(doc.get("users_row_0").unwrap().value.as_deref(), Some("u9"));
}

#[test]
fn test_remove_keeps_order_and_index() {
    let mut doc = sample();

    let removed = doc.remove("users_row_0");
    assert!(removed.is_some());
    assert!(doc.remove("users_row_0").is_none());

    let ids: Vec<_> = doc.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["users_select", "users_select_0", "users_delete_1"]);
    // Index still resolves elements that moved
    assert_eq!(doc.get("users_delete_1").unwrap().kind, ElementKind::Button);
}

// ============================================================================
// Interaction
// ============================================================================

#[test]
fn test_click_checkbox_toggles_and_fires_change() {
    let mut doc = sample();

    assert_eq!(doc.click("users_select_0"), Some(Event::change("users_select_0")));
    assert!(doc.is_checked("users_select_0"));

    assert_eq!(doc.click("users_select_0"), Some(Event::change("users_select_0")));
    assert!(!doc.is_checked("users_select_0"));
}

#[test]
fn test_click_disabled_or_missing_does_nothing() {
    let mut doc = sample();

    assert_eq!(doc.click("users_delete_1"), None);
    assert_eq!(doc.click("nope"), None);

    doc.get_mut("users_delete_1").unwrap().disabled = false;
    assert_eq!(doc.click("users_delete_1"), Some(Event::click("users_delete_1")));
}

#[test]
fn test_set_checked_only_fires_on_flip() {
    let mut doc = sample();

    assert_eq!(doc.set_checked("users_select", false), None);
    assert_eq!(
        doc.set_checked("users_select", true),
        Some(Event::change("users_select"))
    );
    // Not a checkbox
    assert_eq!(doc.set_checked("users_row_0", true), None);
}

#[test]
fn test_has_class() {
    let el = Element::row().class_name("data selected");

    assert!(el.has_class("selected"));
    assert!(el.has_class("data"));
    assert!(!el.has_class("select"));
}
