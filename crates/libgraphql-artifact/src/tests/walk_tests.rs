use crate::ast::Field;
use crate::tests::utils::field;
use crate::tests::utils::field_with;
use crate::tests::utils::fragment;
use crate::tests::utils::guest_log_in;
use crate::tests::utils::query;
use crate::tests::utils::spread;
use crate::tests::utils::upcoming_reminders;
use crate::walk::WalkAction;

/// Spreads are expanded in place, so fields selected by `Schedule_common`
/// (including those under its inline fragment) appear under
/// `users.schedule`.
#[test]
fn walk_expands_spreads_in_place() {
    let doc = guest_log_in();

    assert_eq!(doc.field_paths(), vec![
        "isLoggedIn",
        "timeZone",
        "users",
        "users.id",
        "users.displayName",
        "users.focusModes",
        "users.focusModes.id",
        "users.focusModes.name",
        "users.focusModes.isActive",
        "users.reminders",
        "users.reminders.id",
        "users.reminders.remindAt",
        "users.reminders.message",
        "users.schedule",
        "users.schedule.id",
        "users.schedule.startsAt",
        "users.schedule.endsAt",
        "users.schedule.days",
        "users.schedule.focusMode",
        "users.schedule.focusMode.id",
        "users.schedule.focusMode.name",
        "users.schedule.recurrence",
    ]);
}

#[test]
fn visitor_can_skip_children() {
    let doc = guest_log_in();

    let mut visited = vec![];
    doc.walk_fields(&mut |path: &[&str], field: &Field| {
        visited.push(path.join("."));
        if field.response_key() == "users" {
            WalkAction::SkipChildren
        } else {
            WalkAction::Descend
        }
    });
    assert_eq!(visited, vec!["isLoggedIn", "timeZone", "users"]);
}

#[test]
fn nested_spreads_are_expanded() {
    let doc = upcoming_reminders();

    let paths = doc.field_paths();
    assert!(paths.contains(&"viewer.reminders.edges.node.message".to_string()));
    assert!(paths.contains(&"viewer.reminders.edges.node.focusMode.name".to_string()));
}

/// A cyclic document (which never survives `deserialize`) does not send
/// the walk into a loop.
#[test]
fn walk_terminates_on_cyclic_document() {
    let doc = query("viewer", vec![spread("Node_fields")])
        .with_fragment(fragment("Node_fields", "Node", vec![
            field("id"),
            field_with("parent", vec![spread("Node_fields"), spread("Missing")]),
        ]))
        .unwrap();

    assert_eq!(doc.field_paths(), vec!["id", "parent"]);
}

#[test]
fn field_at_path_does_not_expand_spreads() {
    let doc = guest_log_in();

    assert_eq!(
        doc.field_at_path(&["users", "focusModes", "isActive"]).map(Field::response_key),
        Some("isActive"),
    );
    assert!(doc.field_at_path(&["users", "schedule", "id"]).is_none());
    assert!(doc.field_at_path(&["users", "nope"]).is_none());
    assert!(doc.field_at_path(&[]).is_none());
}

#[test]
fn referenced_fragments_in_first_use_order() {
    let doc = upcoming_reminders();
    assert_eq!(doc.referenced_fragments(), vec!["Reminder_details", "FocusMode_summary"]);
    assert!(doc.unused_fragments().is_empty());

    let spreads: Vec<&str> = doc
        .fragment_spreads()
        .into_iter()
        .map(|spread| spread.fragment_name())
        .collect();
    assert_eq!(spreads, vec!["Reminder_details", "FocusMode_summary"]);
}

#[test]
fn unused_fragments_are_listed() {
    let doc = query("viewer", vec![spread("Used")])
        .with_fragment(fragment("Unused", "User", vec![field("name")]))
        .unwrap()
        .with_fragment(fragment("Used", "User", vec![field("id")]))
        .unwrap();

    assert_eq!(doc.referenced_fragments(), vec!["Used"]);
    assert_eq!(doc.unused_fragments(), vec!["Unused"]);
}
