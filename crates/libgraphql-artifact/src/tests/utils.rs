use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::codec;

pub(crate) const GUEST_LOG_IN_GRAPHQL: &str = include_str!("fixtures/guest_log_in.graphql");
pub(crate) const GUEST_LOG_IN_JSON: &str = include_str!("fixtures/guest_log_in.json");
pub(crate) const UPCOMING_REMINDERS_GRAPHQL: &str =
    include_str!("fixtures/upcoming_reminders.graphql");
pub(crate) const UPCOMING_REMINDERS_JSON: &str =
    include_str!("fixtures/upcoming_reminders.json");

pub(crate) fn guest_log_in() -> Document {
    codec::deserialize(GUEST_LOG_IN_JSON).unwrap()
}

pub(crate) fn upcoming_reminders() -> Document {
    codec::deserialize(UPCOMING_REMINDERS_JSON).unwrap()
}

/// Apply `edit` to the parsed JSON of `fixture` and re-encode it.
pub(crate) fn edit_fixture(
    fixture: &str,
    edit: impl FnOnce(&mut serde_json::Value),
) -> String {
    let mut value: serde_json::Value = serde_json::from_str(fixture).unwrap();
    edit(&mut value);
    serde_json::to_string_pretty(&value).unwrap()
}

pub(crate) fn field(name: &str) -> Selection {
    Selection::Field(Field::leaf(name))
}

pub(crate) fn field_with(name: &str, selections: Vec<Selection>) -> Selection {
    Selection::Field(Field::with_selections(name, selections))
}

pub(crate) fn spread(fragment_name: &str) -> Selection {
    Selection::FragmentSpread(FragmentSpread::new(fragment_name))
}

pub(crate) fn query(name: &str, selections: Vec<Selection>) -> Document {
    Document::new(OperationDefinition::new(
        OperationKind::Query,
        Some(name),
        SelectionSet::new(selections),
    ))
}

pub(crate) fn fragment(
    name: &str,
    type_condition: &str,
    selections: Vec<Selection>,
) -> FragmentDefinition {
    FragmentDefinition::new(name, type_condition, SelectionSet::new(selections))
}
