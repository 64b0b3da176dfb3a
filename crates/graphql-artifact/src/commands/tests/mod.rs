mod validate_tests;

pub(super) const GUEST_LOG_IN_JSON: &str =
    include_str!("../../../../libgraphql-artifact/src/tests/fixtures/guest_log_in.json");
pub(super) const UPCOMING_REMINDERS_JSON: &str =
    include_str!("../../../../libgraphql-artifact/src/tests/fixtures/upcoming_reminders.json");
