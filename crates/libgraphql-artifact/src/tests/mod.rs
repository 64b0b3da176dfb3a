pub(crate) mod utils;
mod walk_tests;
