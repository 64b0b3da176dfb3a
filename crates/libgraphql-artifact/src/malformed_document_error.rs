use crate::Location;
use crate::UnresolvedFragmentError;
use std::sync::Arc;
use thiserror::Error;

/// A persisted document violates a structural invariant and cannot be used.
///
/// Every variant is fatal: artifacts are static build output, so retrying
/// never changes the outcome.
#[derive(Clone, Debug, Error)]
pub enum MalformedDocumentError {
    /// The text is not valid JSON, a required key is missing, a value has
    /// the wrong type, or a node's `kind` is wrong or unknown.
    #[error("Failed to decode document: {0}")]
    Decode(Arc<serde_json::Error>),

    #[error(
        "Duplicate fragment definition: '{fragment_name}' (first defined at \
        {}, redefined at {})",
        format_loc(.first_def_loc),
        format_loc(.second_def_loc),
    )]
    DuplicateFragmentDefinition {
        fragment_name: String,
        first_def_loc: Option<Location>,
        second_def_loc: Option<Location>,
    },

    #[error("Failed to encode document: {0}")]
    Encode(Arc<serde_json::Error>),

    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycle { cycle_path: Vec<String> },

    /// A fragment is stored under a key other than its own name, so spreads
    /// naming the key would not survive an encode/decode cycle.
    #[error("Fragment '{fragment_name}' is registered under the name '{key}'")]
    FragmentNameMismatch { key: String, fragment_name: String },

    #[error("Inverted location at `{path}`: end {} precedes start {}", .loc.end, .loc.start)]
    InvertedLocation { path: String, loc: Location },

    #[error(
        "Location of `{path}` ({}..{}) escapes the location of its parent \
        `{parent_path}` ({}..{})",
        .loc.start,
        .loc.end,
        .parent_loc.start,
        .parent_loc.end,
    )]
    LocationEscapesParent {
        path: String,
        loc: Location,
        parent_path: String,
        parent_loc: Location,
    },

    #[error("Document contains no operation definition")]
    MissingOperation,

    #[error(
        "Document contains {count} operation definitions; an artifact holds \
        exactly one"
    )]
    MultipleOperations { count: usize },

    #[error("Non-null type at `{path}` directly wraps another non-null type")]
    NestedNonNullType { path: String },

    #[error(transparent)]
    UnresolvedFragment(#[from] UnresolvedFragmentError),
}

impl From<serde_json::Error> for MalformedDocumentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(Arc::new(err))
    }
}

fn format_loc(loc: &Option<Location>) -> String {
    match loc {
        Some(loc) => format!("{}..{}", loc.start, loc.end),
        None => "<unknown location>".to_string(),
    }
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}
