use crate::Location;
use thiserror::Error;

/// A fragment spread names a fragment that has no definition in the
/// document.
///
/// Detected when a document is loaded (never mid-traversal), and surfaced
/// as [`MalformedDocumentError::UnresolvedFragment`](crate::MalformedDocumentError::UnresolvedFragment).
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(
    "Fragment spread `...{fragment_name}` in {} references an undefined fragment",
    format_spread_origin(.enclosing_fragment.as_deref()),
)]
pub struct UnresolvedFragmentError {
    /// Name of the fragment definition containing the spread, or `None`
    /// when the spread is within the operation itself.
    pub enclosing_fragment: Option<String>,
    /// The undefined fragment name.
    pub fragment_name: String,
    /// Location of the spread.
    pub loc: Option<Location>,
}

fn format_spread_origin(enclosing_fragment: Option<&str>) -> String {
    match enclosing_fragment {
        Some(fragment_name) => format!("fragment '{fragment_name}'"),
        None => "the operation".to_string(),
    }
}
