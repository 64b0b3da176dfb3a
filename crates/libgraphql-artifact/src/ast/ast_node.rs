use crate::Location;

/// Append the source text covered by `loc` to `sink` by slicing `source`.
///
/// Returns `false` (and appends nothing) when the range does not fall on
/// valid boundaries of `source`, e.g. because the artifact was compiled from
/// a different revision of the query text.
pub(crate) fn append_loc_source_slice(
    loc: &Location,
    sink: &mut String,
    source: &str,
) -> bool {
    let start = loc.start as usize;
    let end = loc.end as usize;
    match source.get(start..end) {
        Some(slice) if start <= end => {
            sink.push_str(slice);
            true
        },
        _ => false,
    }
}

/// Trait implemented by all AST node types.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
///
/// # Source Reconstruction Modes
///
/// - **Source-slice mode (lossless):** When `source` is `Some(s)` and the
///   node carries a [`Location`], [`append_source`](AstNode::append_source)
///   slices `&s[loc.start..loc.end]`.
///
/// - **Synthetic-formatting mode (lossy):** When `source` is `None`, or the
///   node has no location, the node is printed from its semantic data with
///   the same formatting as [`crate::printer::print_document`].
pub trait AstNode {
    /// The node's byte range in the original query source, if the artifact
    /// was compiled with locations.
    fn loc(&self) -> Option<Location>;

    /// Append this node's GraphQL source representation to `sink`.
    fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    );

    /// Return this node as a GraphQL source string.
    ///
    /// Convenience wrapper around [`append_source`](AstNode::append_source).
    fn to_source(
        &self,
        source: Option<&str>,
    ) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}

/// Implements [`AstNode`] for a node type whose synthetic form is produced
/// by the given printer function.
macro_rules! impl_ast_node {
    ($node:ty, $printer:path) => {
        #[inherent::inherent]
        impl $crate::ast::AstNode for $node {
            pub fn loc(&self) -> Option<$crate::Location> {
                self.loc
            }

            pub fn append_source(
                &self,
                sink: &mut String,
                source: Option<&str>,
            ) {
                if let (Some(src), Some(loc)) = (source, self.loc)
                    && $crate::ast::ast_node::append_loc_source_slice(&loc, sink, src) {
                    return;
                }
                sink.push_str(&$printer(self));
            }
        }
    };
}

pub(crate) use impl_ast_node;
