use crate::Location;
use crate::ast::DirectiveAnnotation;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// An inline fragment (`... on Type { ... }` or `... @include(if: $x) { ... }`).
///
/// See
/// [Inline Fragments](https://spec.graphql.org/September2025/#InlineFragment)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Location>,
    pub selection_set: SelectionSet,
    pub type_condition: Option<NamedType>,
}

impl_ast_node!(InlineFragment, printer::print_inline_fragment);
