use crate::Location;
use crate::ast::Name;
use crate::ast::Value;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A single argument in a field or directive annotation.
///
/// See
/// [Arguments](https://spec.graphql.org/September2025/#sec-Language.Arguments)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub loc: Option<Location>,
    pub name: Name,
    pub value: Value,
}

impl_ast_node!(Argument, printer::print_argument);
