use crate::Location;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A GraphQL [name](https://spec.graphql.org/September2025/#sec-Names)
/// (identifier).
///
/// Names are used for operation names, field names and aliases, argument
/// names, fragment names, type conditions, directive names, and variables.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Name {
    pub loc: Option<Location>,
    pub value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            loc: None,
            value: value.into(),
        }
    }

    pub fn with_loc(value: impl Into<String>, loc: Location) -> Self {
        Self {
            loc: Some(loc),
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl_ast_node!(Name, printer::print_name);
