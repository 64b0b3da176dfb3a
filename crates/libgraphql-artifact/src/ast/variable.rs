use crate::Location;
use crate::ast::Name;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A variable reference (`$first`), either in a variable definition or as
/// an argument value.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub loc: Option<Location>,
    pub name: Name,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            loc: None,
            name: Name::new(name),
        }
    }
}

impl_ast_node!(Variable, printer::print_variable);
