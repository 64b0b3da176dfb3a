use crate::Location;
use crate::ast::Name;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A reference to a named type, used both as a type condition
/// (`on Schedule`) and as the innermost part of a variable's
/// [`TypeAnnotation`](crate::ast::TypeAnnotation).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub loc: Option<Location>,
    pub name: Name,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            loc: None,
            name: Name::new(name),
        }
    }

    pub fn type_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_ast_node!(NamedType, printer::print_named_type);
