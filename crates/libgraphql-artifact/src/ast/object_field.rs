use crate::Location;
use crate::ast::Name;
use crate::ast::Value;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A single `name: value` entry of an object value.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub loc: Option<Location>,
    pub name: Name,
    pub value: Value,
}

impl_ast_node!(ObjectField, printer::print_object_field);
