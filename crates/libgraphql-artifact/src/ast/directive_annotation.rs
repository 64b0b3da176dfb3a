use crate::Location;
use crate::ast::Argument;
use crate::ast::Name;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A directive annotation applied to an operation, field, fragment, or
/// variable definition (e.g. `@include(if: $withSchedule)`).
///
/// Persisted with `"kind": "Directive"`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub arguments: Vec<Argument>,
    pub loc: Option<Location>,
    pub name: Name,
}

impl_ast_node!(DirectiveAnnotation, printer::print_directive_annotation);
