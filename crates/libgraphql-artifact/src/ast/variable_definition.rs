use crate::Location;
use crate::ast::DirectiveAnnotation;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A variable definition on an operation
/// (`$first: Int = 20`).
///
/// See
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Location>,
    pub type_annotation: TypeAnnotation,
    pub variable: Variable,
}

impl VariableDefinition {
    pub fn name(&self) -> &str {
        self.variable.name.as_str()
    }
}

impl_ast_node!(VariableDefinition, printer::print_variable_definition);
