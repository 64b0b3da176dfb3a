use crate::Location;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// An operation definition (query, mutation, or subscription).
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Location>,
    pub name: Option<Name>,
    pub operation_kind: OperationKind,
    pub selection_set: SelectionSet,
    pub variable_definitions: Vec<VariableDefinition>,
}

impl OperationDefinition {
    pub fn new(
        operation_kind: OperationKind,
        name: Option<&str>,
        selection_set: SelectionSet,
    ) -> Self {
        Self {
            directives: vec![],
            loc: None,
            name: name.map(Name::new),
            operation_kind,
            selection_set,
            variable_definitions: vec![],
        }
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.name.as_ref().map(Name::as_str)
    }

    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variable_definitions.iter().find(|def| def.name() == name)
    }
}

impl_ast_node!(OperationDefinition, printer::print_operation_definition);
