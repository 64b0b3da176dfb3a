use crate::Location;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A named fragment definition: a reusable selection set bound to the type
/// named by its type condition.
///
/// See
/// [Fragment Definitions](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Location>,
    pub name: Name,
    pub selection_set: SelectionSet,
    pub type_condition: NamedType,
}

impl FragmentDefinition {
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Self {
        Self {
            directives: vec![],
            loc: None,
            name: Name::new(name),
            selection_set,
            type_condition: NamedType::new(type_condition),
        }
    }

    pub fn fragment_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_ast_node!(FragmentDefinition, printer::print_fragment_definition);
