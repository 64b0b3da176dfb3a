use crate::Location;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A named fragment spread (`...Schedule_common`).
///
/// A spread refers to its [`FragmentDefinition`](crate::ast::FragmentDefinition)
/// by name only; the definition itself is owned by the
/// [`Document`](crate::ast::Document) and resolved via
/// [`Document::resolve_spread`](crate::ast::Document::resolve_spread).
///
/// See
/// [Fragment Spreads](https://spec.graphql.org/September2025/#FragmentSpread)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Location>,
    pub name: Name,
}

impl FragmentSpread {
    pub fn new(fragment_name: impl Into<String>) -> Self {
        Self {
            directives: vec![],
            loc: None,
            name: Name::new(fragment_name),
        }
    }

    pub fn fragment_name(&self) -> &str {
        self.name.as_str()
    }
}

impl_ast_node!(FragmentSpread, printer::print_fragment_spread);
