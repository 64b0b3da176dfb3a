use crate::Location;
use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A field selection within a selection set, optionally aliased, with
/// arguments, directives, and a nested selection set (absent for leaf
/// fields).
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub loc: Option<Location>,
    pub name: Name,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// A leaf field with no alias, arguments, or directives.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            directives: vec![],
            loc: None,
            name: Name::new(name),
            selection_set: None,
        }
    }

    /// A field with a nested selection set.
    pub fn with_selections(
        name: impl Into<String>,
        selections: Vec<Selection>,
    ) -> Self {
        Self {
            selection_set: Some(SelectionSet::new(selections)),
            ..Self::leaf(name)
        }
    }

    /// The key under which this field's value appears in a response: the
    /// alias if present, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.as_str() == name)
    }

    pub fn is_leaf(&self) -> bool {
        self.selection_set.is_none()
    }
}

impl_ast_node!(Field, printer::print_field);
