use crate::Location;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::Selection;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;

/// A selection set: the ordered fields and fragments selected within
/// braces `{ ... }`.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub loc: Option<Location>,
    pub selections: Vec<Selection>,
}

impl SelectionSet {
    pub fn new(selections: Vec<Selection>) -> Self {
        Self {
            loc: None,
            selections,
        }
    }

    /// The fields selected directly in this set (no descent into inline
    /// fragments or spreads).
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.selections.iter().filter_map(|selection| match selection {
            Selection::Field(field) => Some(field),
            _ => None,
        })
    }

    /// The fragment spreads made directly in this set.
    pub fn fragment_spreads(&self) -> impl Iterator<Item = &FragmentSpread> {
        self.selections.iter().filter_map(|selection| match selection {
            Selection::FragmentSpread(spread) => Some(spread),
            _ => None,
        })
    }

    /// Look up a directly-selected field by its response key (alias if
    /// present, otherwise name).
    pub fn field(&self, response_key: &str) -> Option<&Field> {
        self.fields().find(|field| field.response_key() == response_key)
    }
}

impl_ast_node!(SelectionSet, printer::print_selection_set);
