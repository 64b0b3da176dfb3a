use crate::Location;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::SelectionSet;
use inherent::inherent;

/// A single selection within a selection set.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the GraphQL spec.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    /// The nested selection set, if this selection has one.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        match self {
            Selection::Field(field) => field.selection_set.as_ref(),
            Selection::FragmentSpread(_) => None,
            Selection::InlineFragment(inline) => Some(&inline.selection_set),
        }
    }
}

#[inherent]
impl crate::ast::AstNode for Selection {
    pub fn loc(&self) -> Option<Location> {
        match self {
            Selection::Field(s) => s.loc,
            Selection::FragmentSpread(s) => s.loc,
            Selection::InlineFragment(s) => s.loc,
        }
    }

    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            Selection::Field(s) => {
                s.append_source(sink, source)
            },
            Selection::FragmentSpread(s) => {
                s.append_source(sink, source)
            },
            Selection::InlineFragment(s) => {
                s.append_source(sink, source)
            },
        }
    }
}
