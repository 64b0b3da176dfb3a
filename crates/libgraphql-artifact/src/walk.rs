//! Consumer-side traversal of a [`Document`].
//!
//! An execution engine walks the operation's selection set recursively and
//! resolves one field at a time. Fragment spreads are expanded in place by
//! substituting the named fragment's selection set at the spread site, and
//! inline fragments are descended into, so the visitor only ever sees
//! [`Field`]s.

use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use indexmap::IndexSet;

/// Whether [`Document::walk_fields`] descends into a visited field's nested
/// selection set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkAction {
    Descend,
    SkipChildren,
}

/// Callback invoked once per field reached by [`Document::walk_fields`].
///
/// `path` holds the response keys from the operation root down to and
/// including `field`. Closures of the matching signature implement this
/// trait.
pub trait FieldVisitor<'doc> {
    fn visit_field(
        &mut self,
        path: &[&'doc str],
        field: &'doc Field,
    ) -> WalkAction;
}

impl<'doc, F> FieldVisitor<'doc> for F
where
    F: FnMut(&[&'doc str], &'doc Field) -> WalkAction,
{
    fn visit_field(
        &mut self,
        path: &[&'doc str],
        field: &'doc Field,
    ) -> WalkAction {
        self(path, field)
    }
}

impl Document {
    /// Walk every field of the operation depth-first, in selection order,
    /// expanding fragment spreads and inline fragments in place.
    ///
    /// Spreads of undefined fragments, and spreads that would re-enter a
    /// fragment already being expanded, are skipped; neither occurs in a
    /// document returned by [`deserialize`](crate::codec::deserialize).
    pub fn walk_fields<'doc>(&'doc self, visitor: &mut impl FieldVisitor<'doc>) {
        let mut walker = FieldWalker {
            document: self,
            expanding: vec![],
            path: vec![],
        };
        walker.walk_selection_set(&self.operation.selection_set, visitor);
    }

    /// The dotted response-key paths of every field reached by
    /// [`walk_fields`](Document::walk_fields), in visit order.
    pub fn field_paths(&self) -> Vec<String> {
        let mut paths = vec![];
        self.walk_fields(&mut |path: &[&str], _field: &Field| {
            paths.push(path.join("."));
            WalkAction::Descend
        });
        paths
    }

    /// Find the first field at a response-key path within the operation's
    /// own selection sets. Fragment spreads are not expanded.
    pub fn field_at_path(&self, path: &[&str]) -> Option<&Field> {
        let (last, parents) = path.split_last()?;
        let mut selection_set = &self.operation.selection_set;
        for key in parents {
            selection_set = selection_set.field(key)?.selection_set.as_ref()?;
        }
        selection_set.field(last)
    }

    /// Every fragment spread in the document (operation first, then each
    /// fragment definition), in source order.
    pub fn fragment_spreads(&self) -> Vec<&FragmentSpread> {
        let mut spreads = vec![];
        collect_spreads(&self.operation.selection_set, &mut spreads);
        for fragment in self.fragments.values() {
            collect_spreads(&fragment.selection_set, &mut spreads);
        }
        spreads
    }

    /// Names of the fragments transitively reachable from the operation, in
    /// order of first use.
    pub fn referenced_fragments(&self) -> Vec<&str> {
        let mut reached: IndexSet<&str> = IndexSet::new();
        let mut pending = vec![];
        collect_spreads(&self.operation.selection_set, &mut pending);
        pending.reverse();

        while let Some(spread) = pending.pop() {
            if !reached.insert(spread.fragment_name()) {
                continue;
            }
            if let Some(fragment) = self.resolve_spread(spread) {
                let mut nested = vec![];
                collect_spreads(&fragment.selection_set, &mut nested);
                pending.extend(nested.into_iter().rev());
            }
        }

        reached
            .into_iter()
            .filter(|name| self.fragments.contains_key(*name))
            .collect()
    }

    /// Names of fragment definitions the operation never reaches.
    pub fn unused_fragments(&self) -> Vec<&str> {
        let referenced: IndexSet<&str> = self.referenced_fragments().into_iter().collect();
        self.fragments
            .keys()
            .map(String::as_str)
            .filter(|name| !referenced.contains(name))
            .collect()
    }
}

fn collect_spreads<'doc>(
    selection_set: &'doc SelectionSet,
    spreads: &mut Vec<&'doc FragmentSpread>,
) {
    for selection in &selection_set.selections {
        match selection {
            Selection::FragmentSpread(spread) => spreads.push(spread),
            Selection::Field(_) | Selection::InlineFragment(_) => {
                if let Some(nested) = selection.selection_set() {
                    collect_spreads(nested, spreads);
                }
            },
        }
    }
}

struct FieldWalker<'doc> {
    document: &'doc Document,
    /// Fragments currently being expanded, innermost last.
    expanding: Vec<&'doc str>,
    path: Vec<&'doc str>,
}

impl<'doc> FieldWalker<'doc> {
    fn walk_selection_set(
        &mut self,
        selection_set: &'doc SelectionSet,
        visitor: &mut impl FieldVisitor<'doc>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                Selection::Field(field) => {
                    self.path.push(field.response_key());
                    let action = visitor.visit_field(&self.path, field);
                    if action == WalkAction::Descend
                        && let Some(nested) = &field.selection_set {
                        self.walk_selection_set(nested, visitor);
                    }
                    self.path.pop();
                },

                Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name();
                    if self.expanding.contains(&fragment_name) {
                        log::warn!(
                            "Skipping re-entrant spread of fragment `{fragment_name}`.",
                        );
                        continue;
                    }
                    let Some(fragment) = self.document.resolve_spread(spread) else {
                        log::warn!(
                            "Skipping spread of undefined fragment `{fragment_name}`.",
                        );
                        continue;
                    };
                    self.expanding.push(fragment_name);
                    self.walk_selection_set(&fragment.selection_set, visitor);
                    self.expanding.pop();
                },

                Selection::InlineFragment(inline) => {
                    self.walk_selection_set(&inline.selection_set, visitor);
                },
            }
        }
    }
}
