use crate::Location;
use crate::MalformedDocumentError;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::OperationDefinition;
use crate::ast::ast_node::impl_ast_node;
use crate::printer;
use indexmap::IndexMap;

/// Root node of a precompiled artifact: exactly one operation plus the
/// fragment definitions it (transitively) spreads.
///
/// The document owns every [`FragmentDefinition`] exactly once, keyed by
/// fragment name in order of appearance. [`FragmentSpread`]s refer to
/// fragments by name and are resolved by map lookup, so no node owns
/// another through a spread.
///
/// A `Document` is never mutated once loaded. It is `Send + Sync` and is
/// typically shared behind an [`Arc`](std::sync::Arc) by every request that
/// executes the operation (see [`DocumentRegistry`](crate::registry::DocumentRegistry)).
///
/// Equality takes fragment order into account, since it is part of the
/// encoded form.
#[derive(Clone, Debug)]
pub struct Document {
    pub fragments: IndexMap<String, FragmentDefinition>,
    pub loc: Option<Location>,
    pub operation: OperationDefinition,
}

impl Document {
    pub fn new(operation: OperationDefinition) -> Self {
        Self {
            fragments: IndexMap::new(),
            loc: None,
            operation,
        }
    }

    /// Add a fragment definition, rejecting a second definition with the
    /// same name.
    pub fn add_fragment(
        &mut self,
        fragment: FragmentDefinition,
    ) -> Result<(), MalformedDocumentError> {
        let name = fragment.fragment_name().to_string();
        if let Some(existing) = self.fragments.get(&name) {
            return Err(MalformedDocumentError::DuplicateFragmentDefinition {
                fragment_name: name,
                first_def_loc: existing.loc,
                second_def_loc: fragment.loc,
            });
        }
        self.fragments.insert(name, fragment);
        Ok(())
    }

    /// Builder-style variant of [`add_fragment`](Document::add_fragment).
    pub fn with_fragment(
        mut self,
        fragment: FragmentDefinition,
    ) -> Result<Self, MalformedDocumentError> {
        self.add_fragment(fragment)?;
        Ok(self)
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation.operation_name()
    }

    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.get(name)
    }

    /// Resolve a spread to the fragment definition it names.
    ///
    /// Always `Some` for spreads within a validated document.
    pub fn resolve_spread(
        &self,
        spread: &FragmentSpread,
    ) -> Option<&FragmentDefinition> {
        self.fragment(spread.fragment_name())
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.loc == other.loc
            && self.operation == other.operation
            && self.fragments.iter().eq(other.fragments.iter())
    }
}

impl_ast_node!(Document, printer::print_document);
