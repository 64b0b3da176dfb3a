use crate::Location;
use crate::MalformedDocumentError;
use crate::UnresolvedFragmentError;
use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::Document;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use std::collections::HashSet;

impl Document {
    /// Check every structural invariant of this document.
    ///
    /// Performs the following validations, and returns every violation found
    /// (in document order) rather than stopping at the first:
    /// - Every `loc` is well-formed (`start <= end`) and lies within the
    ///   `loc` of its nearest located ancestor
    /// - Every fragment is keyed by its own name
    /// - Every fragment spread names a fragment defined in this document
    /// - No non-null type directly wraps another non-null type
    /// - No fragment (transitively) spreads itself. Phase-shifted cycles
    ///   (e.g. A→B→C→A and B→C→A→B) are reported once
    pub fn validate(&self) -> Result<(), Vec<MalformedDocumentError>> {
        let mut validator = DocumentValidator {
            document: self,
            errors: vec![],
        };

        let root = Scope {
            enclosing_fragment: None,
            located_ancestor: None,
        };
        let root = validator.enter(&root, "document".to_string(), self.loc);
        validator.validate_operation(&root);
        for (key, fragment) in &self.fragments {
            if key.as_str() != fragment.fragment_name() {
                validator.errors.push(MalformedDocumentError::FragmentNameMismatch {
                    key: key.clone(),
                    fragment_name: fragment.fragment_name().to_string(),
                });
            }
            validator.validate_fragment(&root, key);
        }
        validator.errors.extend(validate_no_cycles(self));

        if validator.errors.is_empty() {
            Ok(())
        } else {
            Err(validator.errors)
        }
    }
}

/// Position of the traversal: the fragment being walked (if any) and the
/// nearest ancestor that carries a location.
#[derive(Clone)]
struct Scope {
    enclosing_fragment: Option<String>,
    located_ancestor: Option<(String, Location)>,
}

struct DocumentValidator<'doc> {
    document: &'doc Document,
    errors: Vec<MalformedDocumentError>,
}

impl<'doc> DocumentValidator<'doc> {
    /// Check `loc` against the enclosing scope and return the scope that the
    /// node's children are checked against.
    fn enter(
        &mut self,
        parent: &Scope,
        path: String,
        loc: Option<Location>,
    ) -> Scope {
        let mut scope = parent.clone();
        let Some(loc) = loc else {
            return scope;
        };

        if loc.is_inverted() {
            self.errors.push(MalformedDocumentError::InvertedLocation { path, loc });
            return scope;
        }

        if let Some((parent_path, parent_loc)) = &parent.located_ancestor
            && !parent_loc.contains(&loc) {
            self.errors.push(MalformedDocumentError::LocationEscapesParent {
                path: path.clone(),
                loc,
                parent_path: parent_path.clone(),
                parent_loc: *parent_loc,
            });
        }

        scope.located_ancestor = Some((path, loc));
        scope
    }

    fn validate_operation(&mut self, root: &Scope) {
        let document = self.document;
        let operation = &document.operation;
        let scope = self.enter(root, "operation".to_string(), operation.loc);
        let base = "operation";

        if let Some(name) = &operation.name {
            self.validate_name(&scope, format!("{base}.name"), name);
        }
        for def in &operation.variable_definitions {
            let def_path = format!("{base}.variableDefinitions.${}", def.name());
            let def_scope = self.enter(&scope, def_path.clone(), def.loc);
            let var_scope = self.enter(&def_scope, format!("{def_path}.variable"), def.variable.loc);
            self.validate_name(&var_scope, format!("{def_path}.variable.name"), &def.variable.name);
            self.validate_type(&def_scope, format!("{def_path}.type"), &def.type_annotation);
            if let Some(default_value) = &def.default_value {
                self.validate_value(&def_scope, format!("{def_path}.defaultValue"), default_value);
            }
            self.validate_directives(&def_scope, &def_path, &def.directives);
        }
        self.validate_directives(&scope, base, &operation.directives);
        self.validate_selection_set(
            &scope,
            format!("{base}.selectionSet"),
            &operation.selection_set,
        );
    }

    fn validate_fragment(&mut self, root: &Scope, fragment_name: &str) {
        let document = self.document;
        let Some(fragment) = document.fragments.get(fragment_name) else {
            return;
        };

        let base = format!("fragments.{fragment_name}");
        let mut scope = self.enter(root, base.clone(), fragment.loc);
        scope.enclosing_fragment = Some(fragment_name.to_string());

        self.validate_name(&scope, format!("{base}.name"), &fragment.name);
        self.validate_named_type(&scope, format!("{base}.typeCondition"), &fragment.type_condition);
        self.validate_directives(&scope, &base, &fragment.directives);
        self.validate_selection_set(
            &scope,
            format!("{base}.selectionSet"),
            &fragment.selection_set,
        );
    }

    fn validate_selection_set(
        &mut self,
        parent: &Scope,
        path: String,
        selection_set: &SelectionSet,
    ) {
        let scope = self.enter(parent, path.clone(), selection_set.loc);
        for selection in &selection_set.selections {
            match selection {
                Selection::Field(field) => {
                    let field_path = format!("{path}.{}", field.response_key());
                    let field_scope = self.enter(&scope, field_path.clone(), field.loc);
                    if let Some(alias) = &field.alias {
                        self.validate_name(&field_scope, format!("{field_path}.alias"), alias);
                    }
                    self.validate_name(&field_scope, format!("{field_path}.name"), &field.name);
                    self.validate_arguments(&field_scope, &field_path, &field.arguments);
                    self.validate_directives(&field_scope, &field_path, &field.directives);
                    if let Some(nested) = &field.selection_set {
                        self.validate_selection_set(
                            &field_scope,
                            format!("{field_path}.selectionSet"),
                            nested,
                        );
                    }
                },

                Selection::FragmentSpread(spread) => {
                    let spread_path = format!("{path}....{}", spread.fragment_name());
                    let spread_scope = self.enter(&scope, spread_path.clone(), spread.loc);
                    self.validate_name(&spread_scope, format!("{spread_path}.name"), &spread.name);
                    self.validate_directives(&spread_scope, &spread_path, &spread.directives);

                    if self.document.resolve_spread(spread).is_none() {
                        self.errors.push(UnresolvedFragmentError {
                            enclosing_fragment: scope.enclosing_fragment.clone(),
                            fragment_name: spread.fragment_name().to_string(),
                            loc: spread.loc,
                        }.into());
                    }
                },

                Selection::InlineFragment(inline) => {
                    let inline_path = match &inline.type_condition {
                        Some(type_condition) => {
                            format!("{path}...on {}", type_condition.type_name())
                        },
                        None => format!("{path}..."),
                    };
                    let inline_scope = self.enter(&scope, inline_path.clone(), inline.loc);
                    if let Some(type_condition) = &inline.type_condition {
                        self.validate_named_type(
                            &inline_scope,
                            format!("{inline_path}.typeCondition"),
                            type_condition,
                        );
                    }
                    self.validate_directives(&inline_scope, &inline_path, &inline.directives);
                    self.validate_selection_set(
                        &inline_scope,
                        format!("{inline_path}.selectionSet"),
                        &inline.selection_set,
                    );
                },
            }
        }
    }

    fn validate_arguments(
        &mut self,
        parent: &Scope,
        parent_path: &str,
        arguments: &[Argument],
    ) {
        for arg in arguments {
            let arg_path = format!("{parent_path}({})", arg.name.as_str());
            let scope = self.enter(parent, arg_path.clone(), arg.loc);
            self.validate_name(&scope, format!("{arg_path}.name"), &arg.name);
            self.validate_value(&scope, format!("{arg_path}.value"), &arg.value);
        }
    }

    fn validate_directives(
        &mut self,
        parent: &Scope,
        parent_path: &str,
        directives: &[DirectiveAnnotation],
    ) {
        for directive in directives {
            let directive_path = format!("{parent_path}@{}", directive.name.as_str());
            let scope = self.enter(parent, directive_path.clone(), directive.loc);
            self.validate_name(&scope, format!("{directive_path}.name"), &directive.name);
            self.validate_arguments(&scope, &directive_path, &directive.arguments);
        }
    }

    fn validate_value(&mut self, parent: &Scope, path: String, value: &Value) {
        let scope = self.enter(parent, path.clone(), value.loc());
        match value {
            Value::Variable(var) => {
                self.validate_name(&scope, format!("{path}.name"), &var.name);
            },
            Value::List { values, .. } => {
                for (idx, item) in values.iter().enumerate() {
                    self.validate_value(&scope, format!("{path}[{idx}]"), item);
                }
            },
            Value::Object { fields, .. } => {
                for field in fields {
                    let field_path = format!("{path}.{}", field.name.as_str());
                    let field_scope = self.enter(&scope, field_path.clone(), field.loc);
                    self.validate_name(&field_scope, format!("{field_path}.name"), &field.name);
                    self.validate_value(&field_scope, format!("{field_path}.value"), &field.value);
                }
            },
            Value::Boolean { .. }
            | Value::Enum { .. }
            | Value::Float { .. }
            | Value::Int { .. }
            | Value::Null { .. }
            | Value::String { .. } => (),
        }
    }

    fn validate_type(&mut self, parent: &Scope, path: String, annot: &TypeAnnotation) {
        match annot {
            TypeAnnotation::Named(named) => self.validate_named_type(parent, path, named),
            TypeAnnotation::List(list) => {
                let scope = self.enter(parent, path.clone(), list.loc);
                self.validate_type(&scope, format!("{path}[]"), &list.inner);
            },
            TypeAnnotation::NonNull(non_null) => {
                if matches!(*non_null.inner, TypeAnnotation::NonNull(_)) {
                    self.errors.push(MalformedDocumentError::NestedNonNullType {
                        path: path.clone(),
                    });
                }
                let scope = self.enter(parent, path.clone(), non_null.loc);
                self.validate_type(&scope, format!("{path}!"), &non_null.inner);
            },
        }
    }

    fn validate_named_type(&mut self, parent: &Scope, path: String, named: &NamedType) {
        let scope = self.enter(parent, path.clone(), named.loc);
        self.validate_name(&scope, format!("{path}.name"), &named.name);
    }

    fn validate_name(&mut self, parent: &Scope, path: String, name: &Name) {
        self.enter(parent, path, name.loc);
    }
}

/// Detect cycles in fragment spreads.
///
/// Depth-first search over the spread graph with three fragment states:
/// unvisited, on the current path, and done. A fragment is explored at most
/// once, and a cycle is reported whenever a spread re-enters a fragment that
/// is still on the path. Spreads of undefined fragments are skipped here;
/// they are reported as [`UnresolvedFragmentError`]s.
fn validate_no_cycles(document: &Document) -> Vec<MalformedDocumentError> {
    let mut checker = CycleChecker {
        document,
        done: HashSet::new(),
        errors: vec![],
        path: vec![],
        seen_normalized: HashSet::new(),
    };
    for fragment_name in document.fragments.keys() {
        checker.visit_fragment(fragment_name);
    }
    checker.errors
}

struct CycleChecker<'doc> {
    document: &'doc Document,
    done: HashSet<&'doc str>,
    errors: Vec<MalformedDocumentError>,
    /// Fragments currently being explored, outermost first.
    path: Vec<&'doc str>,
    seen_normalized: HashSet<Vec<String>>,
}

impl<'doc> CycleChecker<'doc> {
    fn visit_fragment(&mut self, fragment_name: &'doc str) {
        if self.done.contains(fragment_name) {
            return;
        }

        if let Some(cycle_start) = self.path.iter().position(|name| *name == fragment_name) {
            let mut cycle: Vec<String> = self.path[cycle_start..]
                .iter()
                .map(|name| name.to_string())
                .collect();
            cycle.push(fragment_name.to_string());

            let normalized = normalize_cycle(&cycle);
            if self.seen_normalized.insert(normalized.clone()) {
                self.errors.push(MalformedDocumentError::FragmentCycle {
                    cycle_path: normalized,
                });
            }
            return;
        }

        let Some(fragment) = self.document.fragments.get(fragment_name) else {
            return;
        };

        self.path.push(fragment_name);
        self.visit_selection_set(&fragment.selection_set);
        self.path.pop();
        self.done.insert(fragment_name);
    }

    fn visit_selection_set(&mut self, selection_set: &'doc SelectionSet) {
        for selection in &selection_set.selections {
            match selection {
                Selection::FragmentSpread(spread) => {
                    self.visit_fragment(spread.fragment_name());
                },
                Selection::Field(_) | Selection::InlineFragment(_) => {
                    if let Some(nested) = selection.selection_set() {
                        self.visit_selection_set(nested);
                    }
                },
            }
        }
    }
}

/// Normalize a cycle to canonical form for deduplication.
///
/// Cycles that are rotations of each other are considered identical: `[A,
/// B, C, A]`, `[B, C, A, B]`, and `[C, A, B, C]` all normalize to `[A, B, C,
/// A]` (rotated to start with the lexicographically smallest name).
pub(crate) fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    if cycle.is_empty() {
        return vec![];
    }

    let without_repeat = &cycle[..cycle.len() - 1];
    let min_idx = without_repeat
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&without_repeat[min_idx..]);
    normalized.extend_from_slice(&without_repeat[..min_idx]);
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }
    normalized
}
