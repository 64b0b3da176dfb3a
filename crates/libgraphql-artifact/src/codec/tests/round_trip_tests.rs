//! Property tests: any well-formed document survives an encode/decode cycle
//! unchanged, whatever the output style. Generated documents carry nested
//! locations on a random subset of nodes, directives, variable definitions,
//! and fragments in arbitrary order.

use crate::Location;
use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::ListType;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::ObjectField;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::codec;
use crate::codec::SerializeOptions;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[_A-Za-z][_0-9A-Za-z]{0,7}"
}

fn value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(|value| Value::Boolean { loc: None, value }),
        name().prop_map(|value| Value::Enum { loc: None, value }),
        "-?[1-9][0-9]{0,5}".prop_map(|value| Value::Int { loc: None, value }),
        "-?[0-9]{1,3}\\.[0-9]{1,3}".prop_map(|value| Value::Float { loc: None, value }),
        (any::<String>(), any::<bool>()).prop_map(|(value, block)| {
            Value::String { block, loc: None, value }
        }),
        Just(Value::Null { loc: None }),
        name().prop_map(|name| Value::Variable(Variable::new(name))),
    ];

    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..3).prop_map(|values| Value::List { loc: None, values }),
            vec((name(), inner), 0..3).prop_map(|fields| Value::Object {
                fields: fields
                    .into_iter()
                    .map(|(name, value)| ObjectField {
                        loc: None,
                        name: Name::new(name),
                        value,
                    })
                    .collect(),
                loc: None,
            }),
        ]
    })
}

fn argument() -> impl Strategy<Value = Argument> {
    (name(), value()).prop_map(|(name, value)| Argument {
        loc: None,
        name: Name::new(name),
        value,
    })
}

fn directives() -> impl Strategy<Value = Vec<DirectiveAnnotation>> {
    vec(
        (name(), vec(argument(), 0..2)).prop_map(|(name, arguments)| DirectiveAnnotation {
            arguments,
            loc: None,
            name: Name::new(name),
        }),
        0..2,
    )
}

/// Any type annotation except a non-null type directly wrapping another.
fn type_annotation() -> impl Strategy<Value = TypeAnnotation> {
    let leaf = name().prop_map(|name| TypeAnnotation::Named(NamedType::new(name)));

    leaf.prop_recursive(3, 6, 1, |inner| {
        prop_oneof![
            inner.clone().prop_map(|inner| TypeAnnotation::List(ListType {
                inner: Box::new(inner),
                loc: None,
            })),
            inner.prop_map(|inner| match inner {
                TypeAnnotation::NonNull(_) => inner,
                _ => TypeAnnotation::NonNull(NonNullType {
                    inner: Box::new(inner),
                    loc: None,
                }),
            }),
        ]
    })
}

fn variable_definition() -> impl Strategy<Value = VariableDefinition> {
    (name(), type_annotation(), option::of(value()), directives()).prop_map(
        |(name, type_annotation, default_value, directives)| VariableDefinition {
            default_value,
            directives,
            loc: None,
            type_annotation,
            variable: Variable::new(name),
        },
    )
}

fn selection() -> impl Strategy<Value = Selection> {
    let leaf = (option::of(name()), name(), vec(argument(), 0..3), directives()).prop_map(
        |(alias, name, arguments, directives)| {
            let mut field = Field::leaf(name);
            field.alias = alias.map(Name::new);
            field.arguments = arguments;
            field.directives = directives;
            Selection::Field(field)
        },
    );

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (name(), vec(inner.clone(), 1..4)).prop_map(|(name, selections)| {
                Selection::Field(Field::with_selections(name, selections))
            }),
            (option::of(name()), directives(), vec(inner, 1..3)).prop_map(
                |(type_condition, directives, selections)| {
                    Selection::InlineFragment(InlineFragment {
                        directives,
                        loc: None,
                        selection_set: SelectionSet::new(selections),
                        type_condition: type_condition.map(NamedType::new),
                    })
                },
            ),
        ]
    })
}

/// Assigns nested, monotone locations to a document in traversal order.
///
/// Each node opens after a gap, its children follow, and it closes after
/// another gap, so every child range lies within its parent's. Nodes whose
/// `located` flag is unset keep `loc: None`.
struct Locator {
    gaps: Vec<u32>,
    located: Vec<bool>,
    offset: u32,
    step: usize,
}

impl Locator {
    fn open(&mut self) -> (u32, bool) {
        let located = self.located[self.step % self.located.len()];
        self.offset += self.gaps[self.step % self.gaps.len()];
        self.step += 1;
        (self.offset, located)
    }

    fn close(&mut self, (start, located): (u32, bool)) -> Option<Location> {
        self.offset += self.gaps[self.step % self.gaps.len()];
        self.step += 1;
        located.then(|| Location::new(start, self.offset))
    }

    fn document(&mut self, document: &mut Document) {
        let span = self.open();
        self.operation(&mut document.operation);
        for fragment in document.fragments.values_mut() {
            self.fragment(fragment);
        }
        document.loc = self.close(span);
    }

    fn operation(&mut self, operation: &mut OperationDefinition) {
        let span = self.open();
        if let Some(name) = &mut operation.name {
            self.name(name);
        }
        for def in &mut operation.variable_definitions {
            let def_span = self.open();
            let var_span = self.open();
            self.name(&mut def.variable.name);
            def.variable.loc = self.close(var_span);
            self.type_annotation(&mut def.type_annotation);
            if let Some(default_value) = &mut def.default_value {
                self.value(default_value);
            }
            self.directives(&mut def.directives);
            def.loc = self.close(def_span);
        }
        self.directives(&mut operation.directives);
        self.selection_set(&mut operation.selection_set);
        operation.loc = self.close(span);
    }

    fn fragment(&mut self, fragment: &mut FragmentDefinition) {
        let span = self.open();
        self.name(&mut fragment.name);
        self.named_type(&mut fragment.type_condition);
        self.directives(&mut fragment.directives);
        self.selection_set(&mut fragment.selection_set);
        fragment.loc = self.close(span);
    }

    fn selection_set(&mut self, selection_set: &mut SelectionSet) {
        let span = self.open();
        for selection in &mut selection_set.selections {
            match selection {
                Selection::Field(field) => {
                    let field_span = self.open();
                    if let Some(alias) = &mut field.alias {
                        self.name(alias);
                    }
                    self.name(&mut field.name);
                    self.arguments(&mut field.arguments);
                    self.directives(&mut field.directives);
                    if let Some(nested) = &mut field.selection_set {
                        self.selection_set(nested);
                    }
                    field.loc = self.close(field_span);
                },
                Selection::FragmentSpread(spread) => {
                    let spread_span = self.open();
                    self.name(&mut spread.name);
                    self.directives(&mut spread.directives);
                    spread.loc = self.close(spread_span);
                },
                Selection::InlineFragment(inline) => {
                    let inline_span = self.open();
                    if let Some(type_condition) = &mut inline.type_condition {
                        self.named_type(type_condition);
                    }
                    self.directives(&mut inline.directives);
                    self.selection_set(&mut inline.selection_set);
                    inline.loc = self.close(inline_span);
                },
            }
        }
        selection_set.loc = self.close(span);
    }

    fn arguments(&mut self, arguments: &mut [Argument]) {
        for arg in arguments {
            let span = self.open();
            self.name(&mut arg.name);
            self.value(&mut arg.value);
            arg.loc = self.close(span);
        }
    }

    fn directives(&mut self, directives: &mut [DirectiveAnnotation]) {
        for directive in directives {
            let span = self.open();
            self.name(&mut directive.name);
            self.arguments(&mut directive.arguments);
            directive.loc = self.close(span);
        }
    }

    fn value(&mut self, value: &mut Value) {
        let span = self.open();
        match value {
            Value::Variable(var) => {
                self.name(&mut var.name);
                var.loc = self.close(span);
            },
            Value::List { loc, values } => {
                for item in values {
                    self.value(item);
                }
                *loc = self.close(span);
            },
            Value::Object { fields, loc } => {
                for field in fields {
                    let field_span = self.open();
                    self.name(&mut field.name);
                    self.value(&mut field.value);
                    field.loc = self.close(field_span);
                }
                *loc = self.close(span);
            },
            Value::Boolean { loc, .. }
            | Value::Enum { loc, .. }
            | Value::Float { loc, .. }
            | Value::Int { loc, .. }
            | Value::Null { loc }
            | Value::String { loc, .. } => *loc = self.close(span),
        }
    }

    fn type_annotation(&mut self, annot: &mut TypeAnnotation) {
        match annot {
            TypeAnnotation::Named(named) => self.named_type(named),
            TypeAnnotation::List(list) => {
                let span = self.open();
                self.type_annotation(&mut list.inner);
                list.loc = self.close(span);
            },
            TypeAnnotation::NonNull(non_null) => {
                let span = self.open();
                self.type_annotation(&mut non_null.inner);
                non_null.loc = self.close(span);
            },
        }
    }

    fn named_type(&mut self, named: &mut NamedType) {
        let span = self.open();
        self.name(&mut named.name);
        named.loc = self.close(span);
    }

    fn name(&mut self, name: &mut Name) {
        let span = self.open();
        name.loc = self.close(span);
    }
}

/// An operation plus up to four fragments, added in a shuffled order and
/// each spread once at the end of the operation's selection set.
fn document() -> impl Strategy<Value = Document> {
    (
        prop_oneof![
            Just(OperationKind::Query),
            Just(OperationKind::Mutation),
            Just(OperationKind::Subscription),
        ],
        option::of(name()),
        vec(variable_definition(), 0..3),
        directives(),
        vec(selection(), 1..4),
        vec(vec(selection(), 1..3), 0..4),
        Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
        vec(0u32..4, 1..8),
        vec(any::<bool>(), 1..8),
    )
        .prop_map(|(
            operation_kind,
            operation_name,
            variable_definitions,
            directives,
            mut selections,
            fragment_bodies,
            fragment_order,
            gaps,
            located,
        )| {
            let fragments: Vec<FragmentDefinition> = fragment_bodies
                .into_iter()
                .enumerate()
                .map(|(idx, body)| {
                    FragmentDefinition::new(
                        format!("Fragment{}", fragment_order[idx]),
                        "Node",
                        SelectionSet::new(body),
                    )
                })
                .collect();
            selections.extend(fragments.iter().map(|fragment| {
                Selection::FragmentSpread(FragmentSpread::new(fragment.fragment_name()))
            }));

            let mut operation = OperationDefinition::new(
                operation_kind,
                operation_name.as_deref(),
                SelectionSet::new(selections),
            );
            operation.variable_definitions = variable_definitions;
            operation.directives = directives;

            let mut document = Document::new(operation);
            for fragment in fragments {
                document.add_fragment(fragment).unwrap();
            }
            Locator { gaps, located, offset: 0, step: 0 }.document(&mut document);
            document
        })
}

proptest! {
    #[test]
    fn decode_inverts_encode(doc in document()) {
        prop_assert!(doc.validate().is_ok());
        let text = codec::serialize(&doc).unwrap();
        let decoded = codec::deserialize(&text).unwrap();
        prop_assert_eq!(
            decoded.fragments.keys().collect::<Vec<_>>(),
            doc.fragments.keys().collect::<Vec<_>>(),
        );
        prop_assert_eq!(decoded, doc);
    }

    #[test]
    fn compact_decode_inverts_encode(doc in document()) {
        let text = codec::serialize_with(&doc, &SerializeOptions::default().compact()).unwrap();
        prop_assert!(!text.contains('\n'));
        prop_assert_eq!(codec::deserialize(&text).unwrap(), doc);
    }

    #[test]
    fn encoding_is_deterministic(doc in document()) {
        let first = codec::serialize(&doc).unwrap();
        let second = codec::serialize(&codec::deserialize(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Dropping locations loses exactly the locations and nothing else.
    #[test]
    fn unlocated_encoding_only_drops_locations(doc in document()) {
        let options = SerializeOptions::default().without_locations();
        let text = codec::serialize_with(&doc, &options).unwrap();
        prop_assert!(!text.contains("\"loc\":"));

        let decoded = codec::deserialize(&text).unwrap();
        prop_assert_eq!(codec::serialize_with(&decoded, &options).unwrap(), text);
        prop_assert_eq!(decoded.fragments.len(), doc.fragments.len());
    }
}
