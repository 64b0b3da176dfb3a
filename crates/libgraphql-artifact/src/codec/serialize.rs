use crate::Location;
use crate::MalformedDocumentError;
use crate::ast;
use crate::codec::OutputStyle;
use crate::codec::SerializeOptions;
use crate::codec::node_kind::ArgumentKind;
use crate::codec::node_kind::DirectiveKind;
use crate::codec::node_kind::DocumentKind;
use crate::codec::node_kind::NameKind;
use crate::codec::node_kind::NamedTypeKind;
use crate::codec::node_kind::ObjectFieldKind;
use crate::codec::node_kind::SelectionSetKind;
use crate::codec::node_kind::VariableDefinitionKind;
use crate::codec::node_kind::VariableKind;
use crate::codec::wire::WireArgument;
use crate::codec::wire::WireDefinition;
use crate::codec::wire::WireDirective;
use crate::codec::wire::WireDocument;
use crate::codec::wire::WireField;
use crate::codec::wire::WireFragmentDefinition;
use crate::codec::wire::WireFragmentSpread;
use crate::codec::wire::WireInlineFragment;
use crate::codec::wire::WireName;
use crate::codec::wire::WireNamedType;
use crate::codec::wire::WireObjectField;
use crate::codec::wire::WireOperationDefinition;
use crate::codec::wire::WireSelection;
use crate::codec::wire::WireSelectionSet;
use crate::codec::wire::WireType;
use crate::codec::wire::WireValue;
use crate::codec::wire::WireVariable;
use crate::codec::wire::WireVariableDefinition;
use std::borrow::Cow;
use std::sync::Arc;

/// Encode `document` in the persisted form using the default
/// [`SerializeOptions`] (pretty, with locations).
///
/// Output is stable: encoding the same document twice yields byte-identical
/// text, and [`deserialize`](crate::codec::deserialize) reconstructs a
/// document equal to `document`.
pub fn serialize(document: &ast::Document) -> Result<String, MalformedDocumentError> {
    serialize_with(document, &SerializeOptions::default())
}

/// Encode `document` in the persisted form with the given options.
pub fn serialize_with(
    document: &ast::Document,
    options: &SerializeOptions,
) -> Result<String, MalformedDocumentError> {
    let encoder = WireEncoder {
        include_locations: options.include_locations,
    };
    let wire = encoder.document(document);
    let encoded = match options.style {
        OutputStyle::Compact => serde_json::to_string(&wire),
        OutputStyle::Pretty => serde_json::to_string_pretty(&wire),
    };
    encoded.map_err(|err| MalformedDocumentError::Encode(Arc::new(err)))
}

/// Borrows an [`ast::Document`] into its wire mirror.
struct WireEncoder {
    include_locations: bool,
}

impl WireEncoder {
    fn loc(&self, loc: Option<Location>) -> Option<Location> {
        loc.filter(|_| self.include_locations)
    }

    fn document<'a>(&self, document: &'a ast::Document) -> WireDocument<'a> {
        let mut definitions = Vec::with_capacity(1 + document.fragments.len());
        definitions.push(WireDefinition::OperationDefinition(
            self.operation(&document.operation),
        ));
        definitions.extend(document.fragments.values().map(|fragment| {
            WireDefinition::FragmentDefinition(self.fragment(fragment))
        }));

        WireDocument {
            kind: DocumentKind,
            definitions,
            loc: self.loc(document.loc),
        }
    }

    fn operation<'a>(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> WireOperationDefinition<'a> {
        WireOperationDefinition {
            operation: operation.operation_kind,
            name: operation.name.as_ref().map(|name| self.name(name)),
            variable_definitions: operation.variable_definitions
                .iter()
                .map(|def| self.variable_definition(def))
                .collect(),
            directives: self.directives(&operation.directives),
            selection_set: self.selection_set(&operation.selection_set),
            loc: self.loc(operation.loc),
        }
    }

    fn fragment<'a>(
        &self,
        fragment: &'a ast::FragmentDefinition,
    ) -> WireFragmentDefinition<'a> {
        WireFragmentDefinition {
            name: self.name(&fragment.name),
            type_condition: self.named_type(&fragment.type_condition),
            directives: self.directives(&fragment.directives),
            selection_set: self.selection_set(&fragment.selection_set),
            loc: self.loc(fragment.loc),
        }
    }

    fn variable_definition<'a>(
        &self,
        def: &'a ast::VariableDefinition,
    ) -> WireVariableDefinition<'a> {
        WireVariableDefinition {
            kind: VariableDefinitionKind,
            variable: self.variable(&def.variable),
            type_annotation: self.type_annotation(&def.type_annotation),
            default_value: def.default_value.as_ref().map(|value| self.value(value)),
            directives: self.directives(&def.directives),
            loc: self.loc(def.loc),
        }
    }

    fn variable<'a>(&self, variable: &'a ast::Variable) -> WireVariable<'a> {
        WireVariable {
            kind: VariableKind,
            name: self.name(&variable.name),
            loc: self.loc(variable.loc),
        }
    }

    fn type_annotation<'a>(&self, annot: &'a ast::TypeAnnotation) -> WireType<'a> {
        match annot {
            ast::TypeAnnotation::Named(named) => WireType::NamedType {
                name: self.name(&named.name),
                loc: self.loc(named.loc),
            },
            ast::TypeAnnotation::List(list) => WireType::ListType {
                inner: Box::new(self.type_annotation(&list.inner)),
                loc: self.loc(list.loc),
            },
            ast::TypeAnnotation::NonNull(non_null) => WireType::NonNullType {
                inner: Box::new(self.type_annotation(&non_null.inner)),
                loc: self.loc(non_null.loc),
            },
        }
    }

    fn named_type<'a>(&self, named: &'a ast::NamedType) -> WireNamedType<'a> {
        WireNamedType {
            kind: NamedTypeKind,
            name: self.name(&named.name),
            loc: self.loc(named.loc),
        }
    }

    fn selection_set<'a>(&self, set: &'a ast::SelectionSet) -> WireSelectionSet<'a> {
        WireSelectionSet {
            kind: SelectionSetKind,
            selections: set.selections
                .iter()
                .map(|selection| self.selection(selection))
                .collect(),
            loc: self.loc(set.loc),
        }
    }

    fn selection<'a>(&self, selection: &'a ast::Selection) -> WireSelection<'a> {
        match selection {
            ast::Selection::Field(field) => WireSelection::Field(self.field(field)),

            ast::Selection::FragmentSpread(spread) => {
                WireSelection::FragmentSpread(WireFragmentSpread {
                    name: self.name(&spread.name),
                    directives: self.directives(&spread.directives),
                    loc: self.loc(spread.loc),
                })
            },

            ast::Selection::InlineFragment(inline) => {
                WireSelection::InlineFragment(WireInlineFragment {
                    type_condition: inline.type_condition
                        .as_ref()
                        .map(|named| self.named_type(named)),
                    directives: self.directives(&inline.directives),
                    selection_set: self.selection_set(&inline.selection_set),
                    loc: self.loc(inline.loc),
                })
            },
        }
    }

    fn field<'a>(&self, field: &'a ast::Field) -> WireField<'a> {
        WireField {
            alias: field.alias.as_ref().map(|alias| self.name(alias)),
            name: self.name(&field.name),
            arguments: self.arguments(&field.arguments),
            directives: self.directives(&field.directives),
            selection_set: field.selection_set
                .as_ref()
                .map(|set| self.selection_set(set)),
            loc: self.loc(field.loc),
        }
    }

    fn arguments<'a>(&self, arguments: &'a [ast::Argument]) -> Vec<WireArgument<'a>> {
        arguments
            .iter()
            .map(|arg| WireArgument {
                kind: ArgumentKind,
                name: self.name(&arg.name),
                value: self.value(&arg.value),
                loc: self.loc(arg.loc),
            })
            .collect()
    }

    fn directives<'a>(
        &self,
        directives: &'a [ast::DirectiveAnnotation],
    ) -> Vec<WireDirective<'a>> {
        directives
            .iter()
            .map(|directive| WireDirective {
                kind: DirectiveKind,
                name: self.name(&directive.name),
                arguments: self.arguments(&directive.arguments),
                loc: self.loc(directive.loc),
            })
            .collect()
    }

    fn value<'a>(&self, value: &'a ast::Value) -> WireValue<'a> {
        match value {
            ast::Value::Variable(var) => WireValue::Variable {
                name: self.name(&var.name),
                loc: self.loc(var.loc),
            },
            ast::Value::Int { loc, value } => WireValue::IntValue {
                value: Cow::Borrowed(value.as_str()),
                loc: self.loc(*loc),
            },
            ast::Value::Float { loc, value } => WireValue::FloatValue {
                value: Cow::Borrowed(value.as_str()),
                loc: self.loc(*loc),
            },
            ast::Value::String { block, loc, value } => WireValue::StringValue {
                value: Cow::Borrowed(value.as_str()),
                block: *block,
                loc: self.loc(*loc),
            },
            ast::Value::Boolean { loc, value } => WireValue::BooleanValue {
                value: *value,
                loc: self.loc(*loc),
            },
            ast::Value::Null { loc } => WireValue::NullValue {
                loc: self.loc(*loc),
            },
            ast::Value::Enum { loc, value } => WireValue::EnumValue {
                value: Cow::Borrowed(value.as_str()),
                loc: self.loc(*loc),
            },
            ast::Value::List { loc, values } => WireValue::ListValue {
                values: values.iter().map(|value| self.value(value)).collect(),
                loc: self.loc(*loc),
            },
            ast::Value::Object { fields, loc } => WireValue::ObjectValue {
                fields: fields
                    .iter()
                    .map(|field| WireObjectField {
                        kind: ObjectFieldKind,
                        name: self.name(&field.name),
                        value: self.value(&field.value),
                        loc: self.loc(field.loc),
                    })
                    .collect(),
                loc: self.loc(*loc),
            },
        }
    }

    fn name<'a>(&self, name: &'a ast::Name) -> WireName<'a> {
        WireName {
            kind: NameKind,
            value: Cow::Borrowed(name.value.as_str()),
            loc: self.loc(name.loc),
        }
    }
}
