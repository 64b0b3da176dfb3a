use crate::MalformedDocumentError;
use crate::ast;
use crate::codec::wire::WireArgument;
use crate::codec::wire::WireDefinition;
use crate::codec::wire::WireDirective;
use crate::codec::wire::WireDocument;
use crate::codec::wire::WireField;
use crate::codec::wire::WireFragmentDefinition;
use crate::codec::wire::WireName;
use crate::codec::wire::WireNamedType;
use crate::codec::wire::WireOperationDefinition;
use crate::codec::wire::WireSelection;
use crate::codec::wire::WireSelectionSet;
use crate::codec::wire::WireType;
use crate::codec::wire::WireValue;
use crate::codec::wire::WireVariable;
use crate::codec::wire::WireVariableDefinition;
use std::io::Read;
use std::str::FromStr;

type Result<T> = std::result::Result<T, MalformedDocumentError>;

/// Decode a persisted document and check every structural invariant.
///
/// Fails fast with the first violation found:
///
/// * invalid JSON, a missing required key, or a wrong/unknown `kind`
///   ([`MalformedDocumentError::Decode`]);
/// * zero or several operation definitions;
/// * two fragment definitions with the same name;
/// * any violation reported by [`ast::Document::validate`] (unresolved
///   spreads, fragment cycles, nested non-null types, inverted or escaping
///   locations).
pub fn deserialize(text: &str) -> Result<ast::Document> {
    let wire: WireDocument<'_> = serde_json::from_str(text)?;
    document_from_wire(wire)
}

/// Like [`deserialize`], reading the persisted form from `reader`.
pub fn deserialize_reader(reader: impl Read) -> Result<ast::Document> {
    let wire: WireDocument<'static> = serde_json::from_reader(reader)?;
    document_from_wire(wire)
}

impl FromStr for ast::Document {
    type Err = MalformedDocumentError;

    fn from_str(text: &str) -> Result<Self> {
        deserialize(text)
    }
}

fn document_from_wire(wire: WireDocument<'_>) -> Result<ast::Document> {
    let mut operations = vec![];
    let mut fragments = vec![];
    for definition in wire.definitions {
        match definition {
            WireDefinition::OperationDefinition(op) => operations.push(op),
            WireDefinition::FragmentDefinition(frag) => fragments.push(frag),
        }
    }

    let operation = match operations.len() {
        0 => return Err(MalformedDocumentError::MissingOperation),
        1 => operations.remove(0),
        count => return Err(MalformedDocumentError::MultipleOperations { count }),
    };

    let mut document = ast::Document::new(operation_from_wire(operation));
    document.loc = wire.loc;
    for fragment in fragments {
        document.add_fragment(fragment_from_wire(fragment))?;
    }

    log::trace!(
        "Decoded operation {:?} with {} fragment definition(s).",
        document.operation_name(),
        document.fragments.len(),
    );

    if let Err(mut errors) = document.validate() {
        log::debug!(
            "Document failed validation with {} error(s); reporting the first.",
            errors.len(),
        );
        return Err(errors.remove(0));
    }

    Ok(document)
}

fn operation_from_wire(wire: WireOperationDefinition<'_>) -> ast::OperationDefinition {
    ast::OperationDefinition {
        directives: directives_from_wire(wire.directives),
        loc: wire.loc,
        name: wire.name.map(name_from_wire),
        operation_kind: wire.operation,
        selection_set: selection_set_from_wire(wire.selection_set),
        variable_definitions: wire.variable_definitions
            .into_iter()
            .map(variable_definition_from_wire)
            .collect(),
    }
}

fn fragment_from_wire(wire: WireFragmentDefinition<'_>) -> ast::FragmentDefinition {
    ast::FragmentDefinition {
        directives: directives_from_wire(wire.directives),
        loc: wire.loc,
        name: name_from_wire(wire.name),
        selection_set: selection_set_from_wire(wire.selection_set),
        type_condition: named_type_from_wire(wire.type_condition),
    }
}

fn variable_definition_from_wire(wire: WireVariableDefinition<'_>) -> ast::VariableDefinition {
    ast::VariableDefinition {
        default_value: wire.default_value.map(value_from_wire),
        directives: directives_from_wire(wire.directives),
        loc: wire.loc,
        type_annotation: type_from_wire(wire.type_annotation),
        variable: variable_from_wire(wire.variable),
    }
}

fn variable_from_wire(wire: WireVariable<'_>) -> ast::Variable {
    ast::Variable {
        loc: wire.loc,
        name: name_from_wire(wire.name),
    }
}

fn type_from_wire(wire: WireType<'_>) -> ast::TypeAnnotation {
    match wire {
        WireType::NamedType { name, loc } => {
            ast::TypeAnnotation::Named(ast::NamedType {
                loc,
                name: name_from_wire(name),
            })
        },

        WireType::ListType { inner, loc } => {
            ast::TypeAnnotation::List(ast::ListType {
                inner: Box::new(type_from_wire(*inner)),
                loc,
            })
        },

        WireType::NonNullType { inner, loc } => {
            ast::TypeAnnotation::NonNull(ast::NonNullType {
                inner: Box::new(type_from_wire(*inner)),
                loc,
            })
        },
    }
}

fn named_type_from_wire(wire: WireNamedType<'_>) -> ast::NamedType {
    ast::NamedType {
        loc: wire.loc,
        name: name_from_wire(wire.name),
    }
}

fn selection_set_from_wire(wire: WireSelectionSet<'_>) -> ast::SelectionSet {
    ast::SelectionSet {
        loc: wire.loc,
        selections: wire.selections.into_iter().map(selection_from_wire).collect(),
    }
}

fn selection_from_wire(wire: WireSelection<'_>) -> ast::Selection {
    match wire {
        WireSelection::Field(field) => ast::Selection::Field(field_from_wire(field)),

        WireSelection::FragmentSpread(spread) => {
            ast::Selection::FragmentSpread(ast::FragmentSpread {
                directives: directives_from_wire(spread.directives),
                loc: spread.loc,
                name: name_from_wire(spread.name),
            })
        },

        WireSelection::InlineFragment(inline) => {
            ast::Selection::InlineFragment(ast::InlineFragment {
                directives: directives_from_wire(inline.directives),
                loc: inline.loc,
                selection_set: selection_set_from_wire(inline.selection_set),
                type_condition: inline.type_condition.map(named_type_from_wire),
            })
        },
    }
}

fn field_from_wire(wire: WireField<'_>) -> ast::Field {
    ast::Field {
        alias: wire.alias.map(name_from_wire),
        arguments: arguments_from_wire(wire.arguments),
        directives: directives_from_wire(wire.directives),
        loc: wire.loc,
        name: name_from_wire(wire.name),
        selection_set: wire.selection_set.map(selection_set_from_wire),
    }
}

fn arguments_from_wire(wire: Vec<WireArgument<'_>>) -> Vec<ast::Argument> {
    wire.into_iter()
        .map(|arg| ast::Argument {
            loc: arg.loc,
            name: name_from_wire(arg.name),
            value: value_from_wire(arg.value),
        })
        .collect()
}

fn directives_from_wire(wire: Vec<WireDirective<'_>>) -> Vec<ast::DirectiveAnnotation> {
    wire.into_iter()
        .map(|directive| ast::DirectiveAnnotation {
            arguments: arguments_from_wire(directive.arguments),
            loc: directive.loc,
            name: name_from_wire(directive.name),
        })
        .collect()
}

fn value_from_wire(wire: WireValue<'_>) -> ast::Value {
    match wire {
        WireValue::Variable { name, loc } => ast::Value::Variable(ast::Variable {
            loc,
            name: name_from_wire(name),
        }),
        WireValue::IntValue { value, loc } => ast::Value::Int {
            loc,
            value: value.into_owned(),
        },
        WireValue::FloatValue { value, loc } => ast::Value::Float {
            loc,
            value: value.into_owned(),
        },
        WireValue::StringValue { value, block, loc } => ast::Value::String {
            block,
            loc,
            value: value.into_owned(),
        },
        WireValue::BooleanValue { value, loc } => ast::Value::Boolean { loc, value },
        WireValue::NullValue { loc } => ast::Value::Null { loc },
        WireValue::EnumValue { value, loc } => ast::Value::Enum {
            loc,
            value: value.into_owned(),
        },
        WireValue::ListValue { values, loc } => ast::Value::List {
            loc,
            values: values.into_iter().map(value_from_wire).collect(),
        },
        WireValue::ObjectValue { fields, loc } => ast::Value::Object {
            fields: fields
                .into_iter()
                .map(|field| ast::ObjectField {
                    loc: field.loc,
                    name: name_from_wire(field.name),
                    value: value_from_wire(field.value),
                })
                .collect(),
            loc,
        },
    }
}

fn name_from_wire(wire: WireName<'_>) -> ast::Name {
    ast::Name {
        loc: wire.loc,
        value: wire.value.into_owned(),
    }
}
