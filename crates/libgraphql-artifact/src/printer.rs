//! Render a [`Document`] back into GraphQL source text.
//!
//! Output matches the formatting of graphql-js's `print`: two-space
//! indentation, one selection per line, `", "`-separated arguments (broken
//! onto separate lines when a field's argument list would exceed
//! [`MAX_LINE_LENGTH`] characters), and a blank line between definitions.
//! An anonymous query without variables or directives is printed in
//! shorthand form (`{ ... }`).

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

/// Width beyond which a field's arguments are printed one per line.
pub const MAX_LINE_LENGTH: usize = 80;

/// Print the operation followed by every fragment definition.
pub fn print_document(document: &Document) -> String {
    let mut definitions = vec![print_operation_definition(&document.operation)];
    definitions.extend(document.fragments.values().map(print_fragment_definition));
    join(definitions, "\n\n")
}

pub(crate) fn print_operation_definition(operation: &OperationDefinition) -> String {
    let var_defs = wrap(
        "(",
        join(operation.variable_definitions.iter().map(print_variable_definition), ", "),
        ")",
    );
    let name_and_vars = join(
        [operation.name.as_ref().map(print_name).unwrap_or_default(), var_defs],
        "",
    );
    let prefix = join(
        [
            operation.operation_kind.as_str().to_string(),
            name_and_vars,
            print_directives(&operation.directives),
        ],
        " ",
    );
    let selection_set = print_selection_set(&operation.selection_set);

    if operation.operation_kind == OperationKind::Query && prefix == "query" {
        selection_set
    } else {
        format!("{prefix} {selection_set}")
    }
}

pub(crate) fn print_variable_definition(def: &VariableDefinition) -> String {
    format!(
        "{}: {}{}{}",
        print_variable(&def.variable),
        print_type_annotation(&def.type_annotation),
        wrap(" = ", def.default_value.as_ref().map(print_value).unwrap_or_default(), ""),
        wrap(" ", print_directives(&def.directives), ""),
    )
}

pub(crate) fn print_variable(variable: &Variable) -> String {
    format!("${}", variable.name.as_str())
}

pub(crate) fn print_type_annotation(annot: &TypeAnnotation) -> String {
    match annot {
        TypeAnnotation::List(list) => print_list_type(list),
        TypeAnnotation::Named(named) => print_named_type(named),
        TypeAnnotation::NonNull(non_null) => print_non_null_type(non_null),
    }
}

pub(crate) fn print_list_type(list: &ListType) -> String {
    format!("[{}]", print_type_annotation(&list.inner))
}

pub(crate) fn print_non_null_type(non_null: &NonNullType) -> String {
    format!("{}!", print_type_annotation(&non_null.inner))
}

pub(crate) fn print_named_type(named: &NamedType) -> String {
    print_name(&named.name)
}

pub(crate) fn print_selection_set(selection_set: &SelectionSet) -> String {
    block(selection_set.selections.iter().map(print_selection))
}

fn print_selection(selection: &Selection) -> String {
    match selection {
        Selection::Field(field) => print_field(field),
        Selection::FragmentSpread(spread) => print_fragment_spread(spread),
        Selection::InlineFragment(inline) => print_inline_fragment(inline),
    }
}

pub(crate) fn print_field(field: &Field) -> String {
    let prefix = format!(
        "{}{}",
        wrap("", field.alias.as_ref().map(print_name).unwrap_or_default(), ": "),
        print_name(&field.name),
    );
    let mut args_line = format!(
        "{prefix}{}",
        wrap("(", join(field.arguments.iter().map(print_argument), ", "), ")"),
    );
    if args_line.len() > MAX_LINE_LENGTH {
        args_line = format!(
            "{prefix}{}",
            wrap(
                "(\n",
                indent(&join(field.arguments.iter().map(print_argument), "\n")),
                "\n)",
            ),
        );
    }

    join(
        [
            args_line,
            print_directives(&field.directives),
            field.selection_set.as_ref().map(print_selection_set).unwrap_or_default(),
        ],
        " ",
    )
}

pub(crate) fn print_fragment_spread(spread: &FragmentSpread) -> String {
    format!(
        "...{}{}",
        print_name(&spread.name),
        wrap(" ", print_directives(&spread.directives), ""),
    )
}

pub(crate) fn print_inline_fragment(inline: &InlineFragment) -> String {
    join(
        [
            "...".to_string(),
            wrap("on ", inline.type_condition.as_ref().map(print_named_type).unwrap_or_default(), ""),
            print_directives(&inline.directives),
            print_selection_set(&inline.selection_set),
        ],
        " ",
    )
}

pub(crate) fn print_fragment_definition(fragment: &FragmentDefinition) -> String {
    format!(
        "fragment {} on {} {}{}",
        print_name(&fragment.name),
        print_named_type(&fragment.type_condition),
        wrap("", print_directives(&fragment.directives), " "),
        print_selection_set(&fragment.selection_set),
    )
}

pub(crate) fn print_argument(arg: &Argument) -> String {
    format!("{}: {}", print_name(&arg.name), print_value(&arg.value))
}

pub(crate) fn print_directive_annotation(directive: &DirectiveAnnotation) -> String {
    format!(
        "@{}{}",
        print_name(&directive.name),
        wrap("(", join(directive.arguments.iter().map(print_argument), ", "), ")"),
    )
}

fn print_directives(directives: &[DirectiveAnnotation]) -> String {
    join(directives.iter().map(print_directive_annotation), " ")
}

pub(crate) fn print_value(value: &Value) -> String {
    match value {
        Value::Boolean { value, .. } => value.to_string(),
        Value::Enum { value, .. }
        | Value::Float { value, .. }
        | Value::Int { value, .. } => value.clone(),
        Value::List { values, .. } => {
            format!("[{}]", join(values.iter().map(print_value), ", "))
        },
        Value::Null { .. } => "null".to_string(),
        Value::Object { fields, .. } => {
            format!("{{{}}}", join(fields.iter().map(print_object_field), ", "))
        },
        Value::String { block: true, value, .. } => print_block_string(value),
        Value::String { block: false, value, .. } => print_string(value),
        Value::Variable(variable) => print_variable(variable),
    }
}

pub(crate) fn print_object_field(field: &ObjectField) -> String {
    format!("{}: {}", print_name(&field.name), print_value(&field.value))
}

pub(crate) fn print_name(name: &Name) -> String {
    name.value.clone()
}

/// Print `value` as a quoted string literal, escaping quotes, backslashes,
/// and control characters.
fn print_string(value: &str) -> String {
    let mut printed = String::with_capacity(value.len() + 2);
    printed.push('"');
    for ch in value.chars() {
        match ch {
            '"' => printed.push_str("\\\""),
            '\\' => printed.push_str("\\\\"),
            '\u{8}' => printed.push_str("\\b"),
            '\u{c}' => printed.push_str("\\f"),
            '\n' => printed.push_str("\\n"),
            '\r' => printed.push_str("\\r"),
            '\t' => printed.push_str("\\t"),
            '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}' => {
                printed.push_str(&format!("\\u{:04X}", ch as u32));
            },
            _ => printed.push(ch),
        }
    }
    printed.push('"');
    printed
}

/// Print `value` as a `"""` block string. Single short lines stay on one
/// line; anything else is printed with the content on its own lines.
fn print_block_string(value: &str) -> String {
    let escaped = value.replace("\"\"\"", "\\\"\"\"");
    let is_single_line = !value.contains(['\n', '\r']);
    let force_trailing_newline = value.ends_with('"') || value.ends_with('\\');

    if is_single_line && value.len() <= 70 && !force_trailing_newline {
        format!("\"\"\"{escaped}\"\"\"")
    } else {
        format!("\"\"\"\n{escaped}\n\"\"\"")
    }
}

/// `{`, one item per line indented by two spaces, `}`. Empty for no items.
fn block(items: impl IntoIterator<Item = String>) -> String {
    let body = join(items, "\n");
    if body.is_empty() {
        return String::new();
    }
    format!("{{\n{}\n}}", indent(&body))
}

fn indent(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("  {}", text.replace('\n', "\n  "))
}

/// Join the non-empty items with `separator`.
fn join(items: impl IntoIterator<Item = String>, separator: &str) -> String {
    items
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `start + text + end`, or nothing when `text` is empty.
fn wrap(start: &str, text: String, end: &str) -> String {
    if text.is_empty() {
        text
    } else {
        format!("{start}{text}{end}")
    }
}
