//! Typed AST for a precompiled executable GraphQL document.
//!
//! All node types own their data so that a loaded [`Document`] can be
//! shared read-only (e.g. behind an [`Arc`](std::sync::Arc)) for the life of
//! the process. Every node carries an optional [`Location`](crate::Location)
//! into the query source text the artifact was compiled from.
//!
//! Polymorphic node kinds ([`Selection`], [`Value`], [`TypeAnnotation`]) are
//! plain Rust enums; the persisted `kind` discriminator only exists at the
//! [`codec`](crate::codec) layer.

mod argument;
pub(crate) mod ast_node;
mod directive_annotation;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod name;
mod named_type;
mod object_field;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use directive_annotation::DirectiveAnnotation;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use name::Name;
pub use named_type::NamedType;
pub use object_field::ObjectField;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::ListType;
pub use type_annotation::NonNullType;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
