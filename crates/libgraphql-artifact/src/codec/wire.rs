//! serde mirror of the persisted JSON form.
//!
//! Field declaration order is serialization order; `kind` comes first (as a
//! marker field or an internal enum tag) and `loc` last. Strings borrow from
//! the [`Document`](crate::ast::Document) when encoding and are owned when
//! decoding.

use crate::Location;
use crate::ast::OperationKind;
use crate::codec::node_kind::ArgumentKind;
use crate::codec::node_kind::DirectiveKind;
use crate::codec::node_kind::DocumentKind;
use crate::codec::node_kind::NameKind;
use crate::codec::node_kind::NamedTypeKind;
use crate::codec::node_kind::ObjectFieldKind;
use crate::codec::node_kind::SelectionSetKind;
use crate::codec::node_kind::VariableDefinitionKind;
use crate::codec::node_kind::VariableKind;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Deserialize, Serialize)]
pub(crate) struct WireDocument<'a> {
    pub kind: DocumentKind,
    pub definitions: Vec<WireDefinition<'a>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
#[serde(tag = "kind")]
pub(crate) enum WireDefinition<'a> {
    OperationDefinition(WireOperationDefinition<'a>),
    FragmentDefinition(WireFragmentDefinition<'a>),
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireOperationDefinition<'a> {
    pub operation: OperationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<WireName<'a>>,
    #[serde(default)]
    pub variable_definitions: Vec<WireVariableDefinition<'a>>,
    #[serde(default)]
    pub directives: Vec<WireDirective<'a>>,
    pub selection_set: WireSelectionSet<'a>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireFragmentDefinition<'a> {
    pub name: WireName<'a>,
    pub type_condition: WireNamedType<'a>,
    #[serde(default)]
    pub directives: Vec<WireDirective<'a>>,
    pub selection_set: WireSelectionSet<'a>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireVariableDefinition<'a> {
    pub kind: VariableDefinitionKind,
    pub variable: WireVariable<'a>,
    #[serde(rename = "type")]
    pub type_annotation: WireType<'a>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<WireValue<'a>>,
    #[serde(default)]
    pub directives: Vec<WireDirective<'a>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
pub(crate) struct WireVariable<'a> {
    pub kind: VariableKind,
    pub name: WireName<'a>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
#[serde(tag = "kind")]
pub(crate) enum WireType<'a> {
    NamedType {
        name: WireName<'a>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    ListType {
        #[serde(rename = "type")]
        inner: Box<WireType<'a>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    NonNullType {
        #[serde(rename = "type")]
        inner: Box<WireType<'a>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
}

#[derive(Deserialize, Serialize)]
pub(crate) struct WireNamedType<'a> {
    pub kind: NamedTypeKind,
    pub name: WireName<'a>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
pub(crate) struct WireSelectionSet<'a> {
    pub kind: SelectionSetKind,
    pub selections: Vec<WireSelection<'a>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
#[serde(tag = "kind")]
pub(crate) enum WireSelection<'a> {
    Field(WireField<'a>),
    FragmentSpread(WireFragmentSpread<'a>),
    InlineFragment(WireInlineFragment<'a>),
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireField<'a> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<WireName<'a>>,
    pub name: WireName<'a>,
    #[serde(default)]
    pub arguments: Vec<WireArgument<'a>>,
    #[serde(default)]
    pub directives: Vec<WireDirective<'a>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<WireSelectionSet<'a>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
pub(crate) struct WireFragmentSpread<'a> {
    pub name: WireName<'a>,
    #[serde(default)]
    pub directives: Vec<WireDirective<'a>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireInlineFragment<'a> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_condition: Option<WireNamedType<'a>>,
    #[serde(default)]
    pub directives: Vec<WireDirective<'a>>,
    pub selection_set: WireSelectionSet<'a>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
pub(crate) struct WireArgument<'a> {
    pub kind: ArgumentKind,
    pub name: WireName<'a>,
    pub value: WireValue<'a>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
pub(crate) struct WireDirective<'a> {
    pub kind: DirectiveKind,
    pub name: WireName<'a>,
    #[serde(default)]
    pub arguments: Vec<WireArgument<'a>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
#[serde(tag = "kind")]
pub(crate) enum WireValue<'a> {
    Variable {
        name: WireName<'a>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    IntValue {
        value: Cow<'a, str>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    FloatValue {
        value: Cow<'a, str>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    StringValue {
        value: Cow<'a, str>,
        #[serde(default)]
        block: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    BooleanValue {
        value: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    NullValue {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    EnumValue {
        value: Cow<'a, str>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    ListValue {
        values: Vec<WireValue<'a>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
    ObjectValue {
        fields: Vec<WireObjectField<'a>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<Location>,
    },
}

#[derive(Deserialize, Serialize)]
pub(crate) struct WireObjectField<'a> {
    pub kind: ObjectFieldKind,
    pub name: WireName<'a>,
    pub value: WireValue<'a>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Deserialize, Serialize)]
pub(crate) struct WireName<'a> {
    pub kind: NameKind,
    pub value: Cow<'a, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}
