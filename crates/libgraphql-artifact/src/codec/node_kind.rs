/// Declares zero-sized markers for the `kind` discriminator of node types
/// that are not part of a polymorphic enum (e.g. `"Name"`).
///
/// A marker serializes as its kind string and fails to deserialize from any
/// other string, so a mislabeled node is rejected during decoding.
macro_rules! node_kinds {
    ($($marker:ident => $kind:literal),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Debug, PartialEq)]
            pub(crate) struct $marker;

            impl serde::Serialize for $marker {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str($kind)
                }
            }

            impl<'de> serde::Deserialize<'de> for $marker {
                fn deserialize<D: serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Self, D::Error> {
                    let kind = <String as serde::Deserialize>::deserialize(deserializer)?;
                    if kind == $kind {
                        Ok($marker)
                    } else {
                        Err(serde::de::Error::invalid_value(
                            serde::de::Unexpected::Str(&kind),
                            &concat!("the node kind \"", $kind, "\""),
                        ))
                    }
                }
            }
        )*
    };
}

node_kinds! {
    ArgumentKind => "Argument",
    DirectiveKind => "Directive",
    DocumentKind => "Document",
    NameKind => "Name",
    NamedTypeKind => "NamedType",
    ObjectFieldKind => "ObjectField",
    SelectionSetKind => "SelectionSet",
    VariableDefinitionKind => "VariableDefinition",
    VariableKind => "Variable",
}
