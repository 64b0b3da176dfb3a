/// Whitespace style of serialized output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputStyle {
    /// Single line, no insignificant whitespace.
    Compact,
    /// Two-space indented, one key per line.
    #[default]
    Pretty,
}

/// Configuration for [`serialize_with`](crate::codec::serialize_with).
///
/// The default (pretty, with locations) is what
/// [`serialize`](crate::codec::serialize) uses and is the only configuration
/// for which `deserialize(serialize(doc)) == doc` holds in general.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SerializeOptions {
    /// When `false`, every `loc` is omitted (graphql-js `noLocation`).
    pub include_locations: bool,
    pub style: OutputStyle,
}

impl SerializeOptions {
    pub fn compact(mut self) -> Self {
        self.style = OutputStyle::Compact;
        self
    }

    pub fn without_locations(mut self) -> Self {
        self.include_locations = false;
        self
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            include_locations: true,
            style: OutputStyle::default(),
        }
    }
}
