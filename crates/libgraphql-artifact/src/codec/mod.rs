//! Stable JSON encoding of [`Document`](crate::ast::Document)s.
//!
//! The persisted form is graphql-js–compatible: a tree of objects with a
//! `kind` discriminator, camelCase keys (`selectionSet`, `typeCondition`,
//! ...), and an optional `loc` holding `{"start": .., "end": ..}` byte
//! offsets into the original query source:
//!
//! ```json
//! {
//!   "kind": "Document",
//!   "definitions": [
//!     { "kind": "OperationDefinition", "operation": "mutation", ... },
//!     { "kind": "FragmentDefinition", "name": { "kind": "Name", ... }, ... }
//!   ],
//!   "loc": { "start": 0, "end": 546 }
//! }
//! ```
//!
//! [`serialize`] always writes keys in the same order (`kind` first, `loc`
//! last) and writes the operation before the fragments, so serializing the
//! same document twice yields byte-identical output. [`deserialize`]
//! validates the decoded tree before returning it.

mod deserialize;
mod node_kind;
mod serialize;
mod serialize_options;
mod wire;

pub use deserialize::deserialize;
pub use deserialize::deserialize_reader;
pub use serialize::serialize;
pub use serialize::serialize_with;
pub use serialize_options::OutputStyle;
pub use serialize_options::SerializeOptions;

#[cfg(test)]
mod tests;
