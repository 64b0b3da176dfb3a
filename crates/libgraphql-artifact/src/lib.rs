//! Precompiled GraphQL document artifacts.
//!
//! A build-time GraphQL compiler turns each client operation into an
//! *artifact*: the operation's AST plus every fragment definition it
//! spreads, serialized as graphql-js–compatible JSON. This crate provides
//! the typed in-memory form of that artifact ([`ast::Document`]), a stable
//! JSON codec for it ([`codec`]), load-time structural validation,
//! fragment-expanding traversal for execution engines, a GraphQL source
//! printer, and a read-only [`registry`] for sharing loaded documents.
//!
//! # Example
//!
//! ```rust,ignore
//! use libgraphql_artifact::codec;
//!
//! let document = codec::deserialize(artifact_json)?;
//! assert_eq!(document.operation_name(), Some("guestLogIn"));
//! let text = codec::serialize(&document)?;
//! ```

pub mod ast;
pub mod codec;
mod document_validator;
pub mod file_reader;
mod location;
mod malformed_document_error;
pub mod printer;
pub mod registry;
mod unresolved_fragment_error;
pub mod walk;

pub use location::Location;
pub use malformed_document_error::MalformedDocumentError;
pub use unresolved_fragment_error::UnresolvedFragmentError;

#[cfg(test)]
mod tests;
