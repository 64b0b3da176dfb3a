//! Load-once, read-only storage of validated documents, keyed by operation
//! name.

mod document_registry;
mod document_registry_builder;

pub use document_registry::DocumentRegistry;
pub use document_registry_builder::DocumentRegistryBuildError;
pub use document_registry_builder::DocumentRegistryBuilder;

#[cfg(test)]
mod tests;
