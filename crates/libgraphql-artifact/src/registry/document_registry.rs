use crate::ast::Document;
use indexmap::IndexMap;
use std::sync::Arc;
use std::sync::OnceLock;

fn empty_document_registry() -> &'static DocumentRegistry {
    static EMPTY_DOCUMENT_REGISTRY: OnceLock<DocumentRegistry> = OnceLock::new();
    EMPTY_DOCUMENT_REGISTRY.get_or_init(|| {
        DocumentRegistry {
            documents: IndexMap::new(),
        }
    })
}

/// Immutable set of validated documents keyed by operation name.
///
/// Built once (see [`DocumentRegistryBuilder`](crate::registry::DocumentRegistryBuilder))
/// and then shared by every request-handling thread or task. Lookups hand
/// out clones of the same [`Arc<Document>`], so concurrent readers never
/// copy or lock a document.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentRegistry {
    pub(super) documents: IndexMap<String, Arc<Document>>,
}

impl DocumentRegistry {
    pub fn empty() -> &'static DocumentRegistry {
        empty_document_registry()
    }

    pub fn get(&self, operation_name: &str) -> Option<Arc<Document>> {
        self.documents.get(operation_name).cloned()
    }

    pub fn contains(&self, operation_name: &str) -> bool {
        self.documents.contains_key(operation_name)
    }

    /// Operation names in registration order.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn documents(&self) -> &IndexMap<String, Arc<Document>> {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
