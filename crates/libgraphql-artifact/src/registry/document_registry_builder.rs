use crate::MalformedDocumentError;
use crate::ast::Document;
use crate::codec;
use crate::file_reader;
use crate::file_reader::ReadArtifactError;
use crate::registry::DocumentRegistry;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentRegistryBuildError>;

/// Builder for constructing a [`DocumentRegistry`].
///
/// Documents can be added pre-built, from persisted text, or from artifact
/// files. Each document is validated as it is added, so a registry only
/// ever holds usable documents and every failure surfaces at startup rather
/// than mid-request.
///
/// # Example
///
/// ```rust,ignore
/// use libgraphql_artifact::registry::DocumentRegistryBuilder;
///
/// let mut builder = DocumentRegistryBuilder::new();
/// builder.add_from_file("artifacts/guestLogIn.json")?;
/// let registry = builder.build();
///
/// let document = registry.get("guestLogIn").unwrap();
/// ```
#[derive(Debug)]
pub struct DocumentRegistryBuilder {
    documents: IndexMap<String, (Document, Option<PathBuf>)>,
}

impl DocumentRegistryBuilder {
    pub fn new() -> Self {
        Self {
            documents: IndexMap::new(),
        }
    }

    /// Add a pre-built document to the registry.
    ///
    /// Returns an error if the operation is anonymous, if a document for the
    /// same operation name was already added, or if the document fails
    /// [`Document::validate`].
    pub fn add_document(&mut self, document: Document) -> Result<()> {
        if let Err(mut errors) = document.validate() {
            return Err(DocumentRegistryBuildError::MalformedDocument {
                file_path: None,
                err: errors.remove(0),
            });
        }
        self.insert(document, None)
    }

    /// Deserialize a persisted document and add it to the registry.
    pub fn add_from_str(
        &mut self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let document = codec::deserialize(content.as_ref())
            .map_err(|err| DocumentRegistryBuildError::MalformedDocument {
                file_path: file_path.map(Path::to_path_buf),
                err,
            })?;
        self.insert(document, file_path.map(Path::to_path_buf))
    }

    /// Read an artifact file and add its document to the registry.
    pub fn add_from_file(&mut self, file_path: impl AsRef<Path>) -> Result<()> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_artifact(file_path)?;
        self.add_from_str(content, Some(file_path))
    }

    /// Build the immutable [`DocumentRegistry`].
    pub fn build(self) -> DocumentRegistry {
        log::debug!("Built document registry with {} operation(s).", self.documents.len());
        DocumentRegistry {
            documents: self.documents
                .into_iter()
                .map(|(name, (document, _))| (name, Arc::new(document)))
                .collect(),
        }
    }

    fn insert(&mut self, document: Document, file_path: Option<PathBuf>) -> Result<()> {
        let Some(operation_name) = document.operation_name().map(str::to_string) else {
            return Err(DocumentRegistryBuildError::AnonymousOperation { file_path });
        };

        if let Some((_, first_file_path)) = self.documents.get(&operation_name) {
            return Err(DocumentRegistryBuildError::DuplicateOperation {
                operation_name,
                first_file_path: first_file_path.clone(),
                second_file_path: file_path,
            });
        }

        log::trace!("Registering operation `{operation_name}` (from {file_path:?}).");
        self.documents.insert(operation_name, (document, file_path));
        Ok(())
    }
}

impl Default for DocumentRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error)]
pub enum DocumentRegistryBuildError {
    #[error("Anonymous operations cannot be registered (from {file_path:?})")]
    AnonymousOperation { file_path: Option<PathBuf> },

    #[error(
        "Duplicate operation name: '{operation_name}' (first added from \
        {first_file_path:?}, then from {second_file_path:?})"
    )]
    DuplicateOperation {
        operation_name: String,
        first_file_path: Option<PathBuf>,
        second_file_path: Option<PathBuf>,
    },

    #[error(transparent)]
    FileReadError(#[from] ReadArtifactError),

    #[error("Malformed document (from {file_path:?}): {err}")]
    MalformedDocument {
        file_path: Option<PathBuf>,
        err: MalformedDocumentError,
    },
}
