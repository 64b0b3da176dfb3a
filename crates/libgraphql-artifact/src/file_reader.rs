//! Reading persisted artifact files from disk.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadArtifactError>;

/// Byte order mark some build tools prepend to JSON output. The persisted
/// form never starts with one, so it is stripped before decoding.
const UTF8_BOM: &str = "\u{feff}";

/// Read the persisted text of the artifact at `file_path`.
///
/// The content must be UTF-8 and must not be blank: an empty artifact is a
/// failed build step, and is reported as such rather than as a JSON syntax
/// error.
pub fn read_artifact<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadArtifactError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadArtifactError::Io {
            file_path: file_path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        })?;

    let mut content = String::from_utf8(bytes)
        .map_err(|err| ReadArtifactError::InvalidUtf8 {
            file_path: file_path.to_path_buf(),
            valid_up_to: err.utf8_error().valid_up_to(),
        })?;

    if content.starts_with(UTF8_BOM) {
        log::debug!("Stripping byte order mark from {file_path:?}.");
        content.drain(..UTF8_BOM.len());
    }

    if content.trim().is_empty() {
        return Err(ReadArtifactError::EmptyArtifact(file_path.to_path_buf()));
    }

    log::trace!("Read {} bytes of artifact text from {file_path:?}.", content.len());
    Ok(content)
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ReadArtifactError {
    #[error("Artifact at {0:?} is empty")]
    EmptyArtifact(PathBuf),

    #[error(
        "Artifact at {file_path:?} is not valid UTF-8 (first invalid byte at \
        offset {valid_up_to})"
    )]
    InvalidUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    /// The underlying [`std::io::Error`] is flattened to its kind and message
    /// so the error stays `Clone` and comparable.
    #[error("Failed to read artifact at {file_path:?}: {message}")]
    Io {
        file_path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("Artifact path is not a file: {0:?}")]
    PathIsNotAFile(PathBuf),
}
