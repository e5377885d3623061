use std::path::PathBuf;

use apicat_docs::GeneratorError;
use thiserror::Error;

/// Failures specific to reading TypeDoc output and writing catalogs.
#[derive(Debug, Error)]
pub enum TypedocError {
    /// Failed to read the reflection dump.
    #[error("failed to read project '{path}': {error}")]
    Read {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("project '{source_name}' is not valid JSON: {error}")]
    Syntax {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    /// The document parsed but its root is not a TypeDoc project.
    #[error("project '{source_name}' is not a TypeDoc project (root kind {kind:?})")]
    NotAProject {
        source_name: String,
        kind: Option<u64>,
    },

    /// The reflection tree does not match TypeDoc's model.
    #[error("project '{source_name}' has an unexpected shape: {error}")]
    Schema {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    /// Failed to write the catalog.
    #[error("failed to write catalog '{path}': {error}")]
    Write {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl From<TypedocError> for GeneratorError {
    fn from(error: TypedocError) -> Self {
        let message = error.to_string();
        match error {
            TypedocError::Read { .. }
            | TypedocError::Syntax { .. }
            | TypedocError::NotAProject { .. } => GeneratorError::Bootstrap { message },
            TypedocError::Schema { .. } => GeneratorError::Conversion { message },
            TypedocError::Write { .. } => GeneratorError::Persistence { message },
        }
    }
}
