use std::path::{Path, PathBuf};

use apicat_docs::{ApiItem, CatalogSink, Result, render_json};
use async_trait::async_trait;

use crate::error::TypedocError;

/// Writes the catalog as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, error: std::io::Error) -> TypedocError {
        TypedocError::Write {
            path: self.path.clone(),
            error,
        }
    }
}

#[async_trait]
impl CatalogSink for JsonFileSink {
    async fn write(&self, items: &[ApiItem]) -> Result<()> {
        let json = render_json(items)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| self.write_error(error))?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|error| self.write_error(error))?;

        tracing::debug!(path = %self.path.display(), items = items.len(), "wrote catalog");
        Ok(())
    }
}
