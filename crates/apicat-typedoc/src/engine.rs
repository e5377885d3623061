use std::path::{Path, PathBuf};

use apicat_docs::{DeclarationTree, ReflectionEngine, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::TypedocError;
use crate::reflection::{PROJECT_KIND, RawReflection};

#[derive(Debug, Clone)]
enum Source {
    Path(PathBuf),
    Inline(String),
}

/// Reflection engine backed by a TypeDoc JSON dump.
#[derive(Debug, Clone)]
pub struct TypedocEngine {
    source: Source,
}

/// Parsed TypeDoc document, produced by bootstrap and consumed by conversion.
#[derive(Debug)]
pub struct TypedocContext {
    source_name: String,
    document: Value,
}

impl TypedocContext {
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl TypedocEngine {
    /// Reads the dump from disk during bootstrap.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Path(path.into()),
        }
    }

    /// Uses an in-memory dump.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            source: Source::Inline(json.into()),
        }
    }

    fn source_name(&self) -> String {
        match &self.source {
            Source::Path(path) => path.display().to_string(),
            Source::Inline(_) => "<inline>".to_string(),
        }
    }

    async fn read(&self) -> std::result::Result<String, TypedocError> {
        match &self.source {
            Source::Path(path) => read_project(path).await,
            Source::Inline(json) => Ok(json.clone()),
        }
    }
}

async fn read_project(path: &Path) -> std::result::Result<String, TypedocError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|error| TypedocError::Read {
            path: path.to_path_buf(),
            error,
        })
}

#[async_trait]
impl ReflectionEngine for TypedocEngine {
    type Context = TypedocContext;

    async fn bootstrap(&self) -> Result<TypedocContext> {
        let source_name = self.source_name();
        let text = self.read().await?;
        let document: Value =
            serde_json::from_str(&text).map_err(|error| TypedocError::Syntax {
                source_name: source_name.clone(),
                error,
            })?;

        let kind = document.get("kind").and_then(Value::as_u64);
        if kind != Some(PROJECT_KIND) {
            return Err(TypedocError::NotAProject { source_name, kind }.into());
        }

        tracing::debug!(source = %source_name, "loaded TypeDoc project");
        Ok(TypedocContext {
            source_name,
            document,
        })
    }

    async fn convert(&self, context: &TypedocContext) -> Result<DeclarationTree> {
        let root = RawReflection::deserialize(&context.document).map_err(|error| {
            TypedocError::Schema {
                source_name: context.source_name.clone(),
                error,
            }
        })?;

        let tree = root.into_tree();
        tracing::debug!(
            source = %context.source_name,
            top_level = tree.children.len(),
            "converted TypeDoc project"
        );
        Ok(tree)
    }
}
