//! Collaborators that sit on either side of a generator run.
//!
//! A [`ReflectionEngine`] supplies the declaration tree and a [`CatalogSink`]
//! persists the finished catalog. Both are awaited by
//! [`Generator::run`](crate::Generator::run); neither is retried.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::Result;
use crate::model::{ApiItem, DeclarationTree};

/// Produces a reflected declaration tree for a library.
///
/// # Example
///
/// ```rust,ignore
/// use apicat_docs::{DeclarationTree, ReflectionEngine, Result};
/// use async_trait::async_trait;
///
/// struct Fixed(DeclarationTree);
///
/// #[async_trait]
/// impl ReflectionEngine for Fixed {
///     type Context = ();
///
///     async fn bootstrap(&self) -> Result<()> {
///         Ok(())
///     }
///
///     async fn convert(&self, _context: &()) -> Result<DeclarationTree> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait ReflectionEngine: Send + Sync {
    /// Opaque state carried from bootstrap to conversion.
    type Context: Send + Sync;

    /// Prepare a context for the library's entry points.
    async fn bootstrap(&self) -> Result<Self::Context>;

    /// Convert a bootstrapped context into a declaration tree.
    async fn convert(&self, context: &Self::Context) -> Result<DeclarationTree>;
}

/// Receives the finished catalog.
#[async_trait]
pub trait CatalogSink: Send + Sync {
    /// Persist the catalog. Items arrive deduplicated and sorted.
    async fn write(&self, items: &[ApiItem]) -> Result<()>;
}

/// Sink that keeps the last written catalog in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    items: Mutex<Vec<ApiItem>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the most recently written catalog.
    pub fn items(&self) -> Vec<ApiItem> {
        self.items.lock().clone()
    }
}

#[async_trait]
impl CatalogSink for MemorySink {
    async fn write(&self, items: &[ApiItem]) -> Result<()> {
        *self.items.lock() = items.to_vec();
        Ok(())
    }
}
