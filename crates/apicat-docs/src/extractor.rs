use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dedup::deduplicate_docs;
use crate::description::describe;
use crate::model::{ApiItem, DeclarationNode, DeclarationTree, KindMap, ProcessingResult};

/// Options controlling catalog extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Extract declarations on the rayon thread pool.
    pub parallel: bool,
    /// Supported declaration kinds and their catalog kinds.
    pub kinds: KindMap,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            kinds: KindMap::default(),
        }
    }
}

/// Turns a declaration tree into catalog items.
#[derive(Debug, Clone, Default)]
pub struct DocsExtractor {
    options: ExtractOptions,
}

impl DocsExtractor {
    /// Create a new extractor with the provided options.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Collects candidates for every declaration in the tree and
    /// deduplicates them into the final catalog.
    pub fn process(&self, tree: &DeclarationTree) -> ProcessingResult {
        let candidates = self.collect_candidates(tree);
        tracing::debug!(candidates = candidates.len(), "collected candidates");
        ProcessingResult::new(deduplicate_docs(candidates))
    }

    /// All candidate items in discovery order, before deduplication.
    pub fn collect_candidates(&self, tree: &DeclarationTree) -> Vec<ApiItem> {
        let nodes: Vec<&DeclarationNode> = tree.walk().collect();

        if self.options.parallel {
            nodes
                .par_iter()
                .flat_map_iter(|node| self.candidates_for(node))
                .collect()
        } else {
            nodes
                .iter()
                .flat_map(|node| self.candidates_for(node))
                .collect()
        }
    }

    /// Candidates for a single declaration: one from the declaration itself
    /// and one per signature, all under the declaration's name and kind.
    /// Unnamed or unsupported declarations yield nothing.
    pub fn candidates_for(&self, node: &DeclarationNode) -> Vec<ApiItem> {
        if node.name.is_empty() {
            return Vec::new();
        }
        let Some(kind) = self.options.kinds.get(node.kind) else {
            return Vec::new();
        };

        let mut items = Vec::with_capacity(1 + node.signatures.len());
        items.push(ApiItem::new(node.name.clone(), kind, describe(node)));
        for signature in &node.signatures {
            items.push(ApiItem::new(node.name.clone(), kind, describe(signature)));
        }
        items
    }
}
