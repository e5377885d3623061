#![deny(clippy::all)]

//! API catalog generation from a reflected library surface.
//!
//! This crate provides:
//! - A model of reflected declarations and their documentation comments.
//! - Comment resolution, rich-text rendering and tag formatting that turn a
//!   declaration into a single plain-text description.
//! - Deduplication of catalog items discovered more than once.
//! - A [`Generator`] state machine that sequences bootstrap, conversion,
//!   processing and writing against pluggable collaborators.

pub mod comment;
pub mod config;
pub mod dedup;
pub mod description;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod generators;
pub mod model;
pub mod render;
pub mod state;
pub mod tags;

pub use comment::{Documented, best_comment};
pub use config::GeneratorConfig;
pub use dedup::deduplicate_docs;
pub use description::{build_description, describe, extract_description_and_tags};
pub use engine::{CatalogSink, MemorySink, ReflectionEngine};
pub use error::{GeneratorError, Result};
pub use extractor::{DocsExtractor, ExtractOptions};
pub use generator::Generator;
pub use generators::json::render_json;
pub use model::{
    ApiItem, BlockTag, Comment, DeclarationKind, DeclarationNode, DeclarationTree, ExtractResult,
    Fragment, ItemKind, KindMap, ProcessingResult, SignatureNode,
};
pub use render::render_content;
pub use state::GeneratorState;
pub use tags::{LONG_FORM_TAGS, format_block_tag, format_tags, normalize_tag_name};
