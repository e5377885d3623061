#![deny(clippy::all)]

//! TypeDoc integration for apicat.
//!
//! Provides a [`TypedocEngine`] that reads the JSON model emitted by
//! `typedoc --json`, a [`JsonFileSink`] that persists the catalog, and
//! [`generate`], which wires both to a [`Generator`](apicat_docs::Generator)
//! from a [`GeneratorConfig`](apicat_docs::GeneratorConfig).

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod reflection;
pub mod sink;

pub use engine::{TypedocContext, TypedocEngine};
pub use error::TypedocError;
pub use pipeline::generate;
pub use reflection::declaration_kind;
pub use sink::JsonFileSink;
