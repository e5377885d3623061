use apicat_docs::{Generator, GeneratorConfig, Result};

use crate::engine::TypedocEngine;
use crate::sink::JsonFileSink;

/// Generates the catalog described by `config`: reads `project`, writes
/// `out_file`, and returns the number of catalog entries.
pub async fn generate(config: &GeneratorConfig) -> Result<usize> {
    config.validate()?;

    let engine = TypedocEngine::from_path(&config.project);
    let sink = JsonFileSink::new(&config.out_file);
    let mut generator = Generator::new(config.extract_options());
    generator.run(&engine, &sink).await
}
