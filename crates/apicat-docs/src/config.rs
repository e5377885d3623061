//! Layered configuration for catalog generation.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::extractor::ExtractOptions;
use crate::model::KindMap;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "apicat.config.json";

/// Prefix for environment overrides (`APICAT_PARALLEL=false`, `APICAT_OUT_FILE=...`).
pub const ENV_PREFIX: &str = "APICAT_";

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Reflection dump of the library being documented.
    #[serde(default = "default_project")]
    pub project: PathBuf,

    /// Where the catalog is written.
    #[serde(default = "default_out_file")]
    pub out_file: PathBuf,

    /// Extract declarations in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Declaration kinds that become catalog entries.
    #[serde(default)]
    pub kinds: KindMap,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            out_file: default_out_file(),
            parallel: default_parallel(),
            kinds: KindMap::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from multiple sources.
    /// Priority: environment variables > config file > defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = config_path.map(Path::to_path_buf).or_else(|| {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            default_path.exists().then(|| default_path.to_path_buf())
        });

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(GeneratorError::config(format!(
                    "config file '{}' does not exist",
                    path.display()
                )));
            }
            figment = figment.merge(Json::file(path));
        }

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extracts and validates a configuration from an arbitrary figment.
    pub fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|error| GeneratorError::config(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.project.as_os_str().is_empty() {
            return Err(GeneratorError::config("project path cannot be empty"));
        }

        if self.out_file.as_os_str().is_empty() {
            return Err(GeneratorError::config("out_file cannot be empty"));
        }

        if self.kinds.is_empty() {
            return Err(GeneratorError::config(
                "kinds must map at least one declaration kind",
            ));
        }

        Ok(())
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            parallel: self.parallel,
            kinds: self.kinds.clone(),
        }
    }
}

fn default_project() -> PathBuf {
    PathBuf::from("docs/api.json")
}

fn default_out_file() -> PathBuf {
    PathBuf::from("src/content/api/api-docs.json")
}

fn default_parallel() -> bool {
    true
}
