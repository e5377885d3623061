use thiserror::Error;

/// Result type alias for catalog generation.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Error variants for catalog generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The reflection engine could not initialise a context.
    #[error("bootstrap failed: {message}")]
    Bootstrap {
        /// Human-readable cause.
        message: String,
    },

    /// The reflection engine could not build a declaration tree.
    #[error("conversion failed: {message}")]
    Conversion {
        /// Human-readable cause.
        message: String,
    },

    /// Comment or fragment data violated the reflection contract.
    #[error("extraction failed for '{name}': {message}")]
    Extraction {
        /// Declaration being processed.
        name: String,
        /// Human-readable cause.
        message: String,
    },

    /// The output sink failed to persist the catalog.
    #[error("failed to persist catalog: {message}")]
    Persistence {
        /// Human-readable cause.
        message: String,
    },

    /// An event was delivered in a state that does not accept it.
    #[error("cannot apply '{event}' while {state}")]
    InvalidTransition {
        /// Tag of the state the machine was in.
        state: &'static str,
        /// Name of the rejected event.
        event: &'static str,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Human-readable cause.
        message: String,
    },
}

impl GeneratorError {
    pub fn bootstrap(message: impl Into<String>) -> Self {
        Self::Bootstrap {
            message: message.into(),
        }
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable label for the error kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bootstrap { .. } => "bootstrap",
            Self::Conversion { .. } => "conversion",
            Self::Extraction { .. } => "extraction",
            Self::Persistence { .. } => "persistence",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::Config { .. } => "config",
        }
    }
}
