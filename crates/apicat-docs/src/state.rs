use crate::model::{ApiItem, DeclarationTree};

/// Progress of a single generator run.
///
/// `C` is the reflection engine's context. The generator never inspects it;
/// it is only handed back to the engine for conversion.
#[derive(Debug)]
pub enum GeneratorState<C> {
    Idle,
    Bootstrapping,
    Converting {
        context: C,
    },
    Processing {
        tree: DeclarationTree,
    },
    Writing {
        items: Vec<ApiItem>,
    },
    Success {
        count: usize,
    },
    Failure {
        error: String,
    },
}

impl<C> GeneratorState<C> {
    /// Variant name, used in logs and transition errors.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Bootstrapping => "Bootstrapping",
            Self::Converting { .. } => "Converting",
            Self::Processing { .. } => "Processing",
            Self::Writing { .. } => "Writing",
            Self::Success { .. } => "Success",
            Self::Failure { .. } => "Failure",
        }
    }

    /// `Success` and `Failure` accept no further events.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Failure { .. })
    }
}
