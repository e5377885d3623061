use std::mem;

use crate::engine::{CatalogSink, ReflectionEngine};
use crate::error::{GeneratorError, Result};
use crate::extractor::{DocsExtractor, ExtractOptions};
use crate::model::{DeclarationTree, ProcessingResult};
use crate::state::GeneratorState;

/// Drives one catalog generation run through its life-cycle.
///
/// The machine moves strictly forward:
/// `Idle → Bootstrapping → Converting → Processing → Writing → Success`,
/// and may drop into `Failure` from any non-terminal state. Events delivered
/// out of order are rejected with [`GeneratorError::InvalidTransition`] and
/// leave the state untouched.
///
/// Callers either deliver the events themselves or hand the collaborators to
/// [`Generator::run`].
#[derive(Debug)]
pub struct Generator<C> {
    extractor: DocsExtractor,
    state: GeneratorState<C>,
}

impl<C> Default for Generator<C> {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

impl<C> Generator<C> {
    /// Creates an idle generator.
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            extractor: DocsExtractor::new(options),
            state: GeneratorState::Idle,
        }
    }

    pub fn state(&self) -> &GeneratorState<C> {
        &self.state
    }

    pub fn into_state(self) -> GeneratorState<C> {
        self.state
    }

    pub fn start(&mut self) -> Result<&GeneratorState<C>> {
        self.transition("start", |state| match state {
            GeneratorState::Idle => Ok(GeneratorState::Bootstrapping),
            other => Err(other),
        })
    }

    pub fn bootstrap_success(&mut self, context: C) -> Result<&GeneratorState<C>> {
        self.transition("bootstrap_success", |state| match state {
            GeneratorState::Bootstrapping => Ok(GeneratorState::Converting { context }),
            other => Err(other),
        })
    }

    pub fn convert_success(&mut self, tree: DeclarationTree) -> Result<&GeneratorState<C>> {
        self.transition("convert_success", |state| match state {
            GeneratorState::Converting { .. } => Ok(GeneratorState::Processing { tree }),
            other => Err(other),
        })
    }

    /// Extracts and deduplicates the catalog for the tree held by
    /// `Processing`. Does not change state.
    pub fn process(&self) -> Result<ProcessingResult> {
        match &self.state {
            GeneratorState::Processing { tree } => Ok(self.extractor.process(tree)),
            other => Err(GeneratorError::InvalidTransition {
                state: other.tag(),
                event: "process",
            }),
        }
    }

    pub fn process_success(&mut self, result: ProcessingResult) -> Result<&GeneratorState<C>> {
        let count = result.count;
        let state = self.transition("process_success", |state| match state {
            GeneratorState::Processing { .. } => Ok(GeneratorState::Writing {
                items: result.items,
            }),
            other => Err(other),
        })?;
        tracing::debug!(count, "catalog processed");
        Ok(state)
    }

    pub fn finish(&mut self, count: usize) -> Result<&GeneratorState<C>> {
        self.transition("finish", |state| match state {
            GeneratorState::Writing { .. } => Ok(GeneratorState::Success { count }),
            other => Err(other),
        })
    }

    /// Moves any non-terminal state to `Failure`.
    pub fn fail(&mut self, error: impl Into<String>) -> Result<&GeneratorState<C>> {
        let error = error.into();
        self.transition("fail", |state| {
            if state.is_terminal() {
                Err(state)
            } else {
                Ok(GeneratorState::Failure { error })
            }
        })
    }

    /// Runs the whole pipeline against the given collaborators and returns
    /// the catalog size.
    ///
    /// Any collaborator error moves the machine to `Failure` and is returned
    /// unchanged. A generator that has already left `Idle` is rejected
    /// without touching its state.
    pub async fn run<E, S>(&mut self, engine: &E, sink: &S) -> Result<usize>
    where
        E: ReflectionEngine<Context = C> + ?Sized,
        S: CatalogSink + ?Sized,
    {
        self.start()?;
        tracing::info!("generating API catalog");

        match self.drive(engine, sink).await {
            Ok(count) => {
                tracing::info!(count, "API catalog written");
                Ok(count)
            }
            Err(error) => {
                tracing::error!(
                    error.kind = error.kind(),
                    stage = self.state.tag(),
                    "API catalog generation failed: {error}"
                );
                if !self.state.is_terminal() {
                    self.state = GeneratorState::Failure {
                        error: error.to_string(),
                    };
                }
                Err(error)
            }
        }
    }

    async fn drive<E, S>(&mut self, engine: &E, sink: &S) -> Result<usize>
    where
        E: ReflectionEngine<Context = C> + ?Sized,
        S: CatalogSink + ?Sized,
    {
        let context = engine.bootstrap().await?;
        self.bootstrap_success(context)?;

        let tree = match &self.state {
            GeneratorState::Converting { context } => engine.convert(context).await?,
            other => return Err(rejected(other, "convert")),
        };
        self.convert_success(tree)?;

        let result = self.process()?;
        self.process_success(result)?;

        let count = match &self.state {
            GeneratorState::Writing { items } => {
                sink.write(items).await?;
                items.len()
            }
            other => return Err(rejected(other, "write")),
        };
        self.finish(count)?;
        Ok(count)
    }

    fn transition<F>(&mut self, event: &'static str, apply: F) -> Result<&GeneratorState<C>>
    where
        F: FnOnce(GeneratorState<C>) -> std::result::Result<GeneratorState<C>, GeneratorState<C>>,
    {
        let current = mem::replace(&mut self.state, GeneratorState::Idle);
        let from = current.tag();
        match apply(current) {
            Ok(next) => {
                tracing::debug!(event, from, to = next.tag(), "generator transition");
                self.state = next;
                Ok(&self.state)
            }
            Err(unchanged) => {
                self.state = unchanged;
                Err(rejected(&self.state, event))
            }
        }
    }
}

fn rejected<C>(state: &GeneratorState<C>, event: &'static str) -> GeneratorError {
    GeneratorError::InvalidTransition {
        state: state.tag(),
        event,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeclarationKind, DeclarationNode};

    fn generator() -> Generator<&'static str> {
        Generator::new(ExtractOptions {
            parallel: false,
            ..ExtractOptions::default()
        })
    }

    #[test]
    fn walks_forward_through_every_stage() {
        let mut generator = generator();
        assert!(matches!(generator.state(), GeneratorState::Idle));

        generator.start().unwrap();
        assert!(matches!(generator.state(), GeneratorState::Bootstrapping));

        generator.bootstrap_success("ctx").unwrap();
        assert!(matches!(
            generator.state(),
            GeneratorState::Converting { context: "ctx" }
        ));

        let tree = DeclarationTree::new("lib")
            .with_child(DeclarationNode::new("foo", DeclarationKind::Function));
        generator.convert_success(tree).unwrap();

        let result = generator.process().unwrap();
        assert_eq!(result.count, 1);
        generator.process_success(result).unwrap();
        assert!(matches!(
            generator.state(),
            GeneratorState::Writing { items } if items.len() == 1
        ));

        generator.finish(1).unwrap();
        assert!(matches!(generator.state(), GeneratorState::Success { count: 1 }));
    }

    #[test]
    fn out_of_order_events_are_rejected() {
        let mut generator = generator();
        let error = generator.bootstrap_success("ctx").unwrap_err();
        assert!(matches!(
            error,
            GeneratorError::InvalidTransition {
                state: "Idle",
                event: "bootstrap_success"
            }
        ));
        assert!(matches!(generator.state(), GeneratorState::Idle));

        generator.start().unwrap();
        assert!(generator.start().is_err());
        assert!(generator.process().is_err());
        assert!(matches!(generator.state(), GeneratorState::Bootstrapping));
    }

    #[test]
    fn early_process_success_keeps_the_state() {
        let mut generator = generator();
        generator.start().unwrap();

        let result = ProcessingResult::new(Vec::new());
        let error = generator.process_success(result).unwrap_err();
        assert!(matches!(
            error,
            GeneratorError::InvalidTransition {
                state: "Bootstrapping",
                event: "process_success"
            }
        ));
        assert!(matches!(generator.state(), GeneratorState::Bootstrapping));
    }

    #[test]
    fn fail_is_reachable_from_any_non_terminal_state() {
        let mut idle = generator();
        idle.fail("boom").unwrap();
        assert!(matches!(idle.state(), GeneratorState::Failure { error } if error == "boom"));

        let mut converting = generator();
        converting.start().unwrap();
        converting.bootstrap_success("ctx").unwrap();
        converting.fail("engine crashed").unwrap();
        assert!(matches!(converting.state(), GeneratorState::Failure { .. }));
    }

    #[test]
    fn terminal_states_accept_nothing() {
        let mut failed = generator();
        failed.fail("first").unwrap();
        assert!(failed.fail("second").is_err());
        assert!(failed.start().is_err());
        assert!(matches!(failed.state(), GeneratorState::Failure { error } if error == "first"));
    }
}
