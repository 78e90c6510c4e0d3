//! Progress observers.
//!
//! Observers see every evaluation but cannot influence the search.

use super::types::SaProgress;

/// Receives a snapshot after every evaluation of a run.
pub trait SaObserver<S> {
    fn on_evaluation(&mut self, progress: &SaProgress<'_, S>);
}

/// Observer that ignores all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<S> SaObserver<S> for NoopObserver {
    fn on_evaluation(&mut self, _progress: &SaProgress<'_, S>) {}
}

impl<S, O: SaObserver<S> + ?Sized> SaObserver<S> for &mut O {
    fn on_evaluation(&mut self, progress: &SaProgress<'_, S>) {
        (**self).on_evaluation(progress)
    }
}

/// Emits a `tracing` debug event every `interval` evaluations.
///
/// The first evaluation is always reported.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    interval: usize,
}

impl TracingObserver {
    /// Creates an observer reporting every `interval` evaluations.
    ///
    /// An interval of 0 is treated as 1.
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    fn should_report(&self, evaluation: usize) -> bool {
        evaluation == 1 || evaluation.is_multiple_of(self.interval)
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl<S> SaObserver<S> for TracingObserver {
    fn on_evaluation(&mut self, progress: &SaProgress<'_, S>) {
        if self.should_report(progress.evaluation) {
            tracing::debug!(
                event = "anneal_progress",
                evaluation = progress.evaluation,
                temperature = progress.temperature,
                current_cost = progress.current_cost,
                best_cost = progress.best_cost,
            );
        }
    }
}
