//! SA execution loop.

use super::acceptance::metropolis;
use super::config::SaConfig;
use super::observer::{NoopObserver, SaObserver};
use super::types::{SaProblem, SaProgress, Termination};
use crate::error::Result;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Number of neighbor evaluations performed.
    pub evaluations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled every `history_interval` evaluations.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
///
/// All randomness (initial solution, neighbors, acceptance draws) comes
/// from the generator passed in, so a seeded generator reproduces a run
/// exactly.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    pub fn run<P, R>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>>
    where
        P: SaProblem,
        R: Rng,
    {
        Self::run_with(problem, config, rng, NoopObserver, None)
    }

    /// Runs SA with an optional cancellation token, checked once per
    /// evaluation.
    pub fn run_with_cancel<P, R>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>>
    where
        P: SaProblem,
        R: Rng,
    {
        Self::run_with(problem, config, rng, NoopObserver, cancel)
    }

    /// Runs SA, reporting every evaluation to `observer`.
    pub fn run_with_observer<P, R, O>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        observer: O,
    ) -> Result<SaResult<P::Solution>>
    where
        P: SaProblem,
        R: Rng,
        O: SaObserver<P::Solution>,
    {
        Self::run_with(problem, config, rng, observer, None)
    }

    /// Runs SA with both an observer and a cancellation token.
    pub fn run_with<P, R, O>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        mut observer: O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>>
    where
        P: SaProblem,
        R: Rng,
        O: SaObserver<P::Solution>,
    {
        config.validate()?;

        let size = problem.size();
        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);

        if size <= 1 {
            debug!(event = "anneal_trivial", size);
            return Ok(SaResult {
                best: current,
                best_cost: current_cost,
                evaluations: 0,
                termination: Termination::TrivialInstance,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                cost_history: vec![current_cost],
            });
        }

        let mut best = current.clone();
        let mut best_cost = current_cost;

        let max_evaluations = config.max_evaluations(size);
        let mut temperature = config.initial_temperature;
        let mut evaluations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = vec![best_cost];

        info!(
            event = "anneal_start",
            size,
            max_evaluations,
            initial_temperature = temperature,
            initial_cost = current_cost,
        );

        let termination = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }
            if evaluations >= max_evaluations {
                break Termination::BudgetExhausted;
            }
            // Written negated so a NaN temperature also stops the run.
            if !(temperature > config.min_temperature) {
                break Termination::TemperatureFloorReached;
            }

            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);
            let delta = candidate_cost - current_cost;

            let accepted = metropolis(delta, temperature, rng);
            if accepted {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            evaluations += 1;

            observer.on_evaluation(&SaProgress {
                evaluation: evaluations,
                temperature,
                current: &current,
                current_cost,
                best: &best,
                best_cost,
                accepted,
            });

            temperature = config.cooling.next(temperature);

            if evaluations.is_multiple_of(config.history_interval) {
                cost_history.push(best_cost);
            }
        };

        if cost_history.last().is_none_or(|&last| last > best_cost) {
            cost_history.push(best_cost);
        }

        info!(
            event = "anneal_end",
            termination = ?termination,
            evaluations,
            best_cost,
            final_temperature = temperature,
            accepted_moves,
        );

        Ok(SaResult {
            best,
            best_cost,
            evaluations,
            termination,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
