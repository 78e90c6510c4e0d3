//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The problem supplies the initial solution, the cost function and the
/// neighborhood. The runner handles temperature management, the
/// acceptance criterion and termination.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_anneal::sa::SaProblem;
///
/// struct Quadratic;
///
/// impl SaProblem for Quadratic {
///     type Solution = f64;
///
///     fn size(&self) -> usize {
///         2
///     }
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> f64 {
///         rng.random_range(-10.0..10.0)
///     }
///
///     fn cost(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
/// }
/// ```
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Problem size. Scales the evaluation budget; a size of 0 or 1 means
    /// there is nothing to search and the run ends immediately.
    fn size(&self) -> usize;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution without modifying it.
    ///
    /// The neighborhood must be connected (any solution reachable from any
    /// other via a sequence of moves).
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}

/// Why an annealing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The evaluation budget was used up.
    BudgetExhausted,
    /// The temperature fell to the configured floor.
    TemperatureFloorReached,
    /// The problem had size 0 or 1; no evaluations were performed.
    TrivialInstance,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Snapshot of the search handed to an observer after each evaluation.
#[derive(Debug)]
pub struct SaProgress<'a, S> {
    /// Evaluations performed so far, including this one.
    pub evaluation: usize,
    /// Temperature the acceptance decision was made at.
    pub temperature: f64,
    pub current: &'a S,
    pub current_cost: f64,
    pub best: &'a S,
    pub best_cost: f64,
    /// Whether the candidate of this evaluation was accepted.
    pub accepted: bool,
}
