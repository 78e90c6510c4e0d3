//! Euclidean TSP as an annealing problem.

use super::city::City;
use super::tour::{cyclic_length, Tour};
use crate::error::Result;
use crate::sa::{SaConfig, SaObserver, SaProblem, SaResult, SaRunner};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Symmetric Euclidean TSP over a borrowed set of cities.
///
/// Solutions are [`Tour`]s; the neighborhood is a single random
/// transposition, which connects every pair of tours.
#[derive(Debug, Clone, Copy)]
pub struct TspProblem<'a> {
    cities: &'a [City],
}

impl<'a> TspProblem<'a> {
    pub fn new(cities: &'a [City]) -> Self {
        Self { cities }
    }

    pub fn cities(&self) -> &'a [City] {
        self.cities
    }
}

impl SaProblem for TspProblem<'_> {
    type Solution = Tour;

    fn size(&self) -> usize {
        self.cities.len()
    }

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Tour {
        Tour::random(self.cities.len(), rng)
    }

    fn cost(&self, tour: &Tour) -> f64 {
        // Tours reaching here were built for these cities.
        cyclic_length(self.cities, tour.order())
    }

    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        tour.swapped_random(rng)
    }
}

/// Searches for a short closed tour through `cities`.
///
/// Instances with zero or one city return immediately with cost 0 and
/// [`Termination::TrivialInstance`](crate::sa::Termination::TrivialInstance).
///
/// # Errors
///
/// Returns [`AnnealError::InvalidConfiguration`](crate::error::AnnealError::InvalidConfiguration)
/// if `config` fails validation.
///
/// # Examples
///
/// ```
/// use u_anneal::random::create_rng;
/// use u_anneal::sa::SaConfig;
/// use u_anneal::tsp::{optimize, City};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// let mut rng = create_rng(42);
/// let result = optimize(&cities, &SaConfig::default(), &mut rng).unwrap();
/// assert!(result.best_cost <= 4.0 + 1e-9);
/// assert_eq!(result.best.len(), 4);
/// ```
pub fn optimize<R: Rng>(
    cities: &[City],
    config: &SaConfig,
    rng: &mut R,
) -> Result<SaResult<Tour>> {
    SaRunner::run(&TspProblem::new(cities), config, rng)
}

/// Like [`optimize`], reporting every evaluation to `observer` and stopping
/// early once `cancel` is raised.
pub fn optimize_with<R, O>(
    cities: &[City],
    config: &SaConfig,
    rng: &mut R,
    observer: O,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<SaResult<Tour>>
where
    R: Rng,
    O: SaObserver<Tour>,
{
    SaRunner::run_with(&TspProblem::new(cities), config, rng, observer, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnnealError;
    use crate::random::create_rng;
    use crate::sa::{CoolingSchedule, SaProgress, Termination};
    use crate::tsp::tour::validate_order;
    use crate::tsp::tour_length;

    fn unit_square() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 1.0),
            City::new(0.0, 1.0),
        ]
    }

    fn circle(n: usize) -> Vec<City> {
        (0..n)
            .map(|i| {
                let a = i as f64 / n as f64 * std::f64::consts::TAU;
                City::new(10.0 * a.cos(), 10.0 * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_unit_square_optimal() {
        let config = SaConfig::default().with_eval_multiplier(100_000);
        let result = optimize(&unit_square(), &config, &mut create_rng(42)).expect("valid config");

        assert!(
            result.best_cost <= 4.0 + 1e-9,
            "expected the perimeter, got {}",
            result.best_cost
        );
        // 0.999^k * 1e4 drops below 1e-100 well before 400k evaluations.
        assert_eq!(result.termination, Termination::TemperatureFloorReached);
    }

    #[test]
    fn test_single_city() {
        let cities = vec![City::new(5.0, 5.0)];
        let result = optimize(&cities, &SaConfig::default(), &mut create_rng(1)).expect("valid");
        assert_eq!(result.best_cost, 0.0);
        assert_eq!(result.best.order(), &[0]);
        assert_eq!(result.evaluations, 0);
        assert_eq!(result.termination, Termination::TrivialInstance);
    }

    #[test]
    fn test_no_cities() {
        let result = optimize(&[], &SaConfig::default(), &mut create_rng(1)).expect("valid");
        assert_eq!(result.best_cost, 0.0);
        assert!(result.best.is_empty());
        assert_eq!(result.termination, Termination::TrivialInstance);
    }

    #[test]
    fn test_budget_exhausted() {
        let config = SaConfig::default().with_eval_multiplier(2);
        let result = optimize(&circle(5), &config, &mut create_rng(3)).expect("valid");
        assert_eq!(result.evaluations, 10);
        assert_eq!(result.termination, Termination::BudgetExhausted);
    }

    #[test]
    fn test_best_cost_matches_best_tour() {
        let cities = circle(12);
        let result = optimize(&cities, &SaConfig::quench(), &mut create_rng(8)).expect("valid");
        let recomputed = tour_length(&cities, result.best.order()).expect("best is a permutation");
        assert!((recomputed - result.best_cost).abs() < 1e-9);
    }

    #[test]
    fn test_circle_reaches_polygon() {
        // The optimum is the regular polygon perimeter.
        let n = 8;
        let cities = circle(n);
        let optimum = n as f64 * 2.0 * 10.0 * (std::f64::consts::PI / n as f64).sin();
        let config = SaConfig::default().with_eval_multiplier(10_000);
        let result = optimize(&cities, &config, &mut create_rng(42)).expect("valid");
        assert!(
            result.best_cost < optimum * 1.1,
            "expected near {optimum}, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.0 });
        let result = optimize(&unit_square(), &config, &mut create_rng(1));
        assert!(matches!(result, Err(AnnealError::InvalidConfiguration(_))));
    }

    struct InvariantChecker {
        n: usize,
        last_best: f64,
        steps: usize,
    }

    impl SaObserver<Tour> for InvariantChecker {
        fn on_evaluation(&mut self, progress: &SaProgress<'_, Tour>) {
            assert!(validate_order(progress.current.order(), self.n).is_ok());
            assert!(validate_order(progress.best.order(), self.n).is_ok());
            assert!(progress.best_cost <= self.last_best);
            assert!(progress.best_cost <= progress.current_cost);
            self.last_best = progress.best_cost;
            self.steps += 1;
        }
    }

    #[test]
    fn test_invariants_every_evaluation() {
        let cities = circle(15);
        let mut checker = InvariantChecker {
            n: cities.len(),
            last_best: f64::INFINITY,
            steps: 0,
        };
        let config = SaConfig::quench().with_eval_multiplier(50);
        let result = optimize_with(&cities, &config, &mut create_rng(5), &mut checker, None)
            .expect("valid config");
        assert_eq!(checker.steps, result.evaluations);
    }
}
