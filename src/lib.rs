//! Simulated annealing for the Euclidean traveling salesman problem.
//!
//! - [`sa`]: problem-agnostic Simulated Annealing engine. A problem
//!   supplies its initial solution, cost and neighborhood through
//!   [`sa::SaProblem`]; the runner owns temperature, Metropolis acceptance
//!   and termination (evaluation budget, temperature floor, cancellation).
//! - [`tsp`]: cities, tours, tour length and the swap neighborhood, with
//!   [`tsp::optimize`] as the entry point.
//! - [`io`]: reading city lists and writing tours as plain text.
//!
//! Every run draws randomness from a generator the caller passes in
//! (see [`random::create_rng`]), so a fixed seed reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use u_anneal::random::create_rng;
//! use u_anneal::sa::{SaConfig, Termination};
//! use u_anneal::tsp::{optimize, City};
//!
//! let cities: Vec<City> = (0..20)
//!     .map(|i| City::new((i * 7 % 20) as f64, (i * 13 % 20) as f64))
//!     .collect();
//! let config = SaConfig::quench().with_eval_multiplier(200);
//! let result = optimize(&cities, &config, &mut create_rng(42)).unwrap();
//!
//! assert_eq!(result.best.len(), 20);
//! assert_ne!(result.termination, Termination::TrivialInstance);
//! ```

pub mod error;
pub mod io;
pub mod random;
pub mod sa;
pub mod tsp;

pub use error::{AnnealError, Result, TourError};
