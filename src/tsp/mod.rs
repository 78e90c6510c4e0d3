//! Euclidean Traveling Salesman Problem.
//!
//! Given points in the plane, find a cyclic visiting order of minimum
//! total length. [`optimize`] runs simulated annealing over tours with a
//! random-transposition neighborhood.
//!
//! # References
//!
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod city;
mod problem;
mod tour;

pub use city::{distance, City};
pub use problem::{optimize, optimize_with, TspProblem};
pub use tour::{perturb, tour_length, validate_order, Tour};
