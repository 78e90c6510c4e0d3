//! End-to-end runs over small instances.

use std::io::Cursor;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use u_anneal::io::{format_tour, read_cities};
use u_anneal::random::create_rng;
use u_anneal::sa::{CoolingSchedule, NoopObserver, SaConfig, Termination, TracingObserver};
use u_anneal::tsp::{optimize, optimize_with, tour_length, City};

fn unit_square() -> Vec<City> {
    vec![
        City::new(0.0, 0.0),
        City::new(1.0, 0.0),
        City::new(1.0, 1.0),
        City::new(0.0, 1.0),
    ]
}

fn grid(side: usize) -> Vec<City> {
    (0..side * side)
        .map(|i| City::new((i % side) as f64, (i / side) as f64))
        .collect()
}

#[test]
fn test_unit_square_default_schedule() {
    let config = SaConfig::default().with_eval_multiplier(10_000);
    let result = optimize(&unit_square(), &config, &mut create_rng(2024)).unwrap();
    assert!(result.best_cost <= 4.0 + 1e-9, "got {}", result.best_cost);
}

#[test]
fn test_unit_square_quench_schedule() {
    let config = SaConfig::quench().with_eval_multiplier(10_000);
    let result = optimize(&unit_square(), &config, &mut create_rng(2024)).unwrap();
    assert!(result.best_cost <= 4.0 + 1e-9, "got {}", result.best_cost);
    assert_eq!(result.termination, Termination::TemperatureFloorReached);
}

#[test]
fn test_single_city_at_five_five() {
    let cities = [City::new(5.0, 5.0)];
    let result = optimize(&cities, &SaConfig::default(), &mut create_rng(0)).unwrap();
    assert_eq!(result.best_cost, 0.0);
    assert_eq!(result.evaluations, 0);
    assert_eq!(result.termination, Termination::TrivialInstance);
}

#[test]
fn test_empty_instance() {
    let result = optimize(&[], &SaConfig::default(), &mut create_rng(0)).unwrap();
    assert_eq!(result.best_cost, 0.0);
    assert!(result.best.is_empty());
}

#[test]
fn test_floor_terminates_before_budget() {
    let config = SaConfig::default()
        .with_initial_temperature(100.0)
        .with_min_temperature(1.0)
        .with_cooling(CoolingSchedule::Geometric { alpha: 0.9 });
    let result = optimize(&grid(4), &config, &mut create_rng(7)).unwrap();

    assert_eq!(result.termination, Termination::TemperatureFloorReached);
    assert!(result.evaluations < config.max_evaluations(16));
    assert!(result.final_temperature <= 1.0);
}

#[test]
fn test_grid_improves_on_start() {
    // Every edge between distinct grid points is at least 1 long.
    let cities = grid(5);
    let config = SaConfig::default().with_eval_multiplier(4000);
    let result = optimize(&cities, &config, &mut create_rng(11)).unwrap();

    assert!(result.best_cost < result.cost_history[0]);
    assert!(result.best_cost >= 25.0 - 1e-9);
}

#[test]
fn test_independent_runs_do_not_share_state() {
    let cities = grid(4);
    let config = SaConfig::quench();

    let mut shared = create_rng(5);
    let first = optimize(&cities, &config, &mut shared).unwrap();
    let _second = optimize(&cities, &config, &mut shared).unwrap();

    let fresh = optimize(&cities, &config, &mut create_rng(5)).unwrap();
    assert_eq!(first.best, fresh.best);
    assert_eq!(first.best_cost.to_bits(), fresh.best_cost.to_bits());
}

#[test]
fn test_observers_do_not_change_the_run() {
    let cities = grid(4);
    let config = SaConfig::quench();

    let plain = optimize(&cities, &config, &mut create_rng(13)).unwrap();
    let traced = optimize_with(
        &cities,
        &config,
        &mut create_rng(13),
        TracingObserver::new(100),
        None,
    )
    .unwrap();
    assert_eq!(plain.best, traced.best);
    assert_eq!(plain.evaluations, traced.evaluations);
}

#[test]
fn test_cancelled_before_start() {
    let flag = Arc::new(AtomicBool::new(true));
    let result = optimize_with(
        &grid(3),
        &SaConfig::default(),
        &mut create_rng(1),
        NoopObserver,
        Some(flag),
    )
    .unwrap();
    assert_eq!(result.termination, Termination::Cancelled);
    assert_eq!(result.evaluations, 0);
}

#[test]
fn test_read_optimize_write() {
    let text = "1 0 0\n2 1 0\n3 1 1\n4 0 1\n";
    let cities = read_cities(Cursor::new(text)).unwrap();
    let config = SaConfig::default().with_eval_multiplier(5000);
    let result = optimize(&cities, &config, &mut create_rng(3)).unwrap();

    let written = format_tour(&result.best);
    let order: Vec<usize> = written
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect();
    let len = tour_length(&cities, &order).unwrap();
    assert!((len - result.best_cost).abs() < 1e-12);
}
