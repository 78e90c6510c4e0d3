//! Metropolis acceptance criterion.

use rand::Rng;

/// Decides whether to move to a candidate whose cost differs from the
/// current one by `delta` (`candidate - current`).
///
/// Improvements are always accepted without touching `rng`. Otherwise the
/// move is accepted when `exp(-delta / temperature)` is strictly greater
/// than a uniform draw from `[0, 1)`. A non-positive or NaN temperature
/// freezes the search: non-improving moves are rejected.
///
/// # Examples
///
/// ```
/// use u_anneal::random::create_rng;
/// use u_anneal::sa::metropolis;
///
/// let mut rng = create_rng(1);
/// assert!(metropolis(-1.0, 0.0, &mut rng));
/// assert!(!metropolis(1.0, 0.0, &mut rng));
/// ```
///
/// # Reference
///
/// Metropolis, Rosenbluth, Rosenbluth, Teller & Teller (1953)
pub fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    let probability = acceptance_probability(delta, temperature);
    if probability <= 0.0 {
        return false;
    }
    probability > rng.random_range(0.0..1.0)
}

/// Probability of accepting a non-improving move, in `[0, 1]`.
///
/// Degenerate inputs (frozen temperature, NaN) map to 0. `exp` of a large
/// negative argument underflows to 0 without trapping.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    if !(temperature > 0.0) || delta.is_nan() {
        return 0.0;
    }
    let p = (-delta / temperature).exp();
    if p.is_nan() {
        0.0
    } else {
        p
    }
}
