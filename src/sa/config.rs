//! SA configuration and cooling schedules.

use crate::error::{AnnealError, Result};

/// Cooling schedule for temperature reduction.
///
/// Both schedules are fixed: the next temperature depends only on the
/// current one, never on search progress.
///
/// # References
///
/// - Geometric: Kirkpatrick, Gelatt & Vecchi (1983)
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Typical `alpha` for TSP: 0.995–0.999.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },
}

impl CoolingSchedule {
    /// Returns the temperature following `temperature`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_anneal::sa::CoolingSchedule;
    ///
    /// let cooling = CoolingSchedule::Geometric { alpha: 0.5 };
    /// assert_eq!(cooling.next(8.0), 4.0);
    /// ```
    pub fn next(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            CoolingSchedule::Geometric { alpha } => {
                // NaN fails both comparisons, so test the accepted range.
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(invalid(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0 && beta.is_finite()) {
                    return Err(invalid(format!(
                        "lundy-mees beta must be positive, got {beta}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.999 }
    }
}

/// Configuration for a Simulated Annealing run.
///
/// The random generator is not part of the configuration: it is passed to
/// the runner so that the caller decides how runs are seeded.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(5000.0)
///     .with_min_temperature(1e-4)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.995 })
///     .with_eval_multiplier(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The run stops once T is no longer above this.
    pub min_temperature: f64,

    /// Cooling schedule, applied once per evaluation.
    pub cooling: CoolingSchedule,

    /// Evaluation budget per unit of problem size.
    ///
    /// The run performs at most `eval_multiplier * problem.size()`
    /// neighbor evaluations.
    pub eval_multiplier: usize,

    /// Sample the best cost into the history every this many evaluations.
    pub history_interval: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            min_temperature: 1e-100,
            cooling: CoolingSchedule::default(),
            eval_multiplier: 1000,
            history_interval: 100,
        }
    }
}

impl SaConfig {
    /// Faster schedule: `alpha = 0.995` down to a floor of `1e-4`.
    pub fn quench() -> Self {
        Self {
            min_temperature: 1e-4,
            cooling: CoolingSchedule::Geometric { alpha: 0.995 },
            ..Self::default()
        }
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_eval_multiplier(mut self, n: usize) -> Self {
        self.eval_multiplier = n;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Evaluation budget for a problem of the given size.
    pub fn max_evaluations(&self, size: usize) -> usize {
        self.eval_multiplier.saturating_mul(size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(invalid(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.min_temperature > 0.0) {
            return Err(invalid(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.eval_multiplier == 0 {
            return Err(invalid("eval_multiplier must be positive".into()));
        }
        if self.history_interval == 0 {
            return Err(invalid("history_interval must be positive".into()));
        }
        self.cooling.validate()
    }
}

fn invalid(reason: String) -> AnnealError {
    AnnealError::InvalidConfiguration(reason)
}
