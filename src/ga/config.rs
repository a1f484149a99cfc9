//! GA operator configuration.
//!
//! [`GaConfig`] carries every hyperparameter the GA operators need, so a
//! generational driver can thread one value through selection, crossover,
//! and mutation instead of relying on module-level constants.

use crate::error::{OperatorError, Result};
use crate::fitness::Mode;

/// Crossover operator used for binary genomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryCrossover {
    /// k-point crossover with [`GaConfig::crossover_points`] cuts per segment.
    #[default]
    KPoint,
    /// Uniform crossover with one mask shared by all segments.
    Uniform,
}

/// Configuration for the GA operators.
///
/// # Defaults
///
/// ```
/// use u_evops::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.mu, 20);
/// assert_eq!(config.eta, 15);
/// assert_eq!(config.bit_flips, 40);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evops::ga::{BinaryCrossover, GaConfig};
/// use u_evops::Mode;
///
/// let config = GaConfig::default()
///     .with_mode(Mode::Max)
///     .with_tournament_size(5)
///     .with_binary_crossover(BinaryCrossover::Uniform)
///     .with_mutation_probability(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Optimization direction.
    pub mode: Mode,

    /// Crossover probability `cp` in (0, 1].
    ///
    /// Tournament selection picks `ceil(N·cp / 2)·2` parents per round.
    /// Typical range: 0.8–1.0.
    pub crossover_probability: f64,

    /// Probability that an offspring is mutated, in [0, 1].
    pub mutation_probability: f64,

    /// Number of candidates per tournament (`k`). Must be at least 1.
    pub tournament_size: usize,

    /// Distribution index `mu` of SBX crossover.
    ///
    /// Larger values keep children closer to their parents. Typical: 10–20.
    pub mu: u32,

    /// Distribution index `eta` of polynomial mutation. Typical: 15–20.
    pub eta: u32,

    /// Crossover operator for binary genomes.
    pub binary_crossover: BinaryCrossover,

    /// Cut points per segment for k-point crossover.
    pub crossover_points: usize,

    /// Number of bit positions drawn by bit-reversal mutation.
    pub bit_flips: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Min,
            crossover_probability: 0.8,
            mutation_probability: 0.2,
            tournament_size: 3,
            mu: 20,
            eta: 15,
            binary_crossover: BinaryCrossover::KPoint,
            crossover_points: 2,
            bit_flips: 40,
        }
    }
}

impl GaConfig {
    /// Sets the optimization direction.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, cp: f64) -> Self {
        self.crossover_probability = cp;
        self
    }

    /// Sets the mutation probability, clamped to [0, 1].
    pub fn with_mutation_probability(mut self, mp: f64) -> Self {
        self.mutation_probability = mp.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the SBX distribution index.
    pub fn with_mu(mut self, mu: u32) -> Self {
        self.mu = mu;
        self
    }

    /// Sets the polynomial mutation distribution index.
    pub fn with_eta(mut self, eta: u32) -> Self {
        self.eta = eta;
        self
    }

    /// Sets the binary crossover operator.
    pub fn with_binary_crossover(mut self, crossover: BinaryCrossover) -> Self {
        self.binary_crossover = crossover;
        self
    }

    /// Sets the number of k-point crossover cuts.
    pub fn with_crossover_points(mut self, k: usize) -> Self {
        self.crossover_points = k;
        self
    }

    /// Sets the number of bit-reversal draws.
    pub fn with_bit_flips(mut self, flips: usize) -> Self {
        self.bit_flips = flips;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.crossover_probability > 0.0 && self.crossover_probability <= 1.0) {
            return Err(OperatorError::invalid(format!(
                "crossover_probability must be in (0, 1], got {}",
                self.crossover_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(OperatorError::invalid(format!(
                "mutation_probability must be in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if self.tournament_size == 0 {
            return Err(OperatorError::invalid("tournament_size must be at least 1"));
        }
        if self.mu == 0 {
            return Err(OperatorError::invalid("mu must be positive"));
        }
        if self.eta == 0 {
            return Err(OperatorError::invalid("eta must be positive"));
        }
        Ok(())
    }
}
