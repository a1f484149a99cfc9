//! DE configuration.

use super::mutation::DeStrategy;
use crate::error::{OperatorError, Result};
use crate::fitness::Mode;

/// Crossover used to build trial vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeCrossover {
    /// Each dimension independently inherits from the mutant with
    /// probability CR, plus one forced dimension.
    #[default]
    Binomial,
    /// A contiguous (cyclic) run of dimensions inherits from the mutant; the
    /// run continues while draws stay at or below CR.
    Exponential,
}

/// Configuration for the DE operators.
///
/// # Examples
///
/// ```
/// use u_evops::de::{DeConfig, DeStrategy};
/// use u_evops::Mode;
///
/// let config = DeConfig::default()
///     .with_strategy(DeStrategy::Best1)
///     .with_scale_factor(0.8)
///     .with_crossover_rate(0.7)
///     .with_mode(Mode::Max);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeConfig {
    /// Optimization direction, used by the best-based strategies.
    pub mode: Mode,

    /// Mutation scheme.
    pub strategy: DeStrategy,

    /// Scaling factor `F` in [0, 2]. Typical: 0.4–0.9.
    pub scale_factor: f64,

    /// Crossover rate `CR` in (0, 1]. Typical: 0.1 for separable
    /// objectives, 0.9 otherwise.
    pub crossover_rate: f64,

    /// Trial-vector crossover.
    pub crossover: DeCrossover,
}

impl Default for DeConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Min,
            strategy: DeStrategy::Rand1,
            scale_factor: 0.5,
            crossover_rate: 0.9,
            crossover: DeCrossover::Binomial,
        }
    }
}

impl DeConfig {
    /// Sets the optimization direction.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_strategy(mut self, strategy: DeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the scaling factor `F`.
    pub fn with_scale_factor(mut self, f: f64) -> Self {
        self.scale_factor = f;
        self
    }

    /// Sets the crossover rate `CR`.
    pub fn with_crossover_rate(mut self, cr: f64) -> Self {
        self.crossover_rate = cr;
        self
    }

    /// Sets the trial-vector crossover.
    pub fn with_crossover(mut self, crossover: DeCrossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.scale_factor) {
            return Err(OperatorError::invalid(format!(
                "scale_factor must be in [0, 2], got {}",
                self.scale_factor
            )));
        }
        if !(self.crossover_rate > 0.0 && self.crossover_rate <= 1.0) {
            return Err(OperatorError::invalid(format!(
                "crossover_rate must be in (0, 1], got {}",
                self.crossover_rate
            )));
        }
        Ok(())
    }
}
