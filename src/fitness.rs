//! Fitness evaluation contract and optimization direction.
//!
//! The crate never assumes a concrete objective. Callers plug one in by
//! implementing [`Evaluate`], or simply by passing a closure.

use crate::error::{OperatorError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Whether lower or higher fitness is better.
///
/// # Examples
///
/// ```
/// use u_evops::Mode;
///
/// let mode: Mode = "max".parse().unwrap();
/// assert!(mode.is_better(2.0, 1.0));
/// assert!("median".parse::<Mode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Lower fitness is better.
    #[default]
    Min,
    /// Higher fitness is better.
    Max,
}

impl Mode {
    /// Returns `true` if `candidate` is strictly better than `incumbent`.
    ///
    /// Equal values are never better, so a left-to-right scan keeps the
    /// first of several tied candidates. NaN is never better than anything.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Mode::Min => candidate < incumbent,
            Mode::Max => candidate > incumbent,
        }
    }

    /// Sort ordering that puts better fitness first.
    ///
    /// Ascending for [`Mode::Min`], descending for [`Mode::Max`], using the
    /// IEEE total order so NaN sorts deterministically.
    pub fn ordering(self, a: f64, b: f64) -> Ordering {
        match self {
            Mode::Min => a.total_cmp(&b),
            Mode::Max => b.total_cmp(&a),
        }
    }
}

impl FromStr for Mode {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Mode::Min),
            "max" => Ok(Mode::Max),
            _ => Err(OperatorError::invalid(format!(
                "unknown mode '{s}', expected 'min' or 'max'"
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Min => f.write_str("min"),
            Mode::Max => f.write_str("max"),
        }
    }
}

/// Scores a genome.
///
/// Must be deterministic for a fixed genome within one evaluation, but
/// operators do not cache results, so noisy objectives are allowed.
///
/// Any `Fn(&G) -> f64 + Sync` closure implements this trait.
///
/// ```
/// use u_evops::Evaluate;
///
/// let sphere = |x: &Vec<f64>| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&vec![1.0, 2.0]), 5.0);
/// ```
///
/// `Sync` is required so population-wide evaluation can run on rayon when
/// the `parallel` feature is enabled.
pub trait Evaluate<G: ?Sized>: Sync {
    /// Returns the fitness of `genome`.
    fn evaluate(&self, genome: &G) -> f64;
}

impl<G: ?Sized, F> Evaluate<G> for F
where
    F: Fn(&G) -> f64 + Sync,
{
    fn evaluate(&self, genome: &G) -> f64 {
        self(genome)
    }
}

/// Evaluates every member of `population`, preserving order.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_population<G, E>(population: &[G], eval: &E) -> Vec<f64>
where
    G: Sync,
    E: Evaluate<G> + ?Sized,
{
    population.iter().map(|g| eval.evaluate(g)).collect()
}

/// Evaluates every member of `population` on the rayon pool, preserving order.
#[cfg(feature = "parallel")]
pub fn evaluate_population<G, E>(population: &[G], eval: &E) -> Vec<f64>
where
    G: Sync,
    E: Evaluate<G> + ?Sized,
{
    population.par_iter().map(|g| eval.evaluate(g)).collect()
}

/// Index of the best member under `mode`.
///
/// A single linear scan; when several members tie, the first one found wins.
///
/// # Errors
/// [`OperatorError::InvalidArgument`] if `population` is empty.
pub fn find_best<G, E>(population: &[G], eval: &E, mode: Mode) -> Result<usize>
where
    E: Evaluate<G> + ?Sized,
{
    let (first, rest) = population
        .split_first()
        .ok_or_else(|| OperatorError::invalid("cannot find best of an empty population"))?;

    let mut best_idx = 0;
    let mut best_fitness = eval.evaluate(first);
    for (offset, genome) in rest.iter().enumerate() {
        let fitness = eval.evaluate(genome);
        if mode.is_better(fitness, best_fitness) {
            best_idx = offset + 1;
            best_fitness = fitness;
        }
    }
    Ok(best_idx)
}
