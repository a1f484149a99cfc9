//! One DE trial-vector pass: mutation → crossover.

use super::config::{DeConfig, DeCrossover};
use super::crossover::{binomial_crossover, exponential_crossover};
use crate::error::Result;
use crate::fitness::Evaluate;
use crate::ga::RealVector;
use rand::Rng;
use tracing::{debug, instrument};

/// Builds one trial vector per population member.
///
/// Mutants come from the configured [`DeStrategy`](super::DeStrategy) with
/// scaling factor `F`; each is then crossed with the member at the same
/// index using the configured [`DeCrossover`] and rate `CR`. The population
/// itself is left untouched. Greedy replacement (keeping the trial only when
/// it is at least as good as its target) is the caller's step.
///
/// # Errors
/// Propagates config validation, mutation, and crossover errors.
///
/// # Examples
///
/// ```
/// use u_evops::de::{trial_vectors, DeConfig};
/// use u_evops::random::create_rng;
///
/// let population: Vec<Vec<f64>> = (0..6).map(|i| vec![i as f64; 3]).collect();
/// let sphere = |v: &Vec<f64>| v.iter().map(|x| x * x).sum::<f64>();
/// let mut rng = create_rng(42);
///
/// let trials = trial_vectors(&population, &sphere, &DeConfig::default(), &mut rng).unwrap();
/// assert_eq!(trials.len(), 6);
/// assert!(trials.iter().all(|t| t.len() == 3));
/// ```
#[instrument(level = "debug", skip_all, fields(population_size = population.len(), strategy = %config.strategy))]
pub fn trial_vectors<E, R>(
    population: &[RealVector],
    eval: &E,
    config: &DeConfig,
    rng: &mut R,
) -> Result<Vec<RealVector>>
where
    E: Evaluate<RealVector> + ?Sized,
    R: Rng,
{
    config.validate()?;

    let mutants = config
        .strategy
        .mutate(population, config.scale_factor, eval, config.mode, rng)?;

    let trials = match config.crossover {
        DeCrossover::Binomial => {
            binomial_crossover(population, &mutants, config.crossover_rate, rng)?
        }
        DeCrossover::Exponential => {
            exponential_crossover(population, &mutants, config.crossover_rate, rng)?
        }
    };

    debug!(trials = trials.len(), "trial vectors built");
    Ok(trials)
}
