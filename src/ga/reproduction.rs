//! One GA reproduction pass: selection → crossover → mutation.
//!
//! These functions run the operators of a single generation with the
//! hyperparameters of a [`GaConfig`]. Evaluating the offspring, merging them
//! into the next population, and deciding when to stop are left to the
//! caller's generational loop.

use super::binary::{bit_reversal_mutation, kp_crossover, uniform_crossover};
use super::config::{BinaryCrossover, GaConfig};
use super::real::{polynomial_mutation, sbx_crossover};
use super::selection::tournament_selection;
use super::types::{BinaryGenome, RealVector};
use crate::error::Result;
use crate::fitness::Evaluate;
use rand::Rng;
use tracing::{debug, instrument};

/// Produces offspring from a binary-coded population.
///
/// Tournament selection picks an even number of parents; consecutive
/// winners are paired and crossed with the configured
/// [`BinaryCrossover`]; each child then undergoes bit-reversal mutation with
/// probability `mutation_probability`.
///
/// Returns as many children as parents were selected.
///
/// # Errors
/// Propagates config validation and operator errors.
#[instrument(level = "debug", skip_all, fields(population_size = population.len()))]
pub fn reproduce_binary<E, R>(
    population: &[BinaryGenome],
    eval: &E,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<BinaryGenome>>
where
    E: Evaluate<BinaryGenome> + ?Sized,
    R: Rng,
{
    reproduce(
        population,
        eval,
        config,
        rng,
        |p1, p2, rng| match config.binary_crossover {
            BinaryCrossover::KPoint => kp_crossover(p1, p2, config.crossover_points, rng),
            BinaryCrossover::Uniform => uniform_crossover(p1, p2, rng),
        },
        |child, rng| bit_reversal_mutation(child, config.bit_flips, rng),
    )
}

/// Produces offspring from a real-coded population.
///
/// Same pipeline as [`reproduce_binary`], with SBX crossover (`mu`) and
/// polynomial mutation (`eta`).
///
/// # Errors
/// Propagates config validation and operator errors.
#[instrument(level = "debug", skip_all, fields(population_size = population.len()))]
pub fn reproduce_real<E, R>(
    population: &[RealVector],
    eval: &E,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<RealVector>>
where
    E: Evaluate<RealVector> + ?Sized,
    R: Rng,
{
    reproduce(
        population,
        eval,
        config,
        rng,
        |p1, p2, rng| sbx_crossover(p1, p2, config.mu, rng),
        |child, rng| {
            polynomial_mutation(child, config.eta, rng);
            Ok(())
        },
    )
}

fn reproduce<G, E, R, C, M>(
    population: &[G],
    eval: &E,
    config: &GaConfig,
    rng: &mut R,
    mut crossover: C,
    mut mutate: M,
) -> Result<Vec<G>>
where
    E: Evaluate<G> + ?Sized,
    R: Rng,
    C: FnMut(&G, &G, &mut R) -> Result<(G, G)>,
    M: FnMut(&mut G, &mut R) -> Result<()>,
{
    config.validate()?;

    let parents = tournament_selection(
        population,
        eval,
        config.crossover_probability,
        config.tournament_size,
        config.mode,
        rng,
    )?;

    let mut offspring = Vec::with_capacity(parents.len());
    let mut mutated = 0usize;
    for pair in parents.chunks_exact(2) {
        let (c1, c2) = crossover(&population[pair[0]], &population[pair[1]], rng)?;
        for mut child in [c1, c2] {
            if rng.random_range(0.0..1.0) < config.mutation_probability {
                mutate(&mut child, rng)?;
                mutated += 1;
            }
            offspring.push(child);
        }
    }

    debug!(
        parents = parents.len(),
        offspring = offspring.len(),
        mutated,
        "reproduction pass complete"
    );
    Ok(offspring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::Mode;
    use crate::random::create_rng;

    fn onemax(genome: &BinaryGenome) -> f64 {
        genome.iter().flatten().filter(|&&b| b).count() as f64
    }

    fn sphere(v: &RealVector) -> f64 {
        v.iter().map(|x| x * x).sum()
    }

    fn random_binary(rng: &mut impl Rng, n: usize) -> Vec<BinaryGenome> {
        (0..n)
            .map(|_| {
                vec![
                    (0..12).map(|_| rng.random_bool(0.5)).collect(),
                    (0..12).map(|_| rng.random_bool(0.5)).collect(),
                ]
            })
            .collect()
    }

    #[test]
    fn test_reproduce_binary_kpoint() {
        let mut rng = create_rng(42);
        let pop = random_binary(&mut rng, 10);
        let config = GaConfig::default().with_mode(Mode::Max).with_bit_flips(2);

        let children = reproduce_binary(&pop, &onemax, &config, &mut rng).unwrap();
        assert_eq!(children.len(), 8);
        for child in &children {
            assert_eq!(child.len(), 2);
            assert!(child.iter().all(|s| s.len() == 12));
        }
    }

    #[test]
    fn test_reproduce_binary_uniform_without_mutation_conserves_bits() {
        let mut rng = create_rng(42);
        let pop = random_binary(&mut rng, 8);
        let config = GaConfig::default()
            .with_crossover_probability(1.0)
            .with_binary_crossover(BinaryCrossover::Uniform)
            .with_mutation_probability(0.0);

        let children = reproduce_binary(&pop, &onemax, &config, &mut rng).unwrap();
        assert_eq!(children.len(), 8);
        // cp = 1 selects every member once; crossover only moves bits around.
        let parent_ones: f64 = pop.iter().map(onemax).sum();
        let child_ones: f64 = children.iter().map(onemax).sum();
        assert_eq!(parent_ones, child_ones);
    }

    #[test]
    fn test_reproduce_binary_rejects_invalid_config() {
        let mut rng = create_rng(42);
        let pop = random_binary(&mut rng, 4);
        let config = GaConfig::default().with_tournament_size(0);
        assert!(reproduce_binary(&pop, &onemax, &config, &mut rng).is_err());
    }

    #[test]
    fn test_reproduce_real_without_mutation_preserves_sums() {
        let mut rng = create_rng(42);
        let pop: Vec<RealVector> = (0..6)
            .map(|i| vec![i as f64, -(i as f64), 0.5 * i as f64])
            .collect();
        let config = GaConfig::default()
            .with_crossover_probability(1.0)
            .with_mutation_probability(0.0);

        let children = reproduce_real(&pop, &sphere, &config, &mut rng).unwrap();
        assert_eq!(children.len(), 6);
        for d in 0..3 {
            let parent_sum: f64 = pop.iter().map(|v| v[d]).sum();
            let child_sum: f64 = children.iter().map(|v| v[d]).sum();
            assert!((parent_sum - child_sum).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reproduce_real_shape() {
        let mut rng = create_rng(7);
        let pop: Vec<RealVector> = (0..9)
            .map(|_| (0..4).map(|_| rng.random_range(-5.0..5.0)).collect())
            .collect();
        let config = GaConfig::default().with_mutation_probability(1.0);

        let children = reproduce_real(&pop, &sphere, &config, &mut rng).unwrap();
        // 9 · 0.8 = 7.2 → 8 parents.
        assert_eq!(children.len(), 8);
        assert!(children.iter().all(|c| c.len() == 4));
    }
}
