//! Selection operators.
//!
//! Selection decides which individuals reproduce. Both operators here take
//! a caller-supplied [`Evaluate`] and a [`Mode`]; neither caches fitness.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::{OperatorError, Result};
use crate::fitness::{evaluate_population, Evaluate, Mode};
use crate::random::{sample_unique, sample_until_covered};
use rand::Rng;
use tracing::{debug, instrument, trace, warn};

/// Number of parents a tournament round picks: `N·cp` rounded up to even.
pub fn selection_count(population_size: usize, cp: f64) -> usize {
    ((population_size as f64 * cp) / 2.0).ceil() as usize * 2
}

/// Tournament selection without replacement across the whole round.
///
/// Picks [`selection_count`]`(N, cp)` winners. Each tournament draws `k`
/// distinct candidates from the pool of not-yet-selected individuals, and the
/// best of them (first in draw order on ties) wins and leaves the pool. Once
/// fewer than `k` candidates remain, candidates are drawn *with replacement*
/// from the remaining pool, so one individual may appear several times in
/// the same tournament. Winners are still never repeated. Those draws stop
/// as soon as every remaining candidate has been seen, so a very large `k`
/// costs no more than a full sweep of the pool.
///
/// Returns original population indices; the sequence has no duplicates.
///
/// # Errors
/// - [`OperatorError::InvalidArgument`] if `k == 0` or `cp` is outside (0, 1].
/// - [`OperatorError::DegenerateSamplingRequest`] if the round needs more
///   winners than the population holds (odd `N` with `cp = 1`).
///
/// # Complexity
/// O(n·(min(k, N log N) + N)) expected time, O(N) space.
#[instrument(level = "debug", skip(population, eval, rng), fields(population_size = population.len()))]
pub fn tournament_selection<G, E, R>(
    population: &[G],
    eval: &E,
    cp: f64,
    k: usize,
    mode: Mode,
    rng: &mut R,
) -> Result<Vec<usize>>
where
    E: Evaluate<G> + ?Sized,
    R: Rng,
{
    if k == 0 {
        return Err(OperatorError::invalid("tournament size must be at least 1"));
    }
    if !(cp > 0.0 && cp <= 1.0) {
        return Err(OperatorError::invalid(format!(
            "crossover probability must be in (0, 1], got {cp}"
        )));
    }

    let n = selection_count(population.len(), cp);
    if n > population.len() {
        return Err(OperatorError::DegenerateSamplingRequest {
            requested: n,
            available: population.len(),
        });
    }

    let mut pool: Vec<usize> = (0..population.len()).collect();
    let mut selected = Vec::with_capacity(n);
    let mut warned = false;

    for round in 0..n {
        let draws = if pool.len() >= k {
            sample_unique(rng, pool.len(), k)?
        } else {
            if !warned {
                warn!(
                    round,
                    remaining = pool.len(),
                    k,
                    "candidate pool smaller than tournament size, drawing with replacement"
                );
                warned = true;
            }
            sample_until_covered(rng, pool.len(), k)
        };

        let mut winner = draws[0];
        let mut best = eval.evaluate(&population[pool[winner]]);
        for &slot in &draws[1..] {
            let fitness = eval.evaluate(&population[pool[slot]]);
            if mode.is_better(fitness, best) {
                winner = slot;
                best = fitness;
            }
        }

        let original = pool.remove(winner);
        trace!(round, winner = original, fitness = best, "tournament decided");
        selected.push(original);
    }

    debug!(selected = selected.len(), "tournament round complete");
    Ok(selected)
}

/// Rank selection: the whole population reordered from best to worst.
///
/// Descending fitness for [`Mode::Max`], ascending for [`Mode::Min`]. The
/// sort is stable, so tied genomes keep their input order. The output is a
/// permutation of the input.
#[instrument(level = "debug", skip(population, eval), fields(population_size = population.len()))]
pub fn rank_selection<G, E>(population: &[G], eval: &E, mode: Mode) -> Vec<G>
where
    G: Clone + Sync,
    E: Evaluate<G> + ?Sized,
{
    rank_order(population, eval, mode)
        .into_iter()
        .map(|i| population[i].clone())
        .collect()
}

/// Population indices sorted from best to worst (stable on ties).
pub fn rank_order<G, E>(population: &[G], eval: &E, mode: Mode) -> Vec<usize>
where
    G: Sync,
    E: Evaluate<G> + ?Sized,
{
    let fitnesses = evaluate_population(population, eval);
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| mode.ordering(fitnesses[a], fitnesses[b]));
    order
}
