//! Trial-vector crossover for DE.
//!
//! Both operators mix each target vector with its mutant so that at least
//! one dimension comes from the mutant, keeping the trial distinct from the
//! target. Inputs are borrowed and never modified; dimensions keep their
//! positions.
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"
//! - Zaharie (2009), "Influence of crossover on the behavior of Differential
//!   Evolution Algorithms"

use crate::error::{OperatorError, Result};
use crate::ga::{ensure_same_len, RealVector};
use crate::random::open_unit;
use rand::Rng;

fn ensure_pairs(targets: &[RealVector], mutants: &[RealVector]) -> Result<()> {
    if targets.len() != mutants.len() {
        return Err(OperatorError::invalid(format!(
            "{} target vectors but {} mutant vectors",
            targets.len(),
            mutants.len()
        )));
    }
    targets
        .iter()
        .zip(mutants)
        .try_for_each(|(t, m)| ensure_same_len(t, m))
}

/// Binomial crossover.
///
/// For each (target, mutant) pair, one dimension `j_rand` is drawn and always
/// taken from the mutant. Every other dimension draws `r` in (0, 1) and takes
/// the mutant's value if `r ≤ cr`, the target's otherwise. With `cr` near 0
/// a trial differs from its target in exactly one dimension.
///
/// # Errors
/// [`OperatorError::InvalidArgument`] if the slices differ in length or a
/// pair differs in dimensionality.
pub fn binomial_crossover<R: Rng>(
    targets: &[RealVector],
    mutants: &[RealVector],
    cr: f64,
    rng: &mut R,
) -> Result<Vec<RealVector>> {
    ensure_pairs(targets, mutants)?;

    Ok(targets
        .iter()
        .zip(mutants)
        .map(|(target, mutant)| {
            let dim = target.len();
            if dim == 0 {
                return Vec::new();
            }
            let forced = rng.random_range(0..dim);
            (0..dim)
                .map(|j| {
                    if j == forced || open_unit(rng) <= cr {
                        mutant[j]
                    } else {
                        target[j]
                    }
                })
                .collect()
        })
        .collect())
}

/// Exponential crossover.
///
/// For each pair, copying from the mutant starts at a random dimension and
/// continues to the next one (wrapping around) while a fresh `r` in (0, 1)
/// stays at or below `cr`, for at most `dim` dimensions. All other
/// dimensions come from the target, so the mutant contributes one
/// contiguous cyclic run.
///
/// # Errors
/// [`OperatorError::InvalidArgument`] if the slices differ in length or a
/// pair differs in dimensionality.
pub fn exponential_crossover<R: Rng>(
    targets: &[RealVector],
    mutants: &[RealVector],
    cr: f64,
    rng: &mut R,
) -> Result<Vec<RealVector>> {
    ensure_pairs(targets, mutants)?;

    Ok(targets
        .iter()
        .zip(mutants)
        .map(|(target, mutant)| {
            let dim = target.len();
            let mut trial = target.clone();
            if dim == 0 {
                return trial;
            }
            let mut j = rng.random_range(0..dim);
            for copied in 1..=dim {
                trial[j] = mutant[j];
                j = (j + 1) % dim;
                if copied == dim || open_unit(rng) > cr {
                    break;
                }
            }
            trial
        })
        .collect())
}
