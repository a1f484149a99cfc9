//! Random number helpers.
//!
//! Every operator takes its RNG explicitly; this module only provides a
//! reproducible generator factory and the index-sampling primitives the
//! operators share.
//!
//! Unique sampling is delegated to [`rand::seq::index::sample`], which picks
//! between Floyd's algorithm and a partial Fisher–Yates shuffle depending on
//! density. Both terminate in bounded time, unlike retry-until-unique loops.

use crate::error::{OperatorError, Result};
use rand::distr::Open01;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Creates a seeded standard RNG.
///
/// ```
/// use rand::Rng;
/// use u_evops::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a uniform `f64` from the open interval (0, 1).
pub fn open_unit<R: Rng>(rng: &mut R) -> f64 {
    rng.sample(Open01)
}

/// Draws `amount` distinct indices from `0..length`, in random order.
///
/// # Errors
/// [`OperatorError::DegenerateSamplingRequest`] if `amount > length`.
pub fn sample_unique<R: Rng>(rng: &mut R, length: usize, amount: usize) -> Result<Vec<usize>> {
    if amount > length {
        return Err(OperatorError::DegenerateSamplingRequest {
            requested: amount,
            available: length,
        });
    }
    if amount == 0 {
        return Ok(Vec::new());
    }
    Ok(index::sample(rng, length, amount).into_vec())
}

/// Draws `amount` distinct indices from `0..length`, none equal to `excluded`.
///
/// Samples from the `length - 1` remaining slots and shifts every index at
/// or above `excluded` up by one, so the result stays uniform without any
/// rejection step.
///
/// # Errors
/// [`OperatorError::DegenerateSamplingRequest`] if fewer than `amount`
/// indices remain after the exclusion.
pub fn sample_unique_excluding<R: Rng>(
    rng: &mut R,
    length: usize,
    amount: usize,
    excluded: usize,
) -> Result<Vec<usize>> {
    if excluded >= length {
        return sample_unique(rng, length, amount);
    }
    let mut picks = sample_unique(rng, length - 1, amount)?;
    for idx in &mut picks {
        if *idx >= excluded {
            *idx += 1;
        }
    }
    Ok(picks)
}

/// Draws up to `max_draws` indices from `0..length` with replacement,
/// stopping early once every index has appeared at least once.
///
/// Any further draw would only repeat an index already seen, so a caller
/// that keeps the first occurrence of the best draw gets the same outcome
/// as from all `max_draws` draws. The result holds at most
/// `min(max_draws, draws needed to cover the range)` indices, so a huge
/// `max_draws` never allocates more than the covering prefix.
///
/// Returns an empty vector when `length` is zero.
pub fn sample_until_covered<R: Rng>(rng: &mut R, length: usize, max_draws: usize) -> Vec<usize> {
    let mut draws = Vec::new();
    if length == 0 {
        return draws;
    }
    let mut seen = vec![false; length];
    let mut unseen = length;
    for _ in 0..max_draws {
        let idx = rng.random_range(0..length);
        draws.push(idx);
        if !seen[idx] {
            seen[idx] = true;
            unseen -= 1;
            if unseen == 0 {
                break;
            }
        }
    }
    draws
}
