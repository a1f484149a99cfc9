//! Operators for binary-coded genomes.
//!
//! A binary genome is a list of bit segments. Crossover treats each segment
//! as an independent bit string; mutation draws positions once and applies
//! them to every segment.
//!
//! # Crossover Operators
//!
//! - [`kp_crossover`]: k-point crossover, cut points drawn per segment
//! - [`uniform_crossover`]: one random swap mask shared by all segments
//!
//! # Mutation Operators
//!
//! - [`bit_reversal_mutation`]: flip a fixed number of drawn positions
//!
//! # References
//!
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::types::{ensure_same_shape, uniform_segment_len, BinaryGenome, Segment};
use crate::error::Result;
use crate::random::sample_unique;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// k-point crossover.
///
/// For each segment independently, `k` distinct cut positions are drawn from
/// `[1, len)`. Walking the segment left to right, a swap flag toggles at every
/// cut: while it is off child1 copies parent1 and child2 copies parent2, while
/// it is on they copy the other parent. `k = 1` is single-point crossover,
/// `k = 2` two-point; `k = 0` returns copies of the parents.
///
/// # Errors
/// - [`InvalidArgument`](crate::OperatorError::InvalidArgument) if the
///   parents differ in shape.
/// - [`DegenerateSamplingRequest`](crate::OperatorError::DegenerateSamplingRequest)
///   if some segment has fewer than `k` interior positions.
///
/// # Complexity
/// O(total bits) time and space.
pub fn kp_crossover<R: Rng>(
    parent1: &[Segment],
    parent2: &[Segment],
    k: usize,
    rng: &mut R,
) -> Result<(BinaryGenome, BinaryGenome)> {
    ensure_same_shape(parent1, parent2)?;

    // Draw every segment's cuts before building anything, so a short segment
    // fails the whole call.
    let cuts = parent1
        .iter()
        .map(|seg| {
            let interior = seg.len().saturating_sub(1);
            sample_unique(rng, interior, k).map(|picks| picks.into_iter().map(|c| c + 1).collect())
        })
        .collect::<Result<Vec<Vec<usize>>>>()?;

    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent1.len());
    for ((s1, s2), seg_cuts) in parent1.iter().zip(parent2).zip(&cuts) {
        let (c1, c2) = cross_segment(s1, s2, seg_cuts);
        child1.push(c1);
        child2.push(c2);
    }
    Ok((child1, child2))
}

/// Builds both children of one segment for a fixed set of cut positions.
fn cross_segment(s1: &[bool], s2: &[bool], cuts: &[usize]) -> (Segment, Segment) {
    let mut is_cut = vec![false; s1.len()];
    for &c in cuts {
        is_cut[c] = true;
    }

    let mut swapped = false;
    let mut c1 = Vec::with_capacity(s1.len());
    let mut c2 = Vec::with_capacity(s1.len());
    for i in 0..s1.len() {
        if is_cut[i] {
            swapped = !swapped;
        }
        if swapped {
            c1.push(s2[i]);
            c2.push(s1[i]);
        } else {
            c1.push(s1[i]);
            c2.push(s2[i]);
        }
    }
    (c1, c2)
}

/// Uniform crossover.
///
/// One mask of length `parent1[0].len()` is drawn and reused for every
/// segment: where the mask bit is set the children swap the parents' bits,
/// elsewhere they copy them. Hence for every position,
/// `child1[i] == parent1[i]` exactly when `child2[i] == parent2[i]`.
///
/// # Errors
/// [`InvalidArgument`](crate::OperatorError::InvalidArgument) if the parents
/// differ in shape or their segments are not all the same length.
pub fn uniform_crossover<R: Rng>(
    parent1: &[Segment],
    parent2: &[Segment],
    rng: &mut R,
) -> Result<(BinaryGenome, BinaryGenome)> {
    ensure_same_shape(parent1, parent2)?;
    let len = uniform_segment_len(parent1)?;

    let mask: Vec<bool> = (0..len).map(|_| rng.random_bool(0.5)).collect();

    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent1.len());
    for (s1, s2) in parent1.iter().zip(parent2) {
        let (c1, c2): (Segment, Segment) = mask
            .iter()
            .zip(s1.iter().zip(s2))
            .map(|(&swap, (&b1, &b2))| if swap { (b2, b1) } else { (b1, b2) })
            .unzip();
        child1.push(c1);
        child2.push(c2);
    }
    Ok((child1, child2))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-reversal mutation, in place.
///
/// Draws `flips` positions uniformly (repeats allowed) from
/// `[0, chromosome[0].len())` and flips the bit at each drawn position in
/// every segment. A position drawn twice is flipped twice.
///
/// # Errors
/// [`InvalidArgument`](crate::OperatorError::InvalidArgument) if segments
/// differ in length. The chromosome is left untouched on error.
pub fn bit_reversal_mutation<R: Rng>(
    chromosome: &mut [Segment],
    flips: usize,
    rng: &mut R,
) -> Result<()> {
    let len = uniform_segment_len(chromosome)?;
    if len == 0 {
        return Ok(());
    }

    let positions: Vec<usize> = (0..flips).map(|_| rng.random_range(0..len)).collect();
    for segment in chromosome.iter_mut() {
        for &pos in &positions {
            segment[pos] = !segment[pos];
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
