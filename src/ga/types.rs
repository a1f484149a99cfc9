//! Genome representations and shape checks.
//!
//! Binary genomes are lists of independent bit segments; real genomes are
//! plain `f64` vectors. Operators check operand shapes up front and reject
//! mismatches with [`OperatorError::InvalidArgument`].

use crate::error::{OperatorError, Result};

/// One bit string of a binary genome.
pub type Segment = Vec<bool>;

/// A binary-coded genome: one or more segments.
pub type BinaryGenome = Vec<Segment>;

/// A real-coded genome: one value per search-space dimension.
pub type RealVector = Vec<f64>;

/// Checks that two binary genomes have the same segment count and lengths.
pub(crate) fn ensure_same_shape(a: &[Segment], b: &[Segment]) -> Result<()> {
    if a.len() != b.len() {
        return Err(OperatorError::invalid(format!(
            "segment count mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    for (j, (sa, sb)) in a.iter().zip(b).enumerate() {
        if sa.len() != sb.len() {
            return Err(OperatorError::invalid(format!(
                "segment {j} length mismatch: {} vs {}",
                sa.len(),
                sb.len()
            )));
        }
    }
    Ok(())
}

/// Checks that every segment has the length of the first one.
///
/// Returns that common length (0 for a genome with no segments).
pub(crate) fn uniform_segment_len(genome: &[Segment]) -> Result<usize> {
    let len = genome.first().map_or(0, Vec::len);
    if let Some((j, seg)) = genome.iter().enumerate().find(|(_, s)| s.len() != len) {
        return Err(OperatorError::invalid(format!(
            "segment {j} has length {}, expected {len}",
            seg.len()
        )));
    }
    Ok(len)
}

/// Checks that two real vectors have the same dimensionality.
pub(crate) fn ensure_same_len(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(OperatorError::invalid(format!(
            "vector length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Checks that every vector of a population has the same dimensionality.
///
/// Returns that dimensionality (0 for an empty population).
pub(crate) fn uniform_dimension(population: &[RealVector]) -> Result<usize> {
    let dim = population.first().map_or(0, Vec::len);
    if let Some((i, v)) = population.iter().enumerate().find(|(_, v)| v.len() != dim) {
        return Err(OperatorError::invalid(format!(
            "vector {i} has dimension {}, expected {dim}",
            v.len()
        )));
    }
    Ok(dim)
}
