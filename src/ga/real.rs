//! Operators for real-coded genomes.
//!
//! Neither operator knows the search domain: children and mutants may leave
//! it. Callers that have bounds clamp, repair, or resample the results.
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous
//!   Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS) for
//!   Engineering Design"

use super::types::{ensure_same_len, RealVector};
use crate::error::Result;
use crate::random::open_unit;
use rand::Rng;

/// SBX spread factor for a uniform draw `r` and exponent `p = 1/(mu+1)`.
fn spread_factor(r: f64, p: f64) -> f64 {
    if r > 0.5 {
        (1.0 / (2.0 * (1.0 - r))).powf(p)
    } else {
        (2.0 * r).powf(p)
    }
}

/// Polynomial perturbation for a uniform draw `r` and `p = 1/(eta+1)`.
///
/// Lies in (-1, 1), negative for `r < 0.5`.
fn perturbation(r: f64, p: f64) -> f64 {
    if r > 0.5 {
        1.0 - (2.0 * (1.0 - r)).powf(p)
    } else {
        (2.0 * r).powf(p) - 1.0
    }
}

/// Simulated-binary-style crossover.
///
/// With `p = 1/(mu+1)`, every gene draws its own `r` in (0, 1) and spread
/// factor `b`, then
///
/// ```text
/// c1 = ½[(1+b)·p1 + (1−b)·p2]
/// c2 = ½[(1−b)·p1 + (1+b)·p2]
/// ```
///
/// so `c1 + c2 == p1 + p2` gene by gene. Larger `mu` keeps children closer
/// to their parents.
///
/// # Errors
/// [`InvalidArgument`](crate::OperatorError::InvalidArgument) if the parents
/// differ in length.
pub fn sbx_crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    mu: u32,
    rng: &mut R,
) -> Result<(RealVector, RealVector)> {
    ensure_same_len(parent1, parent2)?;
    let p = 1.0 / (f64::from(mu) + 1.0);

    Ok(parent1
        .iter()
        .zip(parent2)
        .map(|(&x1, &x2)| {
            let b = spread_factor(open_unit(rng), p);
            (
                0.5 * ((1.0 + b) * x1 + (1.0 - b) * x2),
                0.5 * ((1.0 - b) * x1 + (1.0 + b) * x2),
            )
        })
        .unzip())
}

/// Polynomial-style mutation, in place.
///
/// A single `r` in (0, 1) is drawn for the whole chromosome, and the same
/// perturbation `d` is added to every gene, shifting the chromosome as a
/// whole by less than 1 in each coordinate.
pub fn polynomial_mutation<R: Rng>(chromosome: &mut [f64], eta: u32, rng: &mut R) {
    let p = 1.0 / (f64::from(eta) + 1.0);
    let d = perturbation(open_unit(rng), p);
    for gene in chromosome.iter_mut() {
        *gene += d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperatorError;
    use crate::random::create_rng;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_spread_factor_is_one_at_half() {
        assert!((spread_factor(0.5, 1.0 / 21.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_spread_factor_branches() {
        let p = 1.0 / 21.0;
        assert!(spread_factor(0.25, p) < 1.0);
        assert!(spread_factor(0.75, p) > 1.0);
        // p = 1: b = 2r below the midpoint, 1/(2(1-r)) above.
        assert!((spread_factor(0.25, 1.0) - 0.5).abs() < EPS);
        assert!((spread_factor(0.75, 1.0) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_perturbation_range() {
        let p = 1.0 / 16.0;
        assert!(perturbation(0.5, p).abs() < EPS);
        assert!(perturbation(0.1, p) < 0.0);
        assert!(perturbation(0.9, p) > 0.0);
        for i in 1..100 {
            let d = perturbation(i as f64 / 100.0, p);
            assert!(d > -1.0 && d < 1.0);
        }
    }

    #[test]
    fn test_sbx_preserves_gene_sums() {
        let mut rng = create_rng(42);
        let p1 = vec![1.0, -2.0, 3.5, 0.0];
        let p2 = vec![4.0, 2.0, -1.5, 0.0];
        for _ in 0..50 {
            let (c1, c2) = sbx_crossover(&p1, &p2, 20, &mut rng).unwrap();
            assert_eq!(c1.len(), 4);
            assert_eq!(c2.len(), 4);
            for i in 0..4 {
                assert!((c1[i] + c2[i] - (p1[i] + p2[i])).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_sbx_identical_parents() {
        let mut rng = create_rng(42);
        let p = vec![1.5, -0.25, 8.0];
        let (c1, c2) = sbx_crossover(&p, &p, 20, &mut rng).unwrap();
        for i in 0..3 {
            assert!((c1[i] - p[i]).abs() < 1e-9);
            assert!((c2[i] - p[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sbx_length_mismatch() {
        let mut rng = create_rng(42);
        assert!(matches!(
            sbx_crossover(&[1.0, 2.0], &[1.0], 20, &mut rng),
            Err(OperatorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sbx_large_mu_stays_close() {
        let mut rng = create_rng(42);
        let p1 = vec![0.0; 8];
        let p2 = vec![1.0; 8];
        let (c1, _) = sbx_crossover(&p1, &p2, 1000, &mut rng).unwrap();
        // b ≈ 1 for huge mu, so child1 ≈ parent1.
        assert!(c1.iter().all(|&x| x.abs() < 0.05), "c1 = {c1:?}");
    }

    #[test]
    fn test_polynomial_shifts_all_genes_equally() {
        let mut rng = create_rng(42);
        let original = vec![1.0, -3.0, 10.0, 0.5];
        let mut chromosome = original.clone();
        polynomial_mutation(&mut chromosome, 15, &mut rng);

        let d = chromosome[0] - original[0];
        assert!(d.abs() < 1.0);
        for i in 0..4 {
            assert!((chromosome[i] - original[i] - d).abs() < 1e-12);
        }
    }

    #[test]
    fn test_polynomial_empty_chromosome() {
        let mut rng = create_rng(42);
        let mut chromosome: Vec<f64> = Vec::new();
        polynomial_mutation(&mut chromosome, 15, &mut rng);
        assert!(chromosome.is_empty());
    }
}
