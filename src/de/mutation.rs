//! Differential mutation schemes.
//!
//! Each scheme builds one mutant vector `V_i` per population member `i` by
//! adding scaled differences of randomly chosen members to a base vector:
//!
//! | Strategy | Label | Formula |
//! |---|---|---|
//! | [`Rand1`](DeStrategy::Rand1) | type 1 | `X_r1 + F(X_r2 − X_r3)` |
//! | [`Best1`](DeStrategy::Best1) | type 2 | `X_best + F(X_r1 − X_r2)` |
//! | [`CurrentToBest1`](DeStrategy::CurrentToBest1) | type 3 | `X_i + F(X_best − X_r1) + F(X_r1 − X_r2)` |
//! | [`Rand2`](DeStrategy::Rand2) | type 4 | `X_r1 + F(X_r2 − X_r3) + F(X_r4 − X_r5)` |
//! | [`Best2`](DeStrategy::Best2) | type 5 | `X_best + F(X_r1 − X_r2) + F(X_r3 − X_r4)` |
//!
//! The donors `r1, r2, …` of member `i` are distinct and never `i` itself.
//! Mutants are not clamped to any domain.
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"
//! - Price, Storn & Lampinen (2005), *Differential Evolution: A Practical
//!   Approach to Global Optimization*

use crate::error::{OperatorError, Result};
use crate::fitness::{find_best, Evaluate, Mode};
use crate::ga::{uniform_dimension, RealVector};
use crate::random::sample_unique_excluding;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// DE mutation scheme.
///
/// # Examples
///
/// ```
/// use u_evops::de::DeStrategy;
///
/// assert_eq!(DeStrategy::from_type(3).unwrap(), DeStrategy::CurrentToBest1);
/// assert_eq!("rand/2".parse::<DeStrategy>().unwrap(), DeStrategy::Rand2);
/// assert_eq!(DeStrategy::Best2.donors(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeStrategy {
    /// DE/rand/1: `X_r1 + F(X_r2 − X_r3)`.
    #[default]
    Rand1,
    /// DE/best/1: `X_best + F(X_r1 − X_r2)`.
    Best1,
    /// DE/current-to-best/1: `X_i + F(X_best − X_r1) + F(X_r1 − X_r2)`.
    CurrentToBest1,
    /// DE/rand/2: `X_r1 + F(X_r2 − X_r3) + F(X_r4 − X_r5)`.
    Rand2,
    /// DE/best/2: `X_best + F(X_r1 − X_r2) + F(X_r3 − X_r4)`.
    Best2,
}

impl DeStrategy {
    /// Maps the numeric scheme labels 1–5 to strategies.
    ///
    /// Label 2 is DE/best/1 (one difference vector) and label 5 is DE/best/2,
    /// matching the formulas rather than older tables that call type 2
    /// "best/2".
    ///
    /// # Errors
    /// [`OperatorError::InvalidArgument`] for any other label.
    pub fn from_type(label: u8) -> Result<Self> {
        match label {
            1 => Ok(DeStrategy::Rand1),
            2 => Ok(DeStrategy::Best1),
            3 => Ok(DeStrategy::CurrentToBest1),
            4 => Ok(DeStrategy::Rand2),
            5 => Ok(DeStrategy::Best2),
            _ => Err(OperatorError::invalid(format!(
                "unknown DE mutation type {label}, expected 1-5"
            ))),
        }
    }

    /// Number of distinct random donors drawn per member.
    pub fn donors(self) -> usize {
        match self {
            DeStrategy::Rand1 => 3,
            DeStrategy::Best1 | DeStrategy::CurrentToBest1 => 2,
            DeStrategy::Rand2 => 5,
            DeStrategy::Best2 => 4,
        }
    }

    /// Whether the scheme needs the population's best member.
    pub fn uses_best(self) -> bool {
        matches!(
            self,
            DeStrategy::Best1 | DeStrategy::CurrentToBest1 | DeStrategy::Best2
        )
    }

    /// Builds one mutant vector per population member.
    ///
    /// `eval` and `mode` are only consulted by the best-based schemes, which
    /// evaluate every member once to locate the best (first found on ties).
    ///
    /// # Errors
    /// - [`OperatorError::InvalidArgument`] if the vectors differ in length.
    /// - [`OperatorError::DegenerateSamplingRequest`] if the population has
    ///   fewer than [`donors`](Self::donors)` + 1` members.
    #[instrument(level = "debug", skip(population, eval, rng), fields(population_size = population.len()))]
    pub fn mutate<E, R>(
        self,
        population: &[RealVector],
        f: f64,
        eval: &E,
        mode: Mode,
        rng: &mut R,
    ) -> Result<Vec<RealVector>>
    where
        E: Evaluate<RealVector> + ?Sized,
        R: Rng,
    {
        let best = if self.uses_best() && !population.is_empty() {
            let best = find_best(population, eval, mode)?;
            debug!(best, "located best member");
            Some(best)
        } else {
            None
        };
        self.mutate_with_best(population, f, best, rng)
    }

    fn mutate_with_best<R: Rng>(
        self,
        population: &[RealVector],
        f: f64,
        best: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<RealVector>> {
        uniform_dimension(population)?;
        let n = population.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        let needed = self.donors();
        if needed > n - 1 {
            return Err(OperatorError::DegenerateSamplingRequest {
                requested: needed,
                available: n - 1,
            });
        }

        let best: &[f64] = match best {
            Some(b) => &population[b],
            None => &[],
        };
        (0..n)
            .map(|i| {
                let r = sample_unique_excluding(rng, n, needed, i)?;
                let x = |k: usize| population[r[k]].as_slice();
                let mutant = match self {
                    DeStrategy::Rand1 => differential(x(0), &[(x(1), x(2))], f),
                    DeStrategy::Best1 => differential(best, &[(x(0), x(1))], f),
                    DeStrategy::CurrentToBest1 => differential(
                        &population[i],
                        &[(best, x(0)), (x(0), x(1))],
                        f,
                    ),
                    DeStrategy::Rand2 => differential(x(0), &[(x(1), x(2)), (x(3), x(4))], f),
                    DeStrategy::Best2 => differential(best, &[(x(0), x(1)), (x(2), x(3))], f),
                };
                Ok(mutant)
            })
            .collect()
    }
}

impl FromStr for DeStrategy {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rand/1" => Ok(DeStrategy::Rand1),
            "best/1" => Ok(DeStrategy::Best1),
            "current-to-best/1" => Ok(DeStrategy::CurrentToBest1),
            "rand/2" => Ok(DeStrategy::Rand2),
            "best/2" => Ok(DeStrategy::Best2),
            _ => Err(OperatorError::invalid(format!("unknown DE strategy '{s}'"))),
        }
    }
}

impl fmt::Display for DeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeStrategy::Rand1 => "rand/1",
            DeStrategy::Best1 => "best/1",
            DeStrategy::CurrentToBest1 => "current-to-best/1",
            DeStrategy::Rand2 => "rand/2",
            DeStrategy::Best2 => "best/2",
        })
    }
}

/// `base + Σ f·(a − b)` over the given difference pairs, element-wise.
fn differential(base: &[f64], diffs: &[(&[f64], &[f64])], f: f64) -> RealVector {
    let mut v = base.to_vec();
    for &(a, b) in diffs {
        for ((vj, &aj), &bj) in v.iter_mut().zip(a).zip(b) {
            *vj += f * (aj - bj);
        }
    }
    v
}

/// DE/rand/1 mutation (type 1).
pub fn mutate_rand_1<R: Rng>(
    population: &[RealVector],
    f: f64,
    rng: &mut R,
) -> Result<Vec<RealVector>> {
    DeStrategy::Rand1.mutate_with_best(population, f, None, rng)
}

/// DE/best/1 mutation (type 2).
pub fn mutate_best_1<E, R>(
    population: &[RealVector],
    f: f64,
    eval: &E,
    mode: Mode,
    rng: &mut R,
) -> Result<Vec<RealVector>>
where
    E: Evaluate<RealVector> + ?Sized,
    R: Rng,
{
    DeStrategy::Best1.mutate(population, f, eval, mode, rng)
}

/// DE/current-to-best/1 mutation (type 3).
pub fn mutate_current_to_best_1<E, R>(
    population: &[RealVector],
    f: f64,
    eval: &E,
    mode: Mode,
    rng: &mut R,
) -> Result<Vec<RealVector>>
where
    E: Evaluate<RealVector> + ?Sized,
    R: Rng,
{
    DeStrategy::CurrentToBest1.mutate(population, f, eval, mode, rng)
}

/// DE/rand/2 mutation (type 4).
pub fn mutate_rand_2<R: Rng>(
    population: &[RealVector],
    f: f64,
    rng: &mut R,
) -> Result<Vec<RealVector>> {
    DeStrategy::Rand2.mutate_with_best(population, f, None, rng)
}

/// DE/best/2 mutation (type 5).
pub fn mutate_best_2<E, R>(
    population: &[RealVector],
    f: f64,
    eval: &E,
    mode: Mode,
    rng: &mut R,
) -> Result<Vec<RealVector>>
where
    E: Evaluate<RealVector> + ?Sized,
    R: Rng,
{
    DeStrategy::Best2.mutate(population, f, eval, mode, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn sum(v: &RealVector) -> f64 {
        v.iter().sum()
    }

    /// Members are `[i, 10·i]`, so every vector is distinct and identifiable.
    fn population(n: usize) -> Vec<RealVector> {
        (0..n).map(|i| vec![i as f64, 10.0 * i as f64]).collect()
    }

    #[test]
    fn test_from_type() {
        assert_eq!(DeStrategy::from_type(1).unwrap(), DeStrategy::Rand1);
        assert_eq!(DeStrategy::from_type(2).unwrap(), DeStrategy::Best1);
        assert_eq!(DeStrategy::from_type(5).unwrap(), DeStrategy::Best2);
        assert!(DeStrategy::from_type(0).is_err());
        assert!(DeStrategy::from_type(6).is_err());
    }

    #[test]
    fn test_numeric_labels_match_names() {
        let labels = [
            (1, "rand/1"),
            (2, "best/1"),
            (3, "current-to-best/1"),
            (4, "rand/2"),
            (5, "best/2"),
        ];
        for (label, name) in labels {
            let by_label = DeStrategy::from_type(label).unwrap();
            assert_eq!(by_label, name.parse::<DeStrategy>().unwrap());
            assert_eq!(by_label.to_string(), name);
        }
    }

    #[test]
    fn test_parse_and_display() {
        for s in [
            DeStrategy::Rand1,
            DeStrategy::Best1,
            DeStrategy::CurrentToBest1,
            DeStrategy::Rand2,
            DeStrategy::Best2,
        ] {
            assert_eq!(s.to_string().parse::<DeStrategy>().unwrap(), s);
        }
        assert!("rand/3".parse::<DeStrategy>().is_err());
    }

    #[test]
    fn test_differential() {
        let a: &[f64] = &[3.0, 5.0];
        let b: &[f64] = &[1.0, 1.0];
        let v = differential(&[1.0, 1.0], &[(a, b)], 0.5);
        assert_eq!(v, vec![2.0, 3.0]);
    }

    #[test]
    fn test_rand_1_zero_scale_copies_a_donor_other_than_target() {
        let pop = population(4);
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let mutants = mutate_rand_1(&pop, 0.0, &mut rng).unwrap();
            assert_eq!(mutants.len(), 4);
            for (i, m) in mutants.iter().enumerate() {
                let donor = pop.iter().position(|x| x == m).expect("mutant is a member");
                assert_ne!(donor, i);
            }
        }
    }

    #[test]
    fn test_rand_2_zero_scale_never_uses_target() {
        let pop = population(6);
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let mutants = mutate_rand_2(&pop, 0.0, &mut rng).unwrap();
            for (i, m) in mutants.iter().enumerate() {
                assert_ne!(m, &pop[i]);
            }
        }
    }

    #[test]
    fn test_best_1_zero_scale_is_best() {
        let pop = population(5);
        let mut rng = create_rng(42);
        let maxed = mutate_best_1(&pop, 0.0, &sum, Mode::Max, &mut rng).unwrap();
        assert!(maxed.iter().all(|m| m == &pop[4]));
        let mined = mutate_best_1(&pop, 0.0, &sum, Mode::Min, &mut rng).unwrap();
        assert!(mined.iter().all(|m| m == &pop[0]));
    }

    #[test]
    fn test_best_2_zero_scale_is_best() {
        let pop = population(5);
        let mut rng = create_rng(42);
        let mutants = mutate_best_2(&pop, 0.0, &sum, Mode::Max, &mut rng).unwrap();
        assert!(mutants.iter().all(|m| m == &pop[4]));
    }

    #[test]
    fn test_best_ties_resolve_to_first() {
        let pop = vec![vec![1.0], vec![5.0], vec![5.0], vec![0.0]];
        let mut rng = create_rng(42);
        let idx = find_best(&pop, &sum, Mode::Max).unwrap();
        assert_eq!(idx, 1);
        let mutants = mutate_best_1(&pop, 0.0, &sum, Mode::Max, &mut rng).unwrap();
        assert!(mutants.iter().all(|m| m == &vec![5.0]));
    }

    #[test]
    fn test_current_to_best_zero_scale_is_identity() {
        let pop = population(4);
        let mut rng = create_rng(42);
        let mutants = mutate_current_to_best_1(&pop, 0.0, &sum, Mode::Min, &mut rng).unwrap();
        assert_eq!(mutants, pop);
    }

    #[test]
    fn test_current_to_best_unit_scale_telescopes() {
        // With F = 1: X_i + (X_best − X_r1) + (X_r1 − X_r2) = X_i + X_best − X_r2.
        let pop = population(3);
        let mut rng = create_rng(42);
        let mutants = mutate_current_to_best_1(&pop, 1.0, &sum, Mode::Max, &mut rng).unwrap();
        for (i, m) in mutants.iter().enumerate() {
            // Only two non-target members exist, so r2 is one of them.
            let candidates: Vec<RealVector> = (0..3)
                .filter(|&j| j != i)
                .map(|j| vec![pop[i][0] + 2.0 - pop[j][0], pop[i][1] + 20.0 - pop[j][1]])
                .collect();
            assert!(candidates.contains(m), "mutant {m:?} for {i}");
        }
    }

    #[test]
    fn test_mutants_keep_dimension() {
        let pop: Vec<RealVector> = (0..8).map(|i| vec![i as f64; 5]).collect();
        let mut rng = create_rng(42);
        for strategy in [
            DeStrategy::Rand1,
            DeStrategy::Best1,
            DeStrategy::CurrentToBest1,
            DeStrategy::Rand2,
            DeStrategy::Best2,
        ] {
            let mutants = strategy.mutate(&pop, 0.7, &sum, Mode::Min, &mut rng).unwrap();
            assert_eq!(mutants.len(), 8, "{strategy}");
            assert!(mutants.iter().all(|m| m.len() == 5), "{strategy}");
        }
    }

    #[test]
    fn test_population_too_small() {
        let pop = population(3);
        let mut rng = create_rng(42);
        assert_eq!(
            mutate_rand_1(&pop, 0.5, &mut rng),
            Err(OperatorError::DegenerateSamplingRequest {
                requested: 3,
                available: 2
            })
        );
        assert!(mutate_best_2(&pop, 0.5, &sum, Mode::Min, &mut rng).is_err());
        assert!(mutate_best_1(&pop, 0.5, &sum, Mode::Min, &mut rng).is_ok());
    }

    #[test]
    fn test_dimension_mismatch() {
        let pop = vec![vec![1.0, 2.0], vec![1.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let mut rng = create_rng(42);
        assert!(matches!(
            mutate_rand_1(&pop, 0.5, &mut rng),
            Err(OperatorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_population() {
        let pop: Vec<RealVector> = Vec::new();
        let mut rng = create_rng(42);
        assert!(mutate_best_1(&pop, 0.5, &sum, Mode::Min, &mut rng)
            .unwrap()
            .is_empty());
    }
}
