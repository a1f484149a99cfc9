//! Genetic Algorithm operators.
//!
//! Selection, crossover, and mutation for binary-coded and real-coded GAs.
//! Every operator is a free function over plain genome values; the
//! generational loop that sequences them belongs to the caller.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Operator hyperparameters (cp, mp, mu, eta, tournament size)
//! - [`BinaryGenome`] / [`RealVector`]: Genome representations
//!
//! # Submodules
//!
//! - [`binary`]: k-point and uniform crossover, bit-reversal mutation
//! - [`real`]: SBX crossover, polynomial mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Deb (2001), *Multi-Objective Optimization using Evolutionary Algorithms*

pub mod binary;
mod config;
pub mod real;
mod reproduction;
mod selection;
mod types;

pub use binary::{bit_reversal_mutation, kp_crossover, uniform_crossover};
pub use config::{BinaryCrossover, GaConfig};
pub use real::{polynomial_mutation, sbx_crossover};
pub use reproduction::{reproduce_binary, reproduce_real};
pub use selection::{rank_order, rank_selection, selection_count, tournament_selection};
pub use types::{BinaryGenome, RealVector, Segment};

pub(crate) use types::{ensure_same_len, uniform_dimension};
