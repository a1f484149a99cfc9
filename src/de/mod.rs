//! Differential Evolution operators.
//!
//! DE mutation builds a mutant per population member from scaled difference
//! vectors of distinct donors; crossover then mixes each member with its
//! mutant into a trial vector. Selection between target and trial is a
//! plain comparison and belongs to the caller's loop.
//!
//! # Key Types
//!
//! - [`DeStrategy`]: Mutation scheme (rand/1, best/1, current-to-best/1,
//!   rand/2, best/2)
//! - [`DeConfig`]: F, CR, strategy, and crossover choice
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"
//! - Das & Suganthan (2011), "Differential Evolution: A Survey of the
//!   State-of-the-Art"

mod config;
pub mod crossover;
mod generation;
pub mod mutation;

pub use config::{DeConfig, DeCrossover};
pub use crossover::{binomial_crossover, exponential_crossover};
pub use generation::trial_vectors;
pub use mutation::{
    mutate_best_1, mutate_best_2, mutate_current_to_best_1, mutate_rand_1, mutate_rand_2,
    DeStrategy,
};
