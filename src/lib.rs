//! Evolutionary operators for Genetic Algorithms and Differential Evolution.
//!
//! Provides the variation and selection building blocks of two population
//! based optimizers, as free functions over plain genome values:
//!
//! - **GA selection**: Tournament selection without replacement and
//!   rank-based sorting.
//! - **Binary GA**: k-point and uniform crossover over segmented bit
//!   strings, bit-reversal mutation.
//! - **Real GA**: Simulated Binary Crossover (SBX) and polynomial mutation.
//! - **DE**: Five difference-vector mutation schemes, binomial and
//!   exponential trial-vector crossover.
//!
//! Each family also has a single-generation convenience pass
//! ([`ga::reproduce_binary`], [`ga::reproduce_real`], [`de::trial_vectors`])
//! driven by a validated config.
//!
//! # Architecture
//!
//! The crate holds no population state and runs no generational loop.
//! Fitness comes from a caller-supplied [`Evaluate`] (any `Fn(&G) -> f64`
//! closure works), and every stochastic operator takes its RNG explicitly,
//! so a seeded generator from [`random::create_rng`] reproduces a run.
//!
//! # Example
//!
//! ```
//! use u_evops::ga::{reproduce_real, GaConfig};
//! use u_evops::random::create_rng;
//! use u_evops::Mode;
//!
//! let mut rng = create_rng(42);
//! let population: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64 - 5.0; 2]).collect();
//! let sphere = |v: &Vec<f64>| v.iter().map(|x| x * x).sum::<f64>();
//!
//! let config = GaConfig::default().with_mode(Mode::Min);
//! let offspring = reproduce_real(&population, &sphere, &config, &mut rng).unwrap();
//! assert_eq!(offspring.len(), 8);
//! ```

pub mod de;
pub mod error;
mod fitness;
pub mod ga;
pub mod random;

pub use error::{OperatorError, Result};
pub use fitness::{evaluate_population, find_best, Evaluate, Mode};
