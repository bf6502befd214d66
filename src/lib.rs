//! Random variates from a small, fixed set of distributions.
//!
//! Poisson, Exponential, Geometric, Pareto, bounded Pareto, Uniform and
//! Constant all sit behind [`Distribution::sample`], which takes the variant's
//! parameters as a slice and draws from any [`EntropySource`]. Every
//! [`rand::RngCore`] is an entropy source; [`Distribution::sample_default`]
//! uses a lazily seeded process-wide generator instead.

pub mod distribution;
pub mod entropy;
mod error;
pub mod generator;

pub use distribution::Distribution;
pub use entropy::{EntropySource, Replay};
pub use error::{Error, Result};
pub use generator::{BoundDistribution, Generator};
