//! The closed set of distributions and the arity-checked dispatcher.
//!
//! Every variant takes a fixed number of real parameters. [`Distribution::sample`]
//! checks the parameter list against that arity and panics on a mismatch:
//! passing the wrong number of parameters is a caller bug, not a runtime
//! condition.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use random_variate::Distribution;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let interval = Distribution::Exponential.sample(&mut rng, &[1.0 / 25.0]);
//! let size = Distribution::ParetoBounded.sample(&mut rng, &[1.1, 1.0, 1e6]);
//! assert!(interval >= 0.0);
//! assert!(size >= 1.0);
//! ```

pub mod exponential;
pub mod geometric;
pub mod pareto;
pub mod poisson;
pub mod uniform;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    entropy::{with_default_source, EntropySource},
    Error, Result,
};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// `[lambda]`
    Poisson,
    /// `[rate]`
    Exponential,
    /// `[mean]`
    Geometric,
    /// `[alpha, x_m]`
    Pareto,
    /// `[alpha, low, high]`
    ParetoBounded,
    /// `[max]`
    Uniform,
    /// `[value]`
    Constant,
}

impl Distribution {
    pub const ALL: [Distribution; 7] = [
        Distribution::Poisson,
        Distribution::Exponential,
        Distribution::Geometric,
        Distribution::Pareto,
        Distribution::ParetoBounded,
        Distribution::Uniform,
        Distribution::Constant,
    ];

    pub const fn parameter_count(self) -> usize {
        match self {
            Distribution::Poisson
            | Distribution::Exponential
            | Distribution::Geometric
            | Distribution::Uniform
            | Distribution::Constant => 1,
            Distribution::Pareto => 2,
            Distribution::ParetoBounded => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Distribution::Poisson => "Poisson",
            Distribution::Exponential => "Exponential",
            Distribution::Geometric => "Geometric",
            Distribution::Pareto => "Pareto",
            Distribution::ParetoBounded => "ParetoBounded",
            Distribution::Uniform => "Uniform",
            Distribution::Constant => "Constant",
        }
    }

    /// Check `params` against [`parameter_count`](Self::parameter_count)
    /// without panicking.
    pub fn check_arity(self, params: &[f64]) -> Result<()> {
        let expected = self.parameter_count();
        if params.len() != expected {
            return Err(Error::ArityMismatch {
                distribution: self,
                expected,
                got: params.len(),
            });
        }
        Ok(())
    }

    /// Draw one value from `source`.
    ///
    /// Consumes one draw for Exponential, Geometric and Uniform, at least one
    /// for Poisson and both Pareto variants, and none for Constant. Parameter
    /// domains are not validated.
    ///
    /// # Panics
    ///
    /// If `params.len()` differs from the variant's parameter count.
    pub fn sample<S: EntropySource + ?Sized>(self, source: &mut S, params: &[f64]) -> f64 {
        if let Err(e) = self.check_arity(params) {
            panic!("{e}");
        }
        let value = match self {
            Distribution::Poisson => poisson::sample(source, params[0]),
            Distribution::Exponential => exponential::sample(source, params[0]),
            Distribution::Geometric => geometric::sample(source, params[0]),
            Distribution::Pareto => pareto::sample(source, params[0], params[1]),
            Distribution::ParetoBounded => {
                pareto::sample_bounded(source, params[0], params[1], params[2])
            }
            Distribution::Uniform => uniform::sample(source, params[0]),
            Distribution::Constant => params[0],
        };
        tracing::trace!(target: "distribution::sample", distribution = %self, ?params, value);
        value
    }

    /// [`sample`](Self::sample) drawing from the process-wide default source.
    pub fn sample_default(self, params: &[f64]) -> f64 {
        with_default_source(|rng| self.sample(rng, params))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = Error;

    /// Case-insensitive; `_` and `-` are ignored, so `pareto_bounded` parses.
    fn from_str(s: &str) -> Result<Self> {
        let key = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        Distribution::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| Error::UnknownDistribution(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::Replay;

    #[test]
    fn test_parameter_counts() {
        let counts = Distribution::ALL.map(Distribution::parameter_count);
        assert_eq!(counts, [1, 1, 1, 2, 3, 1, 1]);
    }

    #[test]
    fn test_check_arity() {
        assert!(Distribution::Pareto.check_arity(&[2.0, 1.0]).is_ok());
        assert_eq!(
            Distribution::Pareto.check_arity(&[2.0]),
            Err(Error::ArityMismatch {
                distribution: Distribution::Pareto,
                expected: 2,
                got: 1,
            })
        );
    }

    #[test]
    fn test_dispatch_matches_formulas() {
        let draws = [0.3, 0.7, 0.05, 0.9, 0.42];
        let cases: [(Distribution, &[f64]); 6] = [
            (Distribution::Poisson, &[3.0]),
            (Distribution::Exponential, &[0.5]),
            (Distribution::Geometric, &[4.0]),
            (Distribution::Pareto, &[2.5, 3.0]),
            (Distribution::ParetoBounded, &[1.2, 2.0, 50.0]),
            (Distribution::Uniform, &[8.0]),
        ];
        for (distribution, params) in cases {
            let mut dispatched = Replay::new(draws);
            let mut direct = Replay::new(draws);
            let expected = match distribution {
                Distribution::Poisson => poisson::sample(&mut direct, params[0]),
                Distribution::Exponential => exponential::sample(&mut direct, params[0]),
                Distribution::Geometric => geometric::sample(&mut direct, params[0]),
                Distribution::Pareto => pareto::sample(&mut direct, params[0], params[1]),
                Distribution::ParetoBounded => {
                    pareto::sample_bounded(&mut direct, params[0], params[1], params[2])
                }
                Distribution::Uniform => uniform::sample(&mut direct, params[0]),
                Distribution::Constant => unreachable!(),
            };
            assert_eq!(distribution.sample(&mut dispatched, params), expected);
            assert_eq!(dispatched.consumed(), direct.consumed());
        }
    }

    #[test]
    fn test_constant_draws_nothing() {
        let mut replay = Replay::new([0.5]);
        for n in [0.0, -3.5, 42.0, f64::MAX] {
            assert_eq!(Distribution::Constant.sample(&mut replay, &[n]), n);
        }
        assert_eq!(replay.consumed(), 0);
    }

    #[test]
    #[should_panic(expected = "Pareto expects 2 parameters, got 1")]
    fn test_pareto_single_parameter_panics() {
        Distribution::Pareto.sample(&mut Replay::new([0.5]), &[1.0]);
    }

    #[test]
    fn test_display_and_parse() {
        for distribution in Distribution::ALL {
            let name = distribution.to_string();
            assert_eq!(name.parse::<Distribution>(), Ok(distribution));
            assert_eq!(name.to_uppercase().parse::<Distribution>(), Ok(distribution));
        }
        assert_eq!("pareto_bounded".parse::<Distribution>(), Ok(Distribution::ParetoBounded));
        assert_eq!(" pareto-bounded ".parse::<Distribution>(), Ok(Distribution::ParetoBounded));
        assert_eq!(
            "gamma".parse::<Distribution>(),
            Err(Error::UnknownDistribution("gamma".to_string()))
        );
    }

    #[test]
    fn test_sample_default() {
        let u = Distribution::Uniform.sample_default(&[1.0]);
        assert!((0.0..1.0).contains(&u));
        assert_eq!(Distribution::Constant.sample_default(&[7.0]), 7.0);
    }
}
