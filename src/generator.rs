use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    distribution::Distribution,
    entropy::{with_default_source, EntropySource},
    Result,
};

/// Something that yields one sample per call from the default source.
pub trait Generator: Send + Sync {
    fn generate(&self) -> f64;
}

impl Generator for Box<dyn Generator> {
    fn generate(&self) -> f64 {
        self.as_ref().generate()
    }
}

/// A distribution bound to its parameters.
///
/// The arity is checked once when the value is built or deserialized, so
/// sampling from it never hits the arity panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoundDistribution")]
pub struct BoundDistribution {
    distribution: Distribution,
    params: Vec<f64>,
}

#[derive(Deserialize)]
struct RawBoundDistribution {
    distribution: Distribution,
    params: Vec<f64>,
}

impl TryFrom<RawBoundDistribution> for BoundDistribution {
    type Error = crate::Error;

    fn try_from(raw: RawBoundDistribution) -> Result<Self> {
        BoundDistribution::new(raw.distribution, raw.params)
    }
}

impl BoundDistribution {
    pub fn new(distribution: Distribution, params: impl Into<Vec<f64>>) -> Result<Self> {
        let params = params.into();
        distribution.check_arity(&params)?;
        Ok(Self {
            distribution,
            params,
        })
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn sample_with<S: EntropySource + ?Sized>(&self, source: &mut S) -> f64 {
        self.distribution.sample(source, &self.params)
    }

    pub fn info(&self) -> String {
        let params = self
            .params
            .iter()
            .map(f64::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        format!("{}({})", self.distribution, params)
    }
}

impl fmt::Display for BoundDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

impl Generator for BoundDistribution {
    fn generate(&self) -> f64 {
        with_default_source(|rng| self.sample_with(rng))
    }
}

impl rand_distr::Distribution<f64> for BoundDistribution {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sample_with(rng)
    }
}
