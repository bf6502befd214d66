//! Uniform entropy sources consumed by the samplers.
//!
//! Any [`rand::RngCore`] is an [`EntropySource`]. [`Replay`] feeds a fixed
//! list of draws for reproducible checks, and [`with_default_source`] hands
//! out the process-wide generator.

use std::sync::{Mutex, OnceLock, PoisonError};

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::{instrument, Level};

/// Produces independent uniform draws in `[0, 1)`.
pub trait EntropySource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> EntropySource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Deterministic source cycling through a fixed list of draws.
///
/// Counts every draw handed out, so callers can observe how many draws a
/// sample consumed.
#[derive(Debug, Clone)]
pub struct Replay {
    draws: Vec<f64>,
    cursor: usize,
    consumed: usize,
}

impl Replay {
    /// # Panics
    ///
    /// If `draws` is empty.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "replay source needs at least one draw");
        Self {
            draws,
            cursor: 0,
            consumed: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl EntropySource for Replay {
    fn next_unit(&mut self) -> f64 {
        let u = self.draws[self.cursor];
        self.cursor = (self.cursor + 1) % self.draws.len();
        self.consumed += 1;
        u
    }
}

static DEFAULT_SOURCE: OnceLock<Mutex<StdRng>> = OnceLock::new();

/// Run `f` with exclusive access to the process-wide default generator.
///
/// The generator is seeded from OS entropy on first use and lives for the
/// rest of the process.
#[instrument(skip_all, level = Level::TRACE, target = "entropy::default_source")]
pub fn with_default_source<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    let source = DEFAULT_SOURCE.get_or_init(|| {
        tracing::debug!("seeding process-wide default entropy source");
        Mutex::new(StdRng::from_entropy())
    });
    // poisoning leaves no broken invariant behind for a generator
    let mut guard = source.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}
