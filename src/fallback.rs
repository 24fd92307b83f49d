//! Fallback policy for degenerate inputs
//!
//! The engine inherits a "never show nothing" trait from its dashboard
//! origins: empty value sets get a representative substitute, all-zero
//! histograms get small placeholder frequencies, and a zero dataset-level
//! anomaly count is replaced by a small positive one. [`FallbackPolicy`]
//! makes that behavior togglable and its randomness seedable, so both the
//! demo behavior and the strict statistical truth can be asserted in tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Controls how degenerate inputs are resolved.
///
/// The demo policy (the default, matching the source behavior) substitutes
/// plausible placeholder results; the strict policy reports true empties
/// and zeros. Neither mode ever produces an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    allow_empty: bool,
    seed: Option<u64>,
}

impl FallbackPolicy {
    /// Report the strict statistical truth: empty histograms and zero
    /// anomaly counts pass through unchanged.
    pub fn strict() -> Self {
        FallbackPolicy {
            allow_empty: true,
            seed: None,
        }
    }

    /// Substitute placeholder results so consumers never render an empty
    /// chart. This is the source-faithful behavior.
    pub fn demo() -> Self {
        FallbackPolicy {
            allow_empty: false,
            seed: None,
        }
    }

    /// Fix the RNG seed used by placeholder generation
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// True when empty/zero results may be reported as-is
    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::demo()
    }
}
