use std::hash::Hash;

use fnv::FnvHashMap;

use coalsim_core::cogs::RngCore;
use coalsim_core::error::TransitionKernelError;

use super::CumulativeDistribution;

/// A per-origin cache of backward transition distributions.
///
/// Distributions are built lazily by the caller the first time an origin
/// is visited and are then reused for every later draw from the same
/// origin: a little memory per visited origin buys skipping the weight
/// recomputation across many repeated draws.
#[derive(Debug, Clone)]
pub struct TransitionKernel<X: Eq + Hash, V> {
    distributions: FnvHashMap<X, CumulativeDistribution<V>>,
}

impl<X: Eq + Hash, V> Default for TransitionKernel<X, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: Eq + Hash, V> TransitionKernel<X, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            distributions: FnvHashMap::default(),
        }
    }

    /// Whether a distribution has already been registered for `origin`.
    #[must_use]
    pub fn has_distribution(&self, origin: &X) -> bool {
        self.distributions.contains_key(origin)
    }

    /// Registers, or overwrites, the transition distribution of `origin`.
    pub fn set(&mut self, origin: X, distribution: CumulativeDistribution<V>) {
        self.distributions.insert(origin, distribution);
    }

    /// Draws one destination from the distribution registered for
    /// `origin`.
    ///
    /// # Errors
    ///
    /// `Err(NotFound)` iff no distribution was registered for `origin`.
    pub fn draw<G: RngCore>(&self, rng: &mut G, origin: &X) -> Result<&V, TransitionKernelError> {
        self.distributions
            .get(origin)
            .map(|distribution| distribution.sample(rng))
            .ok_or(TransitionKernelError::NotFound)
    }
}
