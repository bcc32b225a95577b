mod builder;

pub use builder::Simulation;

use crate::algorithms::simultaneous_multiple_merge;
use crate::cogs::{
    CoalescencePolicy, DemographicHistory, DispersalSampler, Generation, OccupancySpectrumSampler,
    Position, RngCore,
};
use crate::error::CoalescenceError;
use crate::forest::Forest;

impl<
        P: Position,
        H: DemographicHistory<P>,
        S: OccupancySpectrumSampler,
        D: DispersalSampler<P, H>,
        C: CoalescencePolicy<P, H>,
    > Simulation<P, H, S, D, C>
{
    /// Runs the coalescence process backward in time, from the sampling
    /// time down to the origin time, over the initial `forest` of leaf
    /// lineages.
    ///
    /// Parents are grown by folding `init` and their children through
    /// `merge`; all randomness is drawn from the single `rng`, so that
    /// identically seeded runs over identical inputs produce identical
    /// final forests.
    ///
    /// # Errors
    ///
    /// Fails with the first error raised by a cog; a failed step
    /// invalidates the whole in-progress replicate.
    #[debug_requires(
        self.sampling_time >= self.origin_time,
        "time runs backward from sampling to origin"
    )]
    pub fn simulate<T: Clone, F: FnMut(T, T) -> T>(
        mut self,
        mut forest: Forest<P, T>,
        init: T,
        mut merge: F,
        rng: &mut impl RngCore,
    ) -> Result<Forest<P, T>, CoalescenceError> {
        let mut time = self.sampling_time;

        while time > self.origin_time {
            if self.coalescence_policy.has_terminated(&forest, time) {
                info!(
                    "The coalescence process stopped early in generation {} with {} tree(s) left.",
                    time,
                    forest.num_trees()
                );

                return Ok(forest);
            }

            forest = self.step(forest, time, &init, &mut merge, rng)?;

            time -= 1;
        }

        Ok(forest)
    }

    /// Performs one backward time step: coalescence within every deme
    /// holding at least two lineages, then backward dispersal of all
    /// surviving lineages.
    fn step<T: Clone, F: FnMut(T, T) -> T>(
        &mut self,
        forest: Forest<P, T>,
        time: Generation,
        init: &T,
        merge: &mut F,
        rng: &mut impl RngCore,
    ) -> Result<Forest<P, T>, CoalescenceError> {
        let mut migrated = Forest::new();

        for (deme, mut trees) in forest {
            let children = trees.len();

            if children >= 2 {
                let spectrum = match self.coalescence_policy.target_ancestor_count(
                    &deme,
                    time,
                    children,
                    &self.history,
                )? {
                    Some(ancestors) => self.occupancy_spectrum_sampler.sample_conditioned(
                        children,
                        ancestors,
                        rng,
                    )?,
                    None => self
                        .occupancy_spectrum_sampler
                        .sample_unconditioned(children, rng)?,
                };

                let remaining = simultaneous_multiple_merge(
                    &mut trees,
                    init.clone(),
                    &spectrum,
                    &mut *merge,
                    rng,
                );

                if remaining < children {
                    debug!(
                        "{} lineages coalesced into {} at deme {:?} in generation {}.",
                        children, remaining, deme, time
                    );
                }

                trees.truncate(remaining);
            }

            for tree in trees {
                let source = self.dispersal_sampler.sample_dispersal_from_deme(
                    &deme,
                    time,
                    &self.history,
                    rng,
                )?;

                migrated.insert(source, tree);
            }
        }

        Ok(migrated)
    }
}
