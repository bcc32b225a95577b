#![deny(clippy::pedantic)]

#[macro_use]
extern crate contracts;

#[macro_use]
extern crate log;

#[cfg(test)]
mod test;

use std::marker::PhantomData;

use anyhow::Result;

use coalsim_core::cogs::{Generation, Position};
use coalsim_core::forest::Forest;
use coalsim_core::simulation::Simulation;

use coalsim_impls::cogs::coalescence_policy::WrightFisherPolicy;
use coalsim_impls::cogs::demography::InMemoryDemographicHistory;
use coalsim_impls::cogs::dispersal_sampler::FlowWeightedDispersalSampler;
use coalsim_impls::cogs::occupancy_spectrum_sampler::MemoizedOccupancySpectrumSampler;
use coalsim_impls::cogs::rng::SeededStdRng;

pub struct ClassicalCoalescence;

impl ClassicalCoalescence {
    /// Simulates the classical backward-in-time coalescence process over
    /// the demographic `history`, starting from the leaf lineages placed
    /// according to the `(sampling position, gene copy count)` pairs of
    /// `sample_counts`.
    ///
    /// Coalescence within each deme follows the Wright-Fisher-style
    /// policy bounded by the recorded population sizes, and backward
    /// dispersal follows the recorded migration flows. The simulation is
    /// fully reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// `Err(DemographyInconsistency)` is returned iff `history`
    /// contradicts the lineages placed by `sample_counts`, e.g. when an
    /// occupied deme has no recorded population size or inbound flow.
    #[debug_requires(
        sampling_time >= origin_time,
        "time runs backward from sampling to origin"
    )]
    pub fn simulate<P: Position, T: Clone, I, L, F>(
        history: InMemoryDemographicHistory<P>,
        sample_counts: I,
        sampling_time: Generation,
        origin_time: Generation,
        seed: u64,
        make_leaf: L,
        init: T,
        merge: F,
    ) -> Result<Forest<P, T>>
    where
        I: IntoIterator<Item = (P, usize)>,
        L: FnMut(&P) -> T,
        F: FnMut(T, T) -> T,
    {
        let forest = Forest::from_leaf_counts(sample_counts, make_leaf);

        info!(
            "Simulating the coalescence of {} lineages from generation {} back to generation {}.",
            forest.num_trees(),
            sampling_time,
            origin_time
        );

        let simulation = Simulation::builder()
            .position(PhantomData::<P>)
            .history(history)
            .occupancy_spectrum_sampler(MemoizedOccupancySpectrumSampler::new())
            .dispersal_sampler(FlowWeightedDispersalSampler::new())
            .coalescence_policy(WrightFisherPolicy)
            .sampling_time(sampling_time)
            .origin_time(origin_time)
            .build();

        let mut rng = SeededStdRng::from_seed(seed);

        let forest = simulation.simulate(forest, init, merge, &mut rng)?;

        Ok(forest)
    }
}
