#![allow(clippy::used_underscore_binding)]

use std::marker::PhantomData;

use crate::cogs::{
    CoalescencePolicy, DemographicHistory, DispersalSampler, Generation, OccupancySpectrumSampler,
    Position,
};

#[derive(TypedBuilder)]
pub struct Simulation<
    P: Position,
    H: DemographicHistory<P>,
    S: OccupancySpectrumSampler,
    D: DispersalSampler<P, H>,
    C: CoalescencePolicy<P, H>,
> {
    pub(super) position: PhantomData<P>,
    pub(super) history: H,
    pub(super) occupancy_spectrum_sampler: S,
    pub(super) dispersal_sampler: D,
    pub(super) coalescence_policy: C,
    pub(super) sampling_time: Generation,
    pub(super) origin_time: Generation,
}

impl<
        P: Position,
        H: DemographicHistory<P>,
        S: OccupancySpectrumSampler,
        D: DispersalSampler<P, H>,
        C: CoalescencePolicy<P, H>,
    > Simulation<P, H, S, D, C>
{
    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn coalescence_policy(&self) -> &C {
        &self.coalescence_policy
    }

    pub fn sampling_time(&self) -> Generation {
        self.sampling_time
    }

    pub fn origin_time(&self) -> Generation {
        self.origin_time
    }
}
