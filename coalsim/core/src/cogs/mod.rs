mod coalescence_policy;
mod demography;
mod dispersal_sampler;
mod occupancy_spectrum_sampler;
mod position;
mod rng;

pub use coalescence_policy::CoalescencePolicy;
pub use demography::{DemographicHistory, Generation};
pub use dispersal_sampler::DispersalSampler;
pub use occupancy_spectrum_sampler::OccupancySpectrumSampler;
pub use position::Position;
pub use rng::{RngCore, RngSampler};
