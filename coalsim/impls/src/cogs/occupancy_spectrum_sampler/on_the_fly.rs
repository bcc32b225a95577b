use coalsim_core::cogs::{OccupancySpectrumSampler, RngCore};
use coalsim_core::error::OccupancySpectrumError;
use coalsim_core::occupancy_spectrum::OccupancySpectrum;

use super::{number_of_blocks_distribution, sample_conditioned_spectrum, sample_spectrum_with_labels};

/// The memory-over-speed occupancy spectrum sampler: the number-of-blocks
/// law is recomputed on every unconditioned draw and nothing is retained
/// between draws.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Default, Clone, Copy)]
pub struct OnTheFlyOccupancySpectrumSampler;

impl OccupancySpectrumSampler for OnTheFlyOccupancySpectrumSampler {
    fn sample_unconditioned(
        &mut self,
        children: usize,
        rng: &mut impl RngCore,
    ) -> Result<OccupancySpectrum, OccupancySpectrumError> {
        if children == 0 {
            return Err(OccupancySpectrumError::InvalidSize);
        }

        let distribution = number_of_blocks_distribution(children);

        let labels = *distribution.sample(rng);

        Ok(sample_spectrum_with_labels(children, labels, rng))
    }

    fn sample_conditioned(
        &mut self,
        children: usize,
        max_ancestors: usize,
        rng: &mut impl RngCore,
    ) -> Result<OccupancySpectrum, OccupancySpectrumError> {
        sample_conditioned_spectrum(children, max_ancestors, rng)
    }
}
