use fnv::FnvHashMap;

use coalsim_core::cogs::{OccupancySpectrumSampler, RngCore};
use coalsim_core::error::OccupancySpectrumError;
use coalsim_core::occupancy_spectrum::OccupancySpectrum;

use crate::random::CumulativeDistribution;

use super::{number_of_blocks_distribution, sample_conditioned_spectrum, sample_spectrum_with_labels};

/// The speed-over-memory occupancy spectrum sampler: the number-of-blocks
/// law is computed once per distinct lineage count and memoized for every
/// later unconditioned draw.
///
/// The cache grows unboundedly with the number of distinct lineage
/// counts seen over the sampler's lifetime.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Default)]
pub struct MemoizedOccupancySpectrumSampler {
    number_of_blocks: FnvHashMap<usize, CumulativeDistribution<usize>>,
}

impl MemoizedOccupancySpectrumSampler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            number_of_blocks: FnvHashMap::default(),
        }
    }

    /// The number of distinct lineage counts whose law has been memoized.
    #[must_use]
    pub fn num_memoized(&self) -> usize {
        self.number_of_blocks.len()
    }
}

impl OccupancySpectrumSampler for MemoizedOccupancySpectrumSampler {
    fn sample_unconditioned(
        &mut self,
        children: usize,
        rng: &mut impl RngCore,
    ) -> Result<OccupancySpectrum, OccupancySpectrumError> {
        if children == 0 {
            return Err(OccupancySpectrumError::InvalidSize);
        }

        let distribution = self
            .number_of_blocks
            .entry(children)
            .or_insert_with(|| number_of_blocks_distribution(children));

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
