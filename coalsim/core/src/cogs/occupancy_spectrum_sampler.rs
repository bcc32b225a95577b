use crate::error::OccupancySpectrumError;
use crate::occupancy_spectrum::OccupancySpectrum;

use super::RngCore;

pub trait OccupancySpectrumSampler {
    /// Samples the merge configuration of `children` lineages where the
    /// number of ancestors is itself drawn from the number-of-blocks law
    /// of a uniform random set partition.
    ///
    /// # Errors
    ///
    /// `Err(InvalidSize)` iff `children == 0`.
    fn sample_unconditioned(
        &mut self,
        children: usize,
        rng: &mut impl RngCore,
    ) -> Result<OccupancySpectrum, OccupancySpectrumError>;

    /// Samples the merge configuration of `children` lineages coalescing
    /// into at most `max_ancestors` parents.
    ///
    /// # Errors
    ///
    /// `Err(InvalidSize)` iff `children == 0`.
    /// `Err(InvalidPartition)` iff `max_ancestors == 0` or
    /// `max_ancestors > children`.
    fn sample_conditioned(
        &mut self,
        children: usize,
        max_ancestors: usize,
        rng: &mut impl RngCore,
    ) -> Result<OccupancySpectrum, OccupancySpectrumError>;
}
