use thiserror::Error;

use crate::cogs::Generation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OccupancySpectrumError {
    #[error("an occupancy spectrum requires at least one child lineage")]
    InvalidSize,
    #[error("{children} children cannot coalesce into {ancestors} ancestors")]
    InvalidPartition { children: usize, ancestors: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionKernelError {
    #[error("no distribution has been registered for the queried origin")]
    NotFound,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoalescenceError {
    #[error(transparent)]
    Spectrum(#[from] OccupancySpectrumError),
    #[error(transparent)]
    Kernel(#[from] TransitionKernelError),
    #[error("the demographic history contradicts the lineages at deme {deme} in generation {time}")]
    DemographyInconsistency { deme: String, time: Generation },
}
